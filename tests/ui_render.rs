use dangerous_writing::buffer::TextBuffer;
use dangerous_writing::ui::{Renderer, ScreenView, StatusLineInfo, Theme};
use dangerous_writing::EditorState;
use ratatui::backend::TestBackend;
use ratatui::style::{Color, Style};
use ratatui::Terminal;
use std::time::Duration;

const INSTRUCTIONS: &str = "Welcome to the Dangerous Writing App!\n\
                            Keep typing! If you stop for 5 seconds, you risk losing all your work!";

fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area().width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn draw(terminal: &mut Terminal<TestBackend>, renderer: &mut Renderer, buffer: &TextBuffer, status: StatusLineInfo) {
    let view = ScreenView {
        window_title: "Dangerous Writing App",
        instructions: INSTRUCTIONS,
        buffer,
        status,
    };
    terminal.draw(|frame| renderer.draw(frame, &view, None)).unwrap();
}

#[test]
fn window_shows_title_label_text_and_status() {
    let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
    let mut renderer = Renderer::new((75, 25));
    let buffer = TextBuffer::from_text("hello world");

    draw(
        &mut terminal,
        &mut renderer,
        &buffer,
        StatusLineInfo {
            state: EditorState::Armed,
            remaining: Some(Duration::from_millis(4200)),
            char_count: buffer.len_chars(),
        },
    );

    let lines = screen_lines(&terminal);
    let screen = lines.join("\n");
    assert!(screen.contains("Dangerous Writing App"));
    assert!(screen.contains("Welcome to the Dangerous Writing App!"));
    assert!(screen.contains("Keep typing! If you stop for 5 seconds"));
    assert!(screen.contains("hello world"));
    assert!(screen.contains("4.2s until the page is wiped"));
    assert!(screen.contains("11 chars | Ctrl+Q quit"));
}

#[test]
fn long_text_scrolls_to_keep_cursor_visible() {
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
    let mut renderer = Renderer::new((75, 25));
    let text: String = (0..30).map(|i| format!("line {}\n", i)).collect();
    let buffer = TextBuffer::from_text(text.trim_end());

    draw(
        &mut terminal,
        &mut renderer,
        &buffer,
        StatusLineInfo {
            state: EditorState::Idle,
            remaining: None,
            char_count: buffer.len_chars(),
        },
    );

    let screen = screen_lines(&terminal).join("\n");
    assert!(renderer.scroll_offset() > 0);
    assert!(screen.contains("line 29"));
    assert!(!screen.contains("line 0 "));
}

#[test]
fn tiny_terminal_shows_notice() {
    let mut terminal = Terminal::new(TestBackend::new(15, 5)).unwrap();
    let mut renderer = Renderer::new((75, 25));
    let buffer = TextBuffer::new();

    draw(
        &mut terminal,
        &mut renderer,
        &buffer,
        StatusLineInfo {
            state: EditorState::Idle,
            remaining: None,
            char_count: 0,
        },
    );

    let screen = screen_lines(&terminal).join("");
    assert!(screen.contains("Terminal"));
}

#[test]
fn custom_theme_colours_warning_status() {
    let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
    let theme = Theme {
        status_warning: Style::default().fg(Color::Black).bg(Color::Magenta),
        ..Theme::default()
    };
    let mut renderer = Renderer::new((75, 25)).with_theme(theme);
    let buffer = TextBuffer::from_text("hurry");

    draw(
        &mut terminal,
        &mut renderer,
        &buffer,
        StatusLineInfo {
            state: EditorState::Armed,
            remaining: Some(Duration::from_millis(1000)),
            char_count: buffer.len_chars(),
        },
    );

    let lines = screen_lines(&terminal);
    let row = lines
        .iter()
        .position(|line| line.contains("1.0s until the page is wiped"))
        .unwrap();
    let byte = lines[row].find("1.0s").unwrap();
    let column = lines[row][..byte].chars().count();
    let cell = &terminal.backend().buffer()[(column as u16, row as u16)];
    assert_eq!(cell.bg, Color::Magenta);
}
