//! レンダリングシステム
//!
//! エディタ画面と確認ダイアログを ratatui のフレームへ描画する

use super::layout::{adjust_scroll, string_width, wrap_text, AppLayout};
use super::theme::Theme;
use crate::buffer::TextBuffer;
use crate::editor::EditorState;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Duration;

/// 残り時間がこれ以下になったら警告色で表示
const WARNING_THRESHOLD: Duration = Duration::from_secs(2);

/// ステータスラインの表示情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLineInfo {
    pub state: EditorState,
    pub remaining: Option<Duration>,
    pub char_count: usize,
}

/// 画面全体の表示内容
#[derive(Debug, Clone, Copy)]
pub struct ScreenView<'a> {
    pub window_title: &'a str,
    pub instructions: &'a str,
    pub buffer: &'a TextBuffer,
    pub status: StatusLineInfo,
}

/// ダイアログで選択中のボタン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogChoice {
    #[default]
    Yes,
    No,
}

impl DialogChoice {
    pub fn toggle(self) -> Self {
        match self {
            DialogChoice::Yes => DialogChoice::No,
            DialogChoice::No => DialogChoice::Yes,
        }
    }

    pub fn is_yes(self) -> bool {
        self == DialogChoice::Yes
    }
}

/// 確認ダイアログの表示内容
#[derive(Debug, Clone, Copy)]
pub struct DialogView<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub selected: DialogChoice,
}

/// ステータスライン左側の文言
pub fn status_text(info: &StatusLineInfo) -> String {
    match info.state {
        EditorState::Idle => "Start typing...".to_string(),
        EditorState::Armed => {
            let remaining = info.remaining.unwrap_or_default();
            format!("{:.1}s until the page is wiped", remaining.as_secs_f64())
        }
        EditorState::Prompting => "Time's up!".to_string(),
    }
}

/// レンダラー
pub struct Renderer {
    theme: Theme,
    /// ウィンドウの初期サイズ（列, 行）
    window_size: (u16, u16),
    /// テキスト領域の先頭表示行
    scroll_offset: usize,
}

impl Renderer {
    pub fn new(window_size: (u16, u16)) -> Self {
        Self {
            theme: Theme::default(),
            window_size,
            scroll_offset: 0,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// メイン描画処理
    ///
    /// ダイアログ表示中はカーソルを出さない
    pub fn draw(&mut self, frame: &mut Frame<'_>, view: &ScreenView<'_>, dialog: Option<&DialogView<'_>>) {
        let screen = frame.area();
        let Some(layout) = AppLayout::calculate(screen, self.window_size, view.instructions) else {
            self.draw_too_small(frame, screen);
            return;
        };

        frame.render_widget(Clear, layout.window);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", view.window_title))
                .title_alignment(Alignment::Center)
                .border_style(self.theme.window_border),
            layout.window,
        );

        self.draw_label(frame, &layout, view.instructions);
        let cursor = self.draw_text_area(frame, &layout, view.buffer);
        self.draw_status_line(frame, &layout, &view.status);

        match dialog {
            Some(dialog) => self.draw_dialog(frame, &layout, dialog),
            None => frame.set_cursor_position(cursor),
        }
    }

    fn draw_label(&self, frame: &mut Frame<'_>, layout: &AppLayout, instructions: &str) {
        let lines: Vec<Line<'_>> = wrap_text(instructions, 0, layout.label.width as usize)
            .rows
            .into_iter()
            .map(|row| Line::from(row.trim_end().to_string()))
            .collect();

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(self.theme.label),
            layout.label,
        );
    }

    /// テキスト領域を描画し、カーソルの画面座標を返す
    fn draw_text_area(&mut self, frame: &mut Frame<'_>, layout: &AppLayout, buffer: &TextBuffer) -> (u16, u16) {
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.text_border),
            layout.text_area,
        );

        let inner = layout.text_inner;
        let height = inner.height as usize;
        let wrapped = wrap_text(buffer.text(), buffer.cursor(), inner.width as usize);
        let (cursor_row, cursor_col) = wrapped.cursor;
        self.scroll_offset = adjust_scroll(self.scroll_offset, cursor_row, height);

        let visible: Vec<Line<'_>> = wrapped
            .rows
            .into_iter()
            .skip(self.scroll_offset)
            .take(height)
            .map(Line::from)
            .collect();
        frame.render_widget(Paragraph::new(visible).style(self.theme.text), inner);

        let x = inner.x + (cursor_col as u16).min(inner.width.saturating_sub(1));
        let y = inner.y + ((cursor_row - self.scroll_offset) as u16).min(inner.height.saturating_sub(1));
        (x, y)
    }

    fn draw_status_line(&self, frame: &mut Frame<'_>, layout: &AppLayout, info: &StatusLineInfo) {
        let warning = match (info.state, info.remaining) {
            (EditorState::Armed, Some(remaining)) => remaining <= WARNING_THRESHOLD,
            (EditorState::Prompting, _) => true,
            _ => false,
        };
        let style = if warning {
            self.theme.status_warning
        } else {
            self.theme.status
        };

        let left = format!(" {}", status_text(info));
        let right = format!("{} chars | Ctrl+Q quit ", info.char_count);
        let gap = (layout.status_line.width as usize)
            .saturating_sub(string_width(&left) + string_width(&right))
            .max(1);

        frame.render_widget(
            Paragraph::new(format!("{}{}{}", left, " ".repeat(gap), right)).style(style),
            layout.status_line,
        );
    }

    fn draw_dialog(&self, frame: &mut Frame<'_>, layout: &AppLayout, dialog: &DialogView<'_>) {
        let area = layout.dialog_area(dialog.title, dialog.message);
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", dialog.title))
            .title_alignment(Alignment::Center)
            .border_style(self.theme.dialog_border)
            .style(self.theme.dialog);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);
        let mut lines: Vec<Line<'_>> = wrap_text(dialog.message, 0, content.width as usize)
            .rows
            .into_iter()
            .map(|row| Line::from(row.trim_end().to_string()))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("[ Yes ]", self.button_style(dialog.selected == DialogChoice::Yes)),
            Span::raw("   "),
            Span::styled("[ No ]", self.button_style(dialog.selected == DialogChoice::No)),
        ]));

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(self.theme.dialog),
            content,
        );
    }

    fn button_style(&self, selected: bool) -> ratatui::style::Style {
        if selected {
            self.theme.button_selected
        } else {
            self.theme.button
        }
    }

    fn draw_too_small(&self, frame: &mut Frame<'_>, screen: Rect) {
        frame.render_widget(Clear, screen);
        frame.render_widget(
            Paragraph::new(format!("Terminal too small: {}x{}", screen.width, screen.height))
                .alignment(Alignment::Center),
            screen,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_per_state() {
        let idle = StatusLineInfo {
            state: EditorState::Idle,
            remaining: None,
            char_count: 0,
        };
        assert_eq!(status_text(&idle), "Start typing...");

        let armed = StatusLineInfo {
            state: EditorState::Armed,
            remaining: Some(Duration::from_millis(3300)),
            char_count: 4,
        };
        assert_eq!(status_text(&armed), "3.3s until the page is wiped");

        let prompting = StatusLineInfo {
            state: EditorState::Prompting,
            remaining: None,
            char_count: 4,
        };
        assert_eq!(status_text(&prompting), "Time's up!");
    }

    #[test]
    fn test_dialog_choice_toggle() {
        assert_eq!(DialogChoice::default(), DialogChoice::Yes);
        assert_eq!(DialogChoice::Yes.toggle(), DialogChoice::No);
        assert!(DialogChoice::No.toggle().is_yes());
    }
}
