//! 端末フロントエンド
//!
//! 端末の初期化・後始末とイベントループ。確認ダイアログは `dialog` のモーダル描画で行う

mod dialog;

pub use dialog::{interpret_dialog_key, DialogInput, TuiDialog};

use crate::config::EditorConfig;
use crate::editor::{DangerousEditor, KeyOutcome};
use crate::error::{DangerousError, Result, UiError};
use crate::input::{is_keystroke, Key};
use crate::timer::Clock;
use crate::ui::{Renderer, ScreenView, StatusLineInfo};
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::time::Duration;

pub struct TuiApplication {
    config: EditorConfig,
    editor: DangerousEditor,
    renderer: Renderer,
}

impl TuiApplication {
    pub fn new(config: EditorConfig) -> Result<Self> {
        let editor = DangerousEditor::new(config.clone())?;
        let renderer = Renderer::new(config.window_size);
        Ok(Self {
            config,
            editor,
            renderer,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        enter_terminal(&self.config.window_title)?;
        debug!("terminal entered");

        let backend = CrosstermBackend::new(stdout());
        let mut terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = leave_terminal();
                return Err(init_error("terminal backend", err));
            }
        };

        let loop_result = self.event_loop(&mut terminal);
        let show_cursor_result = terminal
            .show_cursor()
            .map_err(|err| terminal_error("show cursor", err));
        drop(terminal);
        let cleanup_result = leave_terminal();
        debug!("terminal restored");

        loop_result.and(show_cursor_result).and(cleanup_result)
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.render(terminal)?;

            let timeout = poll_timeout(self.config.frame_interval, self.editor.time_until_expiry());
            if event::poll(timeout).map_err(|err| terminal_error("event poll", err))? {
                let event = event::read().map_err(|err| terminal_error("event read", err))?;
                if dispatch_event(&mut self.editor, event) == KeyOutcome::Quit {
                    info!("quit");
                    return Ok(());
                }
            }

            // キー入力を反映してから期限を判定する
            let mut dialog = TuiDialog::new(terminal, &mut self.renderer, &self.config);
            if let Some(outcome) = self.editor.tick(&mut dialog)? {
                debug!("prompt dismissed: {:?}", outcome);
            }
        }
    }

    fn render<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let view = ScreenView {
            window_title: &self.config.window_title,
            instructions: &self.config.instructions,
            buffer: self.editor.buffer(),
            status: StatusLineInfo {
                state: self.editor.state(),
                remaining: self.editor.time_until_expiry(),
                char_count: self.editor.buffer().len_chars(),
            },
        };

        let renderer = &mut self.renderer;
        terminal
            .draw(|frame| renderer.draw(frame, &view, None))
            .map(|_| ())
            .map_err(|err| terminal_error("render", err))
    }
}

/// 次のイベント待ちの上限。描画周期と期限までの残り時間の短い方
fn poll_timeout(frame_interval: Duration, until_expiry: Option<Duration>) -> Duration {
    until_expiry.map_or(frame_interval, |remaining| remaining.min(frame_interval))
}

/// 端末イベントをエディタへ渡す
fn dispatch_event<C: Clock>(editor: &mut DangerousEditor<C>, event: Event) -> KeyOutcome {
    match event {
        Event::Key(key_event) if is_keystroke(&key_event) => editor.handle_key(&Key::from(key_event)),
        Event::Paste(text) => {
            editor.handle_paste(&text);
            KeyOutcome::Handled
        }
        Event::Key(_) | Event::Resize(_, _) => KeyOutcome::Handled,
        Event::Mouse(_) | Event::FocusGained | Event::FocusLost => KeyOutcome::Handled,
    }
}

fn enter_terminal(title: &str) -> Result<()> {
    enable_raw_mode().map_err(|err| init_error("enable raw mode", err))?;
    let mut out = stdout();
    if let Err(err) = execute!(out, EnterAlternateScreen, EnableBracketedPaste, SetTitle(title)) {
        let _ = disable_raw_mode();
        return Err(init_error("enter alternate screen", err));
    }
    Ok(())
}

fn leave_terminal() -> Result<()> {
    let mut out = stdout();
    execute!(out, DisableBracketedPaste, LeaveAlternateScreen)
        .map_err(|err| terminal_error("leave alternate screen", err))?;
    disable_raw_mode().map_err(|err| terminal_error("disable raw mode", err))?;
    Ok(())
}

fn init_error(context: &str, err: impl std::fmt::Display) -> DangerousError {
    DangerousError::Ui(UiError::TerminalInit {
        reason: format!("{}: {}", context, err),
    })
}

fn terminal_error(context: &str, err: impl std::fmt::Display) -> DangerousError {
    DangerousError::Ui(UiError::RenderingFailed {
        component: format!("{}: {}", context, err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::ScriptedDialog;
    use crate::timer::ManualClock;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    const FRAME: Duration = Duration::from_millis(16);

    fn editor() -> (DangerousEditor<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let editor = DangerousEditor::with_clock(EditorConfig::default(), clock.clone()).unwrap();
        (editor, clock)
    }

    fn press(ch: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
    }

    #[test]
    fn test_poll_timeout_is_bounded_by_expiry() {
        assert_eq!(poll_timeout(FRAME, None), FRAME);
        assert_eq!(poll_timeout(FRAME, Some(Duration::from_millis(3))), Duration::from_millis(3));
        assert_eq!(poll_timeout(FRAME, Some(Duration::ZERO)), Duration::ZERO);
        assert_eq!(poll_timeout(FRAME, Some(Duration::from_secs(5))), FRAME);
    }

    #[test]
    fn test_key_at_deadline_is_applied_before_tick() {
        let (mut editor, clock) = editor();
        let mut dialog = ScriptedDialog::new();

        dispatch_event(&mut editor, press('a'));
        clock.advance_ms(5000);

        // 期限ちょうどに届いたキーはタイマーを張り直すので確認は出ない
        assert_eq!(dispatch_event(&mut editor, press('b')), KeyOutcome::Handled);
        assert_eq!(editor.tick(&mut dialog).unwrap(), None);
        assert_eq!(dialog.shown_count(), 0);
        assert_eq!(editor.text(), "ab");
        assert_eq!(poll_timeout(FRAME, editor.time_until_expiry()), FRAME);
    }

    #[test]
    fn test_dispatch_paste_release_and_quit() {
        let (mut editor, _clock) = editor();

        dispatch_event(&mut editor, Event::Paste("hi\r\nthere".to_string()));
        assert_eq!(editor.text(), "hi\nthere");

        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(dispatch_event(&mut editor, release), KeyOutcome::Handled);
        assert_eq!(dispatch_event(&mut editor, Event::Resize(80, 24)), KeyOutcome::Handled);
        assert_eq!(editor.text(), "hi\nthere");

        let quit = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(dispatch_event(&mut editor, quit), KeyOutcome::Quit);
    }

    #[test]
    fn test_init_error_is_terminal_init() {
        match init_error("enable raw mode", "not a tty") {
            DangerousError::Ui(UiError::TerminalInit { reason }) => {
                assert_eq!(reason, "enable raw mode: not a tty");
            }
            other => panic!("Expected TerminalInit, got {:?}", other),
        }
    }
}
