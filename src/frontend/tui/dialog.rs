//! 端末上のモーダル確認ダイアログ
//!
//! 応答があるまでイベントを読み続けるため、その間テキスト領域へは一切入力が届かない

use crate::config::EditorConfig;
use crate::editor::{ConfirmDialog, ConfirmRequest, EditorState};
use crate::error::{DangerousError, Result, UiError};
use crate::input::{is_keystroke, Key, KeyCode};
use crate::ui::{DialogChoice, DialogView, Renderer, ScreenView, StatusLineInfo};
use crossterm::event::{self, Event};
use log::debug;
use ratatui::backend::Backend;
use ratatui::Terminal;

/// ダイアログでのキー解釈結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogInput {
    /// 応答が確定した（はい = true）
    Answer(bool),
    /// 選択ボタンが変わった
    Select(DialogChoice),
    /// 何もしない
    Ignore,
}

/// ダイアログ表示中のキーを解釈
pub fn interpret_dialog_key(selected: DialogChoice, key: &Key) -> DialogInput {
    if key.modifiers.ctrl || key.modifiers.alt {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => DialogInput::Answer(false),
            _ => DialogInput::Ignore,
        };
    }

    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => DialogInput::Answer(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => DialogInput::Answer(false),
        KeyCode::Enter | KeyCode::Char(' ') => DialogInput::Answer(selected.is_yes()),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => DialogInput::Select(selected.toggle()),
        _ => DialogInput::Ignore,
    }
}

/// 端末に描画する確認ダイアログ
pub struct TuiDialog<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    renderer: &'a mut Renderer,
    config: &'a EditorConfig,
    selected: DialogChoice,
}

impl<'a, B: Backend> TuiDialog<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, renderer: &'a mut Renderer, config: &'a EditorConfig) -> Self {
        Self {
            terminal,
            renderer,
            config,
            selected: DialogChoice::default(),
        }
    }

    pub fn selected(&self) -> DialogChoice {
        self.selected
    }

    /// エディタ画面の上にダイアログを重ねて描画
    pub fn draw(&mut self, request: &ConfirmRequest<'_>) -> Result<()> {
        let view = ScreenView {
            window_title: &self.config.window_title,
            instructions: &self.config.instructions,
            buffer: request.buffer,
            status: StatusLineInfo {
                state: EditorState::Prompting,
                remaining: None,
                char_count: request.buffer.len_chars(),
            },
        };
        let dialog = DialogView {
            title: request.title,
            message: request.message,
            selected: self.selected,
        };

        let renderer = &mut *self.renderer;
        self.terminal
            .draw(|frame| renderer.draw(frame, &view, Some(&dialog)))
            .map(|_| ())
            .map_err(|err| dialog_error("render", err))
    }
}

impl<B: Backend> ConfirmDialog for TuiDialog<'_, B> {
    fn confirm(&mut self, request: &ConfirmRequest<'_>) -> Result<bool> {
        self.selected = DialogChoice::default();

        loop {
            self.draw(request)?;

            let Event::Key(key_event) = event::read().map_err(|err| dialog_error("event read", err))? else {
                continue;
            };
            if !is_keystroke(&key_event) {
                continue;
            }

            match interpret_dialog_key(self.selected, &Key::from(key_event)) {
                DialogInput::Answer(answer) => {
                    debug!("dialog answered: {}", if answer { "yes" } else { "no" });
                    return Ok(answer);
                }
                DialogInput::Select(choice) => self.selected = choice,
                DialogInput::Ignore => {}
            }
        }
    }
}

fn dialog_error(context: &str, err: impl std::fmt::Display) -> DangerousError {
    DangerousError::Ui(UiError::DialogFailed {
        reason: format!("{}: {}", context, err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::TextBuffer;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_direct_answers() {
        assert_eq!(
            interpret_dialog_key(DialogChoice::No, &Key::char('y')),
            DialogInput::Answer(true)
        );
        assert_eq!(
            interpret_dialog_key(DialogChoice::Yes, &Key::char('N')),
            DialogInput::Answer(false)
        );
        assert_eq!(
            interpret_dialog_key(DialogChoice::Yes, &Key::plain(KeyCode::Esc)),
            DialogInput::Answer(false)
        );
        assert_eq!(
            interpret_dialog_key(DialogChoice::Yes, &Key::ctrl_c()),
            DialogInput::Answer(false)
        );
    }

    #[test]
    fn test_enter_confirms_selection() {
        assert_eq!(
            interpret_dialog_key(DialogChoice::Yes, &Key::plain(KeyCode::Enter)),
            DialogInput::Answer(true)
        );
        assert_eq!(
            interpret_dialog_key(DialogChoice::No, &Key::char(' ')),
            DialogInput::Answer(false)
        );
    }

    #[test]
    fn test_arrows_move_selection() {
        assert_eq!(
            interpret_dialog_key(DialogChoice::Yes, &Key::plain(KeyCode::Right)),
            DialogInput::Select(DialogChoice::No)
        );
        assert_eq!(
            interpret_dialog_key(DialogChoice::No, &Key::plain(KeyCode::Tab)),
            DialogInput::Select(DialogChoice::Yes)
        );
        assert_eq!(
            interpret_dialog_key(DialogChoice::Yes, &Key::char('x')),
            DialogInput::Ignore
        );
    }

    #[test]
    fn test_draw_overlays_dialog_on_editor() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut renderer = Renderer::new((75, 25));
        let config = EditorConfig::default();
        let buffer = TextBuffer::from_text("draft");
        let request = ConfirmRequest {
            title: &config.prompt_title,
            message: &config.prompt_message,
            buffer: &buffer,
        };

        let mut dialog = TuiDialog::new(&mut terminal, &mut renderer, &config);
        assert_eq!(dialog.selected(), DialogChoice::Yes);
        dialog.draw(&request).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("You stopped typing! Start over?"));
        assert!(screen.contains("[ Yes ]"));
        assert!(screen.contains("Time's up!"));
        assert!(screen.contains("draft"));
    }
}
