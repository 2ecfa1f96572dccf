//! 入力が止まると内容を消去するエディタ
//!
//! 状態は `Idle`（タイマーなし）→ `Armed`（タイマー保留中）→ `Prompting`（確認中）→ `Idle`。
//! キー入力のたびにタイマーを張り直し、満了したら確認ダイアログを出して「はい」なら全消去する

use super::{ConfirmDialog, ConfirmRequest, InputHandler, TimerHandler};
use crate::buffer::TextBuffer;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::input::{action_for, Key, KeyAction};
use crate::timer::{Clock, DebounceTimer, SystemClock};
use log::{debug, info, warn};
use std::time::Duration;

/// エディタの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// タイマーなし
    Idle,
    /// タイマー保留中
    Armed,
    /// 確認ダイアログ表示中
    Prompting,
}

/// タイマー満了時の処理結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpireOutcome {
    /// すでにダイアログが開いていたため何もしなかった
    Suppressed,
    /// 「いいえ」が選ばれ、内容を残した
    Kept,
    /// 「はい」が選ばれ、内容を消去した
    Cleared,
}

/// キー入力の処理結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// テキスト領域で処理した
    Handled,
    /// 終了要求
    Quit,
}

/// 入力が止まると内容を消去するエディタ
pub struct DangerousEditor<C: Clock = SystemClock> {
    config: EditorConfig,
    clock: C,
    buffer: TextBuffer,
    timer: DebounceTimer,
    /// 確認ダイアログ表示中フラグ
    dialog_open: bool,
}

impl DangerousEditor<SystemClock> {
    /// OSの時計で動くエディタを作成
    pub fn new(config: EditorConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> DangerousEditor<C> {
    /// 時刻の取得元を指定して作成
    pub fn with_clock(config: EditorConfig, clock: C) -> Result<Self> {
        config.validate()?;

        let mut timer = DebounceTimer::new(config.clear_interval);
        if config.arm_on_start {
            timer.reset(clock.now());
        }

        Ok(Self {
            config,
            clock,
            buffer: TextBuffer::new(),
            timer,
            dialog_open: false,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// 現在の状態
    pub fn state(&self) -> EditorState {
        if self.dialog_open {
            EditorState::Prompting
        } else if self.timer.is_pending() {
            EditorState::Armed
        } else {
            EditorState::Idle
        }
    }

    /// タイマー満了までの残り時間（保留中でなければ None）
    pub fn time_until_expiry(&self) -> Option<Duration> {
        self.timer.remaining(self.clock.now())
    }

    /// キー入力を処理する
    ///
    /// 終了要求以外はすべてテキスト領域へのキー入力として数え、タイマーを張り直す
    pub fn handle_key(&mut self, key: &Key) -> KeyOutcome {
        let action = action_for(key);
        if action == KeyAction::Quit {
            debug!("quit requested");
            return KeyOutcome::Quit;
        }

        self.apply_action(action);
        self.on_key_press();
        KeyOutcome::Handled
    }

    /// 貼り付けを1回のキー入力として処理する
    pub fn handle_paste(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.buffer.insert_str(&normalized);
        self.on_key_press();
    }

    /// タイマーを確認し、満了していればダイアログを出す
    pub fn tick(&mut self, dialog: &mut dyn ConfirmDialog) -> Result<Option<ExpireOutcome>> {
        if !self.timer.take_expired(self.clock.now()) {
            return Ok(None);
        }
        self.on_timer_expire(dialog).map(Some)
    }

    fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Insert(ch) => self.buffer.insert_char(ch),
            KeyAction::Newline => self.buffer.insert_newline(),
            KeyAction::Backspace => {
                self.buffer.backspace();
            }
            KeyAction::Delete => {
                self.buffer.delete_forward();
            }
            KeyAction::MoveLeft => {
                self.buffer.move_left();
            }
            KeyAction::MoveRight => {
                self.buffer.move_right();
            }
            KeyAction::MoveUp => {
                self.buffer.move_up();
            }
            KeyAction::MoveDown => {
                self.buffer.move_down();
            }
            KeyAction::LineStart => self.buffer.move_line_start(),
            KeyAction::LineEnd => self.buffer.move_line_end(),
            KeyAction::Quit | KeyAction::Ignore => {}
        }
    }
}

impl<C: Clock> InputHandler for DangerousEditor<C> {
    fn on_key_press(&mut self) {
        let replaced = self.timer.reset(self.clock.now());
        debug!(
            "timer re-armed for {:?} (replaced pending: {})",
            self.timer.interval(),
            replaced
        );
    }
}

impl<C: Clock> TimerHandler for DangerousEditor<C> {
    fn on_timer_expire(&mut self, dialog: &mut dyn ConfirmDialog) -> Result<ExpireOutcome> {
        if self.dialog_open {
            warn!("timer expired while a confirmation is already open; ignoring");
            return Ok(ExpireOutcome::Suppressed);
        }

        // 満了経路以外から呼ばれた場合も、確認中はタイマーを持たない
        self.timer.cancel();
        self.dialog_open = true;
        info!(
            "no keystroke for {:?}; asking whether to start over ({} chars at stake)",
            self.config.clear_interval,
            self.buffer.len_chars()
        );

        let request = ConfirmRequest {
            title: &self.config.prompt_title,
            message: &self.config.prompt_message,
            buffer: &self.buffer,
        };
        let answer = dialog.confirm(&request);
        self.dialog_open = false;

        if answer? {
            self.buffer.clear();
            info!("buffer cleared");
            Ok(ExpireOutcome::Cleared)
        } else {
            info!("buffer kept");
            Ok(ExpireOutcome::Kept)
        }
    }
}
