//! 入力処理モジュール
//!
//! crossterm のキーイベントを内部表現に変換し、編集アクションへ対応付ける

pub mod keybinding;

// 公開API
pub use keybinding::{action_for, is_keystroke, Key, KeyAction, KeyCode, KeyModifiers};
