//! エディタモジュール
//!
//! 入力が止まると内容を消去するエディタ本体と、イベントループから呼ばれる能力トレイト

pub mod dangerous;
pub mod dialog;

pub use dangerous::{DangerousEditor, EditorState, ExpireOutcome, KeyOutcome};
pub use dialog::{ConfirmDialog, ConfirmRequest, ScriptedDialog, ShownPrompt};

use crate::error::Result;

/// テキスト領域のキー入力を受け取る能力
pub trait InputHandler {
    /// キー入力ごとに呼ばれ、保留中のタイマーを破棄して再設定する
    fn on_key_press(&mut self);
}

/// タイマー満了を受け取る能力
pub trait TimerHandler {
    /// 無入力のまま待ち時間が経過したときに呼ばれる
    fn on_timer_expire(&mut self, dialog: &mut dyn ConfirmDialog) -> Result<ExpireOutcome>;
}
