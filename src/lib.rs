//! dangerous-writing - 入力が止まると消えるライティングパッド
//!
//! 最後のキー入力から一定時間（5秒）何も打たないと確認ダイアログを出し、
//! 「はい」と答えるとテキストをすべて消去する

// コアモジュール
pub mod config;
pub mod error;
pub mod frontend;
pub mod logging;

// データ層
pub mod buffer;
pub mod timer;

// ロジック層
pub mod editor;
pub mod input;

// 表示層
pub mod ui;

// 公開API
pub use config::EditorConfig;
pub use editor::{DangerousEditor, EditorState, ExpireOutcome, InputHandler, TimerHandler};
pub use error::{DangerousError, Result};
pub use frontend::{RunOptions, TuiApplication};
