//! テキストバッファモジュール
//!
//! 編集中の文字列とカーソルを保持する

pub mod text_buffer;

pub use text_buffer::{CursorPosition, TextBuffer};
