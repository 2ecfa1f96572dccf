//! UIモジュール
//!
//! ratatuiベースのターミナルUI機能

pub mod layout;
pub mod renderer;
pub mod theme;

// 公開API
pub use layout::{wrap_text, AppLayout, WrappedText};
pub use renderer::{status_text, DialogChoice, DialogView, Renderer, ScreenView, StatusLineInfo};
pub use theme::Theme;
