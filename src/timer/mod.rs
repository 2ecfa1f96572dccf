//! タイマーモジュール
//!
//! 時刻の取得元（`Clock`）と単発デバウンスタイマー

pub mod clock;
pub mod debounce;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::DebounceTimer;
