//! 単発デバウンスタイマー
//!
//! 保留中の期限は高々1つ。再設定は必ず既存の期限を破棄してから行う

use std::time::{Duration, Instant};

/// 単発デバウンスタイマー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceTimer {
    /// 待ち時間
    interval: Duration,
    /// 保留中の期限
    deadline: Option<Instant>,
}

impl DebounceTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 保留中の期限を破棄して `now + interval` で再設定
    ///
    /// 既存の期限を置き換えた場合は true
    pub fn reset(&mut self, now: Instant) -> bool {
        let replaced = self.cancel();
        self.deadline = Some(now + self.interval);
        replaced
    }

    /// 保留中の期限を破棄（なければ何もしない）
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// 期限までの残り時間
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// 期限切れなら消費して true を返す（一度しか発火しない）
    pub fn take_expired(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
