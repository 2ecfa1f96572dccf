//! エディタ設定
//!
//! 消去までの待ち時間や表示文言などの固定値。ユーザーには公開しない

use crate::error::ConfigError;
use std::time::Duration;

/// 最後のキー入力から消去確認までの時間（5秒）
pub const DEFAULT_CLEAR_INTERVAL: Duration = Duration::from_millis(5000);

/// 描画ループの周期（60fps）
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// 600x400px のウィンドウを 8x16px のセルで換算した大きさ
pub const DEFAULT_WINDOW_SIZE: (u16, u16) = (75, 25);

/// 描画可能な最小の端末サイズ
pub const MIN_WINDOW_SIZE: (u16, u16) = (20, 10);

/// エディタの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// 消去確認までの無入力時間
    pub clear_interval: Duration,
    /// 起動直後からタイマーを作動させるか
    pub arm_on_start: bool,
    /// ウィンドウタイトル
    pub window_title: String,
    /// 説明ラベル
    pub instructions: String,
    /// 確認ダイアログのタイトル
    pub prompt_title: String,
    /// 確認ダイアログの本文
    pub prompt_message: String,
    /// ウィンドウの初期サイズ（列, 行）
    pub window_size: (u16, u16),
    /// 描画ループの周期
    pub frame_interval: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            clear_interval: DEFAULT_CLEAR_INTERVAL,
            arm_on_start: false,
            window_title: "Dangerous Writing App".to_string(),
            instructions: "Welcome to the Dangerous Writing App!\n\
                           Keep typing! If you stop for 5 seconds, you risk losing all your work!"
                .to_string(),
            prompt_title: "Time's up!".to_string(),
            prompt_message: "You stopped typing! Start over?".to_string(),
            window_size: DEFAULT_WINDOW_SIZE,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

impl EditorConfig {
    pub fn with_clear_interval(mut self, interval: Duration) -> Self {
        self.clear_interval = interval;
        self
    }

    pub fn with_arm_on_start(mut self, arm: bool) -> Self {
        self.arm_on_start = arm;
        self
    }

    pub fn with_window_size(mut self, width: u16, height: u16) -> Self {
        self.window_size = (width, height);
        self
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// 設定値の妥当性を検証
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clear_interval.is_zero() {
            return Err(invalid("clear_interval", format!("{:?}", self.clear_interval)));
        }
        if self.frame_interval.is_zero() {
            return Err(invalid("frame_interval", format!("{:?}", self.frame_interval)));
        }

        let (width, height) = self.window_size;
        if width < MIN_WINDOW_SIZE.0 || height < MIN_WINDOW_SIZE.1 {
            return Err(invalid("window_size", format!("{}x{}", width, height)));
        }

        Ok(())
    }
}

fn invalid(key: &str, value: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value,
    }
}
