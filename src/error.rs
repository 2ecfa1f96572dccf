//! エラーハンドリングシステム
//!
//! エディタ全体で使用される統一されたエラー型とユーティリティを定義
//! エディタ本体の契約にはエラーがなく、ここに現れるのはホスト側（端末・ロガー）の失敗のみ

use crossterm::event::DisableBracketedPaste;
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum DangerousError {
    /// UI操作エラー
    #[error("UI operation failed: {0}")]
    Ui(#[from] UiError),

    /// バッファ操作エラー
    #[error("Buffer operation failed: {0}")]
    Buffer(#[from] BufferError),

    /// 設定エラー
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// システムエラー
    #[error("System error: {0}")]
    System(#[from] SystemError),
}

/// UI操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("Terminal initialization failed: {reason}")]
    TerminalInit { reason: String },

    #[error("Screen size too small: {width}x{height}")]
    ScreenTooSmall { width: u16, height: u16 },

    #[error("Rendering failed: {component}")]
    RenderingFailed { component: String },

    #[error("Confirmation dialog failed: {reason}")]
    DialogFailed { reason: String },
}

/// バッファ操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("Invalid cursor position: {position}")]
    InvalidCursorPosition { position: usize },
}

/// 設定固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// システム固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SystemError {
    #[error("Logger initialization failed: {message}")]
    LoggerInit { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, DangerousError>;

/// 各モジュール固有のResult型
pub mod buffer {
    pub type Result<T> = std::result::Result<T, super::BufferError>;
}

// std::io::Error から DangerousError への変換
impl From<std::io::Error> for DangerousError {
    fn from(error: std::io::Error) -> Self {
        DangerousError::System(SystemError::Io {
            message: error.to_string(),
        })
    }
}

impl From<log::SetLoggerError> for DangerousError {
    fn from(error: log::SetLoggerError) -> Self {
        DangerousError::System(SystemError::LoggerInit {
            message: error.to_string(),
        })
    }
}

/// パニックハンドラの設定
///
/// 端末を raw モードのまま放置しないよう、メッセージ出力前に端末状態を戻す
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = execute!(std::io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();

        let location = panic_info
            .location()
            .unwrap_or_else(|| std::panic::Location::caller());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };

        log::error!("panic at {}:{}: {}", location.file(), location.line(), message);
        eprintln!("PANIC at {}:{}: {}", location.file(), location.line(), message);
        eprintln!("Stack trace: {}", std::backtrace::Backtrace::capture());

        std::process::exit(1);
    }));
}
