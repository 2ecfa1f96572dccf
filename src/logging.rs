//! ロギングシステム
//!
//! `log` ファサードのバックエンド。TUI 実行中は端末を汚さないよう、
//! 出力先は JSON Lines 形式のデバッグログファイルのみとする

use crate::error::Result;
use log::{LevelFilter, Log, Metadata, Record};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// デバッグログ未指定時のファイル名
pub const DEFAULT_DEBUG_LOG: &str = "debug.log";

/// 1行分のログレコード
#[derive(Debug, Serialize)]
struct LogRecord<'a> {
    ts: u128,
    level: &'a str,
    target: &'a str,
    message: String,
}

/// ロガー
///
/// ファイル出力は追記モード
#[derive(Debug)]
pub struct Logger {
    level: LevelFilter,
    output_file: Option<Mutex<File>>,
    output_path: Option<PathBuf>,
}

impl Logger {
    /// デフォルト構築（出力先なし）
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            output_file: None,
            output_path: None,
        }
    }

    /// 開発者向けロガー
    pub fn for_development() -> Self {
        Self::new(LevelFilter::Debug)
    }

    /// ログレベルを取得
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// ログレベルを変更
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// ファイル出力を設定
    pub fn with_file_output(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        self.output_file = Some(Mutex::new(file));
        self.output_path = Some(path.to_path_buf());
        Ok(self)
    }

    /// ファイル出力先
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// グローバルロガーとして登録
    pub fn install(self) -> Result<()> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    fn should_log(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn format_line(record: &Record<'_>) -> Option<String> {
        let entry = LogRecord {
            ts: timestamp_ms(),
            level: record.level().as_str(),
            target: record.target(),
            message: record.args().to_string(),
        };
        serde_json::to_string(&entry).ok()
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.should_log(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if !self.should_log(record.metadata()) {
            return;
        }

        let Some(file) = &self.output_file else {
            return;
        };
        let Some(line) = Self::format_line(record) else {
            return;
        };
        if let Ok(mut file) = file.lock() {
            let _ = writeln!(file, "{}", line);
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.output_file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|dur| dur.as_millis())
        .unwrap_or_default()
}
