//! フロントエンド
//!
//! 端末上でエディタを動かすイベントループと起動オプション

pub mod tui;

pub use tui::{TuiApplication, TuiDialog};

use crate::logging::DEFAULT_DEBUG_LOG;
use std::path::PathBuf;

/// 起動オプション
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// デバッグログ出力先（未指定ならログを出さない）
    pub debug_log: Option<PathBuf>,
}

impl RunOptions {
    /// コマンドライン引数を解釈（未知の引数は無視）
    pub fn from_args(args: &[String]) -> Self {
        let mut options = Self::default();

        let mut iter = args.iter().peekable();
        while let Some(arg) = iter.next() {
            if arg.as_str() != "--debug-log" {
                continue;
            }
            let path = iter
                .peek()
                .filter(|next| !next.starts_with('-'))
                .map(|next| PathBuf::from(next.as_str()));
            if path.is_some() {
                iter.next();
            }
            options.debug_log = Some(path.unwrap_or_else(|| PathBuf::from(DEFAULT_DEBUG_LOG)));
        }

        options
    }
}
