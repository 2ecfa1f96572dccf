//! 確認ダイアログ
//!
//! はい／いいえを同期的に問い合わせる能力。端末版はモーダル描画、テストは台本で応答する

use crate::buffer::TextBuffer;
use crate::error::{Result, UiError};
use std::collections::VecDeque;

/// ダイアログへの問い合わせ内容
#[derive(Debug, Clone, Copy)]
pub struct ConfirmRequest<'a> {
    /// タイトル
    pub title: &'a str,
    /// 本文
    pub message: &'a str,
    /// 背景に描画するためのバッファ
    pub buffer: &'a TextBuffer,
}

/// はい／いいえの同期確認
pub trait ConfirmDialog {
    /// 応答があるまで戻らない。「はい」なら true
    fn confirm(&mut self, request: &ConfirmRequest<'_>) -> Result<bool>;
}

/// 用意した応答を順に返すダイアログ
///
/// 表示された問い合わせを記録する。応答が尽きた後の問い合わせはエラー
#[derive(Debug, Clone, Default)]
pub struct ScriptedDialog {
    answers: VecDeque<bool>,
    shown: Vec<ShownPrompt>,
}

/// 記録された問い合わせ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownPrompt {
    pub title: String,
    pub message: String,
    /// 表示時点のバッファ内容
    pub text: String,
}

impl ScriptedDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 応答列から作成
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            shown: Vec::new(),
        }
    }

    /// 応答を追加
    pub fn push_answer(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    /// 表示された問い合わせ
    pub fn shown(&self) -> &[ShownPrompt] {
        &self.shown
    }

    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }

    /// 未使用の応答数
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl ConfirmDialog for ScriptedDialog {
    fn confirm(&mut self, request: &ConfirmRequest<'_>) -> Result<bool> {
        self.shown.push(ShownPrompt {
            title: request.title.to_string(),
            message: request.message.to_string(),
            text: request.buffer.text().to_string(),
        });

        self.answers.pop_front().ok_or_else(|| {
            UiError::DialogFailed {
                reason: "no scripted answer left".to_string(),
            }
            .into()
        })
    }
}
