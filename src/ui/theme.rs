//! テーマ
//!
//! 各UI要素のスタイル

use ratatui::style::{Color, Modifier, Style};

/// UI要素ごとのスタイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// ウィンドウ枠
    pub window_border: Style,
    /// 説明ラベル
    pub label: Style,
    /// テキスト領域
    pub text: Style,
    /// テキスト領域の枠
    pub text_border: Style,
    /// ステータスライン
    pub status: Style,
    /// 残り時間が少ないときのステータスライン
    pub status_warning: Style,
    /// ダイアログ本体
    pub dialog: Style,
    /// ダイアログ枠
    pub dialog_border: Style,
    /// ボタン
    pub button: Style,
    /// 選択中のボタン
    pub button_selected: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            window_border: Style::default().fg(Color::Gray),
            label: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            text: Style::default().fg(Color::White),
            text_border: Style::default().fg(Color::DarkGray),
            status: Style::default().fg(Color::Black).bg(Color::Gray),
            status_warning: Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
            dialog: Style::default().fg(Color::White).bg(Color::Blue),
            dialog_border: Style::default()
                .fg(Color::Yellow)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            button: Style::default().fg(Color::White).bg(Color::Blue),
            button_selected: Style::default()
                .fg(Color::Blue)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        }
    }
}
