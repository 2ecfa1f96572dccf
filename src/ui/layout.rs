//! TUIレイアウト管理
//!
//! 端末内に固定サイズの「ウィンドウ」を配置し、説明ラベル・テキスト領域・ステータスラインに分割する。
//! テキスト領域の折り返しとカーソル位置の計算もここで行う

use crate::config::MIN_WINDOW_SIZE;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// タブの表示幅
pub const TAB_WIDTH: usize = 4;

/// ダイアログのボタン行
pub const DIALOG_BUTTONS: &str = "[ Yes ]   [ No ]";

/// アプリケーション全体のレイアウト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// ウィンドウ枠
    pub window: Rect,
    /// 説明ラベル
    pub label: Rect,
    /// テキスト領域（枠込み）
    pub text_area: Rect,
    /// テキスト領域の内側
    pub text_inner: Rect,
    /// ステータスライン（下部、1行）
    pub status_line: Rect,
}

impl AppLayout {
    /// 画面サイズからレイアウトを計算
    ///
    /// 端末が最小サイズ未満なら None
    pub fn calculate(screen: Rect, window_size: (u16, u16), instructions: &str) -> Option<Self> {
        if screen.width < MIN_WINDOW_SIZE.0 || screen.height < MIN_WINDOW_SIZE.1 {
            return None;
        }

        let window = centered_rect(
            screen,
            window_size.0.min(screen.width),
            window_size.1.min(screen.height),
        );
        let inner = window.inner(Margin::new(1, 1));

        let label_rows = label_lines(instructions, inner.width.saturating_sub(2) as usize);
        // ラベルの下に1行空ける。テキスト領域は枠込みで最低3行
        let label_height = (label_rows as u16 + 1).min(inner.height.saturating_sub(4));

        let [label, text_area, status_line] = Layout::vertical([
            Constraint::Length(label_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        let label = label.inner(Margin::new(1, 0));
        let text_inner = text_area.inner(Margin::new(1, 1));

        Some(Self {
            window,
            label,
            text_area,
            text_inner,
            status_line,
        })
    }

    /// 確認ダイアログの領域（ウィンドウ中央）
    pub fn dialog_area(&self, title: &str, message: &str) -> Rect {
        let content_width = string_width(message)
            .max(string_width(title) + 2)
            .max(string_width(DIALOG_BUTTONS));
        let max_inner = self.window.width.saturating_sub(4) as usize;
        let inner_width = content_width.min(max_inner).max(1);

        let message_rows = wrap_text(message, 0, inner_width).rows.len();
        // 枠2行 + 本文 + 空行 + ボタン行
        let height = (message_rows + 4) as u16;
        let width = inner_width as u16 + 4;

        centered_rect(self.window, width, height.min(self.window.height))
    }
}

/// 指定領域の中央に矩形を配置
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn label_lines(instructions: &str, width: usize) -> usize {
    wrap_text(instructions, 0, width).rows.len()
}

/// 文字の表示幅
pub fn char_width(ch: char) -> usize {
    match ch {
        '\t' => TAB_WIDTH,
        // 制御文字
        '\x00'..='\x1F' | '\u{7F}'..='\u{9F}' => 0,
        _ => unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1),
    }
}

/// 文字列の表示幅
pub fn string_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// 折り返し結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedText {
    /// 表示行（タブは空白に展開済み）
    pub rows: Vec<String>,
    /// カーソルの表示位置（行, 列）
    pub cursor: (usize, usize),
}

/// 単語単位で折り返す
///
/// 空白の直後で改行し、幅を超える単語は強制的に分割する。
/// `cursor` は文字位置で、折り返し後の表示位置に変換される
pub fn wrap_text(text: &str, cursor: usize, width: usize) -> WrappedText {
    let width = width.max(1);
    let mut rows: Vec<String> = Vec::new();
    // (行, 列, 表示行の末尾か)
    let mut cursor_at: Option<(usize, usize, bool)> = None;
    let mut line_start = 0;

    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        let ranges = wrap_line(&chars, width);
        let last = ranges.len() - 1;

        for (index, &(start, end)) in ranges.iter().enumerate() {
            if cursor_at.is_none() && cursor >= line_start + start {
                let offset = cursor - line_start;
                if offset < end || (index == last && offset <= end) {
                    let column = chars[start..offset].iter().copied().map(char_width).sum();
                    cursor_at = Some((rows.len(), column, offset == end));
                }
            }
            rows.push(render_row(&chars[start..end]));
        }

        line_start += chars.len() + 1;
    }

    let (row, column, at_row_end) = cursor_at.unwrap_or_else(|| {
        let row = rows.len() - 1;
        (row, string_width(&rows[row]), true)
    });

    let cursor = if column < width {
        (row, column)
    } else if at_row_end {
        // 論理行末ちょうどのカーソルは直後に空行を挟んでその行頭に置く
        rows.insert(row + 1, String::new());
        (row + 1, 0)
    } else {
        // 行末に残した空白の手前。同じ行の最終列に置く
        (row, width - 1)
    };

    WrappedText { rows, cursor }
}

/// 1論理行を表示行の範囲（文字インデックス）に分割
fn wrap_line(chars: &[char], width: usize) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let mut used = 0;
        let mut end = start;
        let mut last_break = None;

        while end < chars.len() {
            let w = char_width(chars[end]);
            if used + w > width {
                break;
            }
            used += w;
            end += 1;
            if chars[end - 1].is_whitespace() {
                last_break = Some(end);
            }
        }

        if end < chars.len() {
            if chars[end].is_whitespace() {
                // はみ出した空白は行末に残す
                end += 1;
            } else if let Some(at) = last_break {
                end = at;
            } else if end == start {
                end = start + 1;
            }
        }

        ranges.push((start, end));
        start = end;
    }

    if ranges.is_empty() {
        ranges.push((0, 0));
    }
    ranges
}

fn render_row(chars: &[char]) -> String {
    let mut row = String::with_capacity(chars.len());
    for &ch in chars {
        if ch == '\t' {
            row.push_str(&" ".repeat(TAB_WIDTH));
        } else {
            row.push(ch);
        }
    }
    row
}

/// カーソル行が見えるようにスクロール位置を調整
pub fn adjust_scroll(offset: usize, cursor_row: usize, height: usize) -> usize {
    if height == 0 {
        return cursor_row;
    }
    if cursor_row < offset {
        cursor_row
    } else if cursor_row >= offset + height {
        cursor_row + 1 - height
    } else {
        offset
    }
}
