//! テキストバッファ実装
//!
//! 文字列本体と文字単位のカーソル位置を管理する。
//! 位置はすべて文字インデックス（0ベース）で扱い、バイト位置は内部でのみ使用する

use crate::error::{buffer::Result, BufferError};

/// カーソル位置を表現する構造体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    /// 文字位置（0ベース）
    pub char_pos: usize,
    /// 行番号（0ベース）
    pub line: usize,
    /// 列番号（0ベース、文字単位）
    pub column: usize,
}

impl CursorPosition {
    /// 指定された位置にカーソルを作成
    pub fn at(char_pos: usize, line: usize, column: usize) -> Self {
        Self {
            char_pos,
            line,
            column,
        }
    }
}

/// 編集中のテキスト
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: String,
    /// カーソル位置（文字単位）
    cursor: usize,
    /// 文字数キャッシュ
    char_len: usize,
}

impl TextBuffer {
    /// 空のバッファを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 文字列からバッファを作成（カーソルは末尾）
    pub fn from_text(text: &str) -> Self {
        let char_len = text.chars().count();
        Self {
            content: text.to_string(),
            cursor: char_len,
            char_len,
        }
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// 文字数
    pub fn len_chars(&self) -> usize {
        self.char_len
    }

    /// カーソルの文字位置
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// カーソルの行・列
    pub fn cursor_position(&self) -> CursorPosition {
        let mut line = 0;
        let mut column = 0;
        for ch in self.content.chars().take(self.cursor) {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        CursorPosition::at(self.cursor, line, column)
    }

    /// カーソルを指定の文字位置へ移動
    pub fn set_cursor(&mut self, char_pos: usize) -> Result<()> {
        if char_pos > self.char_len {
            return Err(BufferError::InvalidCursorPosition { position: char_pos });
        }
        self.cursor = char_pos;
        Ok(())
    }

    /// カーソル位置に1文字挿入
    pub fn insert_char(&mut self, ch: char) {
        let byte = self.byte_index(self.cursor);
        self.content.insert(byte, ch);
        self.cursor += 1;
        self.char_len += 1;
    }

    /// カーソル位置に文字列を挿入
    pub fn insert_str(&mut self, text: &str) {
        let byte = self.byte_index(self.cursor);
        let inserted = text.chars().count();
        self.content.insert_str(byte, text);
        self.cursor += inserted;
        self.char_len += inserted;
    }

    /// 改行を挿入
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// カーソル直前の文字を削除
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte = self.byte_index(self.cursor - 1);
        self.content.remove(byte);
        self.cursor -= 1;
        self.char_len -= 1;
        true
    }

    /// カーソル位置の文字を削除
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_len {
            return false;
        }
        let byte = self.byte_index(self.cursor);
        self.content.remove(byte);
        self.char_len -= 1;
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.char_len {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// 前の行へ移動（列は行長でクランプ）
    pub fn move_up(&mut self) -> bool {
        let position = self.cursor_position();
        if position.line == 0 {
            return false;
        }
        self.move_to_line(position.line - 1, position.column);
        true
    }

    /// 次の行へ移動（列は行長でクランプ）
    pub fn move_down(&mut self) -> bool {
        let position = self.cursor_position();
        if position.line + 1 >= self.line_count() {
            return false;
        }
        self.move_to_line(position.line + 1, position.column);
        true
    }

    pub fn move_line_start(&mut self) {
        let position = self.cursor_position();
        self.cursor -= position.column;
    }

    pub fn move_line_end(&mut self) {
        let position = self.cursor_position();
        let (_, len) = self.line_span(position.line);
        self.cursor += len - position.column;
    }

    /// 内容をすべて消去
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.char_len = 0;
    }

    /// 論理行数（空バッファでも1行）
    pub fn line_count(&self) -> usize {
        self.content.matches('\n').count() + 1
    }

    fn move_to_line(&mut self, line: usize, column: usize) {
        let (start, len) = self.line_span(line);
        self.cursor = start + column.min(len);
    }

    /// 指定行の開始文字位置と文字数
    fn line_span(&self, line: usize) -> (usize, usize) {
        let mut start = 0;
        for (index, text) in self.content.split('\n').enumerate() {
            let len = text.chars().count();
            if index == line {
                return (start, len);
            }
            start += len + 1;
        }
        (self.char_len, 0)
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.content.len())
    }
}
