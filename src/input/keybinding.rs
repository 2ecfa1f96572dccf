//! キーバインドシステム
//!
//! キー入力の内部表現と、テキスト領域での編集アクションへの対応付け

use crossterm::event::{
    KeyCode as CrosstermKeyCode, KeyEvent, KeyEventKind, KeyModifiers as CrosstermModifiers,
};

/// キー入力の内部表現
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    /// 修飾キー
    pub modifiers: KeyModifiers,
    /// 基本キー
    pub code: KeyCode,
}

/// 修飾キーの組み合わせ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// 基本キーコード
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    F(u8),
    Esc,
    Unknown,
}

/// テキスト領域でのアクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    LineStart,
    LineEnd,
    /// ウィンドウを閉じる
    Quit,
    /// 編集は行わない（キー入力としては数える）
    Ignore,
}

impl Key {
    /// 修飾なしのキー
    pub fn plain(code: KeyCode) -> Self {
        Self {
            modifiers: KeyModifiers::default(),
            code,
        }
    }

    /// 修飾なしの文字キー
    pub fn char(ch: char) -> Self {
        Self::plain(KeyCode::Char(ch))
    }

    /// Ctrl + 文字キー
    pub fn ctrl(ch: char) -> Self {
        Self {
            modifiers: KeyModifiers {
                ctrl: true,
                ..KeyModifiers::default()
            },
            code: KeyCode::Char(ch),
        }
    }

    pub fn ctrl_q() -> Self {
        Self::ctrl('q')
    }

    pub fn ctrl_c() -> Self {
        Self::ctrl('c')
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let modifiers = KeyModifiers {
            ctrl: event.modifiers.contains(CrosstermModifiers::CONTROL),
            alt: event.modifiers.contains(CrosstermModifiers::ALT),
            shift: event.modifiers.contains(CrosstermModifiers::SHIFT),
        };

        let code = match event.code {
            CrosstermKeyCode::Char(c) => KeyCode::Char(c),
            CrosstermKeyCode::Enter => KeyCode::Enter,
            CrosstermKeyCode::Backspace => KeyCode::Backspace,
            CrosstermKeyCode::Delete => KeyCode::Delete,
            CrosstermKeyCode::Tab => KeyCode::Tab,
            CrosstermKeyCode::Up => KeyCode::Up,
            CrosstermKeyCode::Down => KeyCode::Down,
            CrosstermKeyCode::Left => KeyCode::Left,
            CrosstermKeyCode::Right => KeyCode::Right,
            CrosstermKeyCode::Home => KeyCode::Home,
            CrosstermKeyCode::End => KeyCode::End,
            CrosstermKeyCode::F(n) => KeyCode::F(n),
            CrosstermKeyCode::Esc => KeyCode::Esc,
            _ => KeyCode::Unknown,
        };

        Key { modifiers, code }
    }
}

/// 押下・オートリピートのみをキー入力として扱う（離上は無視）
pub fn is_keystroke(event: &KeyEvent) -> bool {
    matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// キーに対応するアクションを決定
pub fn action_for(key: &Key) -> KeyAction {
    let KeyModifiers { ctrl, alt, .. } = key.modifiers;

    match (&key.code, ctrl, alt) {
        (KeyCode::Char('q'), true, false) | (KeyCode::Char('c'), true, false) => KeyAction::Quit,
        // AltGr は Ctrl+Alt として届く（Windows）
        (KeyCode::Char(ch), true, true) if !ch.is_ascii_alphanumeric() => KeyAction::Insert(*ch),
        (KeyCode::Char(_), true, _) | (KeyCode::Char(_), _, true) => KeyAction::Ignore,
        (KeyCode::Char(ch), false, false) => KeyAction::Insert(*ch),
        (KeyCode::Tab, false, false) => KeyAction::Insert('\t'),
        (KeyCode::Enter, _, _) => KeyAction::Newline,
        (KeyCode::Backspace, _, _) => KeyAction::Backspace,
        (KeyCode::Delete, _, _) => KeyAction::Delete,
        (KeyCode::Left, _, _) => KeyAction::MoveLeft,
        (KeyCode::Right, _, _) => KeyAction::MoveRight,
        (KeyCode::Up, _, _) => KeyAction::MoveUp,
        (KeyCode::Down, _, _) => KeyAction::MoveDown,
        (KeyCode::Home, _, _) => KeyAction::LineStart,
        (KeyCode::End, _, _) => KeyAction::LineEnd,
        _ => KeyAction::Ignore,
    }
}
