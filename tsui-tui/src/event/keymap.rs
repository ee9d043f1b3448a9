//! 快捷键配置
//!
//! 每个动作可以绑定多个按键（方向键 + vim 风格按键）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift，终端对 `.` 等符号是否附带 Shift 的报告并不一致。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = if matches!(key.code, KeyCode::Char(_)) {
            key.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            key.modifiers
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 任一绑定匹配即可
pub fn matches_any(bindings: &[KeyBinding], key: &KeyEvent) -> bool {
    bindings.iter().any(|binding| binding.matches(key))
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Char('q')),
        KeyBinding::ctrl(KeyCode::Char('c')),
    ];
    pub const BACK: &'static [KeyBinding] = &[KeyBinding::key(KeyCode::Esc)];
    pub const TOGGLE_POWER: &'static [KeyBinding] = &[KeyBinding::key(KeyCode::Char('.'))];

    // 菜单
    pub const UP: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Up),
        KeyBinding::key(KeyCode::Char('k')),
    ];
    pub const DOWN: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Down),
        KeyBinding::key(KeyCode::Char('j')),
    ];
    pub const CLOSE: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Left),
        KeyBinding::key(KeyCode::Char('h')),
    ];
    pub const OPEN: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Right),
        KeyBinding::key(KeyCode::Char('l')),
    ];
    pub const ACTIVATE: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Enter),
        KeyBinding::key(KeyCode::Char(' ')),
    ];
}
