//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};
use std::sync::atomic::{AtomicU8, Ordering};

use tsui_core::BackendState;

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 设置主题（通过索引值）
/// 定义索引值 0 = Dark, 1 = Light
/// 这个函数接受 u8 而不是 Theme 类型
pub fn set_theme_index(index: u8) {
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 命令行中的主题名
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// 对应 `set_theme_index` 的索引值
    pub fn index(self) -> u8 {
        match self {
            Self::Dark => 0,
            Self::Light => 1,
        }
    }
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色（256 色调色板）
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// logo、主菜单选中项
    pub primary: Color,
    /// 子菜单选中项、激活项
    pub secondary: Color,
    pub red: Color,
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    /// 子菜单打开时主菜单选中项的背景
    pub inactive_bg: Color,
    /// 彩色背景上的文字
    pub on_accent: Color,
    /// 蓝色背景上的文字
    pub on_blue: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            primary: Color::Indexed(207),
            secondary: Color::Indexed(135),
            red: Color::Indexed(203),
            blue: Color::Indexed(39),
            green: Color::Indexed(40),
            yellow: Color::Indexed(214),
            inactive_bg: Color::Indexed(237),
            on_accent: Color::Indexed(16),
            on_blue: Color::Indexed(231),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            primary: Color::Indexed(163),
            secondary: Color::Indexed(92),
            red: Color::Indexed(160),
            blue: Color::Indexed(25),
            green: Color::Indexed(28),
            yellow: Color::Indexed(172),
            inactive_bg: Color::Indexed(252),
            on_accent: Color::Indexed(231),
            on_blue: Color::Indexed(231),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 弱化文本
    pub fn faint() -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }

    /// 粗体
    pub fn bold() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn logo() -> Style {
        Style::default().fg(colors().primary)
    }

    /// 主菜单选中项
    pub fn appmenu_selected() -> Style {
        let c = colors();
        Style::default().bg(c.primary).fg(c.on_accent)
    }

    /// 子菜单打开时的主菜单选中项
    pub fn appmenu_selected_inactive() -> Style {
        Style::default().bg(colors().inactive_bg)
    }

    /// 子菜单选中项
    pub fn submenu_selected() -> Style {
        let c = colors();
        Style::default().bg(c.secondary).fg(c.on_accent)
    }

    pub fn accent() -> Style {
        Style::default().fg(colors().secondary)
    }

    pub fn danger() -> Style {
        Style::default().fg(colors().red)
    }

    /// 登录链接
    pub fn link() -> Style {
        Style::default()
            .fg(colors().blue)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// 锁定警告标题
    pub fn warning_heading() -> Style {
        let c = colors();
        Style::default()
            .bg(c.yellow)
            .fg(Color::Indexed(16))
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default().fg(colors().yellow)
    }

    /// 设置项的值按内容着色
    pub fn setting_value(value: &str) -> Style {
        let c = colors();
        let color = match value {
            "Yes" | "On" => c.green,
            "No" | "Off" => c.red,
            _ => c.blue,
        };
        Style::default().fg(color)
    }

    /// 顶部状态按钮
    pub fn status_button(backend_state: BackendState) -> Style {
        let c = colors();
        let black = Color::Indexed(16);
        match backend_state {
            BackendState::NeedsLogin | BackendState::NeedsMachineAuth => {
                Style::default().bg(c.yellow).fg(black)
            }
            BackendState::Starting => Style::default().bg(c.blue).fg(c.on_blue),
            BackendState::Running => Style::default().bg(c.green).fg(black),
            BackendState::Stopped | BackendState::NoState => Style::default().bg(c.red).fg(black),
        }
    }
}
