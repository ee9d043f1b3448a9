//! 子菜单状态定义
//!
//! 子菜单是一组有序的条目，光标只会停在可选中的条目上。
//! 条目是封闭的枚举：激活后返回的是数据（`Command`），不是闭包。

use crate::command::Command;
use crate::i18n::t;

/// 设置项"是"的取值
pub const YES: &str = "Yes";
/// 设置项"否"的取值
pub const NO: &str = "No";

/// 激活时的互斥行为
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Exclusivity {
    /// 互不影响
    #[default]
    None,
    /// 激活任意条目前先清除所有条目的激活标记（单选）
    One,
}

/// 条目的视觉变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemVariant {
    #[default]
    Default,
    /// 强调色
    Accent,
    /// 危险操作（红色）
    Danger,
}

/// 普通条目
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledItem {
    pub label: String,
    /// 右对齐的附加文字
    pub right_label: String,
    pub variant: ItemVariant,
    /// 暗淡显示（如离线的出口节点）
    pub dim: bool,
    /// 激活时返回的命令
    pub on_activate: Option<Command>,
}

impl LabeledItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            right_label: String::new(),
            variant: ItemVariant::Default,
            dim: false,
            on_activate: None,
        }
    }

    #[must_use]
    pub fn action(mut self, command: Command) -> Self {
        self.on_activate = Some(command);
        self
    }

    #[must_use]
    pub fn right_label(mut self, label: impl Into<String>) -> Self {
        self.right_label = label.into();
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: ItemVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn dim(mut self, dim: bool) -> Self {
        self.dim = dim;
        self
    }
}

/// 可切换条目（单选组中的一项）
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleableItem {
    pub item: LabeledItem,
    pub active: bool,
}

/// 设置项的一个选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingOption {
    /// 回调收到的取值，不随语言变化
    pub value: &'static str,
    /// 显示文字
    pub label: String,
}

impl SettingOption {
    pub fn new(value: &'static str, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// 选项变化时生成命令
pub type OnChange = fn(&str) -> Command;

/// 设置项：每次激活切换到下一个选项（循环）
#[derive(Debug, Clone)]
pub struct SettingItem {
    pub label: String,
    options: Vec<SettingOption>,
    selected: usize,
    on_change: OnChange,
}

impl SettingItem {
    /// 当前选项
    pub fn selected(&self) -> Option<&SettingOption> {
        self.options.get(self.selected)
    }
}

/// 子菜单条目
#[derive(Debug, Clone)]
pub enum SubmenuItem {
    Labeled(LabeledItem),
    Toggleable(ToggleableItem),
    Setting(SettingItem),
    /// 分隔线
    Divider,
    /// 空行
    Spacer,
    /// 分组标题
    Title(String),
}

impl SubmenuItem {
    pub fn labeled(item: LabeledItem) -> Self {
        Self::Labeled(item)
    }

    pub fn toggleable(item: LabeledItem, active: bool) -> Self {
        Self::Toggleable(ToggleableItem { item, active })
    }

    pub fn title(label: impl Into<String>) -> Self {
        Self::Title(label.into())
    }

    /// 多选项设置；`initial` 不在选项中时选中第一个
    pub fn setting(
        label: impl Into<String>,
        options: Vec<SettingOption>,
        initial: &str,
        on_change: OnChange,
    ) -> Self {
        let selected = options
            .iter()
            .position(|option| option.value == initial)
            .unwrap_or(0);
        Self::Setting(SettingItem {
            label: label.into(),
            options,
            selected,
            on_change,
        })
    }

    /// 是 / 否设置，回调收到 [`YES`] 或 [`NO`]
    pub fn yes_no(label: impl Into<String>, initial: bool, on_change: OnChange) -> Self {
        let texts = &t().common;
        Self::setting(
            label,
            vec![
                SettingOption::new(YES, texts.yes),
                SettingOption::new(NO, texts.no),
            ],
            if initial { YES } else { NO },
            on_change,
        )
    }

    /// 光标能否停在此条目
    pub fn is_selectable(&self) -> bool {
        matches!(
            self,
            Self::Labeled(_) | Self::Toggleable(_) | Self::Setting(_)
        )
    }

    /// 是否处于激活状态（仅可切换条目）
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Toggleable(item) if item.active)
    }

    fn clear_active_flag(&mut self) {
        if let Self::Toggleable(item) = self {
            item.active = false;
        }
    }

    fn on_activate(&mut self) -> Option<Command> {
        match self {
            Self::Labeled(item) => item.on_activate.clone(),
            Self::Toggleable(toggle) => {
                if toggle.active {
                    return None;
                }
                toggle.active = true;
                toggle.item.on_activate.clone()
            }
            Self::Setting(setting) => {
                if setting.options.is_empty() {
                    return None;
                }
                setting.selected = (setting.selected + 1) % setting.options.len();
                let value = setting.options[setting.selected].value;
                Some((setting.on_change)(value))
            }
            Self::Divider | Self::Spacer | Self::Title(_) => None,
        }
    }
}

/// 子菜单状态
#[derive(Debug, Clone, Default)]
pub struct Submenu {
    pub exclusivity: Exclusivity,
    items: Vec<SubmenuItem>,
    /// 没有可选条目时为 `None`
    cursor: Option<usize>,
}

impl Submenu {
    pub fn new(exclusivity: Exclusivity) -> Self {
        Self {
            exclusivity,
            items: Vec::new(),
            cursor: None,
        }
    }

    pub fn items(&self) -> &[SubmenuItem] {
        &self.items
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// 条目是否应显示为选中（不可选条目永远不会被选中）
    pub fn is_selected(&self, index: usize) -> bool {
        self.cursor == Some(index)
            && self
                .items
                .get(index)
                .is_some_and(SubmenuItem::is_selectable)
    }

    /// 整体替换条目
    ///
    /// 光标仍指向可选条目时保持位置，否则回到第一个可选条目。
    pub fn set_items(&mut self, items: Vec<SubmenuItem>) {
        self.items = items;
        let still_valid = self
            .cursor
            .and_then(|cursor| self.items.get(cursor))
            .is_some_and(SubmenuItem::is_selectable);
        if !still_valid {
            self.reset_cursor();
        }
    }

    /// 光标移到第一个可选条目
    pub fn reset_cursor(&mut self) {
        self.cursor = self.items.iter().position(SubmenuItem::is_selectable);
    }

    /// 光标移到下一个可选条目，没有则不动
    pub fn cursor_down(&mut self) {
        let Some(cursor) = self.cursor else {
            return;
        };
        if let Some(offset) = self.items[cursor + 1..]
            .iter()
            .position(SubmenuItem::is_selectable)
        {
            self.cursor = Some(cursor + 1 + offset);
        }
    }

    /// 光标移到上一个可选条目，没有则不动
    pub fn cursor_up(&mut self) {
        let Some(cursor) = self.cursor else {
            return;
        };
        if let Some(index) = self.items[..cursor]
            .iter()
            .rposition(SubmenuItem::is_selectable)
        {
            self.cursor = Some(index);
        }
    }

    /// 激活光标处的条目，返回需要执行的命令
    pub fn activate(&mut self) -> Option<Command> {
        let cursor = self.cursor.filter(|&cursor| cursor < self.items.len())?;

        if self.exclusivity == Exclusivity::One {
            for item in &mut self.items {
                item.clear_active_flag();
            }
        }

        self.items[cursor].on_activate()
    }
}
