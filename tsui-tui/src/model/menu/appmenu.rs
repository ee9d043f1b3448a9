//! 主菜单状态定义

use super::submenu::Submenu;
use crate::command::Command;

/// 主菜单项标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    /// 本机信息
    DeviceInfo,
    /// 出口节点
    ExitNodes,
    /// 设置
    Settings,
}

impl MenuId {
    /// 主菜单中的固定顺序
    pub const ALL: [MenuId; 3] = [MenuId::DeviceInfo, MenuId::ExitNodes, MenuId::Settings];
}

/// 主菜单项：左侧标签、右侧摘要和一个子菜单
#[derive(Debug, Clone)]
pub struct AppmenuItem {
    pub id: MenuId,
    pub left_label: String,
    pub right_label: String,
    pub submenu: Submenu,
}

impl AppmenuItem {
    pub fn new(id: MenuId, left_label: impl Into<String>, submenu: Submenu) -> Self {
        Self {
            id,
            left_label: left_label.into(),
            right_label: String::new(),
            submenu,
        }
    }
}

/// 主菜单状态
///
/// 子菜单打开时，光标移动和激活都交给当前项的子菜单处理。
#[derive(Debug, Clone, Default)]
pub struct Appmenu {
    items: Vec<AppmenuItem>,
    cursor: usize,
    is_open: bool,
    /// 没有菜单项时显示的文字
    pub placeholder: String,
}

impl Appmenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[AppmenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_submenu_open(&self) -> bool {
        self.is_open
    }

    /// 光标处的菜单项
    pub fn current(&self) -> Option<&AppmenuItem> {
        self.items.get(self.cursor)
    }

    fn current_mut(&mut self) -> Option<&mut AppmenuItem> {
        self.items.get_mut(self.cursor)
    }

    /// 按标识查找菜单项，用于原地刷新子菜单
    pub fn item_mut(&mut self, id: MenuId) -> Option<&mut AppmenuItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// 整体替换菜单项；光标越界时收回到最后一项
    pub fn set_items(&mut self, items: Vec<AppmenuItem>) {
        self.items = items;
        if self.items.is_empty() {
            self.cursor = 0;
            self.is_open = false;
        } else if self.cursor >= self.items.len() {
            self.cursor = self.items.len() - 1;
        }
    }

    pub fn cursor_down(&mut self) {
        if self.is_open {
            if let Some(item) = self.current_mut() {
                item.submenu.cursor_down();
            }
        } else if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        if self.is_open {
            if let Some(item) = self.current_mut() {
                item.submenu.cursor_up();
            }
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    /// 子菜单关闭时打开它，已打开时激活子菜单光标处的条目
    pub fn activate(&mut self) -> Option<Command> {
        if self.is_open {
            return self.current_mut()?.submenu.activate();
        }

        let item = self.current_mut()?;
        item.submenu.reset_cursor();
        self.is_open = true;
        None
    }

    pub fn close_submenu(&mut self) {
        self.is_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::menu::{Exclusivity, LabeledItem, SubmenuItem};

    fn submenu(labels: &[&str]) -> Submenu {
        let mut submenu = Submenu::new(Exclusivity::None);
        submenu.set_items(
            labels
                .iter()
                .map(|label| SubmenuItem::labeled(LabeledItem::new(*label).action(Command::RefreshState)))
                .collect(),
        );
        submenu
    }

    fn appmenu() -> Appmenu {
        let mut menu = Appmenu::new();
        menu.set_items(
            MenuId::ALL
                .iter()
                .map(|id| AppmenuItem::new(*id, format!("{id:?}"), submenu(&["a", "b"])))
                .collect(),
        );
        menu
    }

    #[test]
    fn empty_menu_is_safe() {
        let mut menu = Appmenu::new();
        menu.cursor_down();
        menu.cursor_up();
        assert_eq!(menu.activate(), None);
        menu.close_submenu();

        assert!(!menu.is_submenu_open());
        assert!(menu.current().is_none());
        assert_eq!(menu.cursor(), 0);
    }

    #[test]
    fn emptying_menu_closes_submenu() {
        let mut menu = appmenu();
        menu.cursor_down();
        menu.activate();
        assert!(menu.is_submenu_open());

        menu.set_items(vec![]);
        assert!(!menu.is_submenu_open());
        assert_eq!(menu.cursor(), 0);
        assert_eq!(menu.activate(), None);
    }

    #[test]
    fn cursor_is_clamped_without_wrapping() {
        let mut menu = appmenu();
        for _ in 0..5 {
            menu.cursor_down();
        }
        assert_eq!(menu.cursor(), 2);
        for _ in 0..5 {
            menu.cursor_up();
        }
        assert_eq!(menu.cursor(), 0);
    }

    #[test]
    fn shrinking_items_clamps_cursor() {
        let mut menu = appmenu();
        menu.cursor_down();
        menu.cursor_down();
        menu.set_items(vec![AppmenuItem::new(MenuId::DeviceInfo, "x", submenu(&["a"]))]);
        assert_eq!(menu.cursor(), 0);
        assert_eq!(menu.current().map(|item| item.id), Some(MenuId::DeviceInfo));
    }

    #[test]
    fn open_submenu_receives_navigation_and_activation() {
        let mut menu = appmenu();
        menu.cursor_down();

        // 第一次激活只打开子菜单
        assert_eq!(menu.activate(), None);
        assert!(menu.is_submenu_open());

        menu.cursor_down();
        assert_eq!(menu.cursor(), 1);
        let current = menu.current().map(|item| item.submenu.cursor());
        assert_eq!(current, Some(Some(1)));

        assert_eq!(menu.activate(), Some(Command::RefreshState));

        menu.close_submenu();
        menu.cursor_down();
        assert_eq!(menu.cursor(), 2);
    }

    #[test]
    fn opening_resets_submenu_cursor() {
        let mut menu = appmenu();
        menu.activate();
        menu.cursor_down();
        menu.close_submenu();

        menu.activate();
        let current = menu.current().map(|item| item.submenu.cursor());
        assert_eq!(current, Some(Some(0)));
    }

    #[test]
    fn item_mut_finds_by_id() {
        let mut menu = appmenu();
        if let Some(item) = menu.item_mut(MenuId::ExitNodes) {
            item.right_label = "exit-1".to_string();
        }
        assert_eq!(menu.items()[1].right_label, "exit-1");
    }
}
