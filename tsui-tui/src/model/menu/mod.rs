//! 菜单状态
//!
//! 主菜单（Appmenu）包含固定的三项，每项带一个子菜单（Submenu）。

mod appmenu;
mod submenu;

pub use appmenu::{Appmenu, AppmenuItem, MenuId};
pub use submenu::{
    Exclusivity, ItemVariant, LabeledItem, SettingItem, SettingOption, Submenu,
    SubmenuItem, ToggleableItem, NO, YES,
};
