//! 界面组件

pub mod banner;
pub mod header;
pub mod menu;
pub mod statusbar;
