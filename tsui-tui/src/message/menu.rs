//! 菜单导航相关消息

/// 菜单消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMessage {
    /// 光标上移
    CursorUp,
    /// 光标下移
    CursorDown,
    /// 打开当前子菜单（子菜单已打开时忽略）
    Open,
    /// 关闭子菜单
    Close,
    /// 关闭子菜单；没有打开的子菜单时退出
    Back,
    /// 激活当前项
    Activate,
}
