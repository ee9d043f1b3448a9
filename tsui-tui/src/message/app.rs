//! 应用主消息枚举

use std::collections::HashMap;
use std::time::Duration;

use tsui_core::{NodeId, State};

use super::{MenuMessage, Notice};

/// 应用主消息
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 菜单导航
    Menu(MenuMessage),

    /// 连接 / 断开 / 登录（`.` 键）
    TogglePower,

    /// 主轮询定时器
    Tick,

    /// NoState 时的快速刷新
    FastTick,

    /// ping 定时器
    PingTick,

    /// 状态刷新成功
    StateLoaded(Box<State>),

    /// 状态刷新失败
    StateFailed(String),

    /// 一轮 ping 的结果，整体替换旧结果
    PingResults(HashMap<NodeId, Duration>),

    /// 用户命令执行成功，需要立即刷新状态
    CommandSucceeded { notice: Option<Notice> },

    /// 用户命令执行失败，显示错误并立即刷新状态
    CommandFailed { error: String },

    /// 显示状态栏消息
    Status(Notice),

    /// 状态栏消息到期，携带创建时的代数
    StatusExpired(u64),

    /// 发现新版本
    UpdateAvailable(String),

    /// 当前用户不能修改偏好设置
    ReadOnly,

    /// 终端大小变化
    Resize(u16, u16),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
