//! Command：Update 层返回的副作用描述
//!
//! Update 层本身不做 I/O，只返回 `Vec<Command>`；
//! 由 `backend::Executor` 为每个 Command 启动一个 tokio 任务执行，
//! 结果再以 `AppMessage` 的形式回到事件队列。

use std::net::IpAddr;
use std::time::Duration;

use tsui_core::{NodeId, PrefsEdit};

use crate::message::{AppMessage, Notice};

/// 对守护进程的写操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaemonAction {
    /// 设置出口节点，`None` 为清除
    SetExitNode(Option<NodeId>),
    /// 修改偏好设置
    EditPrefs(PrefsEdit),
    /// 连接
    Start,
    /// 断开
    Stop,
    /// 开始交互式登录（也用于重新认证）
    StartLogin,
    /// 登出
    Logout,
}

/// 副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 拉取最新状态
    RefreshState,

    /// 延迟后投递一条消息（定时器、状态栏过期）
    Schedule {
        after: Duration,
        message: Box<AppMessage>,
    },

    /// 对出口节点逐个 ping，每个 ping 单独限时
    PingPeers(Vec<(NodeId, IpAddr)>),

    /// 执行守护进程写操作；成功后显示 `notice`（如有）并刷新
    Daemon {
        action: DaemonAction,
        notice: Option<Notice>,
    },

    /// 复制到剪贴板，成功后显示 `notice`
    Copy { text: String, notice: String },

    /// 在浏览器中打开 URL
    OpenBrowser(String),

    /// 检查新版本
    CheckForUpdate,

    /// 检查当前用户是否可以修改偏好设置
    CheckEditPermission,
}

impl Command {
    pub fn schedule(after: Duration, message: AppMessage) -> Self {
        Self::Schedule {
            after,
            message: Box::new(message),
        }
    }

    /// 不带提示的守护进程操作
    pub fn daemon(action: DaemonAction) -> Self {
        Self::Daemon {
            action,
            notice: None,
        }
    }

    pub fn edit_prefs(edit: PrefsEdit) -> Self {
        Self::daemon(DaemonAction::EditPrefs(edit))
    }
}
