//! 应用主状态结构

use std::collections::HashMap;
use std::time::Duration;

use tsui_core::{NodeId, State};

use super::{Appmenu, StatusState};

/// 轮询与界面选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    /// 主轮询间隔
    pub tick_interval: Duration,
    /// NoState 时的快速刷新延迟
    pub fast_tick_delay: Duration,
    /// ping 轮询间隔
    pub ping_interval: Duration,
    /// 是否显示 Linux 专属设置
    pub show_linux_settings: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(5),
            fast_tick_delay: Duration::from_millis(500),
            ping_interval: Duration::from_secs(5),
            show_linux_settings: cfg!(target_os = "linux"),
        }
    }
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 最近一次拉取的守护进程状态
    pub state: State,

    /// 菜单
    pub menu: Appmenu,

    /// 出口节点 ping 延迟，每轮整体替换
    pub pings: HashMap<NodeId, Duration>,

    /// 状态栏
    pub status: StatusState,

    /// 终端大小
    pub terminal_size: (u16, u16),

    /// 当前平台能否打开浏览器
    pub browser_supported: bool,

    /// 是否已有一个快速刷新在等待
    pub fast_tick_pending: bool,

    /// 当前用户不能修改偏好设置
    pub read_only: bool,

    /// 本程序版本
    pub tsui_version: &'static str,

    /// 发现的新版本
    pub latest_version: Option<String>,

    pub options: AppOptions,
}

impl App {
    /// 用首次拉取到的状态创建应用实例
    ///
    /// 菜单由 update 层在收到状态后构建，这里只放入空菜单。
    pub fn new(state: State, options: AppOptions, browser_supported: bool) -> Self {
        Self {
            should_quit: false,
            state,
            menu: Appmenu::new(),
            pings: HashMap::new(),
            status: StatusState::default(),
            terminal_size: (0, 0),
            browser_supported,
            fast_tick_pending: false,
            read_only: false,
            tsui_version: env!("CARGO_PKG_VERSION"),
            latest_version: None,
            options,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(State::default(), AppOptions::default(), false)
    }
}
