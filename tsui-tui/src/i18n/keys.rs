//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **子菜单内容归对应菜单**：如 `device.*`, `settings.*`
//! 3. **状态栏消息归 `status.*`**：复制成功、操作提示等
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//!
//! 需要插入变量的文本拆成前缀 / 后缀两段，在调用处用 `format!` 拼接。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 顶部信息区
    pub header: HeaderTexts,
    /// 未连接时的提示横幅
    pub banner: BannerTexts,
    /// 主菜单
    pub menu: MenuTexts,
    /// 本机信息子菜单
    pub device: DeviceTexts,
    /// 出口节点子菜单
    pub exit_nodes: ExitNodeTexts,
    /// 设置子菜单
    pub settings: SettingsTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 时间长度单位
    pub duration: DurationTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    // 是/否
    pub yes: &'static str,
    pub no: &'static str,
    // 状态栏前缀
    pub error_prefix: &'static str,
    pub tip_prefix: &'static str,
}

// ============================================================================
// 顶部信息区
// ============================================================================

pub struct HeaderTexts {
    pub status_label: &'static str,
    pub needs_login: &'static str,
    pub needs_machine_auth: &'static str,
    pub starting: &'static str,
    pub connected: &'static str,
    pub exit_node_suffix: &'static str,
    pub not_connected: &'static str,
    pub press_to_disconnect: &'static str,
    pub traffic: &'static str,
    pub tsui_version: &'static str,
    pub tailscale_version: &'static str,
    pub version_unknown: &'static str,
    pub locked_out_title: &'static str,
    pub locked_out_body: &'static str,
}

// ============================================================================
// 横幅
// ============================================================================

pub struct BannerTexts {
    pub machine_auth_prefix: &'static str,
    pub machine_auth_suffix: &'static str,
    pub login_required: &'static str,
    pub login_body: &'static str,
    pub login_url_prefix: &'static str,
    pub press_to_open_browser: &'static str,
    pub press_to_authenticate: &'static str,
    pub daemon_not_running: &'static str,
    pub starting: &'static str,
    pub reauth_required: &'static str,
    pub reauth_hint: &'static str,
}

// ============================================================================
// 菜单
// ============================================================================

/// 主菜单左侧标签
pub struct MenuTexts {
    pub device_info: &'static str,
    pub exit_nodes: &'static str,
    pub settings: &'static str,
    pub placeholder: &'static str,
}

/// 本机信息子菜单
pub struct DeviceTexts {
    pub name: &'static str,
    pub ips: &'static str,
    pub debug_info: &'static str,
    pub id_prefix: &'static str,
    pub tailnet_lock: &'static str,
    pub lock_online: &'static str,
    pub lock_locked_out: &'static str,
    pub disconnect: &'static str,
}

/// 出口节点子菜单
pub struct ExitNodeTexts {
    pub none: &'static str,
    pub offline: &'static str,
    pub unknown_latency: &'static str,
}

/// 设置子菜单
pub struct SettingsTexts {
    pub general: &'static str,
    pub allow_incoming: &'static str,
    pub use_subnet_routes: &'static str,
    pub use_dns: &'static str,
    pub exit_nodes: &'static str,
    pub allow_lan_access: &'static str,
    pub advertise_exit_node: &'static str,
    pub exit_node_option: &'static str,
    pub account: &'static str,
    pub key_expires_prefix: &'static str,
    pub reauthenticate: &'static str,
    pub reauthenticate_now: &'static str,
    pub log_out: &'static str,
    pub advanced_linux: &'static str,
    pub netfilter_mode: &'static str,
    pub netfilter_on: &'static str,
    pub netfilter_no_divert: &'static str,
    pub netfilter_off: &'static str,
    pub stateful_filtering: &'static str,
}

// ============================================================================
// 状态栏消息
// ============================================================================

pub struct StatusTexts {
    pub copied_domain: &'static str,
    pub copied_ipv4: &'static str,
    pub copied_ipv6: &'static str,
    pub copied_node_id: &'static str,
    pub copied_node_key: &'static str,
    pub copied_lock_key: &'static str,
    pub disconnect_tip: &'static str,
    pub starting_login: &'static str,
    pub starting_reauth: &'static str,
    pub logged_out: &'static str,
    pub update_prefix: &'static str,
    pub update_suffix: &'static str,
    pub read_only: &'static str,
    pub browser_unsupported: &'static str,
}

/// 时间长度单位
pub struct DurationTexts {
    pub months: &'static str,
    pub days: &'static str,
    pub hours: &'static str,
    pub minutes: &'static str,
}
