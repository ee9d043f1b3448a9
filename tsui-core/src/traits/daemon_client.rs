//! 守护进程客户端抽象 Trait

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::DaemonResult;
use crate::types::{LockInfo, NodeId, Preferences, PrefsEdit, StatusSnapshot};

/// 单次调用的上下文，由调用方持有
///
/// 每个守护进程调用都必须显式传入，不存在进程级的全局上下文。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    /// 整个调用（连接 + 请求 + 读取响应）的超时
    pub timeout: Duration,
}

impl CallContext {
    /// 状态刷新和用户命令的默认超时
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for CallContext {
    fn default() -> Self {
        Self::with_timeout(Self::DEFAULT_TIMEOUT)
    }
}

/// 守护进程客户端 Trait
///
/// 实现:
/// - `LocalApiClient`: 通过 Unix socket 访问 tailscaled 的 LocalAPI
/// - `MockDaemonClient`: 测试用内存实现（`test-utils` feature）
///
/// 实现必须可重入：状态刷新、命令和 ping 可能并发进行。
#[async_trait]
pub trait DaemonClient: Send + Sync {
    /// 获取守护进程状态
    async fn get_status(&self, ctx: &CallContext) -> DaemonResult<StatusSnapshot>;

    /// 获取偏好设置
    async fn get_preferences(&self, ctx: &CallContext) -> DaemonResult<Preferences>;

    /// 获取 tailnet lock 状态
    async fn get_lock_status(&self, ctx: &CallContext) -> DaemonResult<LockInfo>;

    /// 设置出口节点
    ///
    /// # Arguments
    /// * `node` - 出口节点 ID，`None` 表示清除
    async fn set_exit_node(&self, node: Option<&NodeId>, ctx: &CallContext) -> DaemonResult<()>;

    /// 部分修改偏好设置，返回修改后的完整设置
    async fn edit_preferences(
        &self,
        edit: &PrefsEdit,
        ctx: &CallContext,
    ) -> DaemonResult<Preferences>;

    /// 连接（WantRunning = true）
    async fn start(&self, ctx: &CallContext) -> DaemonResult<()>;

    /// 断开（WantRunning = false）
    async fn stop(&self, ctx: &CallContext) -> DaemonResult<()>;

    /// 开始交互式登录；登录 URL 随后出现在状态的 `AuthURL` 中
    async fn start_login_interactive(&self, ctx: &CallContext) -> DaemonResult<()>;

    /// 登出
    async fn logout(&self, ctx: &CallContext) -> DaemonResult<()>;

    /// 对节点做一次 disco ping，返回往返时间
    async fn ping_peer(&self, ip: IpAddr, ctx: &CallContext) -> DaemonResult<Duration>;

    /// 当前系统用户是否有权限修改偏好设置
    async fn can_edit_preferences(&self, ctx: &CallContext) -> bool;
}
