//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{BTreeMap, HashMap};
use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{DaemonError, DaemonResult};
use crate::traits::{CallContext, DaemonClient};
use crate::types::{
    BackendState, LockInfo, NodeId, PeerStatus, Preferences, PrefsEdit, StatusSnapshot,
    UserProfile,
};

// ===== MockDaemonClient =====

/// 记录下来的写操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaemonCall {
    SetExitNode(Option<NodeId>),
    EditPreferences(PrefsEdit),
    Start,
    Stop,
    StartLoginInteractive,
    Logout,
    Ping(IpAddr),
}

pub struct MockDaemonClient {
    status: RwLock<StatusSnapshot>,
    prefs: RwLock<Preferences>,
    lock: RwLock<LockInfo>,
    pings: RwLock<HashMap<IpAddr, Duration>>,
    /// ping 回复前的等待时间
    ping_delays: RwLock<HashMap<IpAddr, Duration>>,
    can_edit: RwLock<bool>,
    /// 如果 Some，所有调用返回此错误
    error: RwLock<Option<DaemonError>>,
    calls: RwLock<Vec<DaemonCall>>,
}

impl MockDaemonClient {
    pub fn new() -> Self {
        Self {
            status: RwLock::new(StatusSnapshot::default()),
            prefs: RwLock::new(Preferences::default()),
            lock: RwLock::new(LockInfo::default()),
            pings: RwLock::new(HashMap::new()),
            ping_delays: RwLock::new(HashMap::new()),
            can_edit: RwLock::new(true),
            error: RwLock::new(None),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_status(&self, status: StatusSnapshot) {
        *self.status.write().await = status;
    }

    pub async fn set_prefs(&self, prefs: Preferences) {
        *self.prefs.write().await = prefs;
    }

    pub async fn set_lock(&self, lock: LockInfo) {
        *self.lock.write().await = lock;
    }

    pub async fn set_ping(&self, ip: IpAddr, latency: Duration) {
        self.pings.write().await.insert(ip, latency);
    }

    /// 让发往 `ip` 的 ping 在 `delay` 之后才回复
    pub async fn set_ping_delay(&self, ip: IpAddr, delay: Duration) {
        self.ping_delays.write().await.insert(ip, delay);
    }

    pub async fn set_can_edit(&self, can_edit: bool) {
        *self.can_edit.write().await = can_edit;
    }

    pub async fn set_error(&self, err: Option<DaemonError>) {
        *self.error.write().await = err;
    }

    /// 已记录的写操作
    pub async fn calls(&self) -> Vec<DaemonCall> {
        self.calls.read().await.clone()
    }

    async fn check(&self) -> DaemonResult<()> {
        match self.error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn record(&self, call: DaemonCall) -> DaemonResult<()> {
        self.calls.write().await.push(call);
        self.check().await
    }
}

impl Default for MockDaemonClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DaemonClient for MockDaemonClient {
    async fn get_status(&self, _ctx: &CallContext) -> DaemonResult<StatusSnapshot> {
        self.check().await?;
        Ok(self.status.read().await.clone())
    }

    async fn get_preferences(&self, _ctx: &CallContext) -> DaemonResult<Preferences> {
        self.check().await?;
        Ok(self.prefs.read().await.clone())
    }

    async fn get_lock_status(&self, _ctx: &CallContext) -> DaemonResult<LockInfo> {
        self.check().await?;
        Ok(self.lock.read().await.clone())
    }

    async fn set_exit_node(&self, node: Option<&NodeId>, _ctx: &CallContext) -> DaemonResult<()> {
        self.record(DaemonCall::SetExitNode(node.cloned())).await
    }

    async fn edit_preferences(
        &self,
        edit: &PrefsEdit,
        _ctx: &CallContext,
    ) -> DaemonResult<Preferences> {
        self.record(DaemonCall::EditPreferences(edit.clone()))
            .await?;
        Ok(self.prefs.read().await.clone())
    }

    async fn start(&self, _ctx: &CallContext) -> DaemonResult<()> {
        self.record(DaemonCall::Start).await
    }

    async fn stop(&self, _ctx: &CallContext) -> DaemonResult<()> {
        self.record(DaemonCall::Stop).await
    }

    async fn start_login_interactive(&self, _ctx: &CallContext) -> DaemonResult<()> {
        self.record(DaemonCall::StartLoginInteractive).await
    }

    async fn logout(&self, _ctx: &CallContext) -> DaemonResult<()> {
        self.record(DaemonCall::Logout).await
    }

    async fn ping_peer(&self, ip: IpAddr, _ctx: &CallContext) -> DaemonResult<Duration> {
        self.record(DaemonCall::Ping(ip)).await?;
        let delay = self.ping_delays.read().await.get(&ip).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.pings
            .read()
            .await
            .get(&ip)
            .copied()
            .ok_or_else(|| DaemonError::Daemon(format!("no reply from {ip}")))
    }

    async fn can_edit_preferences(&self, _ctx: &CallContext) -> bool {
        *self.can_edit.read().await
    }
}

// ===== 工厂方法 =====

/// 创建一个可作为出口节点的对端，DNS 名称为 `<name>.tail1234.ts.net.`
pub fn exit_peer(id: &str, name: &str, online: bool) -> PeerStatus {
    let index = id.bytes().map(u32::from).sum::<u32>() % 250 + 2;
    PeerStatus {
        id: id.to_string(),
        public_key: format!("nodekey:{id}"),
        host_name: name.to_string(),
        dns_name: format!("{name}.tail1234.ts.net."),
        os: "linux".to_string(),
        tailscale_ips: vec![IpAddr::from([100, 64, 0, index as u8])],
        exit_node_option: true,
        online,
        ..PeerStatus::default()
    }
}

/// 创建 Running 状态的快照，对端以 `nodekey:<id>` 为键
pub fn running_status(peers: Vec<PeerStatus>) -> StatusSnapshot {
    let self_node = PeerStatus {
        id: "nSELF".to_string(),
        public_key: "nodekey:self".to_string(),
        host_name: "laptop".to_string(),
        dns_name: "laptop.tail1234.ts.net.".to_string(),
        os: "linux".to_string(),
        user_id: 42,
        tailscale_ips: vec![
            IpAddr::from([100, 64, 0, 1]),
            "fd7a:115c:a1e0::1".parse().unwrap_or(IpAddr::from([0u8; 16])),
        ],
        ..PeerStatus::default()
    };

    let mut user = BTreeMap::new();
    user.insert(
        "42".to_string(),
        UserProfile {
            id: 42,
            login_name: "me@example.com".to_string(),
            display_name: "Me".to_string(),
        },
    );

    StatusSnapshot {
        version: "1.70.0-t1234abcd".to_string(),
        backend_state: BackendState::Running,
        auth_url: String::new(),
        self_node: Some(self_node),
        peer: peers
            .into_iter()
            .map(|peer| (format!("nodekey:{}", peer.id), peer))
            .collect(),
        user,
        exit_node_status: None,
    }
}
