//! 状态投影服务
//!
//! 把守护进程的原始快照（状态、偏好设置、lock 状态）整理成界面直接使用的 [`State`]。

use std::sync::Arc;

use crate::error::DaemonResult;
use crate::traits::{CallContext, DaemonClient};
use crate::types::{
    BackendState, LockInfo, NodeId, PeerStatus, Preferences, StatusSnapshot, UserProfile,
};

/// 界面使用的守护进程状态
///
/// 每次轮询整体重建，不做局部修改（乐观更新出口节点除外）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    /// 偏好设置
    pub prefs: Option<Preferences>,
    /// 后端状态
    pub backend_state: BackendState,
    /// 守护进程版本，去掉了 `-` 之后的构建元数据
    pub version: String,
    /// 待完成的登录 URL
    pub auth_url: Option<String>,
    /// 当前登录用户
    pub user: Option<UserProfile>,
    /// 本机
    pub self_node: Option<PeerStatus>,
    /// tailnet lock 公钥，未启用时为 `None`
    pub lock_key: Option<String>,
    /// 本机是否被 tailnet lock 拒之门外
    pub is_locked_out: bool,
    /// 可用出口节点，按 [`peer_name`] 升序
    pub sorted_exit_nodes: Vec<PeerStatus>,
    /// 当前出口节点 ID
    pub current_exit_node: Option<NodeId>,
    /// 当前出口节点名称；不在 `sorted_exit_nodes` 中时为空
    pub current_exit_node_name: String,
    /// 所有对端的接收字节数之和
    pub rx_bytes: i64,
    /// 所有对端的发送字节数之和
    pub tx_bytes: i64,
}

impl State {
    /// 按 ID 查找出口节点
    pub fn exit_node(&self, id: &str) -> Option<&PeerStatus> {
        self.sorted_exit_nodes.iter().find(|peer| peer.id == id)
    }

    /// 本机的完整域名，去掉结尾的 `.`
    pub fn self_dns_name(&self) -> Option<&str> {
        self.self_node
            .as_ref()
            .map(|node| node.dns_name.trim_end_matches('.'))
    }

    /// 登录用户名，未知时为 `None`
    pub fn login_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|user| user.login_name.as_str())
            .filter(|name| !name.is_empty())
    }
}

/// 节点的简短名称，如 `foobar-router-2`
///
/// 取 DNS 名称第一个 `.` 之前的部分；DNS 名称为空时退回主机名。
pub fn peer_name(peer: &PeerStatus) -> &str {
    if peer.dns_name.is_empty() {
        return &peer.host_name;
    }
    peer.dns_name
        .split_once('.')
        .map_or(peer.dns_name.as_str(), |(label, _)| label)
}

/// 把原始快照投影为 [`State`]
///
/// 纯函数，不会失败：缺失的输入得到空值或默认值。
pub fn project(
    status: Option<&StatusSnapshot>,
    prefs: Option<&Preferences>,
    lock: Option<&LockInfo>,
) -> State {
    let Some(status) = status else {
        return State::default();
    };

    let version = status
        .version
        .split_once('-')
        .map_or(status.version.as_str(), |(prefix, _)| prefix)
        .to_string();

    let mut state = State {
        prefs: prefs.cloned(),
        backend_state: status.backend_state,
        version,
        auth_url: Some(status.auth_url.clone()).filter(|url| !url.is_empty()),
        self_node: status.self_node.clone(),
        sorted_exit_nodes: sorted_exit_nodes(status),
        ..State::default()
    };

    // peer 为 BTreeMap，遍历顺序确定
    for peer in status.peer.values() {
        state.rx_bytes += peer.rx_bytes;
        state.tx_bytes += peer.tx_bytes;
    }

    if let Some(self_node) = &status.self_node {
        state.user = status.user_profile(self_node.user_id).cloned();
    }

    if let Some(lock) = lock {
        if lock.enabled && lock.node_key.is_some() && !lock.has_zero_public_key() {
            state.lock_key = Some(lock.public_key.clone());
            state.is_locked_out = !lock.node_key_signed && state.backend_state.is_running();
        }
    }

    if let Some(exit_node) = &status.exit_node_status {
        state.current_exit_node_name = state
            .exit_node(&exit_node.id)
            .map(|peer| peer_name(peer).to_string())
            .unwrap_or_default();
        state.current_exit_node = Some(exit_node.id.clone());
    }

    state
}

fn sorted_exit_nodes(status: &StatusSnapshot) -> Vec<PeerStatus> {
    let mut nodes: Vec<PeerStatus> = status
        .peer
        .values()
        .filter(|peer| peer.exit_node_option)
        .cloned()
        .collect();
    nodes.sort_by(|a, b| peer_name(a).cmp(peer_name(b)));
    nodes
}

/// 状态服务：拉取三份快照并投影
pub struct StateService {
    client: Arc<dyn DaemonClient>,
}

impl StateService {
    #[must_use]
    pub fn new(client: Arc<dyn DaemonClient>) -> Self {
        Self { client }
    }

    /// 拉取最新状态
    ///
    /// 任一请求失败都返回错误，调用方据此决定是退出还是显示错误信息。
    pub async fn fetch_state(&self, ctx: &CallContext) -> DaemonResult<State> {
        let status = self.client.get_status(ctx).await?;
        let prefs = self.client.get_preferences(ctx).await?;
        let lock = self.client.get_lock_status(ctx).await?;

        log::debug!(
            "Fetched daemon state: backend={}, peers={}",
            status.backend_state,
            status.peer.len()
        );

        Ok(project(Some(&status), Some(&prefs), Some(&lock)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{exit_peer, running_status, MockDaemonClient};
    use crate::types::ExitNodeStatus;
    use crate::DaemonError;

    #[test]
    fn absent_inputs_project_to_empty_state() {
        let state = project(None, None, None);
        assert_eq!(state, State::default());
        assert_eq!(state.backend_state, BackendState::NoState);

        let empty = StatusSnapshot::default();
        let state = project(Some(&empty), None, None);
        assert!(state.sorted_exit_nodes.is_empty());
        assert!(state.user.is_none());
        assert!(state.lock_key.is_none());
        assert_eq!(state.rx_bytes, 0);
    }

    #[test]
    fn prefs_are_ignored_without_status() {
        let state = project(None, Some(&Preferences::default()), Some(&LockInfo::default()));
        assert!(state.prefs.is_none());
    }

    #[test]
    fn version_is_truncated_at_first_dash() {
        let mut status = running_status(vec![]);
        status.version = "1.70.0-t1234-gabcdef".to_string();
        assert_eq!(project(Some(&status), None, None).version, "1.70.0");

        status.version = "1.70.0".to_string();
        assert_eq!(project(Some(&status), None, None).version, "1.70.0");
    }

    #[test]
    fn exit_nodes_are_filtered_and_sorted_by_name() {
        let mut not_exit = exit_peer("nX", "aaa", true);
        not_exit.exit_node_option = false;
        let status = running_status(vec![
            exit_peer("n3", "charlie", true),
            exit_peer("n1", "alpha", false),
            not_exit,
            exit_peer("n2", "bravo", true),
        ]);

        let state = project(Some(&status), None, None);
        let names: Vec<&str> = state.sorted_exit_nodes.iter().map(peer_name).collect();
        assert_eq!(names, vec!["alpha", "bravo", "charlie"]);

        // 重复投影得到相同顺序
        let again = project(Some(&status), None, None);
        assert_eq!(again.sorted_exit_nodes, state.sorted_exit_nodes);
    }

    #[test]
    fn duplicate_names_keep_key_order() {
        let status = running_status(vec![
            exit_peer("n1", "same", true),
            exit_peer("n2", "same", true),
        ]);
        let state = project(Some(&status), None, None);
        let ids: Vec<&str> = state.sorted_exit_nodes.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n2"]);
    }

    #[test]
    fn peer_name_falls_back_to_host_name() {
        let mut peer = PeerStatus {
            host_name: "desktop".to_string(),
            ..PeerStatus::default()
        };
        assert_eq!(peer_name(&peer), "desktop");

        peer.dns_name = "box.tail.ts.net.".to_string();
        assert_eq!(peer_name(&peer), "box");

        peer.dns_name = "nodots".to_string();
        assert_eq!(peer_name(&peer), "nodots");
    }

    #[test]
    fn traffic_is_summed_across_all_peers() {
        let mut a = exit_peer("n1", "alpha", true);
        a.rx_bytes = 100;
        a.tx_bytes = 1;
        let mut b = exit_peer("n2", "bravo", true);
        b.exit_node_option = false;
        b.rx_bytes = 50;
        b.tx_bytes = 2;

        let state = project(Some(&running_status(vec![a, b])), None, None);
        assert_eq!(state.rx_bytes, 150);
        assert_eq!(state.tx_bytes, 3);
    }

    #[test]
    fn current_exit_node_is_resolved_by_id() {
        let mut status = running_status(vec![exit_peer("n1", "alpha", true)]);
        status.exit_node_status = Some(ExitNodeStatus {
            id: "n1".to_string(),
            online: true,
        });
        let state = project(Some(&status), None, None);
        assert_eq!(state.current_exit_node.as_deref(), Some("n1"));
        assert_eq!(state.current_exit_node_name, "alpha");
    }

    #[test]
    fn unknown_exit_node_has_empty_name() {
        let mut status = running_status(vec![exit_peer("n1", "alpha", true)]);
        status.exit_node_status = Some(ExitNodeStatus {
            id: "gone".to_string(),
            online: false,
        });
        let state = project(Some(&status), None, None);
        assert_eq!(state.current_exit_node.as_deref(), Some("gone"));
        assert!(state.current_exit_node_name.is_empty());
    }

    #[test]
    fn user_is_looked_up_by_self_user_id() {
        let status = running_status(vec![]);
        let state = project(Some(&status), None, None);
        assert_eq!(state.login_name(), Some("me@example.com"));
        assert_eq!(state.self_dns_name(), Some("laptop.tail1234.ts.net"));

        let mut missing = status;
        if let Some(node) = missing.self_node.as_mut() {
            node.user_id = 999;
        }
        assert!(project(Some(&missing), None, None).user.is_none());
    }

    #[test]
    fn empty_auth_url_is_none() {
        let mut status = running_status(vec![]);
        assert!(project(Some(&status), None, None).auth_url.is_none());

        status.auth_url = "https://login.example.com/a/1".to_string();
        assert_eq!(
            project(Some(&status), None, None).auth_url.as_deref(),
            Some("https://login.example.com/a/1")
        );
    }

    #[test]
    fn lockout_truth_table() {
        for bits in 0u8..16 {
            let enabled = bits & 1 != 0;
            let has_node_key = bits & 2 != 0;
            let signed = bits & 4 != 0;
            let running = bits & 8 != 0;

            for non_zero_key in [true, false] {
                let lock = LockInfo {
                    enabled,
                    public_key: if non_zero_key {
                        "tlpub:1234abcd".to_string()
                    } else {
                        "tlpub:0000".to_string()
                    },
                    node_key: has_node_key.then(|| "nodekey:1".to_string()),
                    node_key_signed: signed,
                };
                let mut status = running_status(vec![]);
                if !running {
                    status.backend_state = BackendState::Stopped;
                }

                let state = project(Some(&status), None, Some(&lock));
                let lock_active = enabled && has_node_key && non_zero_key;

                assert_eq!(
                    state.lock_key.is_some(),
                    lock_active,
                    "lock_key for bits={bits:04b} non_zero={non_zero_key}"
                );
                assert_eq!(
                    state.is_locked_out,
                    lock_active && !signed && running,
                    "is_locked_out for bits={bits:04b} non_zero={non_zero_key}"
                );
            }
        }
    }

    #[tokio::test]
    async fn fetch_state_projects_client_snapshots() {
        let client = Arc::new(MockDaemonClient::new());
        client
            .set_status(running_status(vec![exit_peer("n1", "alpha", true)]))
            .await;

        let svc = StateService::new(client.clone());
        let state = svc.fetch_state(&CallContext::default()).await.unwrap();

        assert!(state.backend_state.is_running());
        assert_eq!(state.sorted_exit_nodes.len(), 1);
        assert!(state.prefs.is_some());
    }

    #[tokio::test]
    async fn fetch_state_propagates_errors() {
        let client = Arc::new(MockDaemonClient::new());
        client.set_error(Some(DaemonError::Timeout)).await;

        let svc = StateService::new(client);
        let result = svc.fetch_state(&CallContext::default()).await;
        assert_eq!(result.unwrap_err(), DaemonError::Timeout);
    }
}
