//! 守护进程状态相关类型定义
//!
//! 对应 LocalAPI `GET /localapi/v0/status` 返回值的子集。

use std::collections::BTreeMap;
use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::utils::{datetime, json::null_as_default};

/// 节点的稳定 ID（tailcfg.StableNodeID）
pub type NodeId = String;

/// 守护进程的后端状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum BackendState {
    /// 尚无状态（守护进程刚启动或不可用）
    #[default]
    NoState,
    /// 需要登录
    NeedsLogin,
    /// 需要管理员批准本机
    NeedsMachineAuth,
    /// 已停止
    Stopped,
    /// 启动中
    Starting,
    /// 已连接
    Running,
}

impl BackendState {
    /// 解析守护进程上报的状态字符串，未知值视为 `NoState`
    pub fn parse(s: &str) -> Self {
        match s {
            "NeedsLogin" => Self::NeedsLogin,
            "NeedsMachineAuth" => Self::NeedsMachineAuth,
            "Stopped" => Self::Stopped,
            "Starting" => Self::Starting,
            "Running" => Self::Running,
            _ => Self::NoState,
        }
    }

    /// 守护进程使用的字符串形式
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoState => "NoState",
            Self::NeedsLogin => "NeedsLogin",
            Self::NeedsMachineAuth => "NeedsMachineAuth",
            Self::Stopped => "Stopped",
            Self::Starting => "Starting",
            Self::Running => "Running",
        }
    }

    /// 是否已连接
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

impl From<String> for BackendState {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl std::fmt::Display for BackendState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 节点（本机或对端）状态
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PeerStatus {
    /// 稳定节点 ID
    #[serde(rename = "ID", default)]
    pub id: NodeId,
    /// 节点公钥（`nodekey:...`）
    #[serde(default)]
    pub public_key: String,
    /// 主机名
    #[serde(default)]
    pub host_name: String,
    /// MagicDNS 全名，带结尾的 `.`
    #[serde(rename = "DNSName", default)]
    pub dns_name: String,
    /// 操作系统
    #[serde(rename = "OS", default)]
    pub os: String,
    /// 所属用户 ID
    #[serde(rename = "UserID", default)]
    pub user_id: i64,
    /// 分配的 Tailscale 地址，第一个为 IPv4
    #[serde(rename = "TailscaleIPs", default, deserialize_with = "null_as_default")]
    pub tailscale_ips: Vec<IpAddr>,
    /// 是否为当前正在使用的出口节点
    #[serde(default)]
    pub exit_node: bool,
    /// 是否可以作为出口节点
    #[serde(default)]
    pub exit_node_option: bool,
    /// 是否在线
    #[serde(default)]
    pub online: bool,
    /// 接收字节数
    #[serde(default)]
    pub rx_bytes: i64,
    /// 发送字节数
    #[serde(default)]
    pub tx_bytes: i64,
    /// 节点密钥过期时间
    #[serde(default, deserialize_with = "datetime::deserialize_optional")]
    pub key_expiry: Option<DateTime<Utc>>,
}

/// 用户资料
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserProfile {
    #[serde(rename = "ID", default)]
    pub id: i64,
    #[serde(default)]
    pub login_name: String,
    #[serde(default)]
    pub display_name: String,
}

/// 当前出口节点状态
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExitNodeStatus {
    #[serde(rename = "ID", default)]
    pub id: NodeId,
    #[serde(default)]
    pub online: bool,
}

/// 守护进程状态快照
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusSnapshot {
    /// 守护进程版本（可能带构建元数据，如 `1.70.0-t1234abcd`）
    #[serde(default)]
    pub version: String,
    /// 后端状态
    #[serde(default)]
    pub backend_state: BackendState,
    /// 登录 URL，无需登录时为空
    #[serde(rename = "AuthURL", default)]
    pub auth_url: String,
    /// 本机状态
    #[serde(rename = "Self", default)]
    pub self_node: Option<PeerStatus>,
    /// 对端，按节点公钥索引
    #[serde(default, deserialize_with = "null_as_default")]
    pub peer: BTreeMap<String, PeerStatus>,
    /// 用户表，JSON 中键为字符串形式的用户 ID
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: BTreeMap<String, UserProfile>,
    /// 当前出口节点
    #[serde(default)]
    pub exit_node_status: Option<ExitNodeStatus>,
}

impl StatusSnapshot {
    /// 按用户 ID 查找用户资料
    pub fn user_profile(&self, user_id: i64) -> Option<&UserProfile> {
        self.user.get(&user_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS_JSON: &str = r#"{
        "Version": "1.70.0-t1234abcd-gdeadbeef",
        "BackendState": "Running",
        "AuthURL": "",
        "Self": {
            "ID": "nSELF",
            "PublicKey": "nodekey:abc",
            "HostName": "laptop",
            "DNSName": "laptop.tail1234.ts.net.",
            "OS": "linux",
            "UserID": 42,
            "TailscaleIPs": ["100.64.0.1", "fd7a:115c:a1e0::1"],
            "KeyExpiry": "2030-01-01T00:00:00Z"
        },
        "Peer": {
            "nodekey:b": {"ID": "nB", "DNSName": "bravo.tail1234.ts.net.", "ExitNodeOption": true, "Online": true, "RxBytes": 10, "TxBytes": 5, "TailscaleIPs": ["100.64.0.3"]},
            "nodekey:a": {"ID": "nA", "DNSName": "alpha.tail1234.ts.net.", "ExitNodeOption": false, "Online": false, "TailscaleIPs": null}
        },
        "User": {"42": {"ID": 42, "LoginName": "me@example.com", "DisplayName": "Me"}},
        "ExitNodeStatus": {"ID": "nB", "Online": true, "TailscaleIPs": ["100.64.0.3/32"]}
    }"#;

    #[test]
    fn decodes_localapi_status() {
        let status: StatusSnapshot = serde_json::from_str(STATUS_JSON).unwrap();

        assert_eq!(status.backend_state, BackendState::Running);
        assert_eq!(status.peer.len(), 2);
        assert!(status.peer["nodekey:a"].tailscale_ips.is_empty());
        assert_eq!(
            status.user_profile(42).map(|u| u.login_name.as_str()),
            Some("me@example.com")
        );
        assert_eq!(status.exit_node_status.unwrap().id, "nB");

        let me = status.self_node.unwrap();
        assert_eq!(me.tailscale_ips.len(), 2);
        assert!(me.key_expiry.is_some());
    }

    #[test]
    fn null_collections_decode_as_empty() {
        let status: StatusSnapshot =
            serde_json::from_str(r#"{"BackendState":"Stopped","Peer":null,"User":null}"#)
                .unwrap();
        assert_eq!(status.backend_state, BackendState::Stopped);
        assert!(status.peer.is_empty());
        assert!(status.user.is_empty());
        assert!(status.self_node.is_none());
    }

    #[test]
    fn unknown_backend_state_is_no_state() {
        assert_eq!(BackendState::parse("InUseOtherUser"), BackendState::NoState);
        assert_eq!(BackendState::parse("Running").to_string(), "Running");
    }
}
