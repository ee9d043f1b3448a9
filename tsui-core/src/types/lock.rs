//! Tailnet lock 状态类型定义
//!
//! 对应 LocalAPI `GET /localapi/v0/tka/status`（ipnstate.NetworkLockStatus）的子集。

use serde::Deserialize;

/// 本机的 tailnet lock 状态
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LockInfo {
    /// tailnet 是否启用了 lock
    #[serde(default)]
    pub enabled: bool,
    /// 本机的 lock 公钥（`tlpub:<hex>`）
    #[serde(default)]
    pub public_key: String,
    /// 本机节点公钥，未登录时为空
    #[serde(default)]
    pub node_key: Option<String>,
    /// 节点公钥是否已被受信任的 lock 密钥签名
    #[serde(default)]
    pub node_key_signed: bool,
}

impl LockInfo {
    /// lock 公钥是否为零值（未生成）
    pub fn has_zero_public_key(&self) -> bool {
        is_zero_key(&self.public_key)
    }
}

/// 判断 `prefix:<hex>` 形式的密钥是否为零值；空字符串同样视为零值
pub fn is_zero_key(key: &str) -> bool {
    let hex = key.split_once(':').map_or(key, |(_, hex)| hex);
    hex.bytes().all(|b| b == b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_keys() {
        assert!(is_zero_key(""));
        assert!(is_zero_key("tlpub:"));
        assert!(is_zero_key(
            "tlpub:0000000000000000000000000000000000000000000000000000000000000000"
        ));
        assert!(!is_zero_key("tlpub:00ab"));
    }

    #[test]
    fn decodes_tka_status() {
        let lock: LockInfo = serde_json::from_str(
            r#"{"Enabled": true, "PublicKey": "tlpub:abcd", "NodeKey": "nodekey:1234", "NodeKeySigned": false, "Head": null}"#,
        )
        .unwrap();
        assert!(lock.enabled);
        assert_eq!(lock.node_key.as_deref(), Some("nodekey:1234"));
        assert!(!lock.has_zero_public_key());
    }

    #[test]
    fn missing_node_key_is_none() {
        let lock: LockInfo = serde_json::from_str(r#"{"Enabled": false, "NodeKey": null}"#).unwrap();
        assert!(lock.node_key.is_none());
        assert!(lock.has_zero_public_key());
    }
}
