//! 偏好设置相关类型定义
//!
//! `Preferences` 对应 `GET /localapi/v0/prefs` 的子集；
//! `PrefsEdit` 描述一次部分修改，编码为 `ipn.MaskedPrefs`（字段值 + `XxxSet` 标记）。

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::utils::json::{null_as_default, opt_bool};

/// 默认路由，同时通告两者即为"通告出口节点"
pub const DEFAULT_ROUTE_V4: &str = "0.0.0.0/0";
pub const DEFAULT_ROUTE_V6: &str = "::/0";

/// Linux netfilter 模式（preftype.NetfilterMode）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "i64")]
pub enum NetfilterMode {
    /// 不管理防火墙规则
    Off,
    /// 添加规则但不接管转发链
    NoDivert,
    /// 完全管理
    #[default]
    On,
}

impl NetfilterMode {
    /// 所有可选项，按菜单顺序
    pub const ALL: [NetfilterMode; 3] = [Self::On, Self::NoDivert, Self::Off];

    /// 菜单显示名
    pub fn label(self) -> &'static str {
        match self {
            Self::On => "On",
            Self::NoDivert => "No Divert",
            Self::Off => "Off",
        }
    }

    /// 从菜单显示名解析
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.label() == label)
    }

    /// LocalAPI 使用的整数值
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Off => 0,
            Self::NoDivert => 1,
            Self::On => 2,
        }
    }
}

impl From<i64> for NetfilterMode {
    fn from(v: i64) -> Self {
        match v {
            0 => Self::Off,
            1 => Self::NoDivert,
            _ => Self::On,
        }
    }
}

/// 守护进程偏好设置
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Preferences {
    #[serde(rename = "ControlURL", default)]
    pub control_url: String,
    /// 接受其他节点通告的子网路由
    #[serde(default)]
    pub route_all: bool,
    #[serde(rename = "ExitNodeID", default)]
    pub exit_node_id: String,
    #[serde(rename = "ExitNodeIP", default)]
    pub exit_node_ip: String,
    /// 使用出口节点时仍允许访问本地网络
    #[serde(rename = "ExitNodeAllowLANAccess", default)]
    pub exit_node_allow_lan_access: bool,
    /// 使用 tailnet 的 DNS 设置
    #[serde(rename = "CorpDNS", default)]
    pub corp_dns: bool,
    #[serde(default)]
    pub want_running: bool,
    /// 拒绝所有入站连接
    #[serde(default)]
    pub shields_up: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub advertise_routes: Vec<String>,
    #[serde(default)]
    pub netfilter_mode: NetfilterMode,
    #[serde(default, deserialize_with = "opt_bool")]
    pub no_stateful_filtering: Option<bool>,
    /// 允许在非 root 下修改设置的系统用户
    #[serde(default)]
    pub operator_user: String,
    #[serde(default)]
    pub hostname: String,
}

impl Preferences {
    /// 是否正在通告本机为出口节点
    pub fn advertises_exit_node(&self) -> bool {
        self.advertise_routes.iter().any(|r| r == DEFAULT_ROUTE_V4)
            && self.advertise_routes.iter().any(|r| r == DEFAULT_ROUTE_V6)
    }

    /// 有状态过滤是否开启；只有明确设置了 `NoStatefulFiltering` 才算关闭
    pub fn stateful_filtering(&self) -> bool {
        self.no_stateful_filtering != Some(true)
    }
}

/// 一次偏好设置的部分修改，只有 `Some` 字段会被写入
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefsEdit {
    pub want_running: Option<bool>,
    pub shields_up: Option<bool>,
    pub route_all: Option<bool>,
    pub corp_dns: Option<bool>,
    pub exit_node_allow_lan_access: Option<bool>,
    /// 需要结合当前通告路由计算，见 [`PrefsEdit::to_masked_prefs`]
    pub advertise_exit_node: Option<bool>,
    pub netfilter_mode: Option<NetfilterMode>,
    pub stateful_filtering: Option<bool>,
}

impl PrefsEdit {
    pub fn want_running(value: bool) -> Self {
        Self {
            want_running: Some(value),
            ..Self::default()
        }
    }

    pub fn shields_up(value: bool) -> Self {
        Self {
            shields_up: Some(value),
            ..Self::default()
        }
    }

    pub fn route_all(value: bool) -> Self {
        Self {
            route_all: Some(value),
            ..Self::default()
        }
    }

    pub fn corp_dns(value: bool) -> Self {
        Self {
            corp_dns: Some(value),
            ..Self::default()
        }
    }

    pub fn exit_node_allow_lan_access(value: bool) -> Self {
        Self {
            exit_node_allow_lan_access: Some(value),
            ..Self::default()
        }
    }

    pub fn advertise_exit_node(value: bool) -> Self {
        Self {
            advertise_exit_node: Some(value),
            ..Self::default()
        }
    }

    pub fn netfilter_mode(mode: NetfilterMode) -> Self {
        Self {
            netfilter_mode: Some(mode),
            ..Self::default()
        }
    }

    pub fn stateful_filtering(value: bool) -> Self {
        Self {
            stateful_filtering: Some(value),
            ..Self::default()
        }
    }

    /// 修改通告出口节点时是否需要读取当前路由
    pub fn needs_current_routes(&self) -> bool {
        self.advertise_exit_node.is_some()
    }

    /// 编码为 `ipn.MaskedPrefs`
    ///
    /// `current_routes` 为当前通告的路由；切换出口节点时保留其中的子网路由，
    /// 只增删两条默认路由。
    pub fn to_masked_prefs(&self, current_routes: &[String]) -> Value {
        let mut masked = Map::new();

        let mut set = |field: &str, value: Value| {
            masked.insert(field.to_string(), value);
            masked.insert(format!("{field}Set"), Value::Bool(true));
        };

        if let Some(v) = self.want_running {
            set("WantRunning", Value::Bool(v));
        }
        if let Some(v) = self.shields_up {
            set("ShieldsUp", Value::Bool(v));
        }
        if let Some(v) = self.route_all {
            set("RouteAll", Value::Bool(v));
        }
        if let Some(v) = self.corp_dns {
            set("CorpDNS", Value::Bool(v));
        }
        if let Some(v) = self.exit_node_allow_lan_access {
            set("ExitNodeAllowLANAccess", Value::Bool(v));
        }
        if let Some(advertise) = self.advertise_exit_node {
            let mut routes: Vec<Value> = current_routes
                .iter()
                .filter(|r| r.as_str() != DEFAULT_ROUTE_V4 && r.as_str() != DEFAULT_ROUTE_V6)
                .map(|r| Value::String(r.clone()))
                .collect();
            if advertise {
                routes.push(Value::String(DEFAULT_ROUTE_V4.to_string()));
                routes.push(Value::String(DEFAULT_ROUTE_V6.to_string()));
            }
            set("AdvertiseRoutes", Value::Array(routes));
        }
        if let Some(mode) = self.netfilter_mode {
            set("NetfilterMode", Value::from(mode.as_i64()));
        }
        if let Some(enabled) = self.stateful_filtering {
            // opt.Bool 以字符串编码
            set("NoStatefulFiltering", Value::String((!enabled).to_string()));
        }

        Value::Object(masked)
    }
}

/// 设置（或清除）出口节点的 `ipn.MaskedPrefs`
pub fn exit_node_masked_prefs(node_id: Option<&str>) -> Value {
    let mut masked = Map::new();
    masked.insert(
        "ExitNodeID".to_string(),
        Value::String(node_id.unwrap_or_default().to_string()),
    );
    masked.insert("ExitNodeIDSet".to_string(), Value::Bool(true));
    masked.insert("ExitNodeIP".to_string(), Value::String(String::new()));
    masked.insert("ExitNodeIPSet".to_string(), Value::Bool(true));
    Value::Object(masked)
}
