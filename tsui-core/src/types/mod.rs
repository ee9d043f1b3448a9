//! 守护进程数据类型定义

mod lock;
mod prefs;
mod status;

pub use lock::{is_zero_key, LockInfo};
pub use prefs::{
    exit_node_masked_prefs, NetfilterMode, Preferences, PrefsEdit, DEFAULT_ROUTE_V4,
    DEFAULT_ROUTE_V6,
};
pub use status::{BackendState, ExitNodeStatus, NodeId, PeerStatus, StatusSnapshot, UserProfile};
