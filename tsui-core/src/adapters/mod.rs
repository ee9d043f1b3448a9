//! 守护进程客户端实现

mod local_api;

pub use local_api::{LocalApiClient, DEFAULT_SOCKET_PATH};
