//! 守护进程访问抽象 Trait 定义

mod daemon_client;

pub use daemon_client::{CallContext, DaemonClient};
