//! 业务逻辑服务层

mod state;

pub use state::{peer_name, project, State, StateService};
