//! tsui Core Library
//!
//! Everything the dashboard needs to talk to the Tailscale daemon, without any UI:
//! - Daemon payload types (status, preferences, tailnet lock)
//! - The [`DaemonClient`] abstraction and its LocalAPI implementation
//! - The state projector that turns raw daemon snapshots into a display-ready [`State`]
//!
//! The UI crate only ever sees [`State`]; raw snapshots stay behind the projector.

pub mod adapters;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export common types
pub use adapters::{LocalApiClient, DEFAULT_SOCKET_PATH};
pub use error::{DaemonError, DaemonResult};
pub use services::{peer_name, project, State, StateService};
pub use traits::{CallContext, DaemonClient};
pub use types::{
    BackendState, ExitNodeStatus, LockInfo, NetfilterMode, NodeId, PeerStatus, Preferences,
    PrefsEdit, StatusSnapshot, UserProfile,
};
