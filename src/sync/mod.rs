//! Editor-state synchronization between the primary window and the detached
//! editor window
//!
//! Each window owns an `EditorSession` and a `Synchronizer`. Changes travel as
//! `SyncMessage`s over a `SyncEndpoint` pair and are applied by the receiving
//! side's synchronizer at the start of its frame.

mod endpoint;
mod messages;
mod session;

pub use endpoint::SyncEndpoint;
pub use messages::SyncMessage;
pub use session::{EditorSession, Role, Synchronizer};
