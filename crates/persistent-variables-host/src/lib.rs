//! In-memory reference host for persistent variables plugins.
//!
//! [`ScriptHost`] implements the registration API the real tagging
//! application offers and lets callers drive it directly: run script
//! functions, load and remove albums, trigger context actions and shut down.
//! [`Session`] replays a recorded sequence of such host events from JSON.

mod host;
mod session;

pub use host::ScriptHost;
pub use session::{HostEvent, ReplayOutput, Session};
