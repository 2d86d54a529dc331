//! Album- and session-scoped variables for tagging scripts.
//!
//! Scripts store values with `$set_a`/`$set_s` and read them back from later
//! tracks with `$get_a`/`$get_s`, e.g. to carry the earliest recording date
//! across an album. Album variables are reset when the album is reloaded and
//! dropped when it is removed; session variables last until shutdown.

pub mod functions;
mod plugin;
mod settings;
mod store;
mod value;
mod view;

pub use plugin::PersistentVariablesPlugin;
pub use settings::{PluginSettings, USER_GUIDE_URL};
pub use store::{SharedStore, VariableStore, Variables};
pub use value::VariableValue;
pub use view::{VariablesView, ViewPersistentVariables};
