//! Persistent Variables host API
//! =============================
//!
//! The contract between the tagging host and the persistent variables
//! plugin. The host owns album identity, the scripting engine and the plugin
//! lifecycle; plugins only see the types in this crate. Script functions,
//! album processors, shutdown hooks and context actions are registered
//! through [`PluginApi`] when the plugin is enabled.

mod action;
mod album;
mod context;
mod error;
mod registry;
mod tagname;
mod translate;

pub use action::{ActionDialog, ActionKind, ActionTarget, DialogRow, PluginAction};
pub use album::{AlbumId, FileRef, TrackRef};
pub use context::{ScriptContext, MUSICBRAINZ_ALBUM_ID};
pub use error::HostError;
pub use registry::{
    AlbumProcessor, PluginApi, ScriptFunction, ScriptFunctionSpec, ShutdownProcessor,
};
pub use tagname::normalize_tagname;
pub use translate::{format_count, Translate};

/// Common imports for plugin authors.
pub mod prelude {
    pub use crate::{
        ActionDialog, ActionKind, ActionTarget, AlbumId, DialogRow, FileRef, PluginAction,
        PluginApi, ScriptContext, ScriptFunctionSpec, TrackRef, Translate,
    };
}
