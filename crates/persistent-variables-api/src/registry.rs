use std::fmt;
use std::sync::Arc;

use crate::{AlbumId, PluginAction, ScriptContext, Translate};

/// Handler behind a `$name(...)` script call. Arguments arrive already
/// evaluated; the returned string is substituted into the script output.
pub type ScriptFunction = Arc<dyn Fn(&ScriptContext, &[String]) -> String + Send + Sync>;

/// Callback run with the album an event concerns.
pub type AlbumProcessor = Box<dyn Fn(&AlbumId) + Send + Sync>;

/// Callback run once when the application shuts down.
pub type ShutdownProcessor = Box<dyn Fn() + Send + Sync>;

/// A script function together with its registration metadata.
#[derive(Clone)]
pub struct ScriptFunctionSpec {
    pub name: String,
    pub arity: usize,
    pub documentation: String,
    pub handler: ScriptFunction,
}

impl ScriptFunctionSpec {
    pub fn new(
        name: impl Into<String>,
        arity: usize,
        documentation: impl Into<String>,
        handler: impl Fn(&ScriptContext, &[String]) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            arity,
            documentation: documentation.into(),
            handler: Arc::new(handler),
        }
    }

    pub fn call(&self, ctx: &ScriptContext, args: &[String]) -> String {
        (self.handler)(ctx, args)
    }
}

impl fmt::Debug for ScriptFunctionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptFunctionSpec")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Registration surface the host exposes to a plugin while enabling it.
pub trait PluginApi: Translate {
    fn register_script_function(&mut self, function: ScriptFunctionSpec);

    /// Runs whenever an album's metadata is (re)loaded.
    fn register_album_metadata_processor(&mut self, processor: AlbumProcessor);

    /// Runs after an album has been removed from the session.
    fn register_album_post_removal_processor(&mut self, processor: AlbumProcessor);

    fn register_shutdown_processor(&mut self, processor: ShutdownProcessor);

    fn register_file_action(&mut self, action: Arc<dyn PluginAction>);
    fn register_track_action(&mut self, action: Arc<dyn PluginAction>);
    fn register_album_action(&mut self, action: Arc<dyn PluginAction>);
}
