use std::collections::BTreeMap;
use std::sync::Arc;

use persistent_variables_api::{
    ActionDialog, ActionKind, ActionTarget, AlbumId, AlbumProcessor, HostError, PluginAction,
    PluginApi, ScriptContext, ScriptFunctionSpec, ShutdownProcessor, Translate,
};
use tracing::{debug, warn};

/// Host that keeps everything a plugin registers and dispatches to it.
#[derive(Default)]
pub struct ScriptHost {
    functions: BTreeMap<String, ScriptFunctionSpec>,
    metadata_processors: Vec<AlbumProcessor>,
    removal_processors: Vec<AlbumProcessor>,
    shutdown_processors: Vec<ShutdownProcessor>,
    actions: Vec<(ActionKind, Arc<dyn PluginAction>)>,
}

impl ScriptHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `$name(args...)` in `ctx`.
    pub fn call(
        &self,
        name: &str,
        ctx: &ScriptContext,
        args: &[String],
    ) -> Result<String, HostError> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| HostError::UnknownFunction(name.to_string()))?;
        if function.arity != args.len() {
            return Err(HostError::ArgumentCount {
                function: name.to_string(),
                expected: function.arity,
                found: args.len(),
            });
        }
        Ok(function.call(ctx, args))
    }

    /// Album metadata finished loading, either for the first time or after
    /// a refresh.
    pub fn load_album(&self, album: &AlbumId) {
        debug!(album = %album, "album metadata loaded");
        for processor in &self.metadata_processors {
            processor(album);
        }
    }

    pub fn remove_album(&self, album: &AlbumId) {
        debug!(album = %album, "album removed");
        for processor in &self.removal_processors {
            processor(album);
        }
    }

    pub fn shutdown(&self) {
        debug!("application shutting down");
        for processor in &self.shutdown_processors {
            processor();
        }
    }

    /// Trigger the action titled `title` from the context menu of the first
    /// selected item.
    pub fn run_action(
        &self,
        title: &str,
        targets: &[ActionTarget],
    ) -> Result<Option<ActionDialog>, HostError> {
        let kind = targets
            .first()
            .map(ActionTarget::kind)
            .unwrap_or(ActionKind::File);
        let (_, action) = self
            .actions
            .iter()
            .find(|(registered, action)| *registered == kind && action.title() == title)
            .ok_or_else(|| HostError::UnknownAction {
                kind: kind.to_string(),
                title: title.to_string(),
            })?;
        Ok(action.callback(self, targets))
    }

    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn function(&self, name: &str) -> Option<&ScriptFunctionSpec> {
        self.functions.get(name)
    }

    pub fn documentation(&self, name: &str) -> Option<&str> {
        self.functions
            .get(name)
            .map(|function| function.documentation.as_str())
    }

    pub fn actions(&self, kind: ActionKind) -> Vec<String> {
        self.actions
            .iter()
            .filter(|(registered, _)| *registered == kind)
            .map(|(_, action)| action.title())
            .collect()
    }
}

impl Translate for ScriptHost {}

impl PluginApi for ScriptHost {
    fn register_script_function(&mut self, function: ScriptFunctionSpec) {
        if self.functions.contains_key(&function.name) {
            warn!(name = %function.name, "replacing script function");
        }
        self.functions.insert(function.name.clone(), function);
    }

    fn register_album_metadata_processor(&mut self, processor: AlbumProcessor) {
        self.metadata_processors.push(processor);
    }

    fn register_album_post_removal_processor(&mut self, processor: AlbumProcessor) {
        self.removal_processors.push(processor);
    }

    fn register_shutdown_processor(&mut self, processor: ShutdownProcessor) {
        self.shutdown_processors.push(processor);
    }

    fn register_file_action(&mut self, action: Arc<dyn PluginAction>) {
        self.actions.push((ActionKind::File, action));
    }

    fn register_track_action(&mut self, action: Arc<dyn PluginAction>) {
        self.actions.push((ActionKind::Track, action));
    }

    fn register_album_action(&mut self, action: Arc<dyn PluginAction>) {
        self.actions.push((ActionKind::Album, action));
    }
}

#[cfg(test)]
mod tests {
    use persistent_variables::{PersistentVariablesPlugin, PluginSettings};
    use persistent_variables_api::FileRef;
    use pretty_assertions::assert_eq;

    use super::*;

    fn enabled() -> (PersistentVariablesPlugin, ScriptHost) {
        let plugin = PersistentVariablesPlugin::new();
        let mut host = ScriptHost::new();
        plugin.enable(&mut host);
        (plugin, host)
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn dispatches_registered_functions() {
        let (_plugin, host) = enabled();
        let album = AlbumId::new("album-1").unwrap();
        let ctx = ScriptContext::for_album(&album);
        host.call("set_a", &ctx, &args(&["date", "1999"])).unwrap();
        assert_eq!(host.call("get_a", &ctx, &args(&["date"])).unwrap(), "1999");
        assert_eq!(host.function_names().count(), 8);
        assert!(host.documentation("clear_s").is_some());
    }

    #[test]
    fn rejects_unknown_functions_and_bad_arity() {
        let (_plugin, host) = enabled();
        let ctx = ScriptContext::default();
        assert!(matches!(
            host.call("set_x", &ctx, &[]),
            Err(HostError::UnknownFunction(name)) if name == "set_x"
        ));
        assert!(matches!(
            host.call("get_s", &ctx, &[]),
            Err(HostError::ArgumentCount { expected: 1, found: 0, .. })
        ));
    }

    #[test]
    fn lifecycle_events_reach_the_store() {
        let (plugin, host) = enabled();
        let album = AlbumId::new("album-1").unwrap();
        let ctx = ScriptContext::for_file(FileRef::on_album(album.clone()));
        host.call("set_a", &ctx, &args(&["n", "1"])).unwrap();
        host.call("set_s", &ctx, &args(&["s", "2"])).unwrap();

        host.load_album(&album);
        assert_eq!(host.call("get_a", &ctx, &args(&["n"])).unwrap(), "");
        assert!(plugin.store().lock().has_album(&album));

        host.remove_album(&album);
        assert!(!plugin.store().lock().has_album(&album));

        assert_eq!(host.call("get_s", &ctx, &args(&["s"])).unwrap(), "2");
        host.shutdown();
        assert_eq!(host.call("get_s", &ctx, &args(&["s"])).unwrap(), "");
    }

    #[test]
    fn actions_registered_on_every_menu() {
        let (_plugin, host) = enabled();
        for kind in [ActionKind::File, ActionKind::Track, ActionKind::Album] {
            assert_eq!(host.actions(kind), vec!["View persistent variables".to_string()]);
        }
        let album = AlbumId::new("album-1").unwrap();
        let dialog = host
            .run_action("View persistent variables", &[ActionTarget::Album(album)])
            .unwrap();
        assert!(dialog.is_some());
        assert!(matches!(
            host.run_action("Missing", &[]),
            Err(HostError::UnknownAction { .. })
        ));
    }

    #[test]
    fn headless_settings_skip_actions() {
        let plugin = PersistentVariablesPlugin::with_settings(PluginSettings {
            register_actions: false,
            ..PluginSettings::default()
        });
        let mut host = ScriptHost::new();
        plugin.enable(&mut host);
        assert!(host.actions(ActionKind::Album).is_empty());
        assert_eq!(host.function_names().count(), 8);
    }
}
