use std::sync::Arc;

use persistent_variables_api::{AlbumId, PluginAction, PluginApi};
use tracing::info;

use crate::functions::script_functions;
use crate::settings::PluginSettings;
use crate::store::SharedStore;
use crate::view::ViewPersistentVariables;

/// Lifecycle object owning the variable store for one application run.
///
/// The store is created with the plugin and handed to every callback the
/// plugin registers, so nothing outlives the plugin instance.
#[derive(Debug, Default)]
pub struct PersistentVariablesPlugin {
    store: SharedStore,
    settings: PluginSettings,
}

impl PersistentVariablesPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: PluginSettings) -> Self {
        Self {
            store: SharedStore::new(),
            settings,
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    /// Register script functions, lifecycle processors and actions.
    pub fn enable(&self, api: &mut dyn PluginApi) {
        for function in script_functions(&self.store, &*api) {
            api.register_script_function(function);
        }

        let store = self.store.clone();
        api.register_album_metadata_processor(Box::new(move |album: &AlbumId| {
            store.lock().on_album_refresh(album)
        }));
        let store = self.store.clone();
        api.register_album_post_removal_processor(Box::new(move |album: &AlbumId| {
            store.lock().on_album_removed(album)
        }));
        let store = self.store.clone();
        api.register_shutdown_processor(Box::new(move || {
            store.lock().on_application_shutdown()
        }));

        if self.settings.register_actions {
            let action: Arc<dyn PluginAction> = Arc::new(ViewPersistentVariables::new(
                self.store.clone(),
                self.settings.help_url.clone(),
            ));
            api.register_file_action(Arc::clone(&action));
            api.register_track_action(Arc::clone(&action));
            api.register_album_action(action);
        }

        info!("persistent variables plugin enabled");
    }
}
