use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use persistent_variables_api::AlbumId;
use tracing::{debug, trace};

use crate::value::VariableValue;

/// Variables of one scope, ordered by name.
pub type Variables = BTreeMap<String, VariableValue>;

/// In-memory variables for the running session.
///
/// Album variables live only while their album is loaded; session variables
/// live until application shutdown. Reads of anything unset yield the
/// caller's default.
#[derive(Debug, Default)]
pub struct VariableStore {
    albums: HashMap<AlbumId, Variables>,
    session: Variables,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_album_variable(
        &mut self,
        album: &AlbumId,
        name: impl Into<String>,
        value: impl Into<VariableValue>,
    ) {
        let name = name.into();
        if name.is_empty() {
            trace!(album = %album, "ignoring album variable with empty name");
            return;
        }
        self.albums
            .entry(album.clone())
            .or_default()
            .insert(name, value.into());
    }

    pub fn album_variable(&self, album: &AlbumId, name: &str) -> Option<&VariableValue> {
        self.albums.get(album).and_then(|vars| vars.get(name))
    }

    pub fn get_album_variable(
        &self,
        album: &AlbumId,
        name: &str,
        default: impl Into<VariableValue>,
    ) -> VariableValue {
        self.album_variable(album, name)
            .cloned()
            .unwrap_or_else(|| default.into())
    }

    pub fn unset_album_variable(&mut self, album: &AlbumId, name: &str) -> Option<VariableValue> {
        self.albums.get_mut(album).and_then(|vars| vars.remove(name))
    }

    /// Replace the album's variables with an empty set.
    pub fn clear_album_variables(&mut self, album: &AlbumId) {
        self.albums.insert(album.clone(), Variables::new());
    }

    /// Album metadata was (re)loaded by the host.
    pub fn on_album_refresh(&mut self, album: &AlbumId) {
        debug!(album = %album, "initializing album persistent variables");
        self.clear_album_variables(album);
    }

    /// Album was removed from the host session.
    pub fn on_album_removed(&mut self, album: &AlbumId) {
        debug!(album = %album, "destroying album persistent variables");
        self.albums.remove(album);
    }

    pub fn has_album(&self, album: &AlbumId) -> bool {
        self.albums.contains_key(album)
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    pub fn album_variables(&self, album: &AlbumId) -> Option<&Variables> {
        self.albums.get(album)
    }

    pub fn set_session_variable(&mut self, name: impl Into<String>, value: impl Into<VariableValue>) {
        let name = name.into();
        if name.is_empty() {
            trace!("ignoring session variable with empty name");
            return;
        }
        self.session.insert(name, value.into());
    }

    pub fn session_variable(&self, name: &str) -> Option<&VariableValue> {
        self.session.get(name)
    }

    pub fn get_session_variable(
        &self,
        name: &str,
        default: impl Into<VariableValue>,
    ) -> VariableValue {
        self.session_variable(name)
            .cloned()
            .unwrap_or_else(|| default.into())
    }

    pub fn unset_session_variable(&mut self, name: &str) -> Option<VariableValue> {
        self.session.remove(name)
    }

    pub fn clear_session_variables(&mut self) {
        self.session.clear();
    }

    pub fn session_variables(&self) -> &Variables {
        &self.session
    }

    pub fn on_application_shutdown(&mut self) {
        debug!(
            count = self.session.len(),
            "discarding session persistent variables"
        );
        self.clear_session_variables();
    }
}

/// Handle to the store shared between the plugin and its host callbacks.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<VariableStore>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> MutexGuard<'_, VariableStore> {
        self.inner.lock()
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut VariableStore) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
