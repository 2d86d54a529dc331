use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{AlbumId, FileRef};

/// Parser context key holding the release id of an album that has just been
/// retrieved and is not yet attached to any file.
pub const MUSICBRAINZ_ALBUM_ID: &str = "musicbrainz_albumid";

/// What the host hands to a script function on each call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptContext {
    /// File being processed, when the script runs for a file.
    #[serde(default)]
    pub file: Option<FileRef>,
    /// Metadata visible to the parser.
    #[serde(default)]
    pub context: HashMap<String, String>,
}

impl ScriptContext {
    pub fn for_file(file: FileRef) -> Self {
        Self {
            file: Some(file),
            context: HashMap::new(),
        }
    }

    /// Context for scripts run while an album is loaded from the database.
    pub fn for_album(album: &AlbumId) -> Self {
        let mut context = HashMap::new();
        context.insert(MUSICBRAINZ_ALBUM_ID.to_string(), album.to_string());
        Self {
            file: None,
            context,
        }
    }

    /// Album the current script call applies to.
    ///
    /// A file resolves through its parent track; a file without an album
    /// resolves to nothing even when the parser context names one.
    pub fn album_id(&self) -> Option<AlbumId> {
        match &self.file {
            Some(file) => file.album_id().cloned(),
            None => self
                .context
                .get(MUSICBRAINZ_ALBUM_ID)
                .and_then(|id| AlbumId::new(id.as_str())),
        }
    }
}
