use std::fmt;

use serde::{Deserialize, Serialize};

use crate::HostError;

/// Host-assigned album identifier.
///
/// Opaque to plugins and stable for as long as the album stays loaded. An
/// identifier is never empty: an empty string means "no album" and is
/// rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AlbumId(String);

impl AlbumId {
    /// Wrap a host identifier, returning `None` for the empty string.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AlbumId {
    type Error = HostError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(HostError::EmptyAlbumId)
    }
}

impl From<AlbumId> for String {
    fn from(id: AlbumId) -> Self {
        id.0
    }
}

impl AsRef<str> for AlbumId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A track as seen by plugins: only the album it belongs to matters here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRef {
    #[serde(default)]
    pub album: Option<AlbumId>,
}

impl TrackRef {
    pub fn on_album(album: AlbumId) -> Self {
        Self { album: Some(album) }
    }
}

/// A file being tagged. Files that are not matched to a track have no parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    #[serde(default)]
    pub track: Option<TrackRef>,
}

impl FileRef {
    pub fn unattached() -> Self {
        Self::default()
    }

    pub fn on_album(album: AlbumId) -> Self {
        Self {
            track: Some(TrackRef::on_album(album)),
        }
    }

    /// Album of the track this file is attached to, if any.
    pub fn album_id(&self) -> Option<&AlbumId> {
        self.track.as_ref().and_then(|track| track.album.as_ref())
    }
}
