use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AlbumId, FileRef, TrackRef, Translate};

/// Which context menu an action is registered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    File,
    Track,
    Album,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActionKind::File => "file",
            ActionKind::Track => "track",
            ActionKind::Album => "album",
        };
        f.write_str(label)
    }
}

/// An item selected in the host when an action is triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionTarget {
    File(FileRef),
    Track(TrackRef),
    Album(AlbumId),
}

impl ActionTarget {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionTarget::File(_) => ActionKind::File,
            ActionTarget::Track(_) => ActionKind::Track,
            ActionTarget::Album(_) => ActionKind::Album,
        }
    }

    /// Album the selected item belongs to.
    pub fn album_id(&self) -> Option<&AlbumId> {
        match self {
            ActionTarget::File(file) => file.album_id(),
            ActionTarget::Track(track) => track.album.as_ref(),
            ActionTarget::Album(album) => Some(album),
        }
    }
}

/// One row of a two-column dialog table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "row", rename_all = "snake_case")]
pub enum DialogRow {
    /// Bold separator row, e.g. a section title with its item count.
    Section { title: String, summary: String },
    Item { key: String, value: String },
}

/// Read-only table dialog an action asks the host to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDialog {
    pub title: String,
    pub rows: Vec<DialogRow>,
    #[serde(default)]
    pub help_url: Option<String>,
}

/// Context menu action contributed by a plugin.
pub trait PluginAction: Send + Sync {
    fn title(&self) -> String;

    fn callback(&self, tr: &dyn Translate, targets: &[ActionTarget]) -> Option<ActionDialog>;
}
