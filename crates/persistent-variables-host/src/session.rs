use std::fs;
use std::path::Path;

use persistent_variables_api::{
    ActionDialog, ActionTarget, AlbumId, FileRef, HostError, ScriptContext,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ScriptHost;

/// One thing that happens in the host during a tagging session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    AlbumLoaded {
        album: AlbumId,
    },
    AlbumRemoved {
        album: AlbumId,
    },
    /// A script function call, made for a file or, when no file is given,
    /// for an album fetched straight from the database.
    Call {
        function: String,
        #[serde(default)]
        args: Vec<String>,
        #[serde(default)]
        album: Option<AlbumId>,
        #[serde(default)]
        file: Option<FileRef>,
    },
    Action {
        title: String,
        targets: Vec<ActionTarget>,
    },
    Shutdown,
}

impl HostEvent {
    fn context(album: &Option<AlbumId>, file: &Option<FileRef>) -> ScriptContext {
        match (file, album) {
            (Some(file), _) => ScriptContext::for_file(file.clone()),
            (None, Some(album)) => ScriptContext::for_album(album),
            (None, None) => ScriptContext::default(),
        }
    }
}

/// Result of replaying one event that produces something.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "output", rename_all = "snake_case")]
pub enum ReplayOutput {
    Call { function: String, result: String },
    Dialog(ActionDialog),
}

/// A recorded list of host events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub events: Vec<HostEvent>,
}

impl Session {
    pub fn from_json(raw: &str) -> Result<Self, HostError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, HostError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Apply every event to `host` in order, stopping at the first failing
    /// script call.
    pub fn replay(&self, host: &ScriptHost) -> Result<Vec<ReplayOutput>, HostError> {
        let mut outputs = Vec::new();
        for (index, event) in self.events.iter().enumerate() {
            debug!(index, ?event, "replaying host event");
            match event {
                HostEvent::AlbumLoaded { album } => host.load_album(album),
                HostEvent::AlbumRemoved { album } => host.remove_album(album),
                HostEvent::Call {
                    function,
                    args,
                    album,
                    file,
                } => {
                    let ctx = HostEvent::context(album, file);
                    let result = host.call(function, &ctx, args)?;
                    outputs.push(ReplayOutput::Call {
                        function: function.clone(),
                        result,
                    });
                }
                HostEvent::Action { title, targets } => {
                    if let Some(dialog) = host.run_action(title, targets)? {
                        outputs.push(ReplayOutput::Dialog(dialog));
                    }
                }
                HostEvent::Shutdown => host.shutdown(),
            }
        }
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use persistent_variables::PersistentVariablesPlugin;
    use persistent_variables_api::DialogRow;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    const EARLIEST_DATE: &str = r#"{
        "events": [
            { "event": "album_loaded", "album": "album-1" },
            { "event": "call", "function": "set_a", "args": ["earliest_date", "1999-01-01"],
              "file": { "track": { "album": "album-1" } } },
            { "event": "call", "function": "get_a", "args": ["earliest_date"], "album": "album-1" },
            { "event": "album_loaded", "album": "album-1" },
            { "event": "call", "function": "get_a", "args": ["earliest_date"], "album": "album-1" }
        ]
    }"#;

    fn host_with_plugin() -> ScriptHost {
        let plugin = PersistentVariablesPlugin::new();
        let mut host = ScriptHost::new();
        plugin.enable(&mut host);
        host
    }

    fn results(outputs: &[ReplayOutput]) -> Vec<&str> {
        outputs
            .iter()
            .filter_map(|output| match output {
                ReplayOutput::Call { result, .. } => Some(result.as_str()),
                ReplayOutput::Dialog(_) => None,
            })
            .collect()
    }

    #[test]
    fn refresh_between_reads_resets_album() {
        let host = host_with_plugin();
        let session = Session::from_json(EARLIEST_DATE).unwrap();
        let outputs = session.replay(&host).unwrap();
        assert_eq!(results(&outputs), vec!["", "1999-01-01", ""]);
    }

    #[test]
    fn reads_session_files_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, EARLIEST_DATE).unwrap();
        let session = Session::from_path(&path).unwrap();
        assert_eq!(session.events.len(), 5);
        assert!(matches!(
            Session::from_path(dir.path().join("missing.json")),
            Err(HostError::Io(_))
        ));
    }

    #[test]
    fn actions_produce_dialogs() {
        let host = host_with_plugin();
        let session = Session::from_json(
            r#"{ "events": [
                { "event": "call", "function": "set_s", "args": ["count", "3"] },
                { "event": "action", "title": "View persistent variables",
                  "targets": [ { "album": "album-1" } ] }
            ] }"#,
        )
        .unwrap();
        let outputs = session.replay(&host).unwrap();
        let ReplayOutput::Dialog(dialog) = &outputs[1] else {
            panic!("expected a dialog, got {:?}", outputs[1]);
        };
        assert_eq!(
            dialog.rows.last(),
            Some(&DialogRow::Item {
                key: "count".into(),
                value: "3".into(),
            })
        );
    }

    #[test]
    fn rejects_malformed_sessions() {
        assert!(matches!(
            Session::from_json(r#"{ "events": [ { "event": "album_loaded", "album": "" } ] }"#),
            Err(HostError::Parse(_))
        ));
        let host = host_with_plugin();
        let bad_call = Session {
            events: vec![HostEvent::Call {
                function: "get_a".into(),
                args: vec![],
                album: None,
                file: None,
            }],
        };
        assert!(matches!(
            bad_call.replay(&host),
            Err(HostError::ArgumentCount { .. })
        ));
    }
}
