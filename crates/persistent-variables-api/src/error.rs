use thiserror::Error;

/// Errors raised at the host boundary.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("album identifier must not be empty")]
    EmptyAlbumId,
    #[error("unknown script function ${0}")]
    UnknownFunction(String),
    #[error("${function} takes {expected} argument(s) but {found} were given")]
    ArgumentCount {
        function: String,
        expected: usize,
        found: usize,
    },
    #[error("no {kind} action titled '{title}'")]
    UnknownAction { kind: String, title: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid session file: {0}")]
    Parse(#[from] serde_json::Error),
}
