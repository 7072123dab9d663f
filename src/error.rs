use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every fault a scenario, the catalog or the settings loader can raise.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("{clause} can only be added to {allowed}.")]
    InvalidClause {
        clause: &'static str,
        allowed: &'static str,
    },

    #[error("query has no base statement; call select, update or delete first")]
    EmptyQuery,

    #[error("unknown {kind}: '{key}'")]
    UnknownKey { kind: &'static str, key: String },

    #[error("'{0}' is a leaf and cannot hold children")]
    LeafHasNoChildren(String),

    #[error("no copies of '{0}' left to borrow")]
    NoCopiesLeft(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("no example with id '{0}' (try `design-patterns list`)")]
    UnknownExample(String),

    #[error("no pattern named '{0}'")]
    UnknownPattern(String),

    #[error("failed to parse config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PatternError {
    pub fn unknown_key(kind: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownKey {
            kind,
            key: key.into(),
        }
    }
}

pub type Result<T, E = PatternError> = std::result::Result<T, E>;
