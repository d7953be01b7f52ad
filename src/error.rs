use thiserror::Error;

/// Every way a run can fail. None of these are recoverable mid-run: the
/// driver stops rather than emit a command built from bad state.
#[derive(Debug, Error)]
pub enum AutopilotError {
    #[error("surface profile is empty")]
    EmptySurface,

    #[error("no flat surface run at least {min_width} units wide")]
    NoFlatCorridor { min_width: i32 },

    #[error("malformed {context} line: {line:?}")]
    MalformedLine { context: &'static str, line: String },

    #[error("{context} line has {found} fields, expected {expected}")]
    FieldCount {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid integer {token:?}")]
    InvalidNumber {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("input ended while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid controller config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid controller config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AutopilotError>;
