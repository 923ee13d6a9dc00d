use thiserror::Error;

/// Errors produced by graph construction, flow computation and input parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("node index {index} is out of range for a graph with {node_count} nodes")]
    IndexOutOfRange { index: usize, node_count: usize },

    #[error("capacity overflow on edge {from} -> {to}")]
    CapacityOverflow { from: usize, to: usize },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no endpoint pair produced a cut of capacity {expected}")]
    CutNotFound { expected: u64 },
}

impl Error {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Error::InvalidInput(message.into())
    }

    pub(crate) fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
