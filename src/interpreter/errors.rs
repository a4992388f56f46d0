//! Runtime Errors
//!
//! Errors raised while resolving words or executing a command. They are
//! scoped to the single command that raised them: the runner reports the
//! error and stops the sequence with a non-zero status, without crashing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("variable {name} not found")]
    VariableNotFound { name: String },

    #[error("invalid command {name}")]
    InvalidCommand { name: String },

    #[error("invalid arguments for {command}")]
    InvalidArguments { command: &'static str },

    #[error("invalid name for variable {name}")]
    InvalidVariableName { name: String },

    #[error("command returned a non-zero exit code: {code}")]
    CommandFailed { code: i32 },

    #[error("destination {path} already exists")]
    DestinationExists { path: String },

    #[error("{0}")]
    Input(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RuntimeError {
    /// The exit status this error turns into. A failed subprocess passes its
    /// exit code through verbatim; everything else is 1.
    pub fn status(&self) -> i32 {
        match self {
            RuntimeError::CommandFailed { code } => *code,
            _ => 1,
        }
    }
}
