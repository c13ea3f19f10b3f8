use gavel_core::{BuildError, ExecutionError, syntax::Position};
use gavel_parser::ParseError;
use thiserror::Error;

/// Any failure along the parse, build and run pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

impl Error {
    /// Source position the error points at (1-based, or [`Position::NONE`]).
    pub fn position(&self) -> Position {
        match self {
            Error::Parse(err) => err.position,
            Error::Build(err) => err.position,
            Error::Execution(err) => err.position,
        }
    }

    /// The error message without any location prefix.
    pub fn message(&self) -> String {
        match self {
            Error::Parse(err) => err.kind.to_string(),
            Error::Build(err) => err.kind.to_string(),
            Error::Execution(err) => err.kind.to_string(),
        }
    }

    pub fn help(&self) -> Option<String> {
        match self {
            Error::Build(err) => err.kind.help(),
            Error::Parse(_) | Error::Execution(_) => None,
        }
    }
}
