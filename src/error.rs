use thiserror::Error;
use std::{
    fmt,
    io,
    path::PathBuf,
};




pub type Result<T> = std::result::Result<T, ShimError>;




/// What a nonzero exit of `ARHtmlMain` means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Usage,
    Validation,
    Other(Option<i32>),
}
impl Failure {
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(1) => Self::Usage,
            Some(2) => Self::Validation,
            other => Self::Other(other),
        }
    }
}
impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage => write!(f, "usage error (exit code 1)"),
            Self::Validation => write!(f, "quiz validation failed (exit code 2)"),
            Self::Other(Some(code)) => write!(f, "exit code {code}"),
            Self::Other(None) => write!(f, "terminated by signal"),
        }
    }
}




#[derive(Debug, Error)]
pub enum ShimError {
    #[error("invalid configuration {path:?}: {reason}")]
    Config {
        path: Option<PathBuf>,
        reason: String,
    },
    #[error("could not start {program:?}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("html generator failed: {failure}{}", stderr_suffix(.stderr))]
    ToolFailed {
        failure: Failure,
        stderr: String,
    },
    #[error("could not create output directory {dir:?}")]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("html generator did not produce {path:?}")]
    MissingOutput {
        path: PathBuf,
    },
    #[error("could not move {from:?} to {to:?}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() { String::new() }
    else { format!("\n{stderr}") }
}
