use std::error::Error;
use std::fmt::{Display, Formatter};

/// A custom error message for the build pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A required executable is not on the search path
    MissingTool(String),
    /// A required input is not supplied by the host
    MissingInput(String),
    /// The archive suffix is not recognized
    UnknownArchive(String),
    /// An external process failed to spawn or exited non-zero
    ProcessFailure(String),
    /// The extracted archive does not hold exactly one source directory
    InvalidLayout(String),
    /// Filesystem or host I/O failure
    HostError(String),
}

pub type BuildResult<T> = Result<T, BuildError>;

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTool(name) => {
                write!(f, "[fetchbuild::tool] host must have '{}' installed", name)
            }
            Self::MissingInput(name) => {
                write!(
                    f,
                    "[fetchbuild::input] Input required and not supplied: {}",
                    name
                )
            }
            Self::UnknownArchive(url) => {
                write!(f, "[fetchbuild::archive] unknown archive type: {}", url)
            }
            Self::ProcessFailure(msg) => {
                write!(f, "[fetchbuild::process] {}", msg)
            }
            Self::InvalidLayout(msg) => {
                write!(f, "[fetchbuild::layout] {}", msg)
            }
            Self::HostError(msg) => {
                write!(f, "[fetchbuild::host] {}", msg)
            }
        }
    }
}

impl Error for BuildError {}

impl From<std::io::Error> for BuildError {
    fn from(e: std::io::Error) -> Self {
        Self::HostError(e.to_string())
    }
}
