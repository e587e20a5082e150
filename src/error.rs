// SPDX-License-Identifier: MPL-2.0
use std::fmt;

pub use crate::application::port::HostError;
pub use crate::domain::error::{LifecycleAction, LifecycleError};

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// The overlay host refused or could not perform an operation.
    Host(HostError),
    /// A lifecycle operation was requested in a state that forbids it.
    Lifecycle(LifecycleError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Host(e) => write!(f, "Host Error: {}", e),
            Error::Lifecycle(e) => write!(f, "Lifecycle Error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Host(e) => Some(e),
            Error::Lifecycle(e) => Some(e),
            Error::Io(_) | Error::Config(_) => None,
        }
    }
}

impl From<HostError> for Error {
    fn from(err: HostError) -> Self {
        Error::Host(err)
    }
}

impl From<LifecycleError> for Error {
    fn from(err: LifecycleError) -> Self {
        Error::Lifecycle(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
