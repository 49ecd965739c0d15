use std::fmt;

use crate::transport::TransportError;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Transport(TransportError),
    Codec(wirepack::Error),
    /// A paged query answered with the continuation key it was just given.
    RepeatedPageKey(Vec<u8>),
    /// A failed call, tagged with the RPC it was made to.
    Call {
        service: String,
        method: String,
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn call(service: &str, method: &str, source: Error) -> Self {
        Self::Call {
            service: service.to_owned(),
            method: method.to_owned(),
            source: Box::new(source),
        }
    }

    /// The error with every `Call` wrapper peeled off.
    pub fn root(&self) -> &Error {
        match self {
            Self::Call { source, .. } => source.root(),
            other => other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {}", e),
            Self::Codec(e) => write!(f, "Codec error: {}", e),
            Self::RepeatedPageKey(key) => write!(f, "Pagination repeated next key {:?}", key),
            Self::Call { service, method, source } => {
                write!(f, "{}/{} failed: {}", service, method, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::Codec(e) => Some(e),
            Self::RepeatedPageKey(_) => None,
            Self::Call { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

impl From<wirepack::Error> for Error {
    fn from(e: wirepack::Error) -> Self {
        Self::Codec(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
