//! Error types for ferroforce-tooling.
//!
//! The Tooling API façade introduces no failure modes of its own: every
//! error here wraps one signalled by the transport.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Request construction or execution failure from the transport.
    #[error("Client error: {0}")]
    Client(String),

    #[error("{0}")]
    Other(String),
}

impl From<ferroforce_client::Error> for Error {
    fn from(err: ferroforce_client::Error) -> Self {
        Error {
            kind: ErrorKind::Client(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}
