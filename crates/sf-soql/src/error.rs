//! Error types for sforce-soql.

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

    /// The request never got an answer.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// The server answered with something other than 200.
    pub fn is_response(&self) -> bool {
        matches!(self.kind, ErrorKind::Response { .. })
    }

    /// The body was not a query result.
    pub fn is_decode(&self) -> bool {
        matches!(self.kind, ErrorKind::Decode(_))
    }

    /// HTTP status of a [`ErrorKind::Response`] error.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("unexpected status code: {status} with body: {body}")]
    Response { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<sforce_client::Error> for Error {
    fn from(err: sforce_client::Error) -> Self {
        Error {
            kind: ErrorKind::Transport(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::Decode(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error {
            kind: ErrorKind::Config(format!("invalid base URL: {}", err)),
            source: Some(Box::new(err)),
        }
    }
}
