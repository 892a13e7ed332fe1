use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Negative document id, or an id that is already indexed
    DuplicateOrInvalidId,
    /// A document, query or stop word term contains a control character
    InvalidTerm,
    /// A lone `-` in a query
    EmptyQueryTerm,
    /// A query term starting with `--`
    DoubleNegation,
    /// Lookup of a document id that is not indexed
    UnknownDocumentId,
    Internal,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Error {
            kind: ErrorKind::Internal,
            context: format!("failed to build worker pool: {}", err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
