mod client;
mod response;
mod transport;

pub use client::LookupClient;
pub use response::{ApiErrorBody, Definition, Meaning, WordEntry};
pub use transport::{HttpResponse, ReqwestTransport, Transport, TransportError};

use wordbank_types::{FailureKind, LookupOutcome, LookupResult};

/// Dictionary lookup interface
#[async_trait::async_trait]
pub trait Lookup: Send + Sync {
    /// Look up an already trimmed term
    async fn lookup(&self, term: &str) -> Result<LookupResult, LookupError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Please enter a word to search.")]
    EmptyInput,

    #[error("{title}: {message} {resolution}")]
    NotFound {
        term: String,
        title: String,
        message: String,
        resolution: String,
    },

    #[error("Failed to fetch data")]
    Http { status: u16 },

    #[error("No results found.")]
    NoResults,

    #[error("Error fetching data: {0}")]
    Transport(String),

    #[error("Error fetching data: {0}")]
    Parse(String),
}

impl LookupError {
    pub fn kind(&self) -> FailureKind {
        match self {
            LookupError::EmptyInput => FailureKind::EmptyInput,
            LookupError::NotFound { .. } => FailureKind::NotFound,
            LookupError::Http { .. } => FailureKind::Http,
            LookupError::NoResults => FailureKind::NoResults,
            LookupError::Transport(_) | LookupError::Parse(_) => FailureKind::Transport,
        }
    }

    /// An empty result set is reported like an error but the call itself succeeded
    pub fn is_failure(&self) -> bool {
        !matches!(self, LookupError::NoResults)
    }
}

impl From<TransportError> for LookupError {
    fn from(err: TransportError) -> Self {
        LookupError::Transport(err.to_string())
    }
}

/// Resolve a lookup into what the UI displays
pub fn into_outcome(result: Result<LookupResult, LookupError>) -> LookupOutcome {
    match result {
        Ok(found) => LookupOutcome::Found(found),
        Err(err) => LookupOutcome::Failed {
            kind: err.kind(),
            message: err.to_string(),
        },
    }
}
