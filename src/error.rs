// src/error.rs
use thiserror::Error;

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

/// Coarse failure class, used for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    Io,
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("no page registered for {0}")]
    NoFixture(String),

    #[error("invalid URL {input:?}: {source}")]
    Url {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid selector {0:?}")]
    Selector(String),

    #[error("{what} not found on {url}")]
    NotFound { what: &'static str, url: String },

    #[error("table #{index} not found on {url} (page has {found} tables)")]
    TableMissing {
        index: usize,
        found: usize,
        url: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ScrapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } | Self::Status { .. } | Self::NoFixture(_) => ErrorKind::Network,
            Self::Url { .. }
            | Self::Selector(_)
            | Self::NotFound { .. }
            | Self::TableMissing { .. } => ErrorKind::Parse,
            Self::Io(_) | Self::Csv(_) => ErrorKind::Io,
        }
    }
}
