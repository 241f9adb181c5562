use std::fmt;

/// A fully enriched listing entry, ready to hand to the UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub name: String,
    /// The detail resource this entry was enriched from.
    pub detail_url: String,
    /// Front sprite URL; the API has none for some entries.
    pub image: Option<String>,
    /// Type names, in the order the API lists them.
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Listing,
    Enriching,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageProgress {
    pub offset: u32,
    pub stage: Stage,
    /// Number of entries in the page, once the listing has resolved.
    pub entry_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Progress(PageProgress),
    PageCompleted {
        offset: u32,
        result: Result<Vec<PageEntry>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Parse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Parse => write!(f, "malformed response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
