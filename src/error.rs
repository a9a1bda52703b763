/// Error type for upstream fetch operations.
///
/// Every fetch in this service follows a degrade-to-empty contract: the
/// route handler logs the error and substitutes the empty value for that
/// fetch's scope. Nothing here ever reaches the HTTP layer as a non-200.
#[derive(Debug)]
pub enum FetchError {
    /// Network/transport failure, including timeouts and non-2xx HTTP.
    Transport(String),
    /// The exchange envelope reported a non-success status code.
    Envelope(String),
    /// Response parsed as JSON but did not have the expected shape.
    Shape(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "transport_error: {msg}"),
            Self::Envelope(msg) => write!(f, "envelope_error: {msg}"),
            Self::Shape(msg) => write!(f, "shape_error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}
