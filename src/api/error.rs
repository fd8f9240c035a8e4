use thiserror::Error;

/// Failures talking to the roster service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection refused, DNS, TLS, reading the body...
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The body was not JSON, or not a shape we recognize
    #[error("Unexpected response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The transactions payload carried no rows array
    #[error("No rows found in response")]
    MissingRows,
}
