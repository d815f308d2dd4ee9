use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The exchange answered with `success: false`
    #[error("{0}")]
    Rejected(String),
    #[error("Unexpected response from {endpoint} ({status}): {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },
    #[error("Missing result in {0} response")]
    MissingResult(&'static str),
    #[error("Failed to parse {endpoint} response")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not sign request: {0}")]
    Signing(String),
    #[error("Invalid request url: {0}")]
    Url(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
