use thiserror::Error;

/// Which rate-limit window was exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateScope {
    Minute,
    Day,
}

impl RateScope {
    /// User-facing notification text for this scope
    pub fn message(&self) -> &'static str {
        match self {
            RateScope::Day => "Daily rate limit exceeded. Please try again tomorrow.",
            RateScope::Minute => {
                "Rate limit exceeded. Please wait a moment before trying again."
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum HubError {
    #[error("Please enter a command")]
    EmptyInput,

    #[error("{}", .scope.message())]
    RateLimitExceeded { scope: RateScope },

    #[error("OpenRouter API client not initialized. Please check your API key configuration.")]
    NotConfigured,

    /// Network-level failure or throttling/server status; retried by the client
    #[error("API call failed: {0}")]
    Transient(String),

    /// Non-success HTTP status outside the transient set; fails immediately
    #[error("API call failed: {0}")]
    Api(String),

    /// Model reply did not parse as an action; fails immediately
    #[error("Failed to parse model response: {0}")]
    MalformedOutput(String),

    /// Retries exhausted; wraps the last transient failure
    #[error("API call failed: {source}")]
    ModelCallFailed {
        #[source]
        source: Box<HubError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl HubError {
    /// Whether a retry is likely to succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, HubError::Transient(_))
    }
}

pub type Result<T> = std::result::Result<T, HubError>;
