use std::fmt;

#[derive(Debug)]
pub enum UrlBuilderError {
    /// The assembled string is not a syntactically valid URL
    InvalidArgument(url::ParseError),
    /// Attempt to mutate an immutable query parameter
    UnsupportedOperation(String),
    /// Represents missing environment variable errors
    MissingEnvVar(String),
    /// Represents HTTP/network errors
    Http(reqwest::Error),
    /// Represents JSON serialization errors
    Parse(serde_json::Error),
}

impl std::error::Error for UrlBuilderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlBuilderError::InvalidArgument(e) => Some(e),
            UrlBuilderError::Http(e) => Some(e),
            UrlBuilderError::Parse(e) => Some(e),
            UrlBuilderError::UnsupportedOperation(_) | UrlBuilderError::MissingEnvVar(_) => None,
        }
    }
}

impl fmt::Display for UrlBuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlBuilderError::InvalidArgument(e) => write!(f, "Invalid URL: {e}"),
            UrlBuilderError::UnsupportedOperation(e) => write!(f, "Unsupported operation: {e}"),
            UrlBuilderError::MissingEnvVar(var) => write!(
                f,
                "Missing required environment variable: {var}\n\
                 Please set it in your environment or .env file"
            ),
            UrlBuilderError::Http(e) => write!(f, "HTTP error: {e}"),
            UrlBuilderError::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}

impl From<url::ParseError> for UrlBuilderError {
    fn from(err: url::ParseError) -> Self {
        UrlBuilderError::InvalidArgument(err)
    }
}

impl From<reqwest::Error> for UrlBuilderError {
    fn from(err: reqwest::Error) -> Self {
        UrlBuilderError::Http(err)
    }
}

impl From<serde_json::Error> for UrlBuilderError {
    fn from(err: serde_json::Error) -> Self {
        UrlBuilderError::Parse(err)
    }
}

/// Helper type for Result with `UrlBuilderError`
pub type Result<T> = std::result::Result<T, UrlBuilderError>;
