use thiserror::Error;

pub type Result<T> = std::result::Result<T, LocatorError>;

/// Failures outside the extraction core.
///
/// Extraction itself never fails: malformed markup and empty categories come
/// back as empty results. These variants cover getting the HTML in, loading
/// configuration and writing output.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// Reading an input file or writing an output file failed
    #[error("I/O error ({context}): {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Input bytes are binary, not markup
    #[error("input is not text: {0}")]
    NotText(String),

    /// Fetching a page over HTTP failed
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Remote server answered with a non-success status
    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Configuration could not be parsed or validated
    #[error("invalid configuration: {0}")]
    Config(String),

    /// JSON serialization failed
    #[error("JSON serialize error ({context}): {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Requested output format does not exist
    #[error("unknown output format '{0}' (expected text or json)")]
    UnknownFormat(String),
}

impl LocatorError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        LocatorError::Io {
            context: context.into(),
            source,
        }
    }
}

impl From<regex::Error> for LocatorError {
    fn from(e: regex::Error) -> Self {
        LocatorError::Config(format!("bad generated-id pattern: {}", e))
    }
}

impl From<serde_yaml::Error> for LocatorError {
    fn from(e: serde_yaml::Error) -> Self {
        LocatorError::Config(e.to_string())
    }
}
