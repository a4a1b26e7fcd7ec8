use thiserror::Error as ErrorTrait;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything that can go wrong during a single search call.
///
/// None of these are retried here; the caller owns any retry policy.
#[derive(ErrorTrait, Debug)]
pub enum Error {
    /// The request never produced a usable response (connection failure,
    /// or upstream answered with a non-success status).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },
    #[error("failed to read response body: {0}")]
    Io(#[source] BoxError),
    #[error("failed to decode response JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to encode search params: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

impl Error {
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    pub fn io(source: impl Into<BoxError>) -> Self {
        Self::Io(source.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
