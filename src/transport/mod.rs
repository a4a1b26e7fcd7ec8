use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod mock_transport;
pub mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

/// The one HTTP capability the search clients need: GET a URL.
///
/// Split in two stages so that failing to reach the server
/// (`Error::Transport`) and failing to read what it sent (`Error::Io`)
/// surface separately. Implementations add no retries of their own.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Box<dyn ResponseBody>>;
}

/// A response whose body has not been read yet.
#[async_trait]
pub trait ResponseBody: Send {
    /// Read the full body. Consumes the response.
    async fn read_all(self: Box<Self>) -> Result<Vec<u8>>;
}
