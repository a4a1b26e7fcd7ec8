use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::warn;

use crate::error::{Error, Result};
use crate::models::config::ClientConfig;

use super::{HttpTransport, ResponseBody};

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wrap an already configured client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(cfg: &ClientConfig) -> Self {
        let mut builder = Client::builder().user_agent(cfg.user_agent.clone());
        if let Some(secs) = cfg.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Self {
            client: builder.build().unwrap_or_else(|e| {
                warn!("Failed to build configured HTTP client ({}), using defaults", e);
                Client::new()
            }),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<Box<dyn ResponseBody>> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(url, e))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!("PushShift GET {} -> {}", url, status);
            return Err(Error::transport(
                url,
                format!("non-success status: {} body: {}", status, body),
            ));
        }

        Ok(Box::new(ReqwestBody(res)))
    }
}

struct ReqwestBody(Response);

#[async_trait]
impl ResponseBody for ReqwestBody {
    async fn read_all(self: Box<Self>) -> Result<Vec<u8>> {
        let bytes = self.0.bytes().await.map_err(Error::io)?;
        Ok(bytes.to_vec())
    }
}
