use std::sync::Arc;

use crate::error::Result;
use crate::models::config::ClientConfig;
use crate::models::{SubmissionList, SubmissionSearchParams};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Client for `/reddit/submission/search/`.
#[derive(Clone)]
pub struct SubmissionsClient {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
}

impl SubmissionsClient {
    pub fn new(transport: Arc<dyn HttpTransport>, cfg: &ClientConfig) -> Self {
        Self {
            transport,
            endpoint: cfg.submission_search_url(),
        }
    }

    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self::new(transport, &ClientConfig::default())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn search(&self, params: &SubmissionSearchParams) -> Result<SubmissionList> {
        super::search(self.transport.as_ref(), &self.endpoint, params).await
    }
}

impl Default for SubmissionsClient {
    fn default() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::default()))
    }
}
