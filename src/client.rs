use std::sync::Arc;

use crate::models::config::ClientConfig;
use crate::resources::{CommentsClient, SubmissionsClient};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Entry point bundling the submission and comment search clients.
///
/// `PushShift::default()` is ready to use; both sub-clients share one
/// transport.
///
/// # Example
/// ```no_run
/// use pushshift::models::CommentSearchParams;
/// use pushshift::PushShift;
///
/// # #[tokio::main]
/// # async fn main() -> pushshift::Result<()> {
/// let ps = PushShift::default();
/// let params = CommentSearchParams {
///     subreddit: "rust".to_string(),
///     limit: 10,
///     ..Default::default()
/// };
/// for comment in ps.comments.search(&params).await? {
///     println!("{}: {}", comment.author, comment.decoded_body());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PushShift {
    pub submissions: SubmissionsClient,
    pub comments: CommentsClient,
}

impl PushShift {
    pub fn new() -> Self {
        Self::from_config(&ClientConfig::default())
    }

    pub fn from_config(cfg: &ClientConfig) -> Self {
        Self::with_transport_and_config(Arc::new(ReqwestTransport::from_config(cfg)), cfg)
    }

    /// Use a caller-supplied transport (a mock, or a preconfigured client).
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_transport_and_config(transport, &ClientConfig::default())
    }

    pub fn with_transport_and_config(
        transport: Arc<dyn HttpTransport>,
        cfg: &ClientConfig,
    ) -> Self {
        Self {
            submissions: SubmissionsClient::new(transport.clone(), cfg),
            comments: CommentsClient::new(transport, cfg),
        }
    }
}

impl Default for PushShift {
    fn default() -> Self {
        Self::new()
    }
}
