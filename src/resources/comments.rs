use std::sync::Arc;

use crate::error::Result;
use crate::models::config::ClientConfig;
use crate::models::{CommentList, CommentSearchParams};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Client for `/reddit/comment/search/`.
#[derive(Clone)]
pub struct CommentsClient {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
}

impl CommentsClient {
    pub fn new(transport: Arc<dyn HttpTransport>, cfg: &ClientConfig) -> Self {
        Self {
            transport,
            endpoint: cfg.comment_search_url(),
        }
    }

    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self::new(transport, &ClientConfig::default())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn search(&self, params: &CommentSearchParams) -> Result<CommentList> {
        super::search(self.transport.as_ref(), &self.endpoint, params).await
    }
}

impl Default for CommentsClient {
    fn default() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transport::mock_transport::{MockOutcome, MockTransport};

    fn client_with(mock: &MockTransport) -> CommentsClient {
        CommentsClient::with_transport(Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn test_search_author_over_18_url() {
        let mock = MockTransport::new();
        let client = client_with(&mock);

        let params = CommentSearchParams {
            author: "foo".to_string(),
            over_18: true,
            ..Default::default()
        };
        client.search(&params).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        let (endpoint, query) = requests[0].split_once('?').expect("query string present");
        assert_eq!(endpoint, "https://api.pushshift.io/reddit/comment/search/");
        let mut pairs: Vec<&str> = query.split('&').collect();
        pairs.sort();
        assert_eq!(pairs, vec!["author=foo", "over_18=true"]);
    }

    #[tokio::test]
    async fn test_search_decodes_comments() {
        let mock = MockTransport::with_body(
            r#"{"data":[
                {"id":"e1","body":"first","link_id":"t3_x","score":3},
                {"id":"e2","body":"second","link_id":"t3_x","edited":1531700000}
            ]}"#,
        );
        let client = client_with(&mock);

        let list = client.search(&CommentSearchParams::default()).await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.data[0].body, "first");
        assert_eq!(list.data[0].score, 3);
        assert_eq!(list.data[1].id, "e2");
        assert_eq!(list.data[1].edited, 1531700000);
    }

    #[tokio::test]
    async fn test_search_null_fields_keep_page_intact() {
        let mock = MockTransport::with_body(r#"{"data":[{"id":"c","locked":null},{"id":"d"}]}"#);
        let client = client_with(&mock);

        let list = client.search(&CommentSearchParams::default()).await.unwrap();
        assert_eq!(list.len(), 2);
        assert!(!list.data[0].locked);
    }

    #[tokio::test]
    async fn test_search_body_failure() {
        let mock = MockTransport::new();
        mock.push(MockOutcome::BodyFailure("unexpected eof".to_string()));
        let client = client_with(&mock);

        let result = client.search(&CommentSearchParams::default()).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn test_custom_endpoint_from_config() {
        let mock = MockTransport::new();
        let cfg = ClientConfig {
            base_url: "http://localhost:9000".to_string(),
            ..ClientConfig::default()
        };
        let client = CommentsClient::new(Arc::new(mock.clone()), &cfg);

        let params = CommentSearchParams {
            limit: 2,
            ..Default::default()
        };
        client.search(&params).await.unwrap();
        assert_eq!(
            mock.requests(),
            vec!["http://localhost:9000/reddit/comment/search/?limit=2".to_string()]
        );
    }
}
