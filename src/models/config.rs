use anyhow::Result;

pub const DEFAULT_BASE_URL: &str = "https://api.pushshift.io";
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Per-request timeout handed to the HTTP client. `None` leaves the
    /// transport's own default in place.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("PUSHSHIFT_BASE_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let user_agent = std::env::var("PUSHSHIFT_USER_AGENT")
            .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let request_timeout_secs = std::env::var("PUSHSHIFT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0);

        Ok(Self {
            base_url,
            user_agent,
            request_timeout_secs,
        })
    }

    pub fn submission_search_url(&self) -> String {
        format!("{}/reddit/submission/search/", self.base_url)
    }

    pub fn comment_search_url(&self) -> String {
        format!("{}/reddit/comment/search/", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.pushshift.io");
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn test_default_user_agent_names_crate() {
        let config = ClientConfig::default();
        assert!(config.user_agent.starts_with("pushshift/"));
        assert!(config.user_agent.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_default_endpoints() {
        let config = ClientConfig::default();
        assert_eq!(
            config.submission_search_url(),
            "https://api.pushshift.io/reddit/submission/search/"
        );
        assert_eq!(
            config.comment_search_url(),
            "https://api.pushshift.io/reddit/comment/search/"
        );
    }

    #[test]
    fn test_endpoints_follow_base_url() {
        let config = ClientConfig {
            base_url: "http://localhost:8080".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(
            config.comment_search_url(),
            "http://localhost:8080/reddit/comment/search/"
        );
    }
}
