use chrono::{DateTime, Utc};
use html_escape::decode_html_entities;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull, TimestampSecondsWithFrac};

use crate::query::{is_false, is_zero};

use super::list::List;

pub type CommentList = List<Comment>;

/// A comment as returned by the comment search endpoint.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub body: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub author: String,
    pub author_fullname: Option<String>,
    pub author_flair_type: Option<String>,
    pub author_flair_text: Option<String>,
    pub author_flair_css_class: Option<String>,
    pub author_flair_background_color: Value,
    pub author_flair_text_color: Value,
    pub author_flair_richtext: Value,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub author_patreon_flair: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subreddit: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subreddit_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub link_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub parent_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub permalink: String,

    #[serde_as(as = "Option<TimestampSecondsWithFrac<f64>>")]
    pub created_utc: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSecondsWithFrac<f64>>")]
    pub retrieved_on: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSecondsWithFrac<f64>>")]
    pub approved_at_utc: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSecondsWithFrac<f64>>")]
    pub banned_at_utc: Option<DateTime<Utc>>,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub score: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_awards_received: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_submitter: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_reddit_media_domain: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub can_mod_post: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub collapsed: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub collapsed_because_crowd_control: bool,
    pub collapsed_reason: Value,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub locked: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub no_follow: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub send_replies: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub stickied: bool,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub all_awardings: Vec<Value>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub awarders: Vec<Value>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub steward_reports: Vec<Value>,
    pub associated_award: Value,
    pub gildings: Value,
    /// `false`, or the unix time of the last edit.
    pub edited: Value,
    pub distinguished: Value,
}

impl Comment {
    pub fn decoded_body(&self) -> String {
        decode_html_entities(&self.body).to_string()
    }

    pub fn reddit_url(&self) -> Option<String> {
        if self.permalink.is_empty() {
            None
        } else {
            Some(format!("https://www.reddit.com{}", self.permalink))
        }
    }
}

/// Query filters for the comment search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentSearchParams {
    #[serde(skip_serializing_if = "is_false")]
    pub over_18: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub reply_delay: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub nest_level: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub sub_reply_delay: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub utc_hour_of_week: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub link_id: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub parent_id: i64,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub sort: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sort_type: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub after: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub before: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub after_id: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub before_id: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub created_utc: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub score: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub gilded: i64,
    #[serde(skip_serializing_if = "is_false")]
    pub edited: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub author: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subreddit: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub distinguished: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub retrieved_on: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub last_updated: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub q: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(skip_serializing_if = "is_false")]
    pub metadata: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub pretty: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: i64,
}
