use chrono::{DateTime, Utc};
use html_escape::decode_html_entities;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull, TimestampSecondsWithFrac};

use crate::query::{is_false, is_zero};

use super::list::List;

pub type SubmissionList = List<Submission>;

/// A submission (link or self post) as returned by the submission search endpoint.
///
/// Any field may be missing from a given object; missing fields take their
/// default. Fields with no stable shape upstream are kept as raw JSON.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub selftext: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub author: String,
    pub author_fullname: Option<String>,
    pub author_flair_css_class: Option<String>,
    pub author_flair_text: Option<String>,
    pub author_flair_type: Option<String>,
    pub author_flair_richtext: Value,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub author_patreon_flair: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub author_premium: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subreddit: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subreddit_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subreddit_type: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subreddit_subscribers: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub domain: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub url: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub full_link: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub permalink: String,
    pub thumbnail: Option<String>,
    pub thumbnail_width: Option<i64>,
    pub thumbnail_height: Option<i64>,
    pub post_hint: Option<String>,

    #[serde_as(as = "Option<TimestampSecondsWithFrac<f64>>")]
    pub created_utc: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampSecondsWithFrac<f64>>")]
    pub retrieved_on: Option<DateTime<Utc>>,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub score: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub upvote_ratio: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub num_comments: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub num_crossposts: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_awards_received: i64,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub over_18: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub locked: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub spoiler: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub stickied: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub pinned: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub contest_mode: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_video: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_self: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_meta: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_original_content: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_crosspostable: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_reddit_media_domain: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_robot_indexable: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub media_only: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub can_guild: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub can_mod_post: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub no_follow: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub send_replies: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub allow_live_comments: bool,

    pub whitelist_status: Option<String>,
    pub parent_whitelist_status: Option<String>,
    pub wls: Option<i64>,
    pub pwls: Option<i64>,

    pub link_flair_css_class: Option<String>,
    pub link_flair_text: Option<String>,
    pub link_flair_type: Option<String>,
    pub link_flair_text_color: Option<String>,
    pub link_flair_background_color: Option<String>,
    pub link_flair_richtext: Value,

    pub media: Option<Media>,
    pub secure_media: Option<Media>,
    pub media_embed: Value,
    pub secure_media_embed: Value,
    pub preview: Option<Preview>,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub all_awardings: Vec<Value>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub awarders: Vec<Value>,
    pub gildings: Value,
    pub edited: Value,
    pub distinguished: Value,
}

impl Submission {
    /// Title with HTML entities (`&amp;`, `&lt;`, ...) unescaped.
    pub fn decoded_title(&self) -> String {
        decode_html_entities(&self.title).to_string()
    }

    /// Link to the post on reddit.com, falling back to `full_link` when
    /// there is no permalink.
    pub fn reddit_url(&self) -> Option<String> {
        if !self.permalink.is_empty() {
            Some(format!("https://www.reddit.com{}", self.permalink))
        } else if !self.full_link.is_empty() {
            Some(self.full_link.clone())
        } else {
            None
        }
    }
}

/// Embedded media attached to a submission (`media` / `secure_media`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub oembed: Option<Oembed>,
    pub reddit_video: Value,
}

/// oEmbed metadata for third-party media (YouTube, Gfycat, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Oembed {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub version: Option<String>,
    pub title: Option<String>,
    pub html: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub author_name: Option<String>,
    pub author_url: Option<String>,
    pub provider_name: Option<String>,
    pub provider_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub thumbnail_width: Option<i64>,
    pub thumbnail_height: Option<i64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preview {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub images: Vec<Image>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub enabled: bool,
    pub reddit_video_preview: Value,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub source: Resolution,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub resolutions: Vec<Resolution>,
    pub variants: Value,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resolution {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub url: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub width: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub height: i64,
}

/// Query filters for the submission search endpoint.
///
/// Every field is optional; anything left at its zero value is not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionSearchParams {
    #[serde(skip_serializing_if = "is_false")]
    pub over_18: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub locked: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub spoiler: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub stickied: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub contest_mode: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_video: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_self: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_original_content: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_crosspostable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub can_guild: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub selftext: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub num_comments: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub num_crossposts: i64,

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
