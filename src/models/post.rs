//! Wire types for the remote posts API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Channel;

/// A post as returned by the remote API.
///
/// Unknown fields are tolerated; the server owns the schema and this
/// client only reads what it renders.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Post {
    pub id: String,
    pub content: String,
    pub user: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub readers: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub system: bool,
}

impl Post {
    /// Whether this post is tagged into the given channel.
    pub fn in_channel(&self, channel: Channel) -> bool {
        self.tags.iter().any(|t| t == channel.as_str())
    }

    /// Human-friendly age of the post relative to `now`.
    ///
    /// "just now" under a minute, then minutes, hours and days, and a
    /// plain `dd-mm-yyyy` date once the post is more than a week old.
    pub fn format_age(&self, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(self.timestamp);

        let minutes = elapsed.num_minutes();
        if minutes < 1 {
            return "just now".to_string();
        }
        if minutes < 60 {
            return format!("{} {} ago", minutes, plural(minutes, "minute"));
        }

        let hours = elapsed.num_hours();
        if hours < 24 {
            return format!("{} {} ago", hours, plural(hours, "hour"));
        }

        let days = elapsed.num_days();
        if days < 7 {
            return format!("{} {} ago", days, plural(days, "day"));
        }

        self.timestamp.format("%d-%m-%Y").to_string()
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}

/// An outgoing post submission.
///
/// Optional fields are omitted from the JSON body entirely when absent;
/// the server fills in `id` and returns the stored [`Post`].
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub content: String,
    pub user: String,
    pub tags: Vec<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl NewPost {
    /// Compose a post into a single channel, stamped with the current time.
    pub fn new(content: impl Into<String>, user: impl Into<String>, channel: Channel) -> Self {
        Self {
            content: content.into(),
            user: user.into(),
            tags: vec![channel.as_str().to_string()],
            timestamp: Utc::now(),
            image: None,
            parent_id: None,
        }
    }

    /// Attach an encoded image payload.
    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }

    /// Thread this post as a reply to another.
    pub fn with_parent(mut self, parent_id: String) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}
