//! Per-channel read receipts.
//!
//! Viewing a channel records the current instant; a channel has unread
//! posts when any post in it is newer than that instant. State is a
//! flat JSON map in a small file next to the config — optimistic and
//! local, nothing is reported back to the server.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::models::{Channel, Post};

/// Tracks when each channel was last viewed.
#[derive(Debug)]
pub struct ReadTracker {
    path: PathBuf,
    last_read: HashMap<String, DateTime<Utc>>,
}

impl ReadTracker {
    /// Load read state from a file.
    ///
    /// A missing file starts empty (every channel with posts reads as
    /// unread); a corrupt file is discarded with a warning rather than
    /// blocking the client.
    pub fn load(path: &Path) -> Self {
        let last_read = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(%e, "Discarding unreadable read state");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self {
            path: path.to_path_buf(),
            last_read,
        }
    }

    /// When the channel was last viewed, if ever.
    pub fn last_read(&self, channel: Channel) -> Option<DateTime<Utc>> {
        self.last_read.get(channel.as_str()).copied()
    }

    /// Record that the channel was viewed now and persist the state.
    pub fn mark_read(&mut self, channel: Channel) -> std::io::Result<()> {
        self.mark_read_at(channel, Utc::now())
    }

    /// Record a specific view instant (separated out for tests).
    pub fn mark_read_at(
        &mut self,
        channel: Channel,
        instant: DateTime<Utc>,
    ) -> std::io::Result<()> {
        self.last_read.insert(channel.as_str().to_string(), instant);
        let json = serde_json::to_string_pretty(&self.last_read)?;
        std::fs::write(&self.path, json)
    }

    /// Whether the channel holds posts newer than its last view.
    ///
    /// A never-viewed channel is unread as soon as it has any post.
    pub fn has_unread(&self, channel: Channel, posts: &[Post]) -> bool {
        let mut channel_posts = posts.iter().filter(|p| p.in_channel(channel));
        match self.last_read(channel) {
            Some(instant) => channel_posts.any(|p| p.timestamp > instant),
            None => channel_posts.next().is_some(),
        }
    }
}
