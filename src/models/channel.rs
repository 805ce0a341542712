//! The fixed topic channels posts are tagged into.

use std::fmt;
use std::str::FromStr;

/// A topic channel.
///
/// The feed has exactly five channels; posts carry channel names in
/// their `tags` field. Channels are fixed — the server neither creates
/// nor deletes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Timeline,
    Discussion,
    Docs,
    Neurotech,
    Sources,
}

impl Channel {
    /// All channels, in display order.
    pub const ALL: [Channel; 5] = [
        Channel::Timeline,
        Channel::Discussion,
        Channel::Docs,
        Channel::Neurotech,
        Channel::Sources,
    ];

    /// The tag string used on the wire and in the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Timeline => "timeline",
            Channel::Discussion => "discussion",
            Channel::Docs => "docs",
            Channel::Neurotech => "neurotech",
            Channel::Sources => "sources",
        }
    }

    /// The pinned description shown at the top of the channel.
    pub fn description(&self) -> &'static str {
        match self {
            Channel::Timeline => "everything goes here. this is the main feed.",
            Channel::Discussion => "general chat for anything and everything",
            Channel::Docs => "documentation and longer form writing lives here",
            Channel::Neurotech => "discoveries about cognition and productivity",
            Channel::Sources => "interesting links and resources",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timeline" => Ok(Channel::Timeline),
            "discussion" => Ok(Channel::Discussion),
            "docs" => Ok(Channel::Docs),
            "neurotech" => Ok(Channel::Neurotech),
            "sources" => Ok(Channel::Sources),
            _ => Err(UnknownChannel(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized channel name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChannel(pub String);

impl fmt::Display for UnknownChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown channel '{}' (expected one of: timeline, discussion, docs, neurotech, sources)",
            self.0
        )
    }
}

impl std::error::Error for UnknownChannel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_channels() {
        for channel in Channel::ALL {
            let parsed: Channel = channel.as_str().parse().unwrap();
            assert_eq!(parsed, channel);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Timeline".parse::<Channel>().unwrap(), Channel::Timeline);
        assert_eq!("  DOCS ".parse::<Channel>().unwrap(), Channel::Docs);
    }

    #[test]
    fn test_parse_unknown_channel() {
        let err = "general".parse::<Channel>().unwrap_err();
        assert!(err.to_string().contains("unknown channel 'general'"));
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for channel in Channel::ALL {
            assert!(seen.insert(channel.description()));
        }
    }
}
