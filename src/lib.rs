//! Pack - terminal client for the pack social feed.
//!
//! Browse posts by channel, compose new posts with optional two-tone
//! dithered image attachments, and track read state per channel.
//! This library exposes modules for integration testing.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod theme;
