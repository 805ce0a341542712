pub mod channel;
pub mod post;

pub use channel::Channel;
pub use post::{NewPost, Post};
