//! cb-net - Comments gateway for comment-board
//!
//! Talks to the external comments collection endpoint: a single GET
//! returning a JSON array of comment-like records. The fetch is
//! fire-and-forget; resolution is handed to a continuation and the caller
//! keeps a cancellable handle.

pub mod error;
pub mod fetch;
pub mod gateway;
pub mod record;

pub use error::NetError;
pub use fetch::{fetch_comments, FetchHandle};
pub use gateway::{CommentsGateway, HttpCommentsGateway};
pub use record::CommentRecord;
