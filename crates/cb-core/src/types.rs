//! Core type definitions for comment-board

use std::fmt;

/// A single comment.
///
/// Comments carry no identifier, timestamp, or author; the display text is
/// the whole value and list position is the only ordering key.
pub type Comment = String;

/// Identifier handed out by [`crate::Store::subscribe`]
///
/// Opaque to callers; pass it back to `unsubscribe` to drop the
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub_{}", self.0)
    }
}
