//! Comments reducer
//!
//! Pure function mapping (current slice, action) to the next slice. The
//! input slice is never mutated; every path returns a fresh vector.

use crate::action::Action;
use crate::types::Comment;

/// Compute the next comments slice.
///
/// `SaveComment` appends its payload, `CommentsFetched` appends the whole
/// collection in payload order, and any action the slice does not recognize
/// returns the input unchanged: no panic, no error.
pub fn reduce(state: &[Comment], action: &Action) -> Vec<Comment> {
    match action {
        Action::SaveComment(comment) => {
            let mut next = state.to_vec();
            next.push(comment.clone());
            next
        }
        Action::CommentsFetched(comments) => {
            let mut next = state.to_vec();
            next.extend(comments.iter().cloned());
            next
        }
        // Not a slice mutation; identity return.
        Action::FetchStarted => state.to_vec(),
    }
}
