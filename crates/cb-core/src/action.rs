//! Actions and action creators
//!
//! An action is a tagged record describing an intended state change. The
//! comments reducer recognizes `SaveComment` and `CommentsFetched`;
//! everything else passes through it untouched.

use crate::types::Comment;

/// State-change descriptor dispatched through the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a single comment to the slice
    SaveComment(Comment),
    /// A fetch was issued. Carries no data; the comments reducer ignores it.
    FetchStarted,
    /// A fetch resolved; append the collection in payload order
    CommentsFetched(Vec<Comment>),
}

impl Action {
    /// Stable tag for logging and diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SaveComment(_) => "save_comment",
            Action::FetchStarted => "fetch_started",
            Action::CommentsFetched(_) => "comments_fetched",
        }
    }
}

/// Wrap the given text as a `SaveComment` action.
///
/// No validation: the empty string is a legal payload.
pub fn save_comment(text: impl Into<Comment>) -> Action {
    Action::SaveComment(text.into())
}

/// Wrap a resolved fetch result as a `CommentsFetched` action
pub fn comments_fetched(comments: Vec<Comment>) -> Action {
    Action::CommentsFetched(comments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_comment_wraps_text() {
        let action = save_comment("new comment");
        assert_eq!(action, Action::SaveComment("new comment".to_string()));
    }

    #[test]
    fn test_save_comment_accepts_empty_payload() {
        let action = save_comment("");
        assert_eq!(action, Action::SaveComment(String::new()));
    }

    #[test]
    fn test_comments_fetched_wraps_collection() {
        let action = comments_fetched(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            action,
            Action::CommentsFetched(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_action_kind() {
        assert_eq!(save_comment("x").kind(), "save_comment");
        assert_eq!(Action::FetchStarted.kind(), "fetch_started");
        assert_eq!(comments_fetched(Vec::new()).kind(), "comments_fetched");
    }
}
