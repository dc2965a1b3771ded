//! Raw records returned by the comments endpoint

use cb_core::Comment;
use serde::Deserialize;

/// A comment-like record as the endpoint returns it.
///
/// jsonplaceholder-style records carry more fields (postId, id, email,
/// body); only `name` is displayed on the board, the rest are tolerated
/// and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommentRecord {
    /// Display string for the board
    pub name: String,
    /// Author address, unused by the board
    #[serde(default)]
    pub email: Option<String>,
    /// Full comment text, unused by the board
    #[serde(default)]
    pub body: Option<String>,
}

impl CommentRecord {
    /// Translate a raw record into the board's comment value
    pub fn into_comment(self) -> Comment {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_minimal_record() {
        let record: CommentRecord = serde_json::from_str(r#"{ "name": "Fetched #1" }"#).unwrap();
        assert_eq!(record.name, "Fetched #1");
        assert_eq!(record.email, None);
    }

    #[test]
    fn test_decodes_full_record_and_ignores_extras() {
        let json = r#"{
            "postId": 1,
            "id": 1,
            "name": "id labore ex et quam laborum",
            "email": "Eliseo@gardner.biz",
            "body": "laudantium enim quasi est"
        }"#;
        let record: CommentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "id labore ex et quam laborum");
        assert_eq!(record.email.as_deref(), Some("Eliseo@gardner.biz"));
    }

    #[test]
    fn test_into_comment_extracts_name() {
        let record: CommentRecord =
            serde_json::from_str(r#"{ "name": "Fetched #2", "body": "ignored" }"#).unwrap();
        assert_eq!(record.into_comment(), "Fetched #2");
    }
}
