//! UI components
//!
//! Each component exposes its interactive controls as descriptors with
//! stable selectors, so drivers and integration tests can count and
//! activate them without coupling to widget internals.

pub mod comment_box;
pub mod comment_list;

pub use comment_box::CommentBox;
pub use comment_list::CommentList;

/// Selector for the draft text input
pub const COMMENT_INPUT: &str = "comment-input";
/// Selector for the submit button
pub const SAVE_COMMENT_BUTTON: &str = "save-comment";
/// Selector for the fetch trigger
pub const FETCH_COMMENTS_BUTTON: &str = "fetch-comments";

/// Kind of interactive control a component exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Free-text entry
    TextInput,
    /// Activatable button
    Button,
}

/// Descriptor for an interactive control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    /// What the control is
    pub kind: ControlKind,
    /// Stable selector a driver can address it by
    pub selector: &'static str,
}

impl Control {
    /// Create a text input descriptor
    pub fn text_input(selector: &'static str) -> Self {
        Self {
            kind: ControlKind::TextInput,
            selector,
        }
    }

    /// Create a button descriptor
    pub fn button(selector: &'static str) -> Self {
        Self {
            kind: ControlKind::Button,
            selector,
        }
    }
}
