//! Comment entry component
//!
//! Holds the draft string. The draft is owned exclusively by this
//! component: submitting copies the value into the dispatched action, it
//! is never shared by reference with the slice.

use cb_core::{save_comment, Action};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme::Theme;

use super::{Control, COMMENT_INPUT, FETCH_COMMENTS_BUTTON, SAVE_COMMENT_BUTTON};

/// Stateful entry box for new comments
#[derive(Debug, Clone, Default)]
pub struct CommentBox {
    draft: String,
}

impl CommentBox {
    /// Create a box with an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft text
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft with the new raw text verbatim.
    ///
    /// No trimming, no length cap.
    pub fn input(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Dispatch the draft as a `SaveComment` action, then clear it.
    ///
    /// The action carries the pre-reset value; the reset happens in the
    /// same handling step, after the dispatch.
    pub fn submit(&mut self, dispatch: &mut dyn FnMut(Action)) {
        let action = save_comment(self.draft.clone());
        dispatch(action);
        self.draft.clear();
    }

    /// Interactive controls: one text input and two buttons
    pub fn controls(&self) -> [Control; 3] {
        [
            Control::text_input(COMMENT_INPUT),
            Control::button(SAVE_COMMENT_BUTTON),
            Control::button(FETCH_COMMENTS_BUTTON),
        ]
    }

    /// Render the entry block: draft line plus the button row
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let border = if focused {
            theme.focus_border
        } else {
            theme.unfocus_border
        };
        let block = Block::default()
            .title("New Comment")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        frame.render_widget(
            Paragraph::new(self.draft.as_str()).style(Style::default().fg(theme.text)),
            rows[0],
        );

        let buttons = Line::from(vec![
            Span::styled("[ Save ]", Style::default().fg(theme.accent)),
            Span::raw("  "),
            Span::styled("[ Fetch Comments ]", Style::default().fg(theme.accent)),
        ]);
        frame.render_widget(Paragraph::new(buttons), rows[1]);

        if focused {
            let cursor_x = inner
                .x
                .saturating_add(self.draft.chars().count() as u16)
                .min(inner.x + inner.width.saturating_sub(1));
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }
}
