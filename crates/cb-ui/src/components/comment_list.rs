//! Comment list component
//!
//! Stateless with respect to its own data: the component holds the current
//! slice value, refreshed by the store subscription, and renders one item
//! per entry in slice order. Position is the only key; entries are
//! immutable once appended and never reordered.

use std::cell::RefCell;
use std::rc::Rc;

use cb_core::{Comment, Store, SubscriptionId};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::theme::Theme;

/// List view over the comments slice
pub struct CommentList {
    comments: Rc<RefCell<Vec<Comment>>>,
    subscription: Option<SubscriptionId>,
}

impl CommentList {
    /// Subscribe to the store and seed the view with the current slice
    pub fn mount(store: &mut Store) -> Self {
        let comments = Rc::new(RefCell::new(store.comments().to_vec()));
        let shared = Rc::clone(&comments);
        let subscription = store.subscribe(move |slice| {
            *shared.borrow_mut() = slice.to_vec();
        });
        Self {
            comments,
            subscription: Some(subscription),
        }
    }

    /// Drop the store subscription; the view keeps its last slice value
    pub fn unmount(&mut self, store: &mut Store) {
        if let Some(id) = self.subscription.take() {
            store.unsubscribe(id);
        }
    }

    /// Current items, in slice order
    pub fn items(&self) -> Vec<Comment> {
        self.comments.borrow().clone()
    }

    /// Number of rendered list items
    pub fn len(&self) -> usize {
        self.comments.borrow().len()
    }

    /// Whether the list has no items
    pub fn is_empty(&self) -> bool {
        self.comments.borrow().is_empty()
    }

    /// Render one list item per comment, in order, from `scroll_offset`
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        focused: bool,
        scroll_offset: usize,
    ) {
        let comments = self.comments.borrow();
        let border = if focused {
            theme.focus_border
        } else {
            theme.unfocus_border
        };
        let items: Vec<ListItem> = comments
            .iter()
            .skip(scroll_offset)
            .map(|comment| ListItem::new(comment.clone()))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("Comments ({})", comments.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .style(Style::default().fg(theme.text));
        frame.render_widget(list, area);
    }
}

impl std::fmt::Debug for CommentList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentList")
            .field("items", &self.comments.borrow().len())
            .field("mounted", &self.subscription.is_some())
            .finish()
    }
}
