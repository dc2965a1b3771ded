//! Event handling

use cb_core::Comment;
use crossterm::event::KeyEvent;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Input(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick
    Tick,
    /// A comments fetch resolved
    FetchResolved(Vec<Comment>),
    /// A comments fetch failed
    FetchFailed(String),
}
