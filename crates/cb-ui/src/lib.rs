//! cb-ui - TUI library for comment-board
//!
//! This crate provides the component tree and app composition for the
//! comment board.
//!
//! # Overview
//!
//! The TUI provides:
//! - A comment box with a local draft, submitted into the store
//! - A comment list subscribed to the store slice
//! - A fetch trigger that pulls comments from the configured endpoint
//! - Status bar and help popup
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use cb_net::HttpCommentsGateway;
//! use cb_ui::App;
//!
//! let gateway = HttpCommentsGateway::from_config(&config.fetch)?;
//! let mut app = App::new(config.ui, Arc::new(gateway));
//! app.run()?;
//! ```

pub mod app;
pub mod components;
pub mod events;
pub mod theme;

pub use app::{App, AppMode, AppState};
pub use components::{CommentBox, CommentList};
