//! comment-board - Comment Board CLI
//!
//! A terminal comment board backed by a single-slice store and an external
//! comments endpoint.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the TUI
//! comment-board run
//!
//! # One-shot fetch, printed to stdout
//! comment-board fetch
//!
//! # Inspect the configuration
//! comment-board config show
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
