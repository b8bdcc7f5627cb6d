//! Errors raised by the terminal front-end.

use std::io;

/// Error type for the TUI.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    /// The terminal could not be set up, drawn to, or restored.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
