//! # nursing-tui
//!
//! Tabbed terminal forms for vital signs and nursing notes, built with
//! ratatui in the Elm architecture. All record logic lives in
//! `nursing-core`; this crate only edits text and shows dialogs.

pub mod dialog;
pub mod error;
pub mod footer;
pub mod forms;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod styles;

pub use dialog::{Dialog, DialogKind, DialogSlot};
pub use error::TuiError;
pub use forms::{Button, Focus, FormPanel, Tab};
pub use keymap::KeyAction;
pub use messages::TuiMessage;
pub use model::TuiApp;
