//! Modal dialogs drawn over the active tab.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use nursing_core::constants::messages;
use nursing_core::FeedbackPresenter;

use crate::styles::ColorTheme;

/// What a dialog asks of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Acknowledge a successful save.
    Info,
    /// Acknowledge a rejected save.
    Error,
    /// Answer yes or no to closing the application.
    Confirm,
}

/// A dialog with its title and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub body: String,
}

impl Dialog {
    #[must_use]
    pub fn info(title: &str, body: &str) -> Self {
        Self {
            kind: DialogKind::Info,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[must_use]
    pub fn error(title: &str, body: &str) -> Self {
        Self {
            kind: DialogKind::Error,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    /// The yes/no prompt shown before the application closes.
    #[must_use]
    pub fn confirm_close() -> Self {
        Self {
            kind: DialogKind::Confirm,
            title: messages::CONFIRM_TITLE.to_string(),
            body: messages::CONFIRM_CLOSE.to_string(),
        }
    }
}

/// Holds the dialog currently on screen, if any.
///
/// Implements `FeedbackPresenter` so save commands open their dialogs
/// directly.
#[derive(Debug, Default)]
pub struct DialogSlot {
    current: Option<Dialog>,
}

impl DialogSlot {
    /// Show `dialog`, replacing whatever was open.
    pub fn open(&mut self, dialog: Dialog) {
        self.current = Some(dialog);
    }

    /// Close the open dialog.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<&Dialog> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

impl FeedbackPresenter for DialogSlot {
    fn present_info(&mut self, title: &str, body: &str) {
        self.open(Dialog::info(title, body));
    }

    fn present_error(&mut self, title: &str, body: &str) {
        self.open(Dialog::error(title, body));
    }
}

/// Compute a rect of `width` x `height` centered in `area`, clamped to it.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let row = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area)[0];
    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(row)[0]
}

/// Render `dialog` on top of whatever is already in `area`.
pub fn render_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog, theme: &ColorTheme) {
    let (border, hint) = match dialog.kind {
        DialogKind::Info => (theme.success_style(), "Enter: OK"),
        DialogKind::Error => (theme.error_style(), "Enter: OK"),
        DialogKind::Confirm => (theme.warning_style(), "y: Yes | n: No"),
    };

    let popup = centered_rect(area, 44, 7);
    let text = vec![
        Line::raw(""),
        Line::from(Span::styled(dialog.body.as_str(), theme.text_style())),
        Line::raw(""),
        Line::from(Span::styled(hint, theme.muted_style())),
    ];

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", dialog.title)),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
