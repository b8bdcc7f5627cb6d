//! Tab definitions, editable text fields, and form panels.
//!
//! A `FormPanel` is a column of labelled text fields followed by a row of
//! buttons. Focus walks fields first, then buttons, and wraps around.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use nursing_core::{NotesForm, VitalSignsForm};

use crate::styles::ColorTheme;

/// The two tabs of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    VitalSigns,
    NursingNotes,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::VitalSigns, Tab::NursingNotes];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::VitalSigns => "Vital Signs",
            Self::NursingNotes => "Nursing Notes",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::VitalSigns => 0,
            Self::NursingNotes => 1,
        }
    }

    /// The other tab. With two tabs, next and previous coincide.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::VitalSigns => Self::NursingNotes,
            Self::NursingNotes => Self::VitalSigns,
        }
    }
}

/// Buttons that can appear on a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    SaveVitalSigns,
    Back,
    SaveNotes,
}

impl Button {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SaveVitalSigns => "Save Vital Signs",
            Self::Back => "Back",
            Self::SaveNotes => "Save Notes",
        }
    }
}

/// A labelled text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub label: &'static str,
    pub value: String,
    pub multiline: bool,
}

impl TextField {
    #[must_use]
    pub fn single_line(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            multiline: false,
        }
    }

    #[must_use]
    pub fn multi_line(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            multiline: true,
        }
    }

    /// Rows the field occupies on screen, borders included.
    #[must_use]
    pub fn height(&self) -> u16 {
        if self.multiline {
            6
        } else {
            3
        }
    }
}

/// What currently has keyboard focus on a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Button(Button),
}

const BLOOD_PRESSURE: usize = 0;
const TEMPERATURE: usize = 1;
const HEART_RATE: usize = 2;
const RESPIRATORY_RATE: usize = 3;
const OXYGEN_SATURATION: usize = 4;

const COMPLAINTS: usize = 0;
const OBSERVATIONS: usize = 1;

/// A column of fields followed by a row of buttons.
#[derive(Debug, Clone)]
pub struct FormPanel {
    fields: Vec<TextField>,
    buttons: Vec<Button>,
    focus: usize,
}

impl FormPanel {
    /// The vital-signs form: five single-line fields, save and back buttons.
    #[must_use]
    pub fn vital_signs() -> Self {
        Self {
            fields: vec![
                TextField::single_line("Blood Pressure"),
                TextField::single_line("Temperature"),
                TextField::single_line("Heart Rate"),
                TextField::single_line("Respiratory Rate"),
                TextField::single_line("O2 Saturation"),
            ],
            buttons: vec![Button::SaveVitalSigns, Button::Back],
            focus: 0,
        }
    }

    /// The notes form: two multi-line fields and a save button.
    #[must_use]
    pub fn nursing_notes() -> Self {
        Self {
            fields: vec![
                TextField::multi_line("Complaints"),
                TextField::multi_line("Observations"),
            ],
            buttons: vec![Button::SaveNotes],
            focus: 0,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Text of the field at `index`, empty if there is no such field.
    #[must_use]
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", |f| f.value.as_str())
    }

    /// Replace the text of the field at `index`.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        if self.focus < self.fields.len() {
            Focus::Field(self.focus)
        } else {
            Focus::Button(self.buttons[self.focus - self.fields.len()])
        }
    }

    fn focus_len(&self) -> usize {
        self.fields.len() + self.buttons.len()
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.focus_len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.focus_len() - 1) % self.focus_len();
    }

    /// Move focus onto `button` if the panel has it.
    pub fn focus_button(&mut self, button: Button) {
        if let Some(pos) = self.buttons.iter().position(|&b| b == button) {
            self.focus = self.fields.len() + pos;
        }
    }

    fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus() {
            Focus::Field(i) => self.fields.get_mut(i),
            Focus::Button(_) => None,
        }
    }

    /// Append `c` to the focused field. Ignored when a button has focus.
    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focused_field_mut() {
            field.value.push(c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.value.pop();
        }
    }

    /// Whether Enter should insert a line break rather than act.
    #[must_use]
    pub fn focused_field_is_multiline(&self) -> bool {
        match self.focus() {
            Focus::Field(i) => self.fields[i].multiline,
            Focus::Button(_) => false,
        }
    }

    /// Snapshot of the vital-signs fields. Only meaningful on the panel
    /// built by [`FormPanel::vital_signs`].
    #[must_use]
    pub fn vital_signs_form(&self) -> VitalSignsForm {
        VitalSignsForm {
            blood_pressure: self.value(BLOOD_PRESSURE).to_string(),
            temperature: self.value(TEMPERATURE).to_string(),
            heart_rate: self.value(HEART_RATE).to_string(),
            respiratory_rate: self.value(RESPIRATORY_RATE).to_string(),
            oxygen_saturation: self.value(OXYGEN_SATURATION).to_string(),
        }
    }

    /// Snapshot of the notes fields. Only meaningful on the panel built by
    /// [`FormPanel::nursing_notes`].
    #[must_use]
    pub fn notes_form(&self) -> NotesForm {
        NotesForm {
            complaints: self.value(COMPLAINTS).to_string(),
            observations: self.value(OBSERVATIONS).to_string(),
        }
    }
}

/// Render a panel: fields top to bottom, then the button row.
pub fn render_panel(frame: &mut Frame, area: Rect, panel: &FormPanel, theme: &ColorTheme) {
    let mut constraints: Vec<Constraint> = panel
        .fields
        .iter()
        .map(|f| Constraint::Length(f.height()))
        .collect();
    constraints.push(Constraint::Length(1)); // spacer
    constraints.push(Constraint::Length(1)); // buttons
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let focus = panel.focus();
    for (i, field) in panel.fields.iter().enumerate() {
        let focused = focus == Focus::Field(i);
        render_field(frame, rows[i], field, focused, theme);
    }

    let mut spans = Vec::new();
    for (i, &button) in panel.buttons.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let focused = focus == Focus::Button(button);
        spans.push(Span::styled(
            format!("[ {} ]", button.label()),
            theme.button_style(focused),
        ));
    }
    let buttons_row = rows[panel.fields.len() + 1];
    frame.render_widget(Paragraph::new(Line::from(spans)), buttons_row);
}

/// Render one field, placing the cursor at the end of its text when focused.
#[allow(clippy::cast_possible_truncation)]
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: &TextField,
    focused: bool,
    theme: &ColorTheme,
) {
    let border = if focused {
        theme.focus_style()
    } else {
        theme.border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", field.label));
    let inner = block.inner(area);

    // Keep the last line in view as a multi-line field grows.
    let line_count = field.value.split('\n').count();
    let scroll = line_count.saturating_sub(inner.height.max(1) as usize) as u16;

    let paragraph = Paragraph::new(field.value.as_str())
        .style(theme.text_style())
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let last_line = field.value.rsplit('\n').next().unwrap_or("");
        let col = (last_line.chars().count() as u16).min(inner.width - 1);
        let row = (line_count as u16)
            .saturating_sub(1)
            .saturating_sub(scroll)
            .min(inner.height - 1);
        frame.set_cursor_position(Position::new(inner.x + col, inner.y + row));
    }
}
