//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Terminal;
use tracing::debug;

use nursing_core::ObservationController;

use crate::dialog::{render_dialog, Dialog, DialogKind, DialogSlot};
use crate::error::TuiError;
use crate::footer::render_footer;
use crate::forms::{render_panel, Button, Focus, FormPanel, Tab};
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::styles::ColorTheme;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Tab currently shown.
    pub active_tab: Tab,
    /// Vital-signs form contents and focus.
    pub vitals: FormPanel,
    /// Nursing-notes form contents and focus.
    pub notes: FormPanel,
    /// Modal dialog, if one is open.
    pub dialog: DialogSlot,
    controller: ObservationController,
    theme: ColorTheme,
}

impl TuiApp {
    /// Create a new TUI app around the session's controller.
    #[must_use]
    pub fn new(controller: ObservationController) -> Self {
        Self {
            should_quit: false,
            active_tab: Tab::VitalSigns,
            vitals: FormPanel::vital_signs(),
            notes: FormPanel::nursing_notes(),
            dialog: DialogSlot::default(),
            controller,
            theme: ColorTheme::default(),
        }
    }

    #[must_use]
    pub fn controller(&self) -> &ObservationController {
        &self.controller
    }

    /// Consume the app, handing the controller (and its record) back.
    #[must_use]
    pub fn into_controller(self) -> ObservationController {
        self.controller
    }

    /// The panel of the active tab.
    #[must_use]
    pub fn active_panel(&self) -> &FormPanel {
        match self.active_tab {
            Tab::VitalSigns => &self.vitals,
            Tab::NursingNotes => &self.notes,
        }
    }

    fn active_panel_mut(&mut self) -> &mut FormPanel {
        match self.active_tab {
            Tab::VitalSigns => &mut self.vitals,
            Tab::NursingNotes => &mut self.notes,
        }
    }

    /// Handle a single message (Elm Update).
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
            TuiMessage::Tick => {
                // Tick triggers re-render, nothing to update in model
            }
        }
    }

    /// Handle a keyboard action.
    ///
    /// While a dialog is open it receives every key and the forms receive
    /// none.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        if let Some(kind) = self.dialog.current().map(|d| d.kind) {
            self.handle_dialog_key(kind, action);
            return;
        }

        match action {
            KeyAction::Input(c) => self.active_panel_mut().insert_char(c),
            KeyAction::Backspace => self.active_panel_mut().backspace(),
            KeyAction::Enter => self.handle_enter(),
            KeyAction::NextField => self.active_panel_mut().focus_next(),
            KeyAction::PrevField => self.active_panel_mut().focus_prev(),
            KeyAction::NextTab | KeyAction::PrevTab => {
                self.active_tab = self.active_tab.toggled();
            }
            KeyAction::ShowVitalSigns => self.active_tab = Tab::VitalSigns,
            KeyAction::ShowNotes => self.active_tab = Tab::NursingNotes,
            KeyAction::Save => self.save_active_tab(),
            KeyAction::Close => self.request_close(),
            KeyAction::None => {}
        }
    }

    fn handle_dialog_key(&mut self, kind: DialogKind, action: KeyAction) {
        match (kind, action) {
            (DialogKind::Confirm, KeyAction::Input('y' | 'Y') | KeyAction::Enter) => {
                self.dialog.dismiss();
                self.should_quit = true;
            }
            (DialogKind::Confirm, KeyAction::Input('n' | 'N') | KeyAction::Close)
            | (DialogKind::Info | DialogKind::Error, KeyAction::Enter | KeyAction::Close) => {
                self.dialog.dismiss();
            }
            _ => {}
        }
    }

    fn handle_enter(&mut self) {
        let panel = self.active_panel_mut();
        match panel.focus() {
            Focus::Field(_) if panel.focused_field_is_multiline() => panel.insert_char('\n'),
            Focus::Field(_) => panel.focus_next(),
            Focus::Button(button) => self.press(button),
        }
    }

    /// Activate a button.
    pub fn press(&mut self, button: Button) {
        match button {
            Button::SaveVitalSigns => self.save_vital_signs(),
            Button::SaveNotes => self.save_notes(),
            Button::Back => self.request_close(),
        }
    }

    /// Save whichever form is on screen.
    pub fn save_active_tab(&mut self) {
        match self.active_tab {
            Tab::VitalSigns => self.save_vital_signs(),
            Tab::NursingNotes => self.save_notes(),
        }
    }

    /// Parse and store the vital-signs form; opens the outcome dialog.
    pub fn save_vital_signs(&mut self) {
        let form = self.vitals.vital_signs_form();
        if let Err(err) = self.controller.save_vital_signs(&form, &mut self.dialog) {
            // Already reported to the user by the error dialog.
            debug!(error = %err, "vital signs not saved");
        }
    }

    /// Store the notes form; opens the confirmation dialog.
    pub fn save_notes(&mut self) {
        let form = self.notes.notes_form();
        self.controller.save_notes(&form, &mut self.dialog);
    }

    /// Ask the user whether to close the application.
    pub fn request_close(&mut self) {
        self.dialog.open(Dialog::confirm_close());
    }

    /// Compute the screen layout.
    ///
    /// Returns (header, tabs, body, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(2), // tabs
                Constraint::Min(5),    // active form
                Constraint::Length(2), // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2], outer[3])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let (header_area, tabs_area, body_area, footer_area) = Self::compute_layout(area);

        render_header(frame, header_area, self.controller.observation());

        let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
            .select(self.active_tab.index())
            .style(self.theme.muted_style())
            .highlight_style(self.theme.selected_tab_style())
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(tabs, tabs_area);

        render_panel(frame, body_area, self.active_panel(), &self.theme);

        render_footer(frame, footer_area);

        if let Some(dialog) = self.dialog.current() {
            render_dialog(frame, area, dialog, &self.theme);
        }
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop until the user confirms closing.
    ///
    /// The terminal is restored even when the loop fails.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), TuiError> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            // Poll for events with tick rate timeout
            let msg = if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        TuiMessage::KeyPress(map_key(key))
                    }
                    // Resizes and other events only need a redraw.
                    _ => TuiMessage::Tick,
                }
            } else {
                TuiMessage::Tick
            };
            self.handle_message(msg);
        }

        Ok(())
    }
}
