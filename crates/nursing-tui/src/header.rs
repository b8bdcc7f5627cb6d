//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use nursing_core::constants::APP_TITLE;
use nursing_core::PatientObservation;

/// Render the header panel with the patient identifier and record time.
pub fn render_header(frame: &mut Frame, area: Rect, observation: &PatientObservation) {
    let text = vec![Line::from(vec![
        Span::styled("Patient ", Style::default().fg(Color::Cyan)),
        Span::raw(observation.id().to_string()),
        Span::raw(format!(
            " | Opened {}",
            observation.created_at().format("%Y-%m-%d %H:%M UTC")
        )),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(format!(" {APP_TITLE} "));

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn render_header_shows_title_and_patient_id() {
        let observation = PatientObservation::new("12345");
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, &observation);
            })
            .unwrap();

        let content: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|pos| buf.buffer[pos].symbol().to_string())
            .collect();
        assert!(content.contains("Nursing Record System"));
        assert!(content.contains("12345"));
    }
}
