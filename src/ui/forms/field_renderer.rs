//! Field rendering utilities for forms

use crate::state::{FormField, Validity};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input (3) plus its error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a text field with its title and the error slot below it
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, title: &str, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Error text
        ])
        .split(area);

    let border_color = match (is_active, field.validity) {
        (true, _) => Color::Cyan,
        (false, Validity::Invalid) => Color::Red,
        (false, Validity::Valid) => Color::Green,
        (false, Validity::Unchecked) => Color::DarkGray,
    };

    let value_style = if field.as_text().is_empty() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(field.display_value(), value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(content.block(block), chunks[0]);

    if let Some(error) = &field.error {
        let error_line = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(error_line, chunks[1]);
    }
}
