//! Contact form rendering: name, email rows and the action buttons

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::state::{ContactForm, Focus, FormButton};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the whole form inside `area`
pub fn draw_contact_form(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let block = Block::default()
        .title(" Contact Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .split(inner);

    draw_fields(frame, chunks[0], form);
    draw_buttons(frame, chunks[1], form);
}

/// Draw the name field followed by as many email rows as fit, scrolled so
/// the focused field stays visible
fn draw_fields(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let capacity = (area.height / FIELD_HEIGHT) as usize;
    if capacity == 0 {
        return;
    }

    // Index 0 is the name field, rows follow in display order
    let total = 1 + form.emails.len();
    let focus_index = match form.focus {
        Focus::Name => 0,
        Focus::Email(id) => form.emails.position(id).map_or(0, |p| p + 1),
        Focus::Buttons => total - 1,
    };
    let offset = scroll_offset(focus_index, capacity, total);

    let visible = capacity.min(total - offset);
    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); visible];
    constraints.push(Constraint::Min(0));
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (slot, index) in (offset..offset + visible).enumerate() {
        if index == 0 {
            draw_field(
                frame,
                slots[slot],
                &form.name,
                &form.name.label,
                form.focus == Focus::Name,
            );
            continue;
        }

        let Some(id) = form.emails.id_at(index - 1) else {
            continue;
        };
        if let Some(entry) = form.emails.get(id) {
            let title = format!("{} ({index})", entry.field.label);
            draw_field(
                frame,
                slots[slot],
                &entry.field,
                &title,
                form.focus == Focus::Email(id),
            );
        }
    }

    if form.emails.is_empty() && visible < capacity {
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("No email addresses yet. Use ", Style::default().fg(Color::DarkGray)),
            Span::styled("Add Email", Style::default().fg(Color::Cyan)),
            Span::styled(" to add one.", Style::default().fg(Color::DarkGray)),
        ]));
        frame.render_widget(hint, slots[visible]);
    }
}

/// First visible field index so that `focus_index` is on screen
fn scroll_offset(focus_index: usize, capacity: usize, total: usize) -> usize {
    if total <= capacity || focus_index < capacity {
        return 0;
    }
    (focus_index + 1 - capacity).min(total - capacity)
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(15), // Add Email
            Constraint::Length(1),  // Gap
            Constraint::Length(14), // Validate
            Constraint::Min(0),
        ])
        .split(area);

    let focused = form.is_buttons_row_active();
    for (button, chunk) in FormButton::ALL.iter().zip([chunks[0], chunks[2]]) {
        let accent = match button {
            FormButton::AddEmail => Color::Cyan,
            FormButton::Validate => Color::Green,
        };
        render_button(
            frame,
            chunk,
            button.label(),
            focused && form.selected_button == *button,
            accent,
        );
    }
}
