//! Layout components (main area, status bar)

use crate::platform::{
    ADD_EMAIL_SHORTCUT, QUIT_SHORTCUT, REMOVE_EMAIL_SHORTCUT, VALIDATE_SHORTCUT,
};
use crate::state::ContactForm;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw key hints plus a row count
pub fn draw_status_bar(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let key = Style::default().fg(Color::Cyan);
    let text = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled("Tab", key),
        Span::styled(" next  ", text),
        Span::styled(ADD_EMAIL_SHORTCUT, key),
        Span::styled(" add email  ", text),
    ];
    if form.focused_email().is_some() {
        spans.push(Span::styled(REMOVE_EMAIL_SHORTCUT, key));
        spans.push(Span::styled(" remove  ", text));
    }
    spans.extend([
        Span::styled(VALIDATE_SHORTCUT, key),
        Span::styled(" validate  ", text),
        Span::styled(QUIT_SHORTCUT, key),
        Span::styled(" quit", text),
    ]);

    let rows = form.emails.len();
    spans.push(Span::styled(
        format!("  [{rows} email{}]", if rows == 1 { "" } else { "s" }),
        text,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
