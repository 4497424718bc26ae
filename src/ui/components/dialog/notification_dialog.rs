//! Pass/fail notification dialog

use super::base::{render_dialog, DialogConfig};
use crate::interaction::{Notification, Outcome};
use chrono::Local;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the notification overlay centered on the screen
pub fn render_notification_dialog(frame: &mut Frame, notification: &Notification) {
    let (title, color) = match notification.outcome {
        Outcome::Success => ("Form Valid", Color::Green),
        Outcome::Failure => ("Form Invalid", Color::Red),
    };

    let issued = notification
        .issued_at
        .with_timezone(&Local)
        .format("%H:%M:%S")
        .to_string();

    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss  "),
        Span::styled(issued, Style::default().fg(Color::DarkGray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: color,
            border_color: color,
            message: &notification.message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
