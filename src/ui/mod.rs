//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
pub mod modal;

#[cfg(test)]
mod test_support;

use crate::app::App;
use crate::state::ContactForm;
use components::render_notification_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    draw_form_screen(frame, &app.form);

    if let Some(notification) = app.notifications.current() {
        render_notification_dialog(frame, notification);
    }
}

/// Draw the form and status bar without any overlay
pub fn draw_form_screen(frame: &mut Frame, form: &ContactForm) {
    let (main_area, status_area) = layout::create_layout(frame.area());
    forms::draw_contact_form(frame, main_area, form);
    layout::draw_status_bar(frame, status_area, form);
}
