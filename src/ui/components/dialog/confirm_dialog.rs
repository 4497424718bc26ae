//! Confirmation dialog component for destructive actions

use super::base::{render_dialog, DialogConfig};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Selection state of an open confirmation dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfirmDialogState {
    /// true when "Delete" is highlighted; starts on "Cancel"
    pub selected_option: bool,
}

impl ConfirmDialogState {
    /// Feed a key to the dialog. Returns the answer once the user gives one.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.selected_option = !self.selected_option;
                None
            }
            KeyCode::Enter => Some(self.selected_option),
            // Ctrl+C quits everywhere else; here it backs out of the removal
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(false),
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(false),
            _ => None,
        }
    }
}

/// Render a confirmation dialog asking `message`
pub fn render_confirm_dialog(frame: &mut Frame, message: &str, state: &ConfirmDialogState) {
    // Add options with selection highlighting
    let options = [false, true]; // Cancel, Delete
    let labels = ["Cancel", "Delete"];
    let colors = [Color::White, Color::Red];

    let body: Vec<Line> = options
        .iter()
        .zip(labels.iter())
        .enumerate()
        .map(|(i, (&is_delete, &label))| {
            let is_selected = state.selected_option == is_delete;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(colors[i]).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(format!("{prefix}{label}"), style))
        })
        .collect();

    let hint = vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Confirm Delete",
            title_color: Color::Red,
            border_color: Color::Red,
            message,
            body,
            hint: Some(hint),
            max_width: 50,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::render_to_string;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_on_cancel() {
        let mut state = ConfirmDialogState::default();
        assert_eq!(state.handle_key(key(KeyCode::Enter)), Some(false));
    }

    #[test]
    fn test_arrow_then_enter_confirms() {
        let mut state = ConfirmDialogState::default();
        assert_eq!(state.handle_key(key(KeyCode::Down)), None);
        assert_eq!(state.handle_key(key(KeyCode::Enter)), Some(true));
    }

    #[test]
    fn test_shortcut_answers() {
        let mut state = ConfirmDialogState::default();
        assert_eq!(state.handle_key(key(KeyCode::Char('y'))), Some(true));
        assert_eq!(state.handle_key(key(KeyCode::Char('n'))), Some(false));
        assert_eq!(state.handle_key(key(KeyCode::Esc)), Some(false));
    }

    #[test]
    fn test_ctrl_c_declines_even_with_delete_selected() {
        let mut state = ConfirmDialogState::default();
        state.handle_key(key(KeyCode::Down));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(state.handle_key(ctrl_c), Some(false));
    }

    #[test]
    fn test_other_keys_keep_waiting() {
        let mut state = ConfirmDialogState::default();
        assert_eq!(state.handle_key(key(KeyCode::Char('x'))), None);
        assert_eq!(state.handle_key(key(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_renders_question_and_options() {
        let screen = render_to_string(70, 20, |frame| {
            render_confirm_dialog(
                frame,
                "Are you sure you want to delete this email?",
                &ConfirmDialogState::default(),
            )
        });
        assert!(screen.contains("Confirm Delete"));
        assert!(screen.contains("▸ Cancel"));
        assert!(screen.contains("Delete"));
        assert!(screen.contains("delete this email?"));
    }
}
