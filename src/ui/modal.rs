//! Blocking confirmation modal drawn over the form

use super::components::{render_confirm_dialog, ConfirmDialogState};
use crate::interaction::Confirm;
use crate::state::ContactForm;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

/// [`Confirm`] implementation that takes over the terminal until the user
/// answers
pub struct TerminalConfirm<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    /// Form drawn behind the dialog
    backdrop: &'a ContactForm,
}

impl<'a, B: Backend> TerminalConfirm<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, backdrop: &'a ContactForm) -> Self {
        Self { terminal, backdrop }
    }

    fn run(&mut self, message: &str) -> Result<bool> {
        let mut state = ConfirmDialogState::default();
        loop {
            let backdrop = self.backdrop;
            self.terminal.draw(|frame| {
                super::draw_form_screen(frame, backdrop);
                render_confirm_dialog(frame, message, &state);
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(answer) = state.handle_key(key) {
                    return Ok(answer);
                }
            }
        }
    }
}

impl<B: Backend> Confirm for TerminalConfirm<'_, B> {
    fn confirm(&mut self, message: &str) -> bool {
        self.run(message).unwrap_or_else(|err| {
            tracing::warn!("Confirmation aborted, treating as declined: {err}");
            false
        })
    }
}
