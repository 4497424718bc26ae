//! Rendering helpers for UI tests

use ratatui::{backend::TestBackend, Frame, Terminal};

/// Draw with `render` on a `width` x `height` test terminal and return the
/// screen as newline-separated rows
pub fn render_to_string(width: u16, height: u16, render: impl FnOnce(&mut Frame)) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(render).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
