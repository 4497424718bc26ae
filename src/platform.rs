//! Platform-specific key bindings and their display names

use crossterm::event::KeyModifiers;

/// Modifier for form shortcuts.
/// Terminals rarely forward Cmd, so Ctrl is used on every platform.
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

pub const ADD_EMAIL_SHORTCUT: &str = "Ctrl+N";
pub const VALIDATE_SHORTCUT: &str = "Ctrl+S";
pub const QUIT_SHORTCUT: &str = "Ctrl+Q";

/// Remove-row shortcut display
/// - macOS: forward delete is Fn+Delete on laptop keyboards
/// - Linux/Windows: "Del"
#[cfg(target_os = "macos")]
pub const REMOVE_EMAIL_SHORTCUT: &str = "Ctrl+D / Fn+Delete";

#[cfg(not(target_os = "macos"))]
pub const REMOVE_EMAIL_SHORTCUT: &str = "Ctrl+D / Del";
