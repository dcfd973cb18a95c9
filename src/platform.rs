//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the submit shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
///
/// Ctrl+S is accepted everywhere regardless.
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut hint for the status bar
#[cfg(target_os = "macos")]
pub const SUBMIT_HINT: &str = "Cmd+S:add";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_HINT: &str = "^S:add";
