//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod prompts;

#[cfg(feature = "tui")]
pub use prompts::{run, CreateArgs};

/// Make the terminal cursor visible again after prompts or spinners
#[cfg(feature = "tui")]
pub fn restore_cursor() {
    let _ = console::Term::stderr().show_cursor();
}
