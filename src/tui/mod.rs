//! Interactive TUI mode.

mod input;
mod session;
mod text;

pub use input::*;
pub use session::*;
pub use text::*;

/// Run TUI interactive mode.
pub fn run() {
    run_menu();
}
