//! Process-wide suppression of non-essential CLI output.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Record the `-q` flag once at startup. Errors still print either way.
pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether to skip an interactive prompt: quiet mode, or stdin is a pipe
/// rather than a tty. Piped and scripted runs must never block on input.
pub fn skip_prompt() -> bool {
    enabled() || unsafe { libc::isatty(0) == 0 }
}
