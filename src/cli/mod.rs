//! Non-interactive CLI mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

use crate::terminal::print_error;

/// Run CLI mode from raw arguments.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(msg) => {
            print_error(&msg);
            eprintln!("See `passmith --help` for usage.");
            std::process::exit(1);
        }
    };

    // Err(Done) is an early exit (help, version) that already printed.
    let _ = ctx.run();
}
