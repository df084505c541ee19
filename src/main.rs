use std::env;

mod cli;
mod clipboard;
mod config;
mod entropy;
mod exits;
mod pass;
mod terminal;
mod tui;

fn main() {
    env_logger::init();

    exits::reset_terminal();
    exits::install_handlers();
    // Passwords live in this process; never let it core-dump them.
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    }
}
