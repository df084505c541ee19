//! Panel and help text for the interactive mode.

use crate::terminal::{
    box_bottom, box_line, box_line_center, box_opt, box_top, clear, flush, print_error,
    print_rule, strength_bar, DIM, RESET, UNDERLINE,
};

use super::{Session, Status};

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Wrap the password across box lines; up to 128 chars won't fit on one.
fn print_password_lines(password: &str) {
    if password.is_empty() {
        box_line(&format!("    {DIM}(none){RESET}"));
        return;
    }
    let chars: Vec<char> = password.chars().collect();
    for chunk in chars.chunks(64) {
        let line: String = chunk.iter().collect();
        box_line(&format!("    {line}"));
    }
}

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to regenerate)"
}

/// Draw the main panel: password, strength bar, options, commands.
pub fn print_panel(session: &Session) {
    clear();
    box_top("Passmith");
    box_line_center("Esc/CTRL+Q: cancel input | CTRL+U: clear input");
    box_line("");

    box_line(&format!("{UNDERLINE}Password{RESET}:"));
    print_password_lines(&session.password);
    box_line("");
    box_line(&format!("  Strength: {}", strength_bar(session.tier())));

    box_line("");
    box_line(&format!("{UNDERLINE}Options{RESET}:"));
    box_line(&format!("  1) Length: {}", session.config.length()));
    box_line(&format!(
        "  2) Lowercase (a-z): {}",
        on_off(session.config.include_lowercase)
    ));
    box_line(&format!(
        "  3) Uppercase (A-Z): {}",
        on_off(session.config.include_uppercase)
    ));
    box_line(&format!(
        "  4) Numbers (0-9): {}",
        on_off(session.config.include_numbers)
    ));
    box_line(&format!(
        "  5) Symbols (!@#...): {}",
        on_off(session.config.include_symbols)
    ));
    box_line(&format!(
        "  6) Exclude similar chars (0 O 1 l I): {}",
        on_off(session.config.exclude_similar)
    ));
    box_line(&format!(
        "  7) Exclude ambiguous symbols: {}",
        on_off(session.config.exclude_ambiguous)
    ));

    box_line("");
    box_line(&format!("{UNDERLINE}Entropy{RESET}:"));
    box_line(&format!("  Source: {}", session.source.name()));

    box_line("");
    print_rule();
    box_line("   Enter) regenerate | c) copy | s) save | f) load | r) defaults");
    box_line("   h) help | q) quit");
    box_bottom();

    // Status line (or blank if none)
    match &session.status {
        Some(Status::Info(msg)) => println!("{msg}"),
        Some(Status::Error(msg)) => print_error(msg),
        None => println!(),
    }
    flush();
}

pub fn print_help() {
    box_top("Passmith");
    box_line_center("Password generator with strength rating");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a menu to pick");
    box_line("     length and character classes, regenerate, and copy.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to generate");
    box_line("     passwords without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  passmith [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, clamped to 4-128 (default: 16)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("      --symbols", "Include symbols (!@#$%^&*()-_=+[]{};:,.<>?/|~)");
    box_opt("      --no-lower", "Drop lowercase letters");
    box_opt("      --no-upper", "Drop uppercase letters");
    box_opt("      --no-numbers", "Drop digits");
    box_opt("      --keep-similar", "Keep easily-confused chars (0 O 1 l I)");
    box_opt("      --exclude-ambiguous", "Drop easily-mistyped symbols");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("      --strength", "Report the strength tier on stderr");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Use saved settings from config file");
    box_opt("  -d, --default", "Use default settings");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passmith                   Interactive mode");
    box_line("  passmith -l 20             One password, 20 characters");
    box_line("  passmith -l 24 --symbols   24 characters, all four classes");
    box_line("  passmith -n 5 --strength   Five passwords with tiers");
    box_line("  passmith -b                Straight to the clipboard");
    box_line("");
    box_bottom();
    println!();
}
