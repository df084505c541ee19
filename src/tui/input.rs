//! Raw-mode line editors for the TUI.

use crossterm::event::{read, Event, KeyCode, KeyModifiers};

use crate::terminal::{flush, reset_terminal, RawModeGuard};

/// How an edit loop ended.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Accepted,
    Cancelled,
}

/// Apply one key to the buffer. `cursor` is 1-based (1 = before the first
/// character). `accept` filters which typed characters are inserted and
/// `max_len` caps the buffer. Returns `Some` when the edit is finished.
fn apply_key(
    input: &mut String,
    cursor: &mut usize,
    code: KeyCode,
    modifiers: KeyModifiers,
    max_len: usize,
    accept: fn(char) -> bool,
) -> Option<Outcome> {
    match code {
        KeyCode::Char('q') if modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Outcome::Cancelled);
        }
        KeyCode::Esc => return Some(Outcome::Cancelled),
        KeyCode::Enter => return Some(Outcome::Accepted),
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            input.clear();
            *cursor = 1;
        }
        KeyCode::Backspace => {
            if *cursor > 1 {
                *cursor -= 1;
                input.remove(*cursor - 1);
            }
        }
        KeyCode::Delete => {
            if *cursor <= input.len() {
                input.remove(*cursor - 1);
            }
        }
        KeyCode::Left => {
            if *cursor > 1 {
                *cursor -= 1;
            }
        }
        KeyCode::Right => {
            if *cursor < input.len() + 1 {
                *cursor += 1;
            }
        }
        KeyCode::Home => *cursor = 1,
        KeyCode::End => *cursor = input.len() + 1,
        KeyCode::Char(c) if accept(c) && input.len() < max_len => {
            input.insert(*cursor - 1, c);
            *cursor += 1;
        }
        _ => {}
    }
    None
}

/// Shared raw-mode edit loop: draw, read keys, apply, redraw.
fn edit_line(
    prompt: &str,
    input: &mut String,
    max_len: usize,
    accept: fn(char) -> bool,
) -> Outcome {
    let mut cursor = input.len() + 1;
    let mut last_len = input.len();

    print!("{prompt}: {input}");
    flush();

    loop {
        let key = match read() {
            Ok(Event::Key(key)) => key,
            Ok(_) => continue,
            Err(_) => return Outcome::Accepted,
        };

        // Ctrl+C leaves the whole program; reset the terminal first since
        // process::exit runs no destructors.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            reset_terminal();
            println!();
            std::process::exit(0);
        }

        let done = apply_key(input, &mut cursor, key.code, key.modifiers, max_len, accept);

        // Redraw the line, then park the cursor.
        print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
        print!("\r{prompt}: {input}");
        print!("\x1b[{}G", prompt.len() + 2 + cursor);
        flush();
        last_len = input.len();

        if let Some(outcome) = done {
            return outcome;
        }
    }
}

/// Get a free-form line with basic editing. Esc/Ctrl+Q cancels (None).
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    let mut input = initial_value.to_string();

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(input), // Can't enable raw mode, return default
    };

    let outcome = edit_line(prompt, &mut input, usize::MAX, |c| !c.is_control());

    // Leave raw mode BEFORE the newline prints.
    drop(guard);
    println!();

    match outcome {
        Outcome::Accepted => Some(input),
        Outcome::Cancelled => None,
    }
}

/// Get a password length. Digits only, three columns wide - the config
/// setter clamps whatever parses into range. Empty or cancelled input
/// leaves the current value unchanged (None).
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let mut input = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial_value),
    };

    let outcome = edit_line(prompt, &mut input, 3, |c| c.is_ascii_digit());
    drop(guard);
    println!();

    match outcome {
        Outcome::Cancelled => None,
        Outcome::Accepted => input.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(c: char) -> bool {
        c.is_ascii_digit()
    }

    fn type_str(input: &mut String, cursor: &mut usize, text: &str, max_len: usize) {
        for c in text.chars() {
            apply_key(input, cursor, KeyCode::Char(c), KeyModifiers::NONE, max_len, digits);
        }
    }

    #[test]
    fn digit_editor_accepts_digits_only() {
        let mut input = String::new();
        let mut cursor = 1;
        type_str(&mut input, &mut cursor, "1a2b8", 3);
        assert_eq!(input, "128");
    }

    #[test]
    fn digit_editor_caps_width() {
        let mut input = String::new();
        let mut cursor = 1;
        type_str(&mut input, &mut cursor, "123456", 3);
        assert_eq!(input, "123");
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = String::from("128");
        let mut cursor = 4;
        apply_key(
            &mut input,
            &mut cursor,
            KeyCode::Backspace,
            KeyModifiers::NONE,
            3,
            digits,
        );
        assert_eq!(input, "12");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn insertion_follows_cursor() {
        let mut input = String::from("18");
        let mut cursor = 2; // between '1' and '8'
        apply_key(
            &mut input,
            &mut cursor,
            KeyCode::Char('2'),
            KeyModifiers::NONE,
            3,
            digits,
        );
        assert_eq!(input, "128");
    }

    #[test]
    fn esc_cancels_enter_accepts() {
        let mut input = String::new();
        let mut cursor = 1;
        assert_eq!(
            apply_key(&mut input, &mut cursor, KeyCode::Esc, KeyModifiers::NONE, 3, digits),
            Some(Outcome::Cancelled)
        );
        assert_eq!(
            apply_key(&mut input, &mut cursor, KeyCode::Enter, KeyModifiers::NONE, 3, digits),
            Some(Outcome::Accepted)
        );
    }

    #[test]
    fn ctrl_u_clears_line() {
        let mut input = String::from("99");
        let mut cursor = 3;
        apply_key(
            &mut input,
            &mut cursor,
            KeyCode::Char('u'),
            KeyModifiers::CONTROL,
            3,
            digits,
        );
        assert!(input.is_empty());
        assert_eq!(cursor, 1);
    }
}
