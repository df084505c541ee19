//! Character set building for password generation.

use crate::config::GenerationConfig;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/|~";

/// Characters easy to misread for one another.
pub const SIMILAR: &str = "0O1lI";
/// Characters easy to mistype or mangle when quoted.
pub const AMBIGUOUS: &str = "{}[]()/\\'\"`~,;:.<>";

/// Build the character pool from the selected classes.
///
/// Classes are appended in fixed order (lowercase, uppercase, numbers,
/// symbols), then the exclusion filters strip their sets. An empty result
/// (no class selected, or every candidate excluded) is a valid terminal
/// state the caller must check, not an error.
pub fn build(config: &GenerationConfig) -> Vec<char> {
    let mut chars: Vec<char> = Vec::new();

    if config.include_lowercase {
        chars.extend(LOWERCASE.chars());
    }
    if config.include_uppercase {
        chars.extend(UPPERCASE.chars());
    }
    if config.include_numbers {
        chars.extend(NUMBERS.chars());
    }
    if config.include_symbols {
        chars.extend(SYMBOLS.chars());
    }

    if chars.is_empty() {
        return chars;
    }

    // Set difference commutes, so filter order doesn't matter.
    if config.exclude_similar {
        chars.retain(|c| !SIMILAR.contains(*c));
    }
    if config.exclude_ambiguous {
        chars.retain(|c| !AMBIGUOUS.contains(*c));
    }

    chars
}
