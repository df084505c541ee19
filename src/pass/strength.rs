//! Password strength heuristic.
//!
//! A coarse points score over length bands and character-class presence,
//! not an entropy estimate. The breakpoints are fixed and load-bearing:
//! downstream display and tests depend on these exact bands.

use std::fmt;

/// Qualitative strength bucket, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        }
    }

    /// Filled segments on the 5-segment strength bar.
    pub fn segments(self) -> usize {
        match self {
            StrengthTier::VeryWeak => 1,
            StrengthTier::Weak => 2,
            StrengthTier::Medium => 3,
            StrengthTier::Strong => 4,
            StrengthTier::VeryStrong => 5,
        }
    }

    /// ANSI color for the filled segments.
    pub fn color(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "\x1b[38;5;9m",    // red
            StrengthTier::Weak => "\x1b[38;5;208m",      // orange
            StrengthTier::Medium => "\x1b[38;5;11m",     // yellow
            StrengthTier::Strong => "\x1b[38;5;10m",     // green
            StrengthTier::VeryStrong => "\x1b[38;5;42m", // emerald
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score a password into a [`StrengthTier`].
///
/// Pure function of the string contents. Empty input short-circuits to
/// `VeryWeak`.
pub fn score(password: &str) -> StrengthTier {
    if password.is_empty() {
        return StrengthTier::VeryWeak;
    }

    let mut points = 0u32;

    // Mutually exclusive length bands.
    let length = password.chars().count();
    if length >= 20 {
        points += 3;
    } else if length >= 14 {
        points += 2;
    } else if length >= 10 {
        points += 1;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        points += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        points += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        points += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        points += 1;
    }

    match points {
        0..=1 => StrengthTier::VeryWeak,
        2..=3 => StrengthTier::Weak,
        4..=5 => StrengthTier::Medium,
        6 => StrengthTier::Strong,
        _ => StrengthTier::VeryStrong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_very_weak() {
        assert_eq!(score(""), StrengthTier::VeryWeak);
    }

    #[test]
    fn ten_lowercase_is_weak() {
        // length band +1, lowercase +1 = 2 points
        assert_eq!(score("abcdefghij"), StrengthTier::Weak);
    }

    #[test]
    fn twelve_mixed_with_digits_is_medium() {
        // length band +1, three classes +3 = 4 points
        assert_eq!(score("Abcdefghij12"), StrengthTier::Medium);
    }

    #[test]
    fn fourteen_all_classes_is_strong() {
        // length band +2, four classes +4 = 6 points
        assert_eq!(score("Abcdefghij12!@"), StrengthTier::Strong);
    }

    #[test]
    fn twenty_all_classes_is_very_strong() {
        // length band +3, four classes +4 = 7 points
        assert_eq!(score("Abcdefghijklmnop12!@"), StrengthTier::VeryStrong);
    }

    #[test]
    fn short_single_class_is_very_weak() {
        // no length band, one class = 1 point
        assert_eq!(score("abcd"), StrengthTier::VeryWeak);
    }

    #[test]
    fn length_band_edges() {
        // 9 vs 10 lowercase chars: 1 vs 2 points
        assert_eq!(score("abcdefghi"), StrengthTier::VeryWeak);
        assert_eq!(score("abcdefghij"), StrengthTier::Weak);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(StrengthTier::VeryWeak < StrengthTier::Weak);
        assert!(StrengthTier::Strong < StrengthTier::VeryStrong);
    }

    #[test]
    fn labels_and_segments() {
        assert_eq!(StrengthTier::Medium.label(), "Medium");
        assert_eq!(StrengthTier::VeryWeak.segments(), 1);
        assert_eq!(StrengthTier::VeryStrong.segments(), 5);
    }
}
