//! Password generation configuration.

mod file;

pub use file::ConfigFileError;

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 4;
/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 128;

/// User-selected generation options.
///
/// `length` is private so every write goes through [`set_length`], which
/// clamps into `[MIN_LENGTH, MAX_LENGTH]`.
///
/// [`set_length`]: GenerationConfig::set_length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
}

impl GenerationConfig {
    pub fn length(&self) -> usize {
        self.length
    }

    /// Set the password length, clamped into `[MIN_LENGTH, MAX_LENGTH]`.
    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    /// True when at least one character class is selected.
    pub fn any_class_selected(&self) -> bool {
        self.include_lowercase
            || self.include_uppercase
            || self.include_numbers
            || self.include_symbols
    }

    pub fn load_from_file() -> Result<Self, ConfigFileError> {
        let mut config = GenerationConfig::default();
        file::load(&mut config, &file::default_path())?;
        Ok(config)
    }

    pub fn save_to_file(&self) -> Result<(), ConfigFileError> {
        file::save(self, &file::default_path())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: false,
            exclude_similar: true,
            exclude_ambiguous: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.length(), 16);
        assert!(config.include_lowercase);
        assert!(config.include_uppercase);
        assert!(config.include_numbers);
        assert!(!config.include_symbols);
        assert!(config.exclude_similar);
        assert!(!config.exclude_ambiguous);
    }

    #[test]
    fn length_clamped_at_both_bounds() {
        let mut config = GenerationConfig::default();
        config.set_length(2);
        assert_eq!(config.length(), MIN_LENGTH);
        config.set_length(9999);
        assert_eq!(config.length(), MAX_LENGTH);
        config.set_length(32);
        assert_eq!(config.length(), 32);
    }

    #[test]
    fn any_class_selected() {
        let mut config = GenerationConfig::default();
        assert!(config.any_class_selected());
        config.include_lowercase = false;
        config.include_uppercase = false;
        config.include_numbers = false;
        config.include_symbols = false;
        assert!(!config.any_class_selected());
    }
}
