//! Interactive session state and menu loop.

use zeroize::Zeroize;

use crate::clipboard;
use crate::config::GenerationConfig;
use crate::entropy::EntropySource;
use crate::pass::{self, StrengthTier};
use crate::terminal::{clear, reset_terminal};

use super::{enter_prompt, get_editable_input, get_numeric_input, print_help, print_panel};

/// One-shot status line under the panel (the widget's toast).
pub enum Status {
    Info(String),
    Error(String),
}

/// Current config and password, owned by the interactive loop. The core
/// functions hold no state between calls; everything lives here and is
/// replaced wholesale, never partially mutated.
pub struct Session {
    pub config: GenerationConfig,
    pub password: String,
    pub source: EntropySource,
    pub status: Option<Status>,
}

impl Session {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            password: String::new(),
            source: EntropySource::init(),
            status: None,
        }
    }

    /// Replace the current password with a fresh draw. On a randomness
    /// failure the previous password is kept unchanged.
    pub fn regenerate(&mut self) {
        match pass::generate(&self.config, &mut self.source) {
            Ok(Some(password)) => {
                self.password.zeroize();
                self.password = password;
            }
            Ok(None) => {
                self.password.zeroize();
                self.password = String::new();
                let msg = if self.config.any_class_selected() {
                    "Exclusion filters removed every character: relax the filters."
                } else {
                    "No character classes selected: enable at least one."
                };
                self.status = Some(Status::Error(msg.into()));
            }
            Err(e) => {
                self.status = Some(Status::Error(format!(
                    "Random source failure: {e} (previous password kept)"
                )));
            }
        }
    }

    pub fn tier(&self) -> StrengthTier {
        pass::score(&self.password)
    }

    pub fn copy(&mut self) {
        if self.password.is_empty() {
            self.status = Some(Status::Error("Nothing to copy.".into()));
            return;
        }
        match clipboard::copy(&self.password) {
            Ok(()) => self.status = Some(Status::Info("Password copied to clipboard.".into())),
            Err(e) => self.status = Some(Status::Error(format!("Clipboard error: {e}"))),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_reports_no_class_status() {
        let mut config = GenerationConfig::default();
        config.include_lowercase = false;
        config.include_uppercase = false;
        config.include_numbers = false;
        config.include_symbols = false;

        let mut session = Session::new(config);
        session.regenerate();

        assert!(session.password.is_empty());
        match session.status {
            Some(Status::Error(ref msg)) => assert!(msg.contains("character classes")),
            _ => panic!("expected an error status"),
        }
    }

    #[test]
    fn regenerate_replaces_password() {
        let mut session = Session::new(GenerationConfig::default());
        session.regenerate();
        let first = session.password.clone();
        assert_eq!(first.chars().count(), 16);

        session.regenerate();
        assert_eq!(session.password.chars().count(), 16);
        // 16 draws from a 57+ character set colliding is astronomically
        // unlikely; a repeat here means the source is not advancing.
        assert_ne!(session.password, first);
    }
}

/// Main interactive loop.
pub fn run_menu() {
    reset_terminal();
    clear();

    let config = GenerationConfig::load_from_file().unwrap_or_else(|e| {
        log::warn!("failed to load settings: {e}");
        GenerationConfig::default()
    });

    let mut session = Session::new(config);
    // Generate once at startup so the panel never opens empty.
    session.regenerate();

    loop {
        print_panel(&session);
        session.status = None;

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => continue, // Esc: redraw
        };

        match input.trim() {
            "" => session.regenerate(),
            "1" => {
                if let Some(len) =
                    get_numeric_input("Enter new password length (4-128)", session.config.length())
                {
                    session.config.set_length(len);
                }
            }
            "2" => session.config.include_lowercase = !session.config.include_lowercase,
            "3" => session.config.include_uppercase = !session.config.include_uppercase,
            "4" => session.config.include_numbers = !session.config.include_numbers,
            "5" => session.config.include_symbols = !session.config.include_symbols,
            "6" => session.config.exclude_similar = !session.config.exclude_similar,
            "7" => session.config.exclude_ambiguous = !session.config.exclude_ambiguous,
            "c" => session.copy(),
            "s" => match session.config.save_to_file() {
                Ok(()) => session.status = Some(Status::Info("Settings saved.".into())),
                Err(e) => {
                    session.status = Some(Status::Error(format!("Error saving settings: {e}")))
                }
            },
            "f" => match GenerationConfig::load_from_file() {
                Ok(c) => {
                    session.config = c;
                    session.status = Some(Status::Info("Saved settings loaded.".into()));
                }
                Err(e) => {
                    session.status = Some(Status::Error(format!("Error loading settings: {e}")))
                }
            },
            "r" => {
                session.config = GenerationConfig::default();
                session.status = Some(Status::Info("Defaults restored.".into()));
            }
            "h" => {
                clear();
                print_help();
                let _ = get_editable_input("Press Enter to return", "");
            }
            "q" | "e" => {
                clear();
                break;
            }
            _ => session.status = Some(Status::Error("Invalid option.".into())),
        }
    }
}
