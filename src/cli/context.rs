//! CLI context - bundles config, flags, and the randomness source.

use zeroize::Zeroize;

use super::{prompts, quiet, CliFlags};
use crate::clipboard;
use crate::config::GenerationConfig;
use crate::entropy::EntropySource;
use crate::pass;
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub config: GenerationConfig,
    pub flags: CliFlags,
    source: EntropySource,
    to_clipboard: bool,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let config = if flags.saved {
            GenerationConfig::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                GenerationConfig::default()
            })
        } else {
            GenerationConfig::default()
        };

        Ok(Self {
            config,
            flags,
            source: EntropySource::init(),
            to_clipboard: false,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passmith {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to the config.
    fn apply_flags(&mut self) {
        if self.flags.default {
            self.config = GenerationConfig::default();
        }

        if let Some(len) = self.flags.length {
            self.config.set_length(len); // clamped into [4,128]
        }

        if self.flags.symbols {
            self.config.include_symbols = true;
        }
        if self.flags.no_lower {
            self.config.include_lowercase = false;
        }
        if self.flags.no_upper {
            self.config.include_uppercase = false;
        }
        if self.flags.no_numbers {
            self.config.include_numbers = false;
        }
        if self.flags.keep_similar {
            self.config.exclude_similar = false;
        }
        if self.flags.exclude_ambiguous {
            self.config.exclude_ambiguous = true;
        }

        if !self.source.is_secure() {
            prompts::degraded_source(self.source.name());
        }

        if self.flags.clipboard {
            self.to_clipboard = true;
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) {
        let count = self.flags.number.unwrap_or(1).max(1);
        let mut out = String::new();

        for _ in 0..count {
            match pass::generate(&self.config, &mut self.source) {
                Ok(Some(password)) => {
                    if self.flags.strength {
                        prompts::strength(pass::score(&password));
                    }
                    out.push_str(&password);
                    out.push('\n');
                }
                Ok(None) => {
                    out.zeroize();
                    prompts::error(if self.config.any_class_selected() {
                        "Exclusion filters removed every character: relax the filters."
                    } else {
                        "No character classes selected: enable at least one."
                    });
                    std::process::exit(1);
                }
                Err(e) => {
                    out.zeroize();
                    prompts::error(&format!("Random source failure: {e}"));
                    std::process::exit(1);
                }
            }
        }

        if self.to_clipboard {
            match clipboard::copy(out.trim_end()) {
                Ok(()) => prompts::clipboard_copied(),
                Err(e) => {
                    prompts::clipboard_error(&e);
                    if prompts::clipboard_fallback_prompt() {
                        print!("{out}");
                    }
                }
            }
        } else {
            print!("{out}");
        }

        out.zeroize();
    }
}
