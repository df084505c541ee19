//! Config file persistence.
//!
//! Single comma-separated line at `~/.config/passmith/settings`, written
//! with defaults on first run or when the stored record is malformed.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::GenerationConfig;

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
}

const FIELD_COUNT: usize = 7;

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passmith/settings")
}

pub fn save(config: &GenerationConfig, path: &Path) -> Result<(), ConfigFileError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{}\n",
        config.length(),
        config.include_lowercase,
        config.include_uppercase,
        config.include_numbers,
        config.include_symbols,
        config.exclude_similar,
        config.exclude_ambiguous,
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

pub fn load(config: &mut GenerationConfig, path: &Path) -> Result<(), ConfigFileError> {
    if !path.exists() {
        save(config, path)?;
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELD_COUNT {
        // Malformed record: rewrite with the current (default) values.
        save(config, path)?;
        return Ok(());
    }

    if let Ok(len) = parts[0].parse() {
        config.set_length(len);
    }
    config.include_lowercase = parts[1].parse().unwrap_or(config.include_lowercase);
    config.include_uppercase = parts[2].parse().unwrap_or(config.include_uppercase);
    config.include_numbers = parts[3].parse().unwrap_or(config.include_numbers);
    config.include_symbols = parts[4].parse().unwrap_or(config.include_symbols);
    config.exclude_similar = parts[5].parse().unwrap_or(config.exclude_similar);
    config.exclude_ambiguous = parts[6].parse().unwrap_or(config.exclude_ambiguous);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        let mut config = GenerationConfig::default();
        config.set_length(42);
        config.include_symbols = true;
        config.exclude_similar = false;
        save(&config, &path).unwrap();

        let mut loaded = GenerationConfig::default();
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");

        let mut config = GenerationConfig::default();
        load(&mut config, &path).unwrap();
        assert_eq!(config, GenerationConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn malformed_record_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "not,a,valid,record\n").unwrap();

        let mut config = GenerationConfig::default();
        load(&mut config, &path).unwrap();
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn stored_length_is_clamped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "9999,true,true,true,false,true,false\n").unwrap();

        let mut config = GenerationConfig::default();
        load(&mut config, &path).unwrap();
        assert_eq!(config.length(), super::super::MAX_LENGTH);
    }
}
