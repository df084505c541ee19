use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-d" | "--default" => flags.default = true,
            "--strength" => flags.strength = true,
            "--symbols" => flags.symbols = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-numbers" => flags.no_numbers = true,
            "--keep-similar" => flags.keep_similar = true,
            "--exclude-ambiguous" => flags.exclude_ambiguous = true,
            "-l" | "--length" => {
                i += 1;
                if i >= args.len() {
                    return Err(ParseError::MissingValue(args[i - 1].clone()));
                }
                flags.length = Some(
                    args[i]
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                );
            }
            "-n" | "--number" => {
                i += 1;
                if i >= args.len() {
                    return Err(ParseError::MissingValue(args[i - 1].clone()));
                }
                flags.number = Some(
                    args[i]
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                );
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passmith")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_flags_is_all_defaults() {
        assert_eq!(parse(&args(&[])), Ok(CliFlags::default()));
    }

    #[test]
    fn parses_length_and_number() {
        let flags = parse(&args(&["-l", "20", "-n", "3"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
    }

    #[test]
    fn parses_class_toggles() {
        let flags = parse(&args(&[
            "--symbols",
            "--no-lower",
            "--keep-similar",
            "--exclude-ambiguous",
        ]))
        .unwrap();
        assert!(flags.symbols);
        assert!(flags.no_lower);
        assert!(flags.keep_similar);
        assert!(flags.exclude_ambiguous);
        assert!(!flags.no_upper);
    }

    #[test]
    fn rejects_unknown_argument() {
        assert_eq!(
            parse(&args(&["--bogus"])),
            Err(ParseError::UnknownArg("--bogus".into()))
        );
    }

    #[test]
    fn rejects_bad_number() {
        assert_eq!(
            parse(&args(&["-l", "abc"])),
            Err(ParseError::InvalidNumber("abc".into()))
        );
    }

    #[test]
    fn rejects_missing_value() {
        assert_eq!(
            parse(&args(&["-l"])),
            Err(ParseError::MissingValue("-l".into()))
        );
    }
}
