//! Command-line argument parsing
//!
//! Explicit, fail-fast parsing: every diagnostic names the offending
//! argument, and nothing is generated unless the whole command line is
//! valid.

use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "\
Usage: sheetgen --mode <char|word|phrase> [--input <path>] [--output <path>]

Options:
  --mode <char|word|phrase>  Sheet kind to generate (required)
  --input <path>             Input file (default: input.txt)
  --output <path>            Output PDF file (default: output.pdf)
  -h, --help                 Print this help text
";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("--mode is required")]
    MissingMode,

    #[error("unrecognized mode `{0}`, expected one of: char, word, phrase")]
    InvalidMode(String),

    #[error("{0}: no argument supplied")]
    MissingValue(&'static str),

    #[error("unrecognized argument `{0}`")]
    UnknownArgument(String),
}

/// Sheet kind selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Character,
    /// Accepted but not implemented yet
    Word,
    Phrase,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// A parsed invocation: either a run request or a help request.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Args),
    Help,
}

/// Parse the command line (without the program name).
pub fn parse<I>(mut argv: I) -> Result<Command, CliError>
where
    I: Iterator<Item = String>,
{
    let mut mode = None;
    let mut input = PathBuf::from("input.txt");
    let mut output = PathBuf::from("output.pdf");

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--mode" => {
                let value = argv.next().ok_or(CliError::MissingValue("--mode"))?;
                mode = Some(match value.as_str() {
                    "char" => Mode::Character,
                    "word" => Mode::Word,
                    "phrase" => Mode::Phrase,
                    _ => return Err(CliError::InvalidMode(value)),
                });
            }
            "--input" => {
                input = PathBuf::from(argv.next().ok_or(CliError::MissingValue("--input"))?);
            }
            "--output" => {
                output = PathBuf::from(argv.next().ok_or(CliError::MissingValue("--output"))?);
            }
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }

    let mode = mode.ok_or(CliError::MissingMode)?;
    Ok(Command::Run(Args {
        mode,
        input,
        output,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(args: &[&str]) -> Result<Command, CliError> {
        parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_full_invocation() {
        let command = parsed(&["--mode", "char", "--input", "a.txt", "--output", "b.pdf"]);
        match command.unwrap() {
            Command::Run(args) => {
                assert_eq!(args.mode, Mode::Character);
                assert_eq!(args.input, PathBuf::from("a.txt"));
                assert_eq!(args.output, PathBuf::from("b.pdf"));
            }
            Command::Help => panic!("expected a run command"),
        }
    }

    #[test]
    fn test_defaults() {
        match parsed(&["--mode", "phrase"]).unwrap() {
            Command::Run(args) => {
                assert_eq!(args.mode, Mode::Phrase);
                assert_eq!(args.input, PathBuf::from("input.txt"));
                assert_eq!(args.output, PathBuf::from("output.pdf"));
            }
            Command::Help => panic!("expected a run command"),
        }
    }

    #[test]
    fn test_word_mode_is_accepted_by_the_parser() {
        match parsed(&["--mode", "word"]).unwrap() {
            Command::Run(args) => assert_eq!(args.mode, Mode::Word),
            Command::Help => panic!("expected a run command"),
        }
    }

    #[test]
    fn test_missing_mode() {
        assert!(matches!(parsed(&[]), Err(CliError::MissingMode)));
        assert!(matches!(
            parsed(&["--input", "a.txt"]),
            Err(CliError::MissingMode)
        ));
    }

    #[test]
    fn test_invalid_mode() {
        match parsed(&["--mode", "sentence"]) {
            Err(CliError::InvalidMode(value)) => assert_eq!(value, "sentence"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_value() {
        assert!(matches!(
            parsed(&["--mode"]),
            Err(CliError::MissingValue("--mode"))
        ));
        assert!(matches!(
            parsed(&["--mode", "char", "--output"]),
            Err(CliError::MissingValue("--output"))
        ));
    }

    #[test]
    fn test_unknown_argument() {
        match parsed(&["--mode", "char", "--fancy"]) {
            Err(CliError::UnknownArgument(arg)) => assert_eq!(arg, "--fancy"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_help_short_circuits() {
        assert_eq!(parsed(&["--help"]).unwrap(), Command::Help);
        assert_eq!(parsed(&["-h", "--mode", "char"]).unwrap(), Command::Help);
    }
}
