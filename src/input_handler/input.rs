//! Move input parsing for terminal play.

use std::io::BufRead;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EDGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)\s*(?:-|,|\s)\s*([0-9]+)$").expect("EDGE_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    Edge { start: usize, end: usize },
    Quit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if matches!(trimmed.to_lowercase().as_str(), "q" | "quit") {
            return Ok(MoveInput::Quit);
        }

        let invalid = || InputError::InvalidInput {
            input: input.to_string(),
        };
        let caps = EDGE_RE.captures(trimmed).ok_or_else(invalid)?;
        let start = caps[1].parse().map_err(|_| invalid())?;
        let end = caps[2].parse().map_err(|_| invalid())?;

        Ok(MoveInput::Edge { start, end })
    }
}

/// Reads one move from `reader`. The end of input counts as quitting.
pub fn parse_move_input<R: BufRead>(reader: &mut R) -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let bytes_read = reader
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if bytes_read == 0 {
        return Ok(MoveInput::Quit);
    }

    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_edge_separators() {
        let expected = MoveInput::Edge { start: 2, end: 5 };
        for input in ["2 5", "2-5", "2,5", " 2 - 5 ", "2   5"].iter() {
            assert_eq!(input.parse::<MoveInput>().unwrap(), expected);
        }
    }

    #[test]
    fn test_quit() {
        assert_eq!("q".parse::<MoveInput>(), Ok(MoveInput::Quit));
        assert_eq!("QUIT".parse::<MoveInput>(), Ok(MoveInput::Quit));
    }

    #[test]
    fn test_invalid_input() {
        for input in ["", "2", "a-b", "2--5", "2 5 7", "-2 5", "99999999999999999999999 1"].iter() {
            assert_eq!(
                input.parse::<MoveInput>(),
                Err(InputError::InvalidInput {
                    input: input.to_string()
                }),
                "{:?} should not parse",
                input
            );
        }
    }

    #[test]
    fn test_parse_move_input_reads_one_line() {
        let mut reader = Cursor::new("0 1\n1-2\n");
        assert_eq!(
            parse_move_input(&mut reader),
            Ok(MoveInput::Edge { start: 0, end: 1 })
        );
        assert_eq!(
            parse_move_input(&mut reader),
            Ok(MoveInput::Edge { start: 1, end: 2 })
        );
        assert_eq!(parse_move_input(&mut reader), Ok(MoveInput::Quit));
    }
}
