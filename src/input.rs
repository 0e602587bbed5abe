//! Parsing of free-form user input.
//!
//! Every numeric field typed at the prompt goes through here. A failed parse
//! yields an [`InputError`] and nothing is constructed from the partial
//! answers.

use std::io::BufRead;
use thiserror::Error;

/// Errors produced at the input boundary.
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("expected a value, got an empty line")]
    Empty,

    #[error("'{0}' is not a whole number")]
    InvalidInteger(String),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("line is not valid UTF-8 text")]
    InvalidText,

    #[error("input ended")]
    EndOfInput,

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err.to_string())
    }
}

/// Read one line, without the trailing newline.
///
/// Returns [`InputError::EndOfInput`] when the reader is exhausted. A line
/// that is not UTF-8 is consumed and reported as [`InputError::InvalidText`],
/// so the next read starts on the following line.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Err(InputError::EndOfInput);
    }
    let line = String::from_utf8(bytes).map_err(|_| InputError::InvalidText)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Parse a menu selection or list number
pub fn parse_choice(s: &str) -> Result<i64, InputError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(InputError::Empty);
    }
    s.parse()
        .map_err(|_| InputError::InvalidInteger(s.to_string()))
}

/// Parse an ingredient calorie count. Negative values are accepted.
pub fn parse_calories(s: &str) -> Result<i32, InputError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(InputError::Empty);
    }
    s.parse()
        .map_err(|_| InputError::InvalidInteger(s.to_string()))
}

/// Parse a quantity or scaling factor.
///
/// `NaN` and infinities are rejected even though `f64::from_str` accepts
/// them.
pub fn parse_number(s: &str) -> Result<f64, InputError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(InputError::Empty);
    }
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(InputError::InvalidNumber(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Ok(1));
        assert_eq!(parse_choice("  7 \t"), Ok(7));
        assert_eq!(parse_choice("-3"), Ok(-3));
        assert_eq!(parse_choice(""), Err(InputError::Empty));
        assert_eq!(
            parse_choice("two"),
            Err(InputError::InvalidInteger("two".to_string()))
        );
        assert!(parse_choice("1.5").is_err());
    }

    #[test]
    fn test_parse_calories() {
        assert_eq!(parse_calories("150"), Ok(150));
        assert_eq!(parse_calories("-20"), Ok(-20));
        assert!(parse_calories("12kcal").is_err());
        assert!(parse_calories("99999999999").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("2"), Ok(2.0));
        assert_eq!(parse_number("0.25"), Ok(0.25));
        assert_eq!(parse_number("-1.5"), Ok(-1.5));
        assert_eq!(parse_number("1e2"), Ok(100.0));
        assert_eq!(parse_number("   "), Err(InputError::Empty));
        assert_eq!(
            parse_number("a lot"),
            Err(InputError::InvalidNumber("a lot".to_string()))
        );
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert!(parse_number("NaN").is_err());
        assert!(parse_number("inf").is_err());
        assert!(parse_number("-infinity").is_err());
    }

    #[test]
    fn test_read_line_strips_newline() {
        let mut input = Cursor::new("Soup\r\nBroth\n");
        assert_eq!(read_line(&mut input).unwrap(), "Soup");
        assert_eq!(read_line(&mut input).unwrap(), "Broth");
        assert_eq!(read_line(&mut input), Err(InputError::EndOfInput));
    }

    #[test]
    fn test_read_line_rejects_invalid_utf8_and_moves_on() {
        let mut input = Cursor::new(b"\xff\xfe\n2.5\n".to_vec());
        assert_eq!(read_line(&mut input), Err(InputError::InvalidText));
        assert_eq!(read_line(&mut input).unwrap(), "2.5");
    }

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut input = Cursor::new("  Simmer for 10 minutes  \n");
        assert_eq!(read_line(&mut input).unwrap(), "  Simmer for 10 minutes  ");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InputError::InvalidNumber("x".into()).to_string(),
            "'x' is not a number"
        );
        assert_eq!(InputError::Empty.to_string(), "expected a value, got an empty line");
    }
}
