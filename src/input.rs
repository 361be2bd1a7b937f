use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid integer {text:?}")]
    Parse {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parses the trimmed input as an `i64`, or returns `default` when it is empty.
pub fn parse_n(input: &str, default: i64) -> Result<i64, InputError> {
    let text = input.trim();
    if text.is_empty() {
        return Ok(default);
    }
    text.parse::<i64>().map_err(|source| InputError::Parse {
        text: text.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_uses_default() {
        assert_eq!(parse_n("", 10).unwrap(), 10);
        assert_eq!(parse_n(" \n\t", 10).unwrap(), 10);
        assert_eq!(parse_n("\n", 7).unwrap(), 7);
    }

    #[test]
    fn parses_trimmed_integers() {
        assert_eq!(parse_n("5\n", 10).unwrap(), 5);
        assert_eq!(parse_n("  42  ", 10).unwrap(), 42);
        assert_eq!(parse_n("+3", 10).unwrap(), 3);
        assert_eq!(parse_n("-8\r\n", 10).unwrap(), -8);
    }

    #[test]
    fn rejects_non_integers() {
        for bad in ["abc", "1.5", "1 2", "0x10", "99999999999999999999"] {
            let err = parse_n(bad, 10).unwrap_err();
            assert_eq!(err.to_string(), format!("invalid integer {bad:?}"));
        }
    }
}
