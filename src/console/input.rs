//! Reading menu selections.

use std::io::BufRead;

use crate::error::ConsoleError;

/// Read one line and parse its first whitespace-delimited token as a number.
///
/// Returns `Ok(None)` for blank or non-numeric input so the caller can
/// re-prompt, and `Err(InputClosed)` at end of input.
pub fn read_choice(input: &mut impl BufRead) -> Result<Option<usize>, ConsoleError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ConsoleError::InputClosed);
    }
    Ok(line
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_numbers_line_by_line() {
        let mut input = Cursor::new("3\n  12  \n");
        assert_eq!(read_choice(&mut input).unwrap(), Some(3));
        assert_eq!(read_choice(&mut input).unwrap(), Some(12));
    }

    #[test]
    fn test_first_token_only() {
        let mut input = Cursor::new("2 5\n");
        assert_eq!(read_choice(&mut input).unwrap(), Some(2));
    }

    #[test]
    fn test_garbage_is_none() {
        let mut input = Cursor::new("attack\n\n-1\n");
        assert_eq!(read_choice(&mut input).unwrap(), None);
        assert_eq!(read_choice(&mut input).unwrap(), None);
        assert_eq!(read_choice(&mut input).unwrap(), None);
    }

    #[test]
    fn test_end_of_input() {
        let mut input = Cursor::new("");
        assert!(matches!(read_choice(&mut input), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = Cursor::new("4");
        assert_eq!(read_choice(&mut input).unwrap(), Some(4));
    }
}
