//! Console input helpers.

use crate::error::CliError;
use holdem_engine::cards::Card;
use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// The line is trimmed. `None` means EOF or a read error.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use holdem_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  call \n");
/// assert_eq!(read_stdin_line(&mut input), Some("call".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Parses card arguments typed in any case (`as`, `Td`, `10h`).
pub fn parse_cards<S: AsRef<str>>(cards: &[S]) -> Result<Vec<Card>, CliError> {
    let upper: Vec<String> = cards
        .iter()
        .map(|c| c.as_ref().to_ascii_uppercase())
        .collect();
    Ok(Card::from_strings(&upper)?)
}

/// `q` or `quit`, in any case.
pub fn is_quit(input: &str) -> bool {
    matches!(input.to_ascii_lowercase().as_str(), "q" | "quit")
}
