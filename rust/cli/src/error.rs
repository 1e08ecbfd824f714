//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! the error to an exit code.

use std::fmt;

use holdem_engine::errors::GameError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(GameError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            // bad card text is the user's typo, not an engine fault
            GameError::InvalidCardString(_) | GameError::InsufficientCards { .. } => {
                CliError::InvalidInput(error.to_string())
            }
            other => CliError::Engine(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_typos_are_input_errors() {
        let e: CliError = GameError::InvalidCardString("ZZ".into()).into();
        assert!(matches!(e, CliError::InvalidInput(_)));
        assert!(e.to_string().contains("ZZ"));
    }

    #[test]
    fn engine_errors_keep_their_source() {
        use std::error::Error;
        let e: CliError = GameError::EmptyDeck.into();
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "Engine error: Deck is empty");
    }
}
