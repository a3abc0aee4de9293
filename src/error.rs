//! Error types for world loading and play.

use std::io;

use thiserror::Error;

use crate::world::ValidationError;

/// Result type for player commands.
pub type GameResult<T> = Result<T, GameError>;

/// Recoverable, player-facing failures. The `Display` text is the line shown
/// to the player; none of these end the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The current room has no exit in that direction.
    #[error("You can't go that way.")]
    InvalidDirection { direction: String },

    /// No item by that name lies in the current room.
    #[error("There is no {item} here.")]
    ItemNotHere { item: String },

    /// The player is not carrying an item by that name.
    #[error("You don't have a {item} in your inventory.")]
    ItemNotHeld { item: String },

    /// The item can only be used in another room.
    #[error("The {item} can't be used here.")]
    WrongLocation { item: String },

    /// Unknown verb, or a known verb with the wrong number of arguments.
    #[error("Invalid command. Type 'help' for a list of commands.")]
    InvalidCommand { input: String },
}

impl GameError {
    /// Heading for hosts that show results as modal notices.
    pub fn title(&self) -> &'static str {
        match self {
            GameError::InvalidDirection { .. } => "Invalid Move",
            GameError::ItemNotHere { .. } | GameError::ItemNotHeld { .. } => "Item Not Found",
            GameError::WrongLocation { .. } => "Item Not Usable",
            GameError::InvalidCommand { .. } => "Invalid Command",
        }
    }
}

/// Failures while reading or checking a world file.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read world file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse world file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid world:\n{}", format_problems(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_problems(problems: &[ValidationError]) -> String {
    problems
        .iter()
        .map(|p| format!("  - {}", p.message))
        .collect::<Vec<_>>()
        .join("\n")
}
