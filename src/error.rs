//! Error types for deck and table operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The player and dealer cursors have met; no cards remain.
    #[error("no cards remain in the deck")]
    DeckExhausted,
}

/// Errors that can occur when building a deck from a caller-supplied order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Region is outside the sprite sheet.
    #[error("sprite region {0} is outside the sheet")]
    InvalidRegion(u8),
    /// Region appears more than once.
    #[error("sprite region {0} appears more than once")]
    DuplicateCard(u8),
}

/// Errors that can occur during table actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidState,
    /// No cards remain in the deck.
    #[error("no cards remain in the deck")]
    DeckExhausted,
}

impl From<DrawError> for ActionError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::DeckExhausted => Self::DeckExhausted,
        }
    }
}
