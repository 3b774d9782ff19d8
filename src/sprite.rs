//! Sprite-sheet clipping.

use crate::card::Card;

/// A rectangle in sprite-sheet pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

/// Layout of the card sprite sheet: 13 rank columns by 4 suit rows of
/// uniform cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteSheet {
    /// Cell width in pixels.
    pub card_width: u32,
    /// Cell height in pixels.
    pub card_height: u32,
}

impl SpriteSheet {
    /// Creates a sheet layout with the given cell size.
    #[must_use]
    pub const fn new(card_width: u32, card_height: u32) -> Self {
        Self {
            card_width,
            card_height,
        }
    }

    /// Returns the clip rectangle of a card.
    #[must_use]
    pub const fn clip(&self, card: Card) -> ClipRect {
        ClipRect {
            x: card.column() as u32 * self.card_width,
            y: card.row() as u32 * self.card_height,
            width: self.card_width,
            height: self.card_height,
        }
    }
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self::new(112, 156)
    }
}
