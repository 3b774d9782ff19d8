//! Card types and sprite-sheet identities.

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of suit rows in the sprite sheet.
pub const SUITS: u8 = 4;

/// Card suit, one per sprite-sheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs (row 0).
    Clubs,
    /// Diamonds (row 1).
    Diamonds,
    /// Hearts (row 2).
    Hearts,
    /// Spades (row 3).
    Spades,
}

impl Suit {
    /// Returns the suit drawn in the given sprite-sheet row.
    #[must_use]
    pub const fn from_row(row: u8) -> Self {
        match row % SUITS {
            0 => Self::Clubs,
            1 => Self::Diamonds,
            2 => Self::Hearts,
            _ => Self::Spades,
        }
    }
}

/// A playing card.
///
/// A card is its sprite-sheet region (0..52) together with its blackjack
/// value. The sheet holds one rank per column and one suit per row, so region
/// `r` sits in column `r / 4`, row `r % 4`. The value travels with the region
/// wherever the card is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    region: u8,
    value: u8,
}

impl Card {
    /// Creates the card for a sprite-sheet region.
    ///
    /// Note: This function does not validate the region. Use
    /// [`Card::try_from_region`] for untrusted input.
    #[must_use]
    pub const fn from_region(region: u8) -> Self {
        let rank = region / SUITS + 1;
        let value = if rank > 10 { 10 } else { rank };
        Self { region, value }
    }

    /// Creates the card for a sprite-sheet region, or `None` when the region
    /// is outside the sheet.
    #[must_use]
    pub const fn try_from_region(region: u8) -> Option<Self> {
        if (region as usize) < DECK_SIZE {
            Some(Self::from_region(region))
        } else {
            None
        }
    }

    /// Creates the card with the given rank (1 = Ace, 13 = King) and suit.
    ///
    /// Note: This function does not validate the rank. Ranks outside 1..=13
    /// map to regions outside the sheet.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        let row = match suit {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        };
        Self::from_region(rank.saturating_sub(1).saturating_mul(SUITS).saturating_add(row))
    }

    /// Sprite-sheet region of the card.
    #[must_use]
    pub const fn region(&self) -> u8 {
        self.region
    }

    /// Blackjack value: 1 for an ace, 10 for tens and face cards.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.region / SUITS + 1
    }

    /// Suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        Suit::from_row(self.region % SUITS)
    }

    /// Sprite-sheet column (rank index).
    #[must_use]
    pub const fn column(&self) -> u8 {
        self.region / SUITS
    }

    /// Sprite-sheet row (suit index).
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.region % SUITS
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.value == 1
    }
}
