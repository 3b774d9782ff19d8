//! Round result types.

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts).
    PlayerWin,
    /// Dealer wins (player busts, or dealer finishes above the player).
    DealerWin,
    /// Push (tie).
    Push,
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
