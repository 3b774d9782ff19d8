//! Round phase types.

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Waiting for a deal.
    #[default]
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended; the outcome is held until the next deal.
    Resolved,
}
