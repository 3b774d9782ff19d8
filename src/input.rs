//! Player inputs.

/// An input that drives the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Shuffle and deal a new round.
    Deal,
    /// Draw another player card.
    Hit,
    /// End the player's turn and let the dealer play.
    Stand,
}

impl Input {
    /// Maps a key to an input: `d` deals, `h` hits, `s` stands.
    ///
    /// ```
    /// use bjtable::Input;
    ///
    /// assert_eq!(Input::from_key('H'), Some(Input::Hit));
    /// assert_eq!(Input::from_key('x'), None);
    /// ```
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'd' => Some(Self::Deal),
            'h' => Some(Self::Hit),
            's' => Some(Self::Stand),
            _ => None,
        }
    }
}
