//! Table configuration options.

use core::time::Duration;

use crate::sprite::SpriteSheet;

/// How aces are counted when scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AceRule {
    /// Every ace counts 11 until the hand would bust, then aces drop to 1
    /// one at a time.
    #[default]
    Demoting,
    /// Each ace decides once, as it is added: 11 if the running total stays
    /// at or under 21, otherwise 1. Earlier aces are never revisited, so
    /// `[A, 5, 6]` scores 22.
    Greedy,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use bjtable::{AceRule, TableOptions};
///
/// let options = TableOptions::default()
///     .with_ace_rule(AceRule::Greedy)
///     .with_outcome_display(Duration::from_secs(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Ace counting rule for both player and dealer.
    pub ace_rule: AceRule,
    /// How long the outcome banner stays on screen after a round resolves.
    pub outcome_display: Duration,
    /// Card cell size in the sprite sheet.
    pub sprite_sheet: SpriteSheet,
    /// Screen width in pixels.
    pub screen_width: u32,
    /// Screen height in pixels.
    pub screen_height: u32,
    /// Horizontal distance between overlapping cards in pixels.
    pub card_spacing: u32,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            ace_rule: AceRule::Demoting,
            outcome_display: Duration::from_secs(3),
            sprite_sheet: SpriteSheet::default(),
            screen_width: 640,
            screen_height: 480,
            card_spacing: 56,
        }
    }
}

impl TableOptions {
    /// Sets the ace counting rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{AceRule, TableOptions};
    ///
    /// let options = TableOptions::default().with_ace_rule(AceRule::Greedy);
    /// assert_eq!(options.ace_rule, AceRule::Greedy);
    /// ```
    #[must_use]
    pub const fn with_ace_rule(mut self, rule: AceRule) -> Self {
        self.ace_rule = rule;
        self
    }

    /// Sets how long the outcome banner is shown.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_outcome_display(Duration::from_millis(500));
    /// assert_eq!(options.outcome_display, Duration::from_millis(500));
    /// ```
    #[must_use]
    pub const fn with_outcome_display(mut self, display: Duration) -> Self {
        self.outcome_display = display;
        self
    }

    /// Sets the sprite-sheet cell size.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{SpriteSheet, TableOptions};
    ///
    /// let options = TableOptions::default().with_sprite_sheet(SpriteSheet::new(56, 78));
    /// assert_eq!(options.sprite_sheet.card_width, 56);
    /// ```
    #[must_use]
    pub const fn with_sprite_sheet(mut self, sheet: SpriteSheet) -> Self {
        self.sprite_sheet = sheet;
        self
    }

    /// Sets the screen size.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_screen(800, 600);
    /// assert_eq!((options.screen_width, options.screen_height), (800, 600));
    /// ```
    #[must_use]
    pub const fn with_screen(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Sets the distance between overlapping cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_card_spacing(40);
    /// assert_eq!(options.card_spacing, 40);
    /// ```
    #[must_use]
    pub const fn with_card_spacing(mut self, spacing: u32) -> Self {
        self.card_spacing = spacing;
        self
    }
}
