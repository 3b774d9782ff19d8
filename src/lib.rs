//! A single-table blackjack demo core with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that shuffles a 52-card sprite-sheet
//! deck, deals the player from the front and the dealer from the back, and
//! resolves each round. Rendering goes through the [`Renderer`] trait: the
//! table is laid out as a [`Scene`] of draw commands each frame.
//!
//! # Example
//!
//! ```
//! use bjtable::{Input, Phase, Table, TableOptions};
//!
//! let table = Table::new(TableOptions::default(), 42);
//! table.apply(Input::Deal).unwrap();
//! assert_eq!(table.player_count(), 2);
//!
//! table.apply(Input::Stand).unwrap();
//! assert_eq!(table.phase(), Phase::Resolved);
//! assert!(table.result().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod input;
pub mod options;
pub mod render;
pub mod result;
pub mod sprite;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{Deck, DrawCursor, RandomShuffler, Shuffler, Unshuffled};
pub use error::{ActionError, DeckError, DrawError};
pub use hand::{DealerHand, Hand};
pub use input::Input;
pub use options::{AceRule, TableOptions};
pub use render::{Renderer, Scene};
pub use result::{Outcome, RoundResult};
pub use sprite::{ClipRect, SpriteSheet};
pub use table::{Phase, Table, TableSnapshot};
