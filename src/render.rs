//! Frame composition and the renderer interface.
//!
//! A [`Scene`] is the ordered list of draw commands for one frame. It is
//! built from a [`TableSnapshot`] and handed to any [`Renderer`].

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::options::TableOptions;
use crate::result::Outcome;
use crate::sprite::ClipRect;
use crate::table::TableSnapshot;

/// An RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// Creates an opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

/// Table felt.
pub const FELT: Color = Color::rgb(0, 0xCC, 0);

/// Text colour.
pub const TEXT: Color = Color::rgb(102, 0, 204);

/// A screen position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: i32,
    /// Vertical offset from the top edge.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Chip colours on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chip {
    /// Grey chip.
    Grey,
    /// Blue chip.
    Blue,
    /// White chip.
    White,
}

/// A sprite to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    /// A face-up card, clipped from the card sheet.
    Card {
        /// The card.
        card: Card,
        /// Its cell in the sprite sheet.
        clip: ClipRect,
    },
    /// The card back.
    CardBack,
    /// A chip.
    Chip(Chip),
}

/// A single draw command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Draw a sprite with its top-left corner at the position.
    Sprite {
        /// What to draw.
        sprite: Sprite,
        /// Where to draw it.
        at: Point,
    },
    /// Draw text with its top-left corner at the position.
    Text {
        /// The text.
        text: String,
        /// Where to draw it.
        at: Point,
        /// Text colour.
        color: Color,
    },
}

/// Drawing backend for a frame.
pub trait Renderer {
    /// Backend error.
    type Error;

    /// Clears the frame to a colour.
    ///
    /// # Errors
    ///
    /// Returns the backend error.
    fn clear(&mut self, color: Color) -> Result<(), Self::Error>;

    /// Draws a sprite.
    ///
    /// # Errors
    ///
    /// Returns the backend error.
    fn draw_sprite(&mut self, sprite: Sprite, at: Point) -> Result<(), Self::Error>;

    /// Draws text.
    ///
    /// # Errors
    ///
    /// Returns the backend error.
    fn draw_text(&mut self, text: &str, at: Point, color: Color) -> Result<(), Self::Error>;

    /// Presents the finished frame.
    ///
    /// # Errors
    ///
    /// Returns the backend error.
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Banner text for an outcome.
#[must_use]
pub const fn banner(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWin => "YOU WIN press d to deal again",
        Outcome::DealerWin => "DEALER WINS press d to deal again",
        Outcome::Push => "PUSH press d to deal again",
    }
}

/// Running-total text for the player's hand.
#[must_use]
pub fn total_text(value: u8) -> String {
    format!(" Total : {value}")
}

/// One frame of draw commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Background colour.
    pub background: Color,
    /// Commands in paint order.
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Lays out a frame for the table.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "screen and sheet sizes fit in i32"
    )]
    #[must_use]
    pub fn compose(snapshot: &TableSnapshot, options: &TableOptions) -> Self {
        let width = options.screen_width as i32;
        let height = options.screen_height as i32;
        let spacing = options.card_spacing as i32;
        let sheet = options.sprite_sheet;

        let mut commands = Vec::new();
        let mut draw = |sprite: Sprite, at: Point| {
            commands.push(DrawCommand::Sprite { sprite, at });
        };

        draw(Sprite::CardBack, Point::new(20, 20));
        draw(Sprite::Chip(Chip::Grey), Point::new(width / 2, height - 100));
        draw(Sprite::Chip(Chip::Blue), Point::new(width / 2 + 80, height - 100));
        draw(Sprite::Chip(Chip::White), Point::new(width / 2 + 160, height - 100));

        if snapshot.round_visible() {
            let face_up = |card: Card| Sprite::Card {
                card,
                clip: sheet.clip(card),
            };

            // Player cards run left to right across the middle.
            let mut x = height / 4;
            for &card in snapshot.player.cards() {
                draw(face_up(card), Point::new(x, height / 2 - 40));
                x += spacing;
            }

            if let Some(&up_card) = snapshot.dealer.up_card() {
                draw(face_up(up_card), Point::new(height / 2, 20));
            }
            if !snapshot.dealer.is_hole_revealed() {
                draw(Sprite::CardBack, Point::new(height / 2 + spacing, 20));
            }
            let mut x = height / 2 + spacing;
            for &card in snapshot.dealer.drawn() {
                draw(face_up(card), Point::new(x, 20));
                x += spacing;
            }

            commands.push(DrawCommand::Text {
                text: total_text(snapshot.player_value),
                at: Point::new(80, height - 100),
                color: TEXT,
            });

            if let Some(result) = snapshot.result.filter(|_| snapshot.showing_outcome) {
                commands.push(DrawCommand::Text {
                    text: String::from(banner(result.outcome)),
                    at: Point::new(90, height / 2),
                    color: TEXT,
                });
            }
        }

        Self {
            background: FELT,
            commands,
        }
    }

    /// Sends the frame to a renderer: clear, every command, present.
    ///
    /// A failed call (a missing texture or font) leaves that element blank;
    /// the rest of the frame is still drawn and presented.
    ///
    /// # Errors
    ///
    /// Returns the first renderer error once the frame has been presented.
    pub fn present<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), R::Error> {
        let mut first_error = renderer.clear(self.background).err();
        for command in &self.commands {
            let drawn = match command {
                DrawCommand::Sprite { sprite, at } => renderer.draw_sprite(*sprite, *at),
                DrawCommand::Text { text, at, color } => renderer.draw_text(text, *at, *color),
            };
            if let Err(err) = drawn {
                first_error.get_or_insert(err);
            }
        }
        let presented = renderer.present();
        match first_error {
            Some(err) => Err(err),
            None => presented,
        }
    }
}
