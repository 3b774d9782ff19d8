//! CLI table example.

use core::convert::Infallible;
use std::io::{self, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use bjtable::render::{Chip, Color, Point, Sprite};
use bjtable::{Card, Input, Renderer, Scene, Suit, Table, TableOptions};

fn main() {
    println!("Blackjack table (d = deal, h = hit, s = stand, q = quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let table = Table::new(TableOptions::default(), seed);
    let mut terminal = Terminal::default();
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        table.tick(now - last_frame);
        last_frame = now;

        let scene = Scene::compose(&table.snapshot(), &table.options);
        let Ok(()) = scene.present(&mut terminal);

        let line = prompt_line("> ");
        let Some(key) = line.chars().next() else {
            continue;
        };
        if key == 'q' {
            println!("Goodbye.");
            break;
        }

        let Some(input) = Input::from_key(key) else {
            println!("Unknown key.");
            continue;
        };

        if let Err(err) = table.apply(input) {
            println!("Action error: {err}");
        }
        // Waiting for the key does not count against the banner.
        last_frame = Instant::now();
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Prints each frame as rows of text, grouped by screen row.
#[derive(Default)]
struct Terminal {
    rows: Vec<(i32, i32, String)>,
}

impl Renderer for Terminal {
    type Error = Infallible;

    fn clear(&mut self, _color: Color) -> Result<(), Self::Error> {
        self.rows.clear();
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: Sprite, at: Point) -> Result<(), Self::Error> {
        let text = match sprite {
            Sprite::Card { card, .. } => format_card(card),
            Sprite::CardBack => colorize("##", "90"),
            Sprite::Chip(Chip::Grey) => colorize("(o)", "37"),
            Sprite::Chip(Chip::Blue) => colorize("(o)", "34"),
            Sprite::Chip(Chip::White) => colorize("(o)", "97"),
        };
        self.rows.push((at.y, at.x, text));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, at: Point, _color: Color) -> Result<(), Self::Error> {
        self.rows.push((at.y, at.x, colorize(text, "35")));
        Ok(())
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.rows.sort_by_key(|&(y, x, _)| (y, x));

        println!();
        let mut current_row = None;
        let mut line = Vec::new();
        for (y, _, text) in self.rows.drain(..) {
            if current_row.is_some_and(|row| row != y) {
                println!("{}", line.join(" "));
                line.clear();
            }
            current_row = Some(y);
            line.push(text);
        }
        if !line.is_empty() {
            println!("{}", line.join(" "));
        }
        println!();
        Ok(())
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: Card) -> String {
    let (suit, color_code) = match card.suit() {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank() {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        rank => rank.to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
