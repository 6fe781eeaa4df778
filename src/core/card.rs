//! Card primitives: suits, colors, and face values.
//!
//! A [`Card`] is an immutable value pairing a zero-indexed face value
//! (0 = Ace, ..., 12 = King) with a [`Suit`]. The tableau wraps cards in
//! [`TableauCard`], which adds a face-up flag by composition; there is no
//! card subtype.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of suits in a standard deck.
pub const NUM_SUITS: u8 = 4;
/// Number of distinct face values (Ace through King).
pub const NUM_FACE_VALUES: u8 = 13;
/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = (NUM_SUITS * NUM_FACE_VALUES) as usize;

/// The four suits of a standard deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

/// Suit color, used by the tableau's alternating-color placement checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    /// All suits in a fixed, reproducible order.
    pub const ALL: [Suit; NUM_SUITS as usize] =
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// The color of this suit: diamonds and hearts are red, clubs and
    /// spades are black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamond | Suit::Heart => Color::Red,
            Suit::Club | Suit::Spade => Color::Black,
        }
    }

    /// Single-character representation: 'C', 'D', 'H', or 'S'.
    #[must_use]
    pub const fn short_char(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_char())
    }
}

/// A single playing card.
///
/// `face_value` is zero-indexed: the Ace is 0 and the King is 12. Cards are
/// immutable and compare by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    face_value: u8,
    suit: Suit,
}

impl Card {
    /// Lowest face value (the Ace).
    pub const ACE: u8 = 0;
    /// Highest face value (the King).
    pub const KING: u8 = NUM_FACE_VALUES - 1;

    /// Create a new card.
    ///
    /// Panics in debug builds if `face_value` is out of range.
    #[must_use]
    pub fn new(face_value: u8, suit: Suit) -> Self {
        debug_assert!(
            face_value < NUM_FACE_VALUES,
            "face value out of range: {face_value}"
        );
        Self { face_value, suit }
    }

    /// Zero-indexed face value (0 = Ace, 12 = King).
    #[must_use]
    pub const fn face_value(self) -> u8 {
        self.face_value
    }

    /// The suit of this card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// The color of this card's suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// True if `self` and `other` have different suit colors.
    #[must_use]
    pub fn is_opposite_color(self, other: Card) -> bool {
        self.color() != other.color()
    }
}

impl fmt::Display for Card {
    /// Short form like "AH", "7C", "TD", "KS".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self.face_value {
            0 => 'A',
            9 => 'T',
            10 => 'J',
            11 => 'Q',
            12 => 'K',
            n => char::from_digit(u32::from(n) + 1, 10).unwrap_or('?'),
        };
        write!(f, "{}{}", value, self.suit.short_char())
    }
}

/// A card on the tableau together with its visibility state.
///
/// Face-down cards are not movable and cannot be placed upon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableauCard {
    /// The card itself.
    pub card: Card,
    /// Whether the card is visible and playable.
    pub is_face_up: bool,
}

impl TableauCard {
    /// Wrap a card with the given orientation.
    #[must_use]
    pub const fn new(card: Card, is_face_up: bool) -> Self {
        Self { card, is_face_up }
    }

    /// The same card turned face-up.
    #[must_use]
    pub const fn face_up(self) -> Self {
        Self {
            card: self.card,
            is_face_up: true,
        }
    }
}
