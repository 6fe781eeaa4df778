//! Core primitives: cards, suits, colors, and deterministic randomness.

pub mod card;
pub mod rng;

pub use card::{Card, Color, Suit, TableauCard, DECK_SIZE, NUM_FACE_VALUES, NUM_SUITS};
pub use rng::{GameRng, GameRngState};
