//! # klondike-engine
//!
//! The authoritative rules engine for single-player Klondike solitaire: the
//! entities (cards, decks, piles) and the invariant-preserving operations
//! that mutate them — dealing, drawing, recycling, and pile-placement
//! validation.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: no rendering, input, or hosting concerns. A
//!    presentation layer calls the operations here and re-renders from the
//!    resulting state.
//!
//! 2. **Rejection is data**: every illegal placement comes back as a
//!    [`PlacementError`] carrying the user-facing reason. Nothing panics on
//!    a bad move, and a rejected placement never mutates state.
//!
//! 3. **Explicit randomness**: shuffles consume a caller-supplied
//!    [`GameRng`], so any deal can be reproduced from its seed.
//!
//! ## Modules
//!
//! - `core`: card and suit primitives, deterministic RNG
//! - `piles`: decks, foundation piles, tableau piles, placement rules
//! - `game`: configuration, game state and its actions, session ownership
//!
//! ## Example
//!
//! ```
//! use klondike_engine::GameSession;
//!
//! let mut session = GameSession::new(42);
//!
//! // Flip up to three cards from the draw deck into the hand.
//! let moved = session.game_mut().draw_from_draw_deck();
//! assert!(moved <= 3);
//!
//! // Try to move the top hand card onto its foundation pile. The caller
//! // commits the move only when the placement is accepted.
//! if let Some(card) = session.game().hand_deck().top() {
//!     let game = session.game_mut();
//!     match game.foundation_mut().pile_mut(card.suit()).try_add(card) {
//!         Ok(()) => {
//!             game.hand_deck_mut().draw(1);
//!         }
//!         Err(rejected) => println!("not yet: {rejected}"),
//!     }
//! }
//! ```

pub mod core;
pub mod game;
pub mod piles;

// Re-export the public surface
pub use crate::core::{
    Card, Color, GameRng, GameRngState, Suit, TableauCard, DECK_SIZE, NUM_FACE_VALUES, NUM_SUITS,
};

pub use crate::game::{
    ClickTarget, ClickTargetKind, GameAction, GameConfig, GameSession, GameState,
    DEFAULT_DRAW_COUNT,
};

pub use crate::piles::{
    Deck, Drawn, Foundation, FoundationPile, PlacementError, Tableau, TableauPile,
    NUM_TABLEAU_PILES,
};
