//! Foundation piles: four suit-bound piles built up from Ace to King.

use log::debug;
use serde::{Deserialize, Serialize};

use super::error::PlacementError;
use crate::core::card::{Card, Suit, NUM_FACE_VALUES, NUM_SUITS};

/// One foundation pile, bound to a single suit for the whole game.
///
/// Its cards, when non-empty, always form the strictly ascending run
/// Ace, Two, ... with no gaps, all of the pile's suit. `try_add` is the
/// only way cards get in, so the invariant holds by construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationPile {
    suit: Suit,
    cards: Vec<Card>,
}

impl FoundationPile {
    /// Create an empty pile for `suit`.
    #[must_use]
    pub fn new(suit: Suit) -> Self {
        Self {
            suit,
            cards: Vec::new(),
        }
    }

    /// Try to place `card` on this pile.
    ///
    /// Accepts only the pile's own suit, starting from the Ace and
    /// ascending by exactly one face value per card. Rejection leaves the
    /// pile untouched.
    pub fn try_add(&mut self, card: Card) -> Result<(), PlacementError> {
        if card.suit() != self.suit {
            return Err(PlacementError::WrongSuit);
        }

        match self.top() {
            None => {
                if card.face_value() != Card::ACE {
                    return Err(PlacementError::WrongOrder);
                }
            }
            Some(top) => {
                if card.face_value() != top.face_value() + 1 {
                    return Err(PlacementError::WrongOrder);
                }
            }
        }

        self.cards.push(card);
        if self.is_complete() {
            debug!("foundation pile {} complete", self.suit);
        }
        Ok(())
    }

    /// The suit this pile accepts.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The top card, if any. Peek only.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Complete once the full suit, Ace through King, is present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == NUM_FACE_VALUES as usize
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the pile holds no cards yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, bottom to top. Read-only view for rendering.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// The four foundation piles, one per suit, fixed for the whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundation {
    piles: [FoundationPile; NUM_SUITS as usize],
}

impl Default for Foundation {
    fn default() -> Self {
        Self::new()
    }
}

impl Foundation {
    /// Create the four empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self {
            piles: Suit::ALL.map(FoundationPile::new),
        }
    }

    /// The pile for `suit`.
    #[must_use]
    pub fn pile(&self, suit: Suit) -> &FoundationPile {
        &self.piles[suit as usize]
    }

    /// Mutable access to the pile for `suit`, for placement attempts.
    pub fn pile_mut(&mut self, suit: Suit) -> &mut FoundationPile {
        &mut self.piles[suit as usize]
    }

    /// All four piles, in `Suit::ALL` order.
    #[must_use]
    pub fn piles(&self) -> &[FoundationPile; NUM_SUITS as usize] {
        &self.piles
    }

    /// The game is won once every pile is complete.
    #[must_use]
    pub fn is_game_won(&self) -> bool {
        self.piles.iter().all(FoundationPile::is_complete)
    }

    /// Total number of cards across the four piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(FoundationPile::len).sum()
    }
}
