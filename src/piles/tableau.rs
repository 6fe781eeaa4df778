//! Tableau piles: the seven cascading piles of the main table.
//!
//! Two invariants govern every pile:
//!
//! - No face-up card ever sits beneath a face-down card. Once a pile shows
//!   any face-up card, face-down cards are refused.
//! - Among the face-up cards, consecutive cards alternate suit color and
//!   descend by exactly one face value, bottom to top.
//!
//! `add_to_pile` enforces both for gameplay placements. The initial deal
//! lays face-down cards through the crate-internal `deal`, which these
//! rules would otherwise refuse.

use serde::{Deserialize, Serialize};

use super::error::PlacementError;
use crate::core::card::{Card, TableauCard};

/// Number of tableau piles.
pub const NUM_TABLEAU_PILES: usize = 7;

/// One tableau pile. The last element of `cards` is the top, accessible
/// card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauPile {
    offset: usize,
    cards: Vec<TableauCard>,
}

impl TableauPile {
    /// Create an empty pile at position `offset` (0-based, left to right).
    #[must_use]
    pub fn new(offset: usize) -> Self {
        debug_assert!(offset < NUM_TABLEAU_PILES, "pile offset out of range: {offset}");
        Self {
            offset,
            cards: Vec::new(),
        }
    }

    /// Try to place `card` on this pile.
    ///
    /// - A face-down card is refused once any face-up card is present.
    /// - An empty pile takes any card, turned face-up regardless of the
    ///   flag it arrived with.
    /// - While every card is still face-down, the new card keeps its flag.
    /// - Otherwise the cascade rules apply against the top card: never on
    ///   an Ace, alternating color, descending by exactly one.
    ///
    /// Rejection leaves the pile untouched.
    pub fn add_to_pile(&mut self, card: TableauCard) -> Result<(), PlacementError> {
        if !card.is_face_up && self.cards.iter().any(|c| c.is_face_up) {
            return Err(PlacementError::FaceDownNotAllowed);
        }

        let Some(&top) = self.cards.last() else {
            self.cards.push(card.face_up());
            return Ok(());
        };

        if self.cards.iter().all(|c| !c.is_face_up) {
            self.cards.push(card);
            return Ok(());
        }

        // A face-up card exists and none sits below a face-down one, so the
        // top card is face-up: validate the cascade against it.
        if top.card.face_value() == Card::ACE {
            return Err(PlacementError::CannotPlaceOnAce);
        }
        if !top.card.is_opposite_color(card.card) {
            return Err(PlacementError::MustAlternateColor);
        }
        if top.card.face_value() != card.card.face_value() + 1 {
            return Err(PlacementError::MustDescendByOne);
        }

        self.cards.push(card.face_up());
        Ok(())
    }

    /// Remove and return the top card.
    ///
    /// If the removal exposes a face-down card, it is turned face-up, as
    /// the table rules demand for a newly uncovered card.
    pub fn take_top(&mut self) -> Option<TableauCard> {
        let taken = self.cards.pop()?;
        if let Some(exposed) = self.cards.last_mut() {
            exposed.is_face_up = true;
        }
        Some(taken)
    }

    /// The top, accessible card, if any. Peek only.
    #[must_use]
    pub fn top_card(&self) -> Option<TableauCard> {
        self.cards.last().copied()
    }

    /// Unchecked placement used by the setup deal.
    pub(crate) fn deal(&mut self, card: TableauCard) {
        self.cards.push(card);
    }

    /// This pile's 0-based position, left to right.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the pile holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, bottom to top. Read-only view for rendering.
    #[must_use]
    pub fn cards(&self) -> &[TableauCard] {
        &self.cards
    }
}

/// The seven tableau piles, offsets 0 through 6, initialized empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tableau {
    piles: [TableauPile; NUM_TABLEAU_PILES],
}

impl Default for Tableau {
    fn default() -> Self {
        Self::new()
    }
}

impl Tableau {
    /// Create the seven empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self {
            piles: std::array::from_fn(TableauPile::new),
        }
    }

    /// The pile at `offset`.
    ///
    /// Panics if `offset` is 7 or more.
    #[must_use]
    pub fn pile(&self, offset: usize) -> &TableauPile {
        &self.piles[offset]
    }

    /// Mutable access to the pile at `offset`, for placement attempts.
    ///
    /// Panics if `offset` is 7 or more.
    pub fn pile_mut(&mut self, offset: usize) -> &mut TableauPile {
        &mut self.piles[offset]
    }

    /// All seven piles, left to right.
    #[must_use]
    pub fn piles(&self) -> &[TableauPile; NUM_TABLEAU_PILES] {
        &self.piles
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(TableauPile::len).sum()
    }
}
