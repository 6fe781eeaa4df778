//! LIFO decks: the draw pile and the hand (waste) pile.
//!
//! Both decks share one type; the draw pile starts as the full shuffled
//! 52-card set and the hand pile starts empty. The top of the deck is the
//! end of the backing vector.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{Card, Suit, DECK_SIZE, NUM_FACE_VALUES};
use crate::core::rng::GameRng;

/// Cards returned by a single draw.
///
/// Sized for the draw-three variant so the common case stays off the heap.
pub type Drawn = SmallVec<[Card; 3]>;

/// An ordered pile of cards with stack semantics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck. The hand pile starts this way.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the full 52-card set and shuffle it with `rng`.
    #[must_use]
    pub fn standard(rng: &mut GameRng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for face_value in 0..NUM_FACE_VALUES {
            for suit in Suit::ALL {
                cards.push(Card::new(face_value, suit));
            }
        }
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Remove up to `n` cards from the top.
    ///
    /// The result is in draw order: the first card drawn comes first.
    /// Running out of cards mid-draw is normal; the result is simply
    /// shorter than `n`.
    pub fn draw(&mut self, n: usize) -> Drawn {
        let mut drawn = Drawn::new();
        for _ in 0..n {
            match self.cards.pop() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Push `cards` onto the deck in the order given.
    ///
    /// The last card given ends up on top. Feeding a freshly drawn sequence
    /// straight back in therefore reverses it; popping that deck yields the
    /// original order again, which is exactly what hand recycling relies on.
    pub fn discard_to(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Pop every card, returning them in pop order and leaving the deck
    /// empty.
    pub fn empty_to_list(&mut self) -> Vec<Card> {
        let mut all = Vec::with_capacity(self.cards.len());
        while let Some(card) = self.cards.pop() {
            all.push(card);
        }
        all
    }

    /// Peek at the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Number of cards currently in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if no cards remain.
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_deck_has_52_unique_cards() {
        let mut rng = GameRng::new(42);
        let deck = Deck::standard(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);

        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_empty_deck() {
        let deck = Deck::empty();
        assert!(deck.is_empty());
        assert_eq!(deck.len(), 0);
        assert_eq!(deck.top(), None);
    }

    #[test]
    fn test_draw_removes_from_top_in_order() {
        let a = Card::new(0, Suit::Club);
        let b = Card::new(1, Suit::Heart);
        let c = Card::new(2, Suit::Spade);

        let mut deck = Deck::empty();
        deck.discard_to([a, b, c]);
        assert_eq!(deck.top(), Some(c));

        // Pop order: c was on top, then b
        let drawn = deck.draw(2);
        assert_eq!(drawn.as_slice(), &[c, b]);
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.top(), Some(a));
    }

    #[test]
    fn test_partial_draw_is_not_an_error() {
        let mut rng = GameRng::new(7);
        let mut deck = Deck::standard(&mut rng);
        deck.draw(50);
        assert_eq!(deck.len(), 2);

        let drawn = deck.draw(5);
        assert_eq!(drawn.len(), 2);
        assert!(deck.is_empty());

        // Drawing from an empty deck yields nothing
        assert!(deck.draw(3).is_empty());
    }

    #[test]
    fn test_draw_zero() {
        let mut rng = GameRng::new(7);
        let mut deck = Deck::standard(&mut rng);

        assert!(deck.draw(0).is_empty());
        assert_eq!(deck.len(), DECK_SIZE);
    }

    #[test]
    fn test_draw_then_discard_restores_size() {
        let mut rng = GameRng::new(3);
        let mut deck = Deck::standard(&mut rng);

        let drawn = deck.draw(10);
        assert_eq!(deck.len(), DECK_SIZE - 10);

        deck.discard_to(drawn);
        assert_eq!(deck.len(), DECK_SIZE);
    }

    #[test]
    fn test_empty_to_list_pops_everything() {
        let a = Card::new(0, Suit::Club);
        let b = Card::new(1, Suit::Heart);

        let mut deck = Deck::empty();
        deck.discard_to([a, b]);

        let all = deck.empty_to_list();
        assert_eq!(all, vec![b, a]);
        assert!(deck.is_empty());

        // Emptying an already-empty deck is fine
        assert!(deck.empty_to_list().is_empty());
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let deck1 = Deck::standard(&mut GameRng::new(9));
        let deck2 = Deck::standard(&mut GameRng::new(9));
        let deck3 = Deck::standard(&mut GameRng::new(10));

        assert_eq!(deck1, deck2);
        assert_ne!(deck1, deck3);
    }
}
