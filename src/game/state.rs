//! Authoritative game state and the deck-level actions that mutate it.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use super::click::ClickTarget;
use super::config::GameConfig;
use crate::core::card::TableauCard;
use crate::core::rng::GameRng;
use crate::piles::deck::Deck;
use crate::piles::foundation::Foundation;
use crate::piles::tableau::{Tableau, NUM_TABLEAU_PILES};

/// A deck-level gameplay action, recorded in the state's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// The initial deal laid 28 cards onto the tableau.
    Deal,
    /// A draw moved this many cards from the draw deck to the hand.
    Draw { count: usize },
    /// The hand deck was recycled back into the draw deck.
    Recycle { count: usize },
}

/// The complete state of one solitaire game.
///
/// `GameState` owns both decks, the foundation, and the tableau, and is the
/// sole entry point for the deck actions (draw, recycle). Placement
/// attempts go through the foundation and tableau piles it exposes; the
/// caller commits a move by pairing a successful placement with the
/// matching removal. A new game is a new `GameState` — there is no reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    draw_deck: Deck,
    hand_deck: Deck,
    foundation: Foundation,
    tableau: Tableau,
    click_target: Option<ClickTarget>,
    config: GameConfig,
    history: Vector<GameAction>,
}

impl GameState {
    /// Deal a fresh game, shuffling with `rng`.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        Self::with_config(GameConfig::default(), rng)
    }

    /// Deal a fresh game with an explicit configuration.
    #[must_use]
    pub fn with_config(config: GameConfig, rng: &mut GameRng) -> Self {
        let mut state = Self {
            draw_deck: Deck::standard(rng),
            hand_deck: Deck::empty(),
            foundation: Foundation::new(),
            tableau: Tableau::new(),
            click_target: None,
            config,
            history: Vector::new(),
        };
        state.deal();
        state
    }

    /// Convenience constructor for a seeded game.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&mut GameRng::new(seed))
    }

    /// The classic triangular deal.
    ///
    /// Pile i receives i+1 cards; only the last card each pile receives is
    /// face-up. Leaves 24 cards in the draw deck.
    fn deal(&mut self) {
        for start in 0..NUM_TABLEAU_PILES {
            for pile in start..NUM_TABLEAU_PILES {
                let Some(card) = self.draw_deck.draw(1).first().copied() else {
                    // 28 cards dealt from a 52-card deck
                    unreachable!("draw deck exhausted during the deal");
                };
                self.tableau
                    .pile_mut(pile)
                    .deal(TableauCard::new(card, pile == start));
            }
        }
        debug!(
            "dealt {} tableau cards, {} left in draw deck",
            self.tableau.total_cards(),
            self.draw_deck.len()
        );
        self.history.push_back(GameAction::Deal);
    }

    /// Move up to `draw_count` cards from the draw deck onto the hand deck.
    ///
    /// Cards land on the hand in draw order, so the last card drawn ends up
    /// on top. Returns how many cards actually moved; zero when the draw
    /// deck is empty, which is not an error.
    pub fn draw_from_draw_deck(&mut self) -> usize {
        let drawn = self.draw_deck.draw(self.config.draw_count);
        let count = drawn.len();
        self.hand_deck.discard_to(drawn);

        if count > 0 {
            debug!("drew {count} cards to hand");
            self.history.push_back(GameAction::Draw { count });
        }
        count
    }

    /// Return the hand deck to the draw deck so drawing can continue.
    ///
    /// Popping the hand and pushing the result reverses it, which restores
    /// the draw deck to its pre-draw order. Safe to call any time; an empty
    /// hand makes this a no-op.
    pub fn recycle_hand_into_draw(&mut self) {
        let cards = self.hand_deck.empty_to_list();
        if cards.is_empty() {
            return;
        }

        let count = cards.len();
        self.draw_deck.discard_to(cards);
        debug!("recycled {count} cards into the draw deck");
        self.history.push_back(GameAction::Recycle { count });
    }

    /// True once every foundation pile holds its full suit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundation.is_game_won()
    }

    /// Total cards across decks, tableau, and foundation. Always 52.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_deck.len()
            + self.hand_deck.len()
            + self.tableau.total_cards()
            + self.foundation.total_cards()
    }

    // === Accessors ===

    /// The draw deck.
    #[must_use]
    pub fn draw_deck(&self) -> &Deck {
        &self.draw_deck
    }

    /// Mutable draw deck, for callers orchestrating multi-step moves.
    pub fn draw_deck_mut(&mut self) -> &mut Deck {
        &mut self.draw_deck
    }

    /// The hand (waste) deck.
    #[must_use]
    pub fn hand_deck(&self) -> &Deck {
        &self.hand_deck
    }

    /// Mutable hand deck, for callers orchestrating multi-step moves.
    pub fn hand_deck_mut(&mut self) -> &mut Deck {
        &mut self.hand_deck
    }

    /// The foundation.
    #[must_use]
    pub fn foundation(&self) -> &Foundation {
        &self.foundation
    }

    /// Mutable foundation, for placement attempts.
    pub fn foundation_mut(&mut self) -> &mut Foundation {
        &mut self.foundation
    }

    /// The tableau.
    #[must_use]
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Mutable tableau, for placement attempts.
    pub fn tableau_mut(&mut self) -> &mut Tableau {
        &mut self.tableau
    }

    /// The configuration this game was dealt with.
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Deck-level actions performed so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GameAction> {
        &self.history
    }

    // === Click target (presentation metadata) ===

    /// The most recent click target, if any.
    #[must_use]
    pub const fn click_target(&self) -> Option<ClickTarget> {
        self.click_target
    }

    /// Remember a click target for the presentation layer.
    pub fn set_click_target(&mut self, target: ClickTarget) {
        self.click_target = Some(target);
    }

    /// Forget the remembered click target.
    pub fn clear_click_target(&mut self) {
        self.click_target = None;
    }
}
