//! Session ownership of a running game.

use log::debug;

use super::config::GameConfig;
use super::state::GameState;
use crate::core::rng::GameRng;

/// Exclusive owner of one running game.
///
/// The session holds the master RNG and forks it once per deal, so a
/// session seed reproduces the exact sequence of games. Starting a new game
/// replaces the `GameState` wholesale; nothing is reset in place.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    game: GameState,
}

impl GameSession {
    /// Create a session and deal its first game.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameConfig::default(), GameRng::new(seed))
    }

    /// Create a session with an explicit configuration.
    #[must_use]
    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create a session seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameConfig::default(), GameRng::from_entropy())
    }

    fn with_rng(config: GameConfig, mut rng: GameRng) -> Self {
        let game = GameState::with_config(config, &mut rng.fork());
        Self { config, rng, game }
    }

    /// Discard the current game and deal a fresh one.
    pub fn start_new_game(&mut self) {
        debug!("starting a new game");
        self.game = GameState::with_config(self.config, &mut self.rng.fork());
    }

    /// The current game.
    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Mutable access to the current game.
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    /// The configuration every game in this session is dealt with.
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_replaces_state() {
        let mut session = GameSession::new(42);
        let first = session.game().clone();

        session.game_mut().draw_from_draw_deck();
        session.start_new_game();

        // Fresh deal: hand empty again, full draw deck behind the tableau
        assert!(session.game().hand_deck().is_empty());
        assert_eq!(session.game().draw_deck().len(), 24);
        assert_eq!(session.game().history().len(), 1);

        // And a different shuffle than the first game
        assert_ne!(*session.game(), first);
    }

    #[test]
    fn test_session_seed_reproduces_game_sequence() {
        let mut a = GameSession::new(7);
        let mut b = GameSession::new(7);

        assert_eq!(a.game(), b.game());

        a.start_new_game();
        b.start_new_game();
        assert_eq!(a.game(), b.game());
    }

    #[test]
    fn test_config_carries_across_games() {
        let config = GameConfig::new().with_draw_count(1);
        let mut session = GameSession::with_config(config, 11);

        session.start_new_game();
        assert_eq!(session.game().config().draw_count, 1);
        assert_eq!(session.game_mut().draw_from_draw_deck(), 1);
    }
}
