//! Gameplay configuration.

use serde::{Deserialize, Serialize};

/// Cards a draw action moves in the classic draw-three game.
pub const DEFAULT_DRAW_COUNT: usize = 3;

/// Configuration fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards moved from the draw deck to the hand per draw action.
    /// 3 is the classic game; 1 is the common easier variant.
    pub draw_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            draw_count: DEFAULT_DRAW_COUNT,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-action draw count.
    ///
    /// Panics if `draw_count` is zero.
    #[must_use]
    pub fn with_draw_count(mut self, draw_count: usize) -> Self {
        assert!(draw_count > 0, "draw count must be positive");
        self.draw_count = draw_count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_draw_three() {
        assert_eq!(GameConfig::new().draw_count, 3);
    }

    #[test]
    fn test_with_draw_count() {
        let config = GameConfig::new().with_draw_count(1);
        assert_eq!(config.draw_count, 1);
    }

    #[test]
    #[should_panic(expected = "draw count")]
    fn test_zero_draw_count_panics() {
        let _ = GameConfig::new().with_draw_count(0);
    }
}
