//! Game orchestration: configuration, authoritative state, and session
//! ownership.

pub mod click;
pub mod config;
pub mod session;
pub mod state;

pub use click::{ClickTarget, ClickTargetKind};
pub use config::{GameConfig, DEFAULT_DRAW_COUNT};
pub use session::GameSession;
pub use state::{GameAction, GameState};
