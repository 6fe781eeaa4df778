//! The card piles on the table: decks, foundation, and tableau.

pub mod deck;
pub mod error;
pub mod foundation;
pub mod tableau;

pub use deck::{Deck, Drawn};
pub use error::PlacementError;
pub use foundation::{Foundation, FoundationPile};
pub use tableau::{Tableau, TableauPile, NUM_TABLEAU_PILES};
