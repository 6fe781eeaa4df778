//! Placement rule violations.
//!
//! Rejections are ordinary outcomes, not failures: piles validate first and
//! either commit or leave state untouched. Callers branch on the `Result`
//! and show the `Display` text as user feedback.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a foundation or tableau pile refused a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementError {
    /// Foundation piles accept a single suit.
    WrongSuit,
    /// Foundation piles build strictly upward from the Ace.
    WrongOrder,
    /// A face-down card cannot join a pile that already shows a face-up card.
    FaceDownNotAllowed,
    /// Nothing may be placed on an Ace.
    CannotPlaceOnAce,
    /// Cascades alternate suit colors.
    MustAlternateColor,
    /// Cascades descend by exactly one face value.
    MustDescendByOne,
}

impl PlacementError {
    /// User-facing reason text.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            PlacementError::WrongSuit => "wrong suit",
            PlacementError::WrongOrder => "wrong order",
            PlacementError::FaceDownNotAllowed => "face-down card not allowed here",
            PlacementError::CannotPlaceOnAce => "cannot place on Ace",
            PlacementError::MustAlternateColor => "must alternate color",
            PlacementError::MustDescendByOne => "must descend by one",
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl std::error::Error for PlacementError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_matches_display() {
        let all = [
            PlacementError::WrongSuit,
            PlacementError::WrongOrder,
            PlacementError::FaceDownNotAllowed,
            PlacementError::CannotPlaceOnAce,
            PlacementError::MustAlternateColor,
            PlacementError::MustDescendByOne,
        ];

        for err in all {
            assert_eq!(err.to_string(), err.reason());
        }
    }
}
