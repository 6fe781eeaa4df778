//! Click-target bookkeeping for the presentation layer.
//!
//! The engine stores the most recent click target so a renderer can
//! highlight it and recognize a follow-up click on the same element. It
//! never influences rule logic.

use serde::{Deserialize, Serialize};

/// The kind of element that was clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickTargetKind {
    Foundation,
    Tableau,
    DrawPile,
    HandPile,
}

/// The most recently clicked element: a kind plus an optional pile index.
///
/// The index is meaningful for foundation and tableau targets only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickTarget {
    pub kind: ClickTargetKind,
    pub index: Option<usize>,
}

impl ClickTarget {
    /// Create a click target.
    #[must_use]
    pub const fn new(kind: ClickTargetKind, index: Option<usize>) -> Self {
        Self { kind, index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality() {
        let a = ClickTarget::new(ClickTargetKind::Tableau, Some(3));
        let b = ClickTarget::new(ClickTargetKind::Tableau, Some(3));
        let c = ClickTarget::new(ClickTargetKind::Tableau, Some(4));
        let d = ClickTarget::new(ClickTargetKind::DrawPile, None);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}
