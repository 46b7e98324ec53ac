//! Deck State
//!
//! Owns the candidate stack, the liked accumulator, and the view mode.
//! Pure state transitions; reactive wiring lives in the store and app layers.

use reactive_stores::Store;

use crate::models::Cat;

/// Which screen is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Browsing,
    Summary,
}

/// User verdict on the current card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

/// Deck state with field-level reactivity through `Store<DeckState>`.
///
/// `pointer` stays within `[-1, cats.len() - 1]`; the batch is consumed
/// last index first, and decrementing past -1 is the sole summary trigger.
#[derive(Clone, Debug, Store)]
pub struct DeckState {
    /// Fetched cards, insertion order = fetch order.
    pub cats: Vec<Cat>,
    /// Index of the visible card; -1 once the deck is exhausted.
    pub pointer: i32,
    /// Cards the user liked, append-only until restart.
    pub liked: Vec<Cat>,
    /// Current screen.
    pub view: View,
}

impl Default for DeckState {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckState {
    pub fn new() -> Self {
        Self {
            cats: Vec::new(),
            pointer: -1,
            liked: Vec::new(),
            view: View::Browsing,
        }
    }

    /// Replaces the deck with a fresh batch and points at its top card.
    pub fn load_batch(&mut self, batch: Vec<Cat>) {
        self.pointer = batch.len() as i32 - 1;
        self.cats = batch;
        self.view = View::Browsing;
    }

    /// The card currently facing the user.
    pub fn current(&self) -> Option<&Cat> {
        if self.pointer < 0 {
            return None;
        }
        self.cats.get(self.pointer as usize)
    }

    /// The card peeking out behind the current one.
    pub fn behind(&self) -> Option<&Cat> {
        if self.pointer < 1 {
            return None;
        }
        self.cats.get(self.pointer as usize - 1)
    }

    pub fn is_exhausted(&self) -> bool {
        self.pointer < 0
    }

    /// Applies a decision to the current card and advances the pointer.
    ///
    /// Returns true when this decision consumed the last card, so the
    /// caller can schedule the summary transition. A no-op (exhausted
    /// deck, or not browsing) returns false.
    pub fn decide(&mut self, decision: Decision) -> bool {
        if self.view != View::Browsing {
            return false;
        }
        let Some(cat) = self.current().cloned() else {
            return false;
        };
        if decision == Decision::Accept {
            self.liked.push(cat);
        }
        self.pointer -= 1;
        self.pointer < 0
    }

    /// Flips to the summary screen. Ignored if cards are still left,
    /// which covers a transition firing after a newer batch loaded.
    pub fn show_summary(&mut self) {
        if self.is_exhausted() {
            self.view = View::Summary;
        }
    }

    /// Clears the liked accumulator and returns to browsing; the caller
    /// follows up with a fresh fetch.
    pub fn begin_restart(&mut self) {
        self.liked.clear();
        self.view = View::Browsing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cat(id: &str) -> Cat {
        Cat {
            id: id.to_string(),
            tags: vec!["cute".to_string()],
            image_url: format!("https://cataas.com/cat/{id}"),
        }
    }

    fn loaded(ids: &[&str]) -> DeckState {
        let mut deck = DeckState::new();
        deck.load_batch(ids.iter().map(|id| make_cat(id)).collect());
        deck
    }

    #[test]
    fn load_batch_points_at_last_index() {
        let deck = loaded(&["a", "b", "c"]);
        assert_eq!(deck.pointer, 2);
        assert_eq!(deck.view, View::Browsing);
        assert_eq!(deck.current().unwrap().id, "c");
        assert_eq!(deck.behind().unwrap().id, "b");
    }

    #[test]
    fn accept_appends_exactly_one_card() {
        let mut deck = loaded(&["a", "b"]);
        deck.decide(Decision::Accept);
        assert_eq!(deck.liked.len(), 1);
        assert_eq!(deck.liked[0].id, "b");

        deck.decide(Decision::Reject);
        assert_eq!(deck.liked.len(), 1);
    }

    #[test]
    fn scenario_accept_reject_accept() {
        let mut deck = loaded(&["a", "b", "c"]);

        assert!(!deck.decide(Decision::Accept)); // C
        assert_eq!(deck.pointer, 1);
        assert!(!deck.decide(Decision::Reject)); // B
        assert_eq!(deck.pointer, 0);
        assert!(deck.decide(Decision::Accept)); // A
        assert_eq!(deck.pointer, -1);

        let liked: Vec<&str> = deck.liked.iter().map(|cat| cat.id.as_str()).collect();
        assert_eq!(liked, ["c", "a"]);

        deck.show_summary();
        assert_eq!(deck.view, View::Summary);
    }

    #[test]
    fn exactly_one_exhaustion_per_batch() {
        let mut deck = loaded(&["a", "b"]);
        assert!(!deck.decide(Decision::Reject));
        assert!(deck.decide(Decision::Reject));
        // Further decisions are no-ops and never re-trigger the transition.
        assert!(!deck.decide(Decision::Accept));
        assert_eq!(deck.liked.len(), 0);
        assert_eq!(deck.pointer, -1);
    }

    #[test]
    fn decide_is_ignored_outside_browsing() {
        let mut deck = loaded(&["a"]);
        deck.view = View::Summary;
        assert!(!deck.decide(Decision::Accept));
        assert_eq!(deck.pointer, 0);
        assert!(deck.liked.is_empty());
    }

    #[test]
    fn show_summary_requires_exhaustion() {
        let mut deck = loaded(&["a"]);
        deck.show_summary();
        assert_eq!(deck.view, View::Browsing);
    }

    #[test]
    fn restart_clears_liked_and_returns_to_browsing() {
        let mut deck = loaded(&["a", "b"]);
        deck.decide(Decision::Accept);
        deck.decide(Decision::Accept);
        deck.show_summary();

        deck.begin_restart();
        assert!(deck.liked.is_empty());
        assert_eq!(deck.view, View::Browsing);

        deck.load_batch(vec![make_cat("x")]);
        assert_eq!(deck.pointer, 0);
        assert_eq!(deck.current().unwrap().id, "x");
    }

    #[test]
    fn empty_batch_is_immediately_exhausted() {
        let deck = loaded(&[]);
        assert_eq!(deck.pointer, -1);
        assert!(deck.is_exhausted());
        assert!(deck.current().is_none());
        assert!(deck.behind().is_none());
    }
}
