//! Deck State Store
//!
//! Wraps `DeckState` in a Leptos reactive store and exposes the
//! transition helpers components go through.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::deck::{DeckState, Decision};
use crate::models::Cat;

/// Type alias for the store
pub type DeckStore = Store<DeckState>;

/// Get the deck store from context
pub fn use_deck_store() -> DeckStore {
    expect_context::<DeckStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the deck with a freshly fetched batch
pub fn store_load_batch(store: &DeckStore, batch: Vec<Cat>) {
    store.write().load_batch(batch);
}

/// Apply a decision; returns true when the batch was just consumed
pub fn store_decide(store: &DeckStore, decision: Decision) -> bool {
    store.write().decide(decision)
}

/// Flip to the summary screen
pub fn store_show_summary(store: &DeckStore) {
    store.write().show_summary();
}

/// Clear the liked accumulator and return to browsing
pub fn store_begin_restart(store: &DeckStore) {
    store.write().begin_restart();
}
