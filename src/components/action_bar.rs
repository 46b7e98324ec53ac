//! Action Bar Component
//!
//! Explicit pass/like buttons mirroring the swipe decisions, with no
//! drag threshold. Disabled once the deck is exhausted.

use leptos::prelude::*;

use crate::deck::{Decision, DeckStateStoreFields};
use crate::store::use_deck_store;

#[component]
pub fn ActionBar(#[prop(into)] on_decision: Callback<Decision>) -> impl IntoView {
    let deck = use_deck_store();
    let disabled = move || deck.pointer().get() < 0;

    view! {
        <div class="controls">
            <button
                class="btn dislike"
                aria-label="Pass"
                disabled=disabled
                on:click=move |_| on_decision.run(Decision::Reject)
            >
                "✕"
            </button>
            <button
                class="btn like"
                aria-label="Like"
                disabled=disabled
                on:click=move |_| on_decision.run(Decision::Accept)
            >
                "♥"
            </button>
        </div>
    }
}
