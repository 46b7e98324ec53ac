//! Summary Grid Component
//!
//! Grid of liked cats shown once the deck is exhausted, with a restart
//! control that starts a fresh round.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::deck::DeckStateStoreFields;
use crate::models::Cat;
use crate::store::{store_begin_restart, use_deck_store};

#[component]
pub fn SummaryGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let deck = use_deck_store();

    let on_restart = move |_| {
        store_begin_restart(&deck);
        ctx.reload();
    };

    view! {
        <div class="summary-container">
            <header>
                <h1>"Purrfect Matches!"</h1>
                <p>{move || format!("You liked {} cats.", deck.liked().read().len())}</p>
            </header>

            {move || {
                if deck.liked().read().is_empty() {
                    view! {
                        <div class="no-matches">
                            <p>"No matches? You must be a dog person. 🐶"</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="grid">
                            <For
                                each=move || deck.liked().get()
                                key=|cat| cat.id.clone()
                                children=move |cat: Cat| {
                                    view! {
                                        <div class="grid-item">
                                            <img src=cat.image_url alt="Liked cat" loading="lazy"/>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}

            <button class="restart-btn" on:click=on_restart>
                "⟲ Start Over"
            </button>
        </div>
    }
}
