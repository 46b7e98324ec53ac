//! Paws & Preferences App
//!
//! Top-level component: owns the deck store, the batch fetch, the keyboard
//! bindings, and the delayed browsing-to-summary transition.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{ActionBar, CardStack, SummaryGrid};
use crate::context::{AppContext, FetchStatus};
use crate::deck::{DeckState, DeckStateStoreFields, Decision, View};
use crate::store::{store_decide, store_load_batch, store_show_summary, DeckStore};

/// Delay between the last decision and the summary screen, covering the
/// card's exit animation.
const SUMMARY_DELAY_MS: u32 = 400;

#[component]
pub fn App() -> impl IntoView {
    let deck: DeckStore = Store::new(DeckState::new());
    provide_context(deck);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (status, set_status) = signal(FetchStatus::Loading);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (status, set_status));
    provide_context(ctx);

    // Pending browsing-to-summary transition; replaced or cancelled as a whole.
    let summary_timer = StoredValue::new_local(None::<Timeout>);

    // Fetch a batch on mount and again on every restart. The deck is only
    // touched on success; a failed fetch leaves it as it was.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        // A pending summary transition must not fire into the incoming batch.
        summary_timer.update_value(|timer| {
            timer.take();
        });
        ctx.set_status(FetchStatus::Loading);
        spawn_local(async move {
            match api::fetch_batch().await {
                Ok(batch) => {
                    store_load_batch(&deck, batch);
                    ctx.set_status(FetchStatus::Idle);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[API] {err}").into());
                    ctx.set_status(FetchStatus::Error(err.to_string()));
                }
            }
        });
    });

    let on_decision = move |decision: Decision| {
        let exhausted = store_decide(&deck, decision);
        if exhausted {
            summary_timer.set_value(Some(Timeout::new(SUMMARY_DELAY_MS, move || {
                store_show_summary(&deck);
            })));
        }
    };

    // ArrowLeft = pass, ArrowRight = like; ignored while loading, in the
    // error state, or once the deck is exhausted.
    Effect::new(move |_| {
        use wasm_bindgen::closure::Closure;

        let keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |ev: web_sys::KeyboardEvent| {
                if !matches!(ctx.status.get_untracked(), FetchStatus::Idle) {
                    return;
                }
                if deck.view().get_untracked() != View::Browsing
                    || deck.pointer().get_untracked() < 0
                {
                    return;
                }
                match ev.key().as_str() {
                    "ArrowRight" => on_decision(Decision::Accept),
                    "ArrowLeft" => on_decision(Decision::Reject),
                    _ => {}
                }
            },
        );
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
        }
        keydown.forget();
    });

    view! {
        <div class="app-shell">
            {move || match ctx.status.get() {
                FetchStatus::Loading => {
                    view! {
                        <div class="loading-screen">
                            <span class="loading-cat">"🐱"</span>
                            <p>"Herding cats..."</p>
                        </div>
                    }
                        .into_any()
                }
                FetchStatus::Error(message) => {
                    view! {
                        <div class="error-screen">
                            <p class="error">{message}</p>
                            <p class="error-hint">
                                "Oops! The cat server is sleepy. Please refresh the page."
                            </p>
                        </div>
                    }
                        .into_any()
                }
                FetchStatus::Idle => {
                    match deck.view().get() {
                        View::Browsing => {
                            view! {
                                <div class="app-container">
                                    <div class="header">
                                        <span class="header-cat">"🐱"</span>
                                        <h2>"Paws & Preferences"</h2>
                                    </div>
                                    <CardStack on_decision=on_decision/>
                                    <ActionBar on_decision=on_decision/>
                                    <p class="hint">"Swipe left to pass ✕ • right to like ♥"</p>
                                </div>
                            }
                                .into_any()
                        }
                        View::Summary => view! { <SummaryGrid/> }.into_any(),
                    }
                }
            }}
        </div>
    }
}
