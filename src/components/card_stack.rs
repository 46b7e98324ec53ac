//! Card Stack Component
//!
//! Renders the interactive top card, the next card peeking out behind it,
//! and a short-lived ghost for the card that is animating out. Translates
//! swipe directions into deck decisions.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_swipe::SwipeDirection;

use crate::components::SwipeCard;
use crate::deck::{Decision, DeckStateStoreFields};
use crate::models::Cat;
use crate::store::use_deck_store;

/// How long the exit animation runs before the ghost is unmounted.
/// Matches the `exit-left`/`exit-right` keyframes in styles.css.
const EXIT_ANIMATION_MS: u32 = 200;

/// Drag right = like, drag left = pass. The hint text and the buttons
/// agree with this mapping.
fn decision_for(direction: SwipeDirection) -> Decision {
    match direction {
        SwipeDirection::Right => Decision::Accept,
        SwipeDirection::Left => Decision::Reject,
    }
}

#[component]
pub fn CardStack(#[prop(into)] on_decision: Callback<Decision>) -> impl IntoView {
    let deck = use_deck_store();
    let (exiting, set_exiting) = signal(None::<(Cat, SwipeDirection)>);
    let ghost_timer = StoredValue::new_local(None::<Timeout>);

    // A replaced or unmounted ghost cancels its pending cleanup.
    on_cleanup(move || {
        ghost_timer.update_value(|timer| {
            timer.take();
        });
    });

    let top = move || {
        let pointer = deck.pointer().get();
        if pointer < 0 {
            return None;
        }
        deck.cats().read().get(pointer as usize).cloned()
    };

    let behind = move || {
        let pointer = deck.pointer().get();
        if pointer < 1 {
            return None;
        }
        deck.cats().read().get(pointer as usize - 1).cloned()
    };

    let on_swipe = move |direction: SwipeDirection| {
        let pointer = deck.pointer().get_untracked();
        if pointer < 0 {
            return;
        }
        let Some(cat) = deck.cats().read_untracked().get(pointer as usize).cloned() else {
            return;
        };

        set_exiting.set(Some((cat, direction)));
        ghost_timer.set_value(Some(Timeout::new(EXIT_ANIMATION_MS, move || {
            set_exiting.set(None);
        })));

        on_decision.run(decision_for(direction));
    };

    view! {
        <div class="card-stack">
            {move || {
                behind()
                    .map(|cat| {
                        view! {
                            <div class="card card-behind">
                                <img class="card-photo" src=cat.image_url alt="Next cat" draggable="false"/>
                            </div>
                        }
                    })
            }}
            {move || top().map(|cat| view! { <SwipeCard cat=cat on_swipe=on_swipe/> })}
            {move || {
                exiting
                    .get()
                    .map(|(cat, direction)| {
                        let ghost_class = match direction {
                            SwipeDirection::Right => "card card-ghost exit-right",
                            SwipeDirection::Left => "card card-ghost exit-left",
                        };
                        view! {
                            <div class=ghost_class>
                                <img class="card-photo" src=cat.image_url alt="" draggable="false"/>
                            </div>
                        }
                    })
            }}
            {move || {
                (top().is_none() && exiting.get().is_none())
                    .then(|| view! { <p class="empty-msg">"No more cats!"</p> })
            }}
        </div>
    }
}
