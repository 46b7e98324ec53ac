//! Swipe Card Component
//!
//! The interactive top card: a pointer-driven horizontal drag with live
//! rotation, fade and color-overlay feedback. Reports the swipe direction
//! upward on release; below the threshold the card snaps back instead.

use leptos::prelude::*;
use leptos_swipe::{
    card_opacity, card_transform, create_swipe_signals, make_on_pointercancel,
    make_on_pointerdown, make_on_pointermove, make_on_pointerup, overlay_style, SwipeDirection,
    SwipePhase,
};

use crate::models::Cat;

#[component]
pub fn SwipeCard(cat: Cat, #[prop(into)] on_swipe: Callback<SwipeDirection>) -> impl IntoView {
    let swipe = create_swipe_signals();

    let on_pointerdown = make_on_pointerdown(swipe);
    let on_pointermove = make_on_pointermove(swipe);
    let on_pointerup = make_on_pointerup(swipe, on_swipe);
    let on_pointercancel = make_on_pointercancel(swipe);

    let card_style = move || match swipe.phase.get() {
        SwipePhase::Dragging(drag) => format!(
            "{} opacity: {:.2}; transition: none;",
            card_transform(drag.delta()),
            card_opacity(drag.delta()),
        ),
        // Idle after a released drag: transition carries the snap-back.
        _ => "transition: transform 0.25s ease;".to_string(),
    };

    let overlay = move || overlay_style(swipe.delta());
    let tag = cat.tags.first().cloned();

    view! {
        <div
            class="card card-top"
            style=card_style
            on:pointerdown=on_pointerdown
            on:pointermove=on_pointermove
            on:pointerup=on_pointerup
            on:pointercancel=on_pointercancel
        >
            <img class="card-photo" src=cat.image_url.clone() alt="Cat" draggable="false"/>
            <div class="swipe-overlay" style=overlay></div>
            {tag.map(|tag| view! { <span class="card-tag">{format!("#{tag}")}</span> })}
        </div>
    }
}
