//! UI Components
//!
//! Reusable Leptos components.

mod action_bar;
mod card_stack;
mod summary_grid;
mod swipe_card;

pub use action_bar::ActionBar;
pub use card_stack::CardStack;
pub use summary_grid::SummaryGrid;
pub use swipe_card::SwipeCard;
