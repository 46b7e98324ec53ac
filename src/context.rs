//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Batch fetch lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchStatus {
    Loading,
    Idle,
    Error(String),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to fetch a fresh batch - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to fetch a fresh batch - write
    set_reload_trigger: WriteSignal<u32>,
    /// Batch fetch lifecycle - read
    pub status: ReadSignal<FetchStatus>,
    /// Batch fetch lifecycle - write
    set_status: WriteSignal<FetchStatus>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        status: (ReadSignal<FetchStatus>, WriteSignal<FetchStatus>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            status: status.0,
            set_status: status.1,
        }
    }

    /// Trigger a fresh batch fetch
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Record where the in-flight fetch stands
    pub fn set_status(&self, status: FetchStatus) {
        self.set_status.set(status);
    }
}
