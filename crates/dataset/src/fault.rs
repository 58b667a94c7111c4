//! Top-level fault channel.
//!
//! The app has exactly one real fault source: the embedded dataset failing to
//! parse or validate at startup. When that happens, nothing useful can be
//! rendered, so the fault is recorded here and the UI swaps to a full-screen
//! fallback. The only exit is a reload (the native analogue of refreshing
//! the page): reset the store and re-run the load.

use bevy::prelude::*;

/// A fatal presentation fault. No partial recovery is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    pub message: String,
}

/// Holds the current fault, if any. Empty in normal operation.
#[derive(Resource, Debug, Default)]
pub struct FaultState {
    fault: Option<Fault>,
}

impl FaultState {
    pub fn report(&mut self, message: impl Into<String>) {
        self.fault = Some(Fault {
            message: message.into(),
        });
    }

    pub fn clear(&mut self) {
        self.fault = None;
    }

    pub fn current(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }
}

/// Sent by the fault screen's "Reload" button.
#[derive(Event, Debug, Default)]
pub struct ReloadRequested;
