//! Keeping the listings fresh as the caller's inputs change.
//!
//! The panel watches two caller-owned inputs: the [`ViewMode`] and a [`RefreshToken`]. Each
//! time either differs from what was last observed, exactly one listing is refetched: the one
//! the current view shows. Changes are not coalesced; callers debounce their own signals.

use crate::query::QueryKind;
use crate::visibility::ViewMode;

/// Opaque refresh signal. Only a change of value matters, never the value itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RefreshToken(u64);

impl RefreshToken {
    pub fn new(generation: u64) -> Self {
        Self(generation)
    }

    /// A token that differs from `self`.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn generation(self) -> u64 {
        self.0
    }
}

/// The inputs the controller depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResyncInputs {
    pub view_mode: ViewMode,
    pub refresh: RefreshToken,
}

impl ResyncInputs {
    pub fn new(view_mode: ViewMode, refresh: RefreshToken) -> Self {
        Self { view_mode, refresh }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ResyncController {
    last: Option<ResyncInputs>,
}

impl ResyncController {
    /// A controller that treats `inputs` as already synchronised.
    pub fn seeded(inputs: ResyncInputs) -> Self {
        Self { last: Some(inputs) }
    }

    /// Record `inputs` and return the listing to refetch, if they changed.
    pub fn observe(&mut self, inputs: ResyncInputs) -> Option<QueryKind> {
        if self.last == Some(inputs) {
            return None;
        }

        let kind = inputs.view_mode.query_kind();
        tracing::debug!(
            view_mode = ?inputs.view_mode,
            refresh = inputs.refresh.generation(),
            listing = %kind,
            "panel inputs changed"
        );
        self.last = Some(inputs);
        Some(kind)
    }

    pub fn last_inputs(&self) -> Option<ResyncInputs> {
        self.last
    }
}
