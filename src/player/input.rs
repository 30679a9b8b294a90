// SPDX-License-Identifier: MPL-2.0
//! Pointer gesture disambiguation.
//!
//! Two independent trackers resolve raw pointer input into player actions:
//!
//! - [`TapArbiter`] separates single taps (toggle play) from double taps
//!   (like). A single tap is deferred until the double-tap window closes,
//!   so a double tap never toggles playback on the way to a like.
//! - [`SwipeTracker`] separates vertical drags from taps by displacement.
//!   A drag past the threshold navigates; below it, the release is a tap.
//!
//! Both operate on caller-supplied timestamps and coordinates, which keeps
//! them deterministic under test.

use std::time::{Duration, Instant};

use crate::config::{DOUBLE_TAP_WINDOW_MS, SWIPE_THRESHOLD_PX};

/// Direction resolved from a completed vertical swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    /// Dragged downward: step back to the previous record.
    Previous,
    /// Dragged upward: advance to the next record.
    Next,
}

/// Action resolved by the tap arbiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    /// A lone tap, committed after the double-tap window closed.
    TogglePlay,
    /// Two taps inside the window.
    Like,
}

/// Defers single taps until they cannot become a double tap.
///
/// `press` is called on every tap; `poll` on every timer tick. A second
/// press inside the window resolves immediately to [`TapAction::Like`] and
/// cancels the pending single; otherwise the pending single matures into
/// [`TapAction::TogglePlay`] on the first poll past the window.
#[derive(Debug, Default)]
pub struct TapArbiter {
    pending_since: Option<Instant>,
}

impl TapArbiter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn window(&self) -> Duration {
        Duration::from_millis(DOUBLE_TAP_WINDOW_MS)
    }

    /// Registers a tap at `now`.
    pub fn press(&mut self, now: Instant) -> Option<TapAction> {
        match self.pending_since.take() {
            Some(first) if now.duration_since(first) <= self.window() => Some(TapAction::Like),
            _ => {
                self.pending_since = Some(now);
                None
            }
        }
    }

    /// Commits a pending single tap once the window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<TapAction> {
        match self.pending_since {
            Some(first) if now.duration_since(first) > self.window() => {
                self.pending_since = None;
                Some(TapAction::TogglePlay)
            }
            _ => None,
        }
    }

    /// Drops any pending tap, e.g. when a drag started from the press.
    pub fn cancel(&mut self) {
        self.pending_since = None;
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending_since.is_some()
    }
}

/// Tracks one vertical drag from press to release.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start_y: Option<f32>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the press position. A second press replaces the first.
    pub fn begin(&mut self, y: f32) {
        self.start_y = Some(y);
    }

    /// Resolves the release position against the press position.
    ///
    /// Returns a direction if the vertical displacement passed the swipe
    /// threshold; `None` means the release should be treated as a tap.
    /// Displacement never scales into multiple steps.
    pub fn finish(&mut self, y: f32) -> Option<NavDirection> {
        let start = self.start_y.take()?;
        let delta = y - start;
        if delta >= SWIPE_THRESHOLD_PX {
            Some(NavDirection::Previous)
        } else if delta <= -SWIPE_THRESHOLD_PX {
            Some(NavDirection::Next)
        } else {
            None
        }
    }

    /// Abandons the drag, e.g. when the pointer left the surface.
    pub fn cancel(&mut self) {
        self.start_y = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_y.is_some()
    }
}
