// SPDX-License-Identifier: MPL-2.0
//! Playback rate domain type for feed playback.
//!
//! The player supports a closed set of rates (0.5x, 1x, 1.5x, 2x); this
//! enum makes any other rate unrepresentable.

use crate::config::PLAYBACK_RATE_PRESETS;

/// Playback rate restricted to the supported preset set.
///
/// # Example
///
/// ```
/// use iced_reel::player::PlaybackRate;
///
/// assert_eq!(PlaybackRate::Normal.value(), 1.0);
///
/// // Arbitrary values snap to the nearest preset
/// assert_eq!(PlaybackRate::nearest(1.7), PlaybackRate::OneAndHalf);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackRate {
    /// 0.5x.
    Half,
    /// 1x.
    #[default]
    Normal,
    /// 1.5x.
    OneAndHalf,
    /// 2x.
    Double,
}

impl PlaybackRate {
    /// All supported rates in ascending order.
    pub const ALL: [PlaybackRate; 4] = [
        PlaybackRate::Half,
        PlaybackRate::Normal,
        PlaybackRate::OneAndHalf,
        PlaybackRate::Double,
    ];

    /// Returns the rate as a multiplier.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            PlaybackRate::Half => 0.5,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::OneAndHalf => 1.5,
            PlaybackRate::Double => 2.0,
        }
    }

    /// Snaps an arbitrary multiplier to the nearest supported preset.
    ///
    /// Used when restoring a persisted preference that may hold any float.
    #[must_use]
    pub fn nearest(value: f64) -> Self {
        let mut best = PlaybackRate::Normal;
        let mut best_distance = f64::INFINITY;
        for rate in Self::ALL {
            let distance = (rate.value() - value).abs();
            if distance < best_distance {
                best_distance = distance;
                best = rate;
            }
        }
        best
    }

    /// Returns the label shown in the speed menu (e.g. `1.5x`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PlaybackRate::Half => "0.5x",
            PlaybackRate::Normal => "1x",
            PlaybackRate::OneAndHalf => "1.5x",
            PlaybackRate::Double => "2x",
        }
    }
}
