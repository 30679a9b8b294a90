// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Audio playback volume settings
//! - **Playback rate**: Preset playback speeds
//! - **Gestures**: Tap and swipe disambiguation thresholds
//! - **Display**: Brightness/contrast adjustment bounds
//! - **Layout**: Windowed frame sizing
//! - **Timing**: Position polling and simulated load latency

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume restored by unmute when no audible volume was ever recorded.
pub const DEFAULT_UNMUTE_VOLUME: f32 = 1.0;

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// The closed set of supported playback rates.
pub const PLAYBACK_RATE_PRESETS: [f64; 4] = [0.5, 1.0, 1.5, 2.0];

/// Default playback rate (normal speed).
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum vertical displacement (logical pixels) for a drag to count as a
/// swipe. Anything below is treated as a tap.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Window within which a second press counts as a double tap (milliseconds).
/// A single tap is only committed once this window has elapsed.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

// ==========================================================================
// Display Adjustment Defaults
// ==========================================================================

/// Default brightness multiplier.
pub const DEFAULT_BRIGHTNESS: f32 = 1.0;

/// Minimum brightness multiplier.
pub const MIN_BRIGHTNESS: f32 = 0.5;

/// Maximum brightness multiplier.
pub const MAX_BRIGHTNESS: f32 = 1.5;

/// Default contrast multiplier.
pub const DEFAULT_CONTRAST: f32 = 1.0;

/// Minimum contrast multiplier.
pub const MIN_CONTRAST: f32 = 0.5;

/// Maximum contrast multiplier.
pub const MAX_CONTRAST: f32 = 1.5;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Side length of the fixed square frame in windowed (non-fullscreen) mode.
pub const WINDOWED_FRAME_SIDE: f32 = 500.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Interval between position polls of the media surface (milliseconds).
pub const POSITION_TICK_MS: u64 = 100;

/// Simulated media load latency (milliseconds).
pub const LOAD_DELAY_MS: u64 = 150;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Volume validation
    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(DEFAULT_UNMUTE_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_UNMUTE_VOLUME <= MAX_VOLUME);

    // Gesture validation
    assert!(SWIPE_THRESHOLD_PX > 0.0);
    assert!(DOUBLE_TAP_WINDOW_MS > 0);

    // Display adjustment validation
    assert!(MIN_BRIGHTNESS > 0.0);
    assert!(MAX_BRIGHTNESS >= MIN_BRIGHTNESS);
    assert!(DEFAULT_BRIGHTNESS >= MIN_BRIGHTNESS);
    assert!(DEFAULT_BRIGHTNESS <= MAX_BRIGHTNESS);
    assert!(MIN_CONTRAST > 0.0);
    assert!(MAX_CONTRAST >= MIN_CONTRAST);
    assert!(DEFAULT_CONTRAST >= MIN_CONTRAST);
    assert!(DEFAULT_CONTRAST <= MAX_CONTRAST);

    // Layout and timing validation
    assert!(WINDOWED_FRAME_SIDE > 0.0);
    assert!(POSITION_TICK_MS > 0);
};
