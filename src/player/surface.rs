// SPDX-License-Identifier: MPL-2.0
//! Media surface port definition.
//!
//! This module defines the [`MediaSurface`] trait for the single underlying
//! media element the carousel commands. Infrastructure adapters implement
//! this trait; the playback controller is the only component that calls it.
//!
//! # Design Notes
//!
//! - The surface is **stateful**: it owns the real playback position and
//!   duration. The player only observes them via [`SurfaceUpdate`]s.
//! - Methods are not `async` - the Iced framework handles threading via
//!   `Task`/subscriptions; completions come back as updates.
//! - Every update carries the index the surface was loaded with so the
//!   player can discard events from a superseded item (staleness guard).

use crate::error::PlayerError;
use crate::player::{PlaybackRate, Volume};

/// Port for the one media element shared across all sequence positions.
///
/// # Lifecycle
///
/// 1. `load()` a source, tagged with its sequence index
/// 2. `play()` / `pause()` according to user intent
/// 3. `set_volume()` / `set_rate()` / `seek()` as state changes
/// 4. Observed position/duration arrive as [`SurfaceUpdate`]s out of band
pub trait MediaSurface {
    /// Points the surface at a new source.
    ///
    /// The index tags all subsequent updates until the next `load`.
    /// Resets the surface's position to zero.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::LoadFailed`] if the source cannot be opened.
    fn load(&mut self, index: usize, source_uri: &str) -> Result<(), PlayerError>;

    /// Starts playback of the loaded source.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::PlayRejected`] if the platform refuses the
    /// play command (decode or permission failure).
    fn play(&mut self) -> Result<(), PlayerError>;

    /// Pauses playback. Pausing never fails.
    fn pause(&mut self);

    /// Sets the output volume.
    fn set_volume(&mut self, volume: Volume);

    /// Sets the playback rate.
    fn set_rate(&mut self, rate: PlaybackRate);

    /// Moves the playhead. The target is already clamped by the caller.
    fn seek(&mut self, position_secs: f64);
}

/// What the surface observed, tagged with the originating index.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceUpdate {
    /// Index the surface was loaded with when the event originated.
    pub index: usize,
    pub event: SurfaceEvent,
}

/// A single observation from the media surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// Metadata became available; duration is now known.
    Loaded { duration_secs: f64 },
    /// Periodic playhead observation.
    Position {
        position_secs: f64,
        duration_secs: f64,
    },
    /// The source failed to load or decode.
    Failed { message: String },
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording surface double shared by the player unit tests.

    use super::*;

    /// Commands observed by [`RecordingSurface`], in call order.
    #[derive(Debug, Clone, PartialEq)]
    pub enum SurfaceCall {
        Load { index: usize, source_uri: String },
        Play,
        Pause,
        SetVolume(f32),
        SetRate(f64),
        Seek(f64),
    }

    /// A surface that records every command and can be told to fail.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub calls: Vec<SurfaceCall>,
        pub fail_play: bool,
        pub fail_load: bool,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of `Play` commands issued so far.
        pub fn play_count(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, SurfaceCall::Play))
                .count()
        }

        pub fn last_call(&self) -> Option<&SurfaceCall> {
            self.calls.last()
        }
    }

    impl MediaSurface for RecordingSurface {
        fn load(&mut self, index: usize, source_uri: &str) -> Result<(), PlayerError> {
            self.calls.push(SurfaceCall::Load {
                index,
                source_uri: source_uri.to_string(),
            });
            if self.fail_load {
                Err(PlayerError::LoadFailed("forced load failure".to_string()))
            } else {
                Ok(())
            }
        }

        fn play(&mut self) -> Result<(), PlayerError> {
            self.calls.push(SurfaceCall::Play);
            if self.fail_play {
                Err(PlayerError::PlayRejected("forced play failure".to_string()))
            } else {
                Ok(())
            }
        }

        fn pause(&mut self) {
            self.calls.push(SurfaceCall::Pause);
        }

        fn set_volume(&mut self, volume: Volume) {
            self.calls.push(SurfaceCall::SetVolume(volume.value()));
        }

        fn set_rate(&mut self, rate: PlaybackRate) {
            self.calls.push(SurfaceCall::SetRate(rate.value()));
        }

        fn seek(&mut self, position_secs: f64) {
            self.calls.push(SurfaceCall::Seek(position_secs));
        }
    }

    // Trait must stay object-safe: the carousel holds `&mut dyn MediaSurface`.
    fn _assert_object_safe(_: &dyn MediaSurface) {}
}
