// SPDX-License-Identifier: MPL-2.0
//! Playback controller for the feed carousel.
//!
//! Owns play/pause intent, volume, rate, and the observed playhead. The
//! media surface is the single source of truth for position and duration:
//! the controller only reads them from [`SurfaceEvent`]s and never computes
//! them on its own, so the displayed time cannot drift from real playback.
//!
//! Every mutation ends in [`PlaybackController::sync`], which re-commands
//! the surface from current state: play iff `is_playing` and the user has
//! interacted at least once (autoplay policy guard), pause otherwise. A
//! rejected play command is logged and leaves `is_playing` as requested;
//! the UI reflects intent, not hardware truth.

use crate::config::DEFAULT_UNMUTE_VOLUME;
use crate::player::surface::{MediaSurface, SurfaceEvent};
use crate::player::{PlaybackRate, Volume};

#[derive(Debug)]
pub struct PlaybackController {
    is_playing: bool,
    has_user_interacted: bool,
    volume: Volume,
    /// Last non-zero volume, restored by unmute.
    last_audible_volume: Volume,
    rate: PlaybackRate,
    position_secs: f64,
    /// 0.0 means unknown / not loaded.
    duration_secs: f64,
    load_failed: bool,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self {
            is_playing: false,
            has_user_interacted: false,
            volume: Volume::default(),
            last_audible_volume: Volume::new(DEFAULT_UNMUTE_VOLUME),
            rate: PlaybackRate::default(),
            position_secs: 0.0,
            duration_secs: 0.0,
            load_failed: false,
        }
    }
}

impl PlaybackController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn has_user_interacted(&self) -> bool {
        self.has_user_interacted
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Last non-zero volume; what unmute would restore. Persisted instead
    /// of the live volume so a muted session does not save zero.
    #[must_use]
    pub fn last_audible_volume(&self) -> Volume {
        self.last_audible_volume
    }

    #[must_use]
    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// True if the current item failed to load; the UI renders a
    /// paused/poster state for it.
    #[must_use]
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Flips play intent. Counts as the first user interaction, which is
    /// what unlocks actual playback.
    pub fn toggle_play(&mut self, surface: &mut dyn MediaSurface) {
        self.has_user_interacted = true;
        self.is_playing = !self.is_playing;
        self.sync(surface);
    }

    /// Sets the volume, remembering the last audible value for unmute.
    pub fn set_volume(&mut self, volume: Volume, surface: &mut dyn MediaSurface) {
        if !volume.is_muted() {
            self.last_audible_volume = volume;
        }
        self.volume = volume;
        self.sync(surface);
    }

    /// Swaps between silence and the last non-zero volume.
    ///
    /// If no audible volume was ever recorded, unmute restores full volume.
    pub fn toggle_mute(&mut self, surface: &mut dyn MediaSurface) {
        if self.volume.is_muted() {
            self.volume = self.last_audible_volume;
        } else {
            self.last_audible_volume = self.volume;
            self.volume = Volume::new(0.0);
        }
        self.sync(surface);
    }

    pub fn set_rate(&mut self, rate: PlaybackRate, surface: &mut dyn MediaSurface) {
        self.rate = rate;
        self.sync(surface);
    }

    /// Seeks to `target_secs`, clamped to `[0, duration]`.
    ///
    /// With an unknown duration the target clamps to zero. Returns the
    /// clamped position; out-of-range targets are never an error.
    pub fn seek(&mut self, target_secs: f64, surface: &mut dyn MediaSurface) -> f64 {
        let clamped = target_secs.max(0.0).min(self.duration_secs);
        self.position_secs = clamped;
        surface.seek(clamped);
        clamped
    }

    /// Points the surface at a new item and re-applies playback state.
    ///
    /// Position, duration, and the failure flag reset; play intent and the
    /// interaction guard persist across items. Source, volume, and rate are
    /// reconfigured before the play/pause command so the new item can never
    /// present stale audio settings.
    pub fn load(&mut self, index: usize, source_uri: &str, surface: &mut dyn MediaSurface) {
        self.position_secs = 0.0;
        self.duration_secs = 0.0;
        self.load_failed = false;

        if let Err(error) = surface.load(index, source_uri) {
            eprintln!("Failed to load media {}: {}", source_uri, error);
            self.load_failed = true;
        }
        self.sync(surface);
    }

    /// Applies an observation from the media surface.
    ///
    /// The caller has already verified the update is not stale.
    pub fn apply_event(&mut self, event: &SurfaceEvent) {
        match event {
            SurfaceEvent::Loaded { duration_secs } => {
                self.duration_secs = duration_secs.max(0.0);
                self.position_secs = 0.0;
            }
            SurfaceEvent::Position {
                position_secs,
                duration_secs,
            } => {
                self.duration_secs = duration_secs.max(0.0);
                self.position_secs = position_secs.max(0.0).min(self.duration_secs);
            }
            SurfaceEvent::Failed { message } => {
                eprintln!("Media failed to load: {}", message);
                self.load_failed = true;
            }
        }
    }

    /// Re-commands the surface from current state.
    ///
    /// Called after every mutation so a single state change always
    /// re-synchronizes actual playback. A rejected play is logged and does
    /// not revert `is_playing`.
    pub fn sync(&mut self, surface: &mut dyn MediaSurface) {
        surface.set_volume(self.volume);
        surface.set_rate(self.rate);

        if self.is_playing && self.has_user_interacted {
            if let Err(error) = surface.play() {
                eprintln!("Error playing video: {}", error);
            }
        } else {
            surface.pause();
        }
    }
}
