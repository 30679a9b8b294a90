// SPDX-License-Identifier: MPL-2.0
//! Simulated media surface.
//!
//! Stands in for a real decoder: durations derive deterministically from
//! the source URI, metadata arrives after a short simulated latency, and
//! the playhead advances with wall-clock time scaled by the playback rate.
//! Playback loops, matching short-form feed behavior.
//!
//! The app polls [`SimulatedSurface::poll`] on its position tick and routes
//! the returned updates through the carousel, which applies its own
//! staleness guard against the index each update is tagged with.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use crate::config::LOAD_DELAY_MS;
use crate::error::PlayerError;
use crate::player::{
    MediaSurface, PlaybackRate, SurfaceEvent, SurfaceUpdate, Volume,
};

#[derive(Debug)]
struct LoadedItem {
    index: usize,
    duration_secs: f64,
    position_secs: f64,
    loaded_at: Instant,
    /// Whether the `Loaded` event has been emitted yet.
    announced: bool,
    last_poll: Option<Instant>,
}

/// Deterministic stand-in for the platform media subsystem.
#[derive(Debug, Default)]
pub struct SimulatedSurface {
    item: Option<LoadedItem>,
    playing: bool,
    rate: f64,
    volume: f32,
}

impl SimulatedSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            item: None,
            playing: false,
            rate: 1.0,
            volume: 1.0,
        }
    }

    /// Duration derived from the URI: stable per source, 10-60 seconds.
    fn duration_for(source_uri: &str) -> f64 {
        let mut hasher = DefaultHasher::new();
        source_uri.hash(&mut hasher);
        10.0 + (hasher.finish() % 5_000) as f64 / 100.0
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Advances simulated time to `now` and drains pending observations.
    pub fn poll(&mut self, now: Instant) -> Vec<SurfaceUpdate> {
        let Some(item) = self.item.as_mut() else {
            return Vec::new();
        };

        let mut updates = Vec::new();

        if !item.announced {
            if now.duration_since(item.loaded_at) < Duration::from_millis(LOAD_DELAY_MS) {
                return updates;
            }
            item.announced = true;
            item.last_poll = Some(now);
            updates.push(SurfaceUpdate {
                index: item.index,
                event: SurfaceEvent::Loaded {
                    duration_secs: item.duration_secs,
                },
            });
        }

        let since_last = item
            .last_poll
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        item.last_poll = Some(now);

        if self.playing {
            item.position_secs += since_last.as_secs_f64() * self.rate;
            // Short-form playback loops
            if item.duration_secs > 0.0 {
                item.position_secs %= item.duration_secs;
            }
            updates.push(SurfaceUpdate {
                index: item.index,
                event: SurfaceEvent::Position {
                    position_secs: item.position_secs,
                    duration_secs: item.duration_secs,
                },
            });
        }

        updates
    }
}

impl MediaSurface for SimulatedSurface {
    fn load(&mut self, index: usize, source_uri: &str) -> Result<(), PlayerError> {
        if source_uri.is_empty() {
            return Err(PlayerError::LoadFailed("empty source URI".to_string()));
        }
        self.item = Some(LoadedItem {
            index,
            duration_secs: Self::duration_for(source_uri),
            position_secs: 0.0,
            loaded_at: Instant::now(),
            announced: false,
            last_poll: None,
        });
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        if self.item.is_none() {
            return Err(PlayerError::PlayRejected("no source loaded".to_string()));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn set_volume(&mut self, volume: Volume) {
        self.volume = volume.value();
    }

    fn set_rate(&mut self, rate: PlaybackRate) {
        self.rate = rate.value();
    }

    fn seek(&mut self, position_secs: f64) {
        if let Some(item) = self.item.as_mut() {
            item.position_secs = position_secs.clamp(0.0, item.duration_secs);
        }
    }
}
