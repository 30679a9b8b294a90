// SPDX-License-Identifier: MPL-2.0
//! Immutable description of one playable feed item.
//!
//! A [`MediaRecord`] is supplied wholesale by the embedding feed and never
//! mutated by the player. The carousel operates over an ordered sequence of
//! these records; all engagement counters are display-only snapshots.

use serde::{Deserialize, Serialize};

/// Aspect ratio of a feed video.
///
/// Only used for fullscreen frame selection; windowed mode always renders a
/// fixed square frame regardless of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    /// 1:1 frame.
    #[default]
    Square,
    /// 16:9 frame.
    Wide,
    /// 9:16 frame.
    Tall,
}

impl AspectRatio {
    /// Returns width/height as a ratio.
    #[must_use]
    pub fn ratio(self) -> f32 {
        match self {
            AspectRatio::Square => 1.0,
            AspectRatio::Wide => 16.0 / 9.0,
            AspectRatio::Tall => 9.0 / 16.0,
        }
    }
}

/// One playable item in the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Unique identifier, reported back through intent callbacks.
    pub id: String,
    /// URI of the media source; fetched by the platform media subsystem,
    /// never by the player itself.
    pub source_uri: String,
    /// Author display name.
    pub display_name: String,
    /// Author handle (e.g. `@aurora`).
    pub handle: String,
    /// Post caption; may span many lines.
    pub caption: String,
    /// Label of the audio track (e.g. "Original Sound").
    pub audio_label: String,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub share_count: u64,
    #[serde(default)]
    pub impression_count: u64,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
}

impl MediaRecord {
    /// Builds a minimal record, mostly useful in tests and the sample feed.
    #[must_use]
    pub fn new(id: impl Into<String>, source_uri: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source_uri: source_uri.into(),
            display_name: String::new(),
            handle: String::new(),
            caption: String::new(),
            audio_label: "Original Sound".to_string(),
            like_count: 0,
            comment_count: 0,
            share_count: 0,
            impression_count: 0,
            aspect_ratio: AspectRatio::Square,
        }
    }
}

/// Built-in sample feed shown when no feed file is provided.
#[must_use]
pub fn sample_feed() -> Vec<MediaRecord> {
    vec![
        MediaRecord {
            id: "1".to_string(),
            source_uri: "media/aurora.mp4".to_string(),
            display_name: "Polar Watch".to_string(),
            handle: "@polarwatch".to_string(),
            caption: "Aurora timelapse over the fjord. Three nights of clear \
                      skies condensed into forty seconds.\n\nShot on a tripod \
                      at -18C. Worth every minute of it."
                .to_string(),
            audio_label: "Original Sound".to_string(),
            like_count: 1000,
            comment_count: 100,
            share_count: 50,
            impression_count: 10_000_000,
            aspect_ratio: AspectRatio::Square,
        },
        MediaRecord {
            id: "2".to_string(),
            source_uri: "media/glacier.mp4".to_string(),
            display_name: "Polar Watch".to_string(),
            handle: "@polarwatch".to_string(),
            caption: "Glacier calving from a safe distance.".to_string(),
            audio_label: "Field Recording".to_string(),
            like_count: 420,
            comment_count: 31,
            share_count: 12,
            impression_count: 88_000,
            aspect_ratio: AspectRatio::Wide,
        },
        MediaRecord {
            id: "3".to_string(),
            source_uri: "media/night-market.mp4".to_string(),
            display_name: "Street Lens".to_string(),
            handle: "@streetlens".to_string(),
            caption: "Night market walk, vertical cut.".to_string(),
            audio_label: "Market Ambience".to_string(),
            like_count: 77,
            comment_count: 4,
            share_count: 2,
            impression_count: 5_400,
            aspect_ratio: AspectRatio::Tall,
        },
    ]
}
