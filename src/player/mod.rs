// SPDX-License-Identifier: MPL-2.0
//! Feed player core.
//!
//! Pure state machine for a short-form video carousel: one active record
//! at a time, one shared media surface, and a command/intent boundary
//! toward the embedding feed. Nothing in this module touches the UI
//! toolkit or the real media subsystem; the surface is a trait and all
//! gesture input arrives pre-resolved.
//!
//! Structure:
//!
//! - [`carousel`] - composition root ([`Carousel`], [`Command`], [`Intent`])
//! - [`playback`] - play/pause/volume/rate/playhead
//! - [`navigation`] - active index over the sequence
//! - [`overlay`] - menus, caption, display settings
//! - [`input`] - tap and swipe disambiguation
//! - [`layout`] - frame geometry selection
//! - [`surface`] - the media surface port

pub mod carousel;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod overlay;
pub mod playback;
pub mod surface;

mod playback_rate;
mod volume;

pub use carousel::{Carousel, Command, Intent};
pub use input::{NavDirection, SwipeTracker, TapAction, TapArbiter};
pub use layout::{frame_for, FrameMode};
pub use navigation::NavigationController;
pub use overlay::{
    DisplaySettings, OpenMenu, OverlayCoordinator, Resolution, SubtitleTrack,
};
pub use playback::PlaybackController;
pub use playback_rate::PlaybackRate;
pub use surface::{MediaSurface, SurfaceEvent, SurfaceUpdate};
pub use volume::Volume;
