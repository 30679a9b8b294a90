// SPDX-License-Identifier: MPL-2.0
//! Frame geometry selection.
//!
//! Pure mapping from presentation mode and record aspect ratio to the frame
//! the surface renders into. Windowed mode pins a fixed square regardless
//! of the record; fullscreen honors the record's aspect ratio.

use crate::config::WINDOWED_FRAME_SIDE;
use crate::feed::AspectRatio;

/// Geometry the media frame should occupy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameMode {
    /// Fixed square of the given side length, in logical pixels.
    FixedSquare(f32),
    /// Fill available space at the given width/height ratio.
    Ratio(f32),
}

impl FrameMode {
    /// Width/height ratio of this frame.
    #[must_use]
    pub fn ratio(self) -> f32 {
        match self {
            FrameMode::FixedSquare(_) => 1.0,
            FrameMode::Ratio(ratio) => ratio,
        }
    }
}

/// Selects the frame for a record under the given presentation mode.
#[must_use]
pub fn frame_for(aspect_ratio: AspectRatio, is_fullscreen: bool) -> FrameMode {
    if is_fullscreen {
        FrameMode::Ratio(aspect_ratio.ratio())
    } else {
        FrameMode::FixedSquare(WINDOWED_FRAME_SIDE)
    }
}
