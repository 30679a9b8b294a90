// SPDX-License-Identifier: MPL-2.0
//! Overlay chrome state: menus, caption expansion, and display settings.
//!
//! All menus are fullscreen-only and mutually exclusive; the coordinator
//! enforces both. Display adjustments (brightness, contrast, tint) are
//! session-scoped presentation filters over the rendered frame and never
//! touch the media surface.

use crate::config::{
    DEFAULT_BRIGHTNESS, DEFAULT_CONTRAST, MAX_BRIGHTNESS, MAX_CONTRAST, MIN_BRIGHTNESS,
    MIN_CONTRAST,
};

/// Which overlay menu is open, if any. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMenu {
    #[default]
    None,
    Subtitles,
    Speed,
    Resolution,
    Settings,
}

/// Subtitle track selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubtitleTrack {
    #[default]
    Off,
    English,
    Italian,
    Spanish,
}

impl SubtitleTrack {
    pub const ALL: [SubtitleTrack; 4] = [
        SubtitleTrack::Off,
        SubtitleTrack::English,
        SubtitleTrack::Italian,
        SubtitleTrack::Spanish,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SubtitleTrack::Off => "Off",
            SubtitleTrack::English => "English",
            SubtitleTrack::Italian => "Italian",
            SubtitleTrack::Spanish => "Spanish",
        }
    }

    /// Inverse of [`label`](Self::label), used when restoring a persisted
    /// preference.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|track| track.label() == label)
    }
}

/// Advisory resolution choice shown in the resolution menu.
///
/// Selection is recorded and displayed; the simulated surface renders the
/// same frames regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    #[default]
    R1080p,
    R720p,
    R480p,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [Resolution::R1080p, Resolution::R720p, Resolution::R480p];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Resolution::R1080p => "1080p",
            Resolution::R720p => "720p",
            Resolution::R480p => "480p",
        }
    }
}

/// Presentation filters applied over the rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    /// Brightness multiplier, clamped to the configured bounds.
    pub brightness: f32,
    /// Contrast multiplier, clamped to the configured bounds.
    pub contrast: f32,
    /// Optional RGBA tint composited over the frame.
    pub overlay_tint: Option<[u8; 4]>,
    /// Master subtitle switch.
    pub subtitles_on: bool,
    pub subtitle_track: SubtitleTrack,
    pub resolution: Resolution,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            contrast: DEFAULT_CONTRAST,
            overlay_tint: None,
            subtitles_on: false,
            subtitle_track: SubtitleTrack::Off,
            resolution: Resolution::R1080p,
        }
    }
}

/// Coordinates overlay menus, caption expansion, and display settings.
#[derive(Debug, Default)]
pub struct OverlayCoordinator {
    open_menu: OpenMenu,
    caption_expanded: bool,
    settings: DisplaySettings,
}

impl OverlayCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn open_menu(&self) -> OpenMenu {
        self.open_menu
    }

    #[must_use]
    pub fn caption_expanded(&self) -> bool {
        self.caption_expanded
    }

    #[must_use]
    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    /// Opens `menu`, closing whatever was open. Requesting the menu that is
    /// already open closes it instead.
    pub fn toggle_menu(&mut self, menu: OpenMenu) {
        self.open_menu = if self.open_menu == menu {
            OpenMenu::None
        } else {
            menu
        };
    }

    pub fn close_menus(&mut self) {
        self.open_menu = OpenMenu::None;
    }

    /// Picks a subtitle track and closes the menu. Any concrete track also
    /// flips subtitles on; `Off` flips them off.
    pub fn select_subtitle(&mut self, track: SubtitleTrack) {
        self.settings.subtitle_track = track;
        self.settings.subtitles_on = track != SubtitleTrack::Off;
        self.open_menu = OpenMenu::None;
    }

    /// Picks a resolution and closes the menu.
    pub fn select_resolution(&mut self, resolution: Resolution) {
        self.settings.resolution = resolution;
        self.open_menu = OpenMenu::None;
    }

    /// Closes the speed menu after a rate pick; the rate itself lives on
    /// the playback controller.
    pub fn rate_selected(&mut self) {
        self.open_menu = OpenMenu::None;
    }

    pub fn toggle_subtitles(&mut self) {
        self.settings.subtitles_on = !self.settings.subtitles_on;
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.settings.brightness = brightness.clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS);
    }

    pub fn set_contrast(&mut self, contrast: f32) {
        self.settings.contrast = contrast.clamp(MIN_CONTRAST, MAX_CONTRAST);
    }

    pub fn set_overlay_tint(&mut self, tint: [u8; 4]) {
        self.settings.overlay_tint = Some(tint);
    }

    pub fn clear_overlay_tint(&mut self) {
        self.settings.overlay_tint = None;
    }

    pub fn toggle_caption(&mut self) {
        self.caption_expanded = !self.caption_expanded;
    }

    /// Resets the display adjustments: brightness, contrast, tint, and the
    /// subtitle switch. The chosen subtitle track and resolution are
    /// selections, not adjustments, and survive.
    ///
    /// The settings panel stays open so the user sees the result; the
    /// playback rate reset is handled by the caller alongside this.
    pub fn reset_display(&mut self) {
        self.settings.brightness = DEFAULT_BRIGHTNESS;
        self.settings.contrast = DEFAULT_CONTRAST;
        self.settings.overlay_tint = None;
        self.settings.subtitles_on = false;
    }

    /// Collapses per-item chrome when the active record changes.
    pub fn reset_for_navigation(&mut self) {
        self.open_menu = OpenMenu::None;
        self.caption_expanded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn menus_are_mutually_exclusive() {
        let mut overlay = OverlayCoordinator::new();

        overlay.toggle_menu(OpenMenu::Subtitles);
        assert_eq!(overlay.open_menu(), OpenMenu::Subtitles);

        overlay.toggle_menu(OpenMenu::Speed);
        assert_eq!(overlay.open_menu(), OpenMenu::Speed);

        overlay.toggle_menu(OpenMenu::Settings);
        assert_eq!(overlay.open_menu(), OpenMenu::Settings);
    }

    #[test]
    fn toggling_the_open_menu_closes_it() {
        let mut overlay = OverlayCoordinator::new();

        overlay.toggle_menu(OpenMenu::Resolution);
        overlay.toggle_menu(OpenMenu::Resolution);
        assert_eq!(overlay.open_menu(), OpenMenu::None);
    }

    #[test]
    fn subtitle_selection_closes_menu_and_arms_subtitles() {
        let mut overlay = OverlayCoordinator::new();
        overlay.toggle_menu(OpenMenu::Subtitles);

        overlay.select_subtitle(SubtitleTrack::Italian);
        assert_eq!(overlay.open_menu(), OpenMenu::None);
        assert!(overlay.settings().subtitles_on);
        assert_eq!(overlay.settings().subtitle_track, SubtitleTrack::Italian);

        overlay.select_subtitle(SubtitleTrack::Off);
        assert!(!overlay.settings().subtitles_on);
    }

    #[test]
    fn resolution_selection_closes_menu() {
        let mut overlay = OverlayCoordinator::new();
        overlay.toggle_menu(OpenMenu::Resolution);

        overlay.select_resolution(Resolution::R480p);
        assert_eq!(overlay.open_menu(), OpenMenu::None);
        assert_eq!(overlay.settings().resolution, Resolution::R480p);
    }

    #[test]
    fn brightness_and_contrast_clamp_to_bounds() {
        let mut overlay = OverlayCoordinator::new();

        overlay.set_brightness(9.0);
        assert_abs_diff_eq!(overlay.settings().brightness, MAX_BRIGHTNESS);

        overlay.set_brightness(0.0);
        assert_abs_diff_eq!(overlay.settings().brightness, MIN_BRIGHTNESS);

        overlay.set_contrast(1.2);
        assert_abs_diff_eq!(overlay.settings().contrast, 1.2);
    }

    #[test]
    fn reset_display_restores_defaults_but_keeps_panel_open() {
        let mut overlay = OverlayCoordinator::new();
        overlay.toggle_menu(OpenMenu::Settings);
        overlay.set_brightness(1.4);
        overlay.set_contrast(0.7);
        overlay.set_overlay_tint([255, 0, 0, 64]);
        overlay.select_subtitle(SubtitleTrack::English);
        overlay.toggle_menu(OpenMenu::Settings);

        overlay.reset_display();

        assert_abs_diff_eq!(overlay.settings().brightness, DEFAULT_BRIGHTNESS);
        assert_abs_diff_eq!(overlay.settings().contrast, DEFAULT_CONTRAST);
        assert_eq!(overlay.settings().overlay_tint, None);
        assert!(!overlay.settings().subtitles_on);
        // Reset never closes the panel on its own
        assert_eq!(overlay.open_menu(), OpenMenu::Settings);
    }

    #[test]
    fn reset_display_keeps_track_and_resolution_selections() {
        let mut overlay = OverlayCoordinator::new();
        overlay.select_subtitle(SubtitleTrack::Spanish);
        overlay.select_resolution(Resolution::R720p);
        overlay.set_brightness(1.4);

        overlay.reset_display();

        assert_eq!(overlay.settings().subtitle_track, SubtitleTrack::Spanish);
        assert_eq!(overlay.settings().resolution, Resolution::R720p);
        assert_abs_diff_eq!(overlay.settings().brightness, DEFAULT_BRIGHTNESS);
    }

    #[test]
    fn navigation_collapses_caption_and_menus_but_keeps_settings() {
        let mut overlay = OverlayCoordinator::new();
        overlay.toggle_caption();
        overlay.toggle_menu(OpenMenu::Speed);
        overlay.set_brightness(1.3);

        overlay.reset_for_navigation();

        assert!(!overlay.caption_expanded());
        assert_eq!(overlay.open_menu(), OpenMenu::None);
        // Display adjustments persist across records
        assert_abs_diff_eq!(overlay.settings().brightness, 1.3);
    }

    #[test]
    fn subtitle_labels_round_trip() {
        for track in SubtitleTrack::ALL {
            assert_eq!(SubtitleTrack::from_label(track.label()), Some(track));
        }
        assert_eq!(SubtitleTrack::from_label("Klingon"), None);
    }

    #[test]
    fn tint_can_be_set_and_cleared() {
        let mut overlay = OverlayCoordinator::new();

        overlay.set_overlay_tint([0, 0, 255, 40]);
        assert_eq!(overlay.settings().overlay_tint, Some([0, 0, 255, 40]));

        overlay.clear_overlay_tint();
        assert_eq!(overlay.settings().overlay_tint, None);
    }
}
