// SPDX-License-Identifier: MPL-2.0
//! Carousel composition root.
//!
//! [`Carousel`] owns the record sequence and wires the playback,
//! navigation, and overlay controllers together behind a single
//! [`Command`] entry point. Commands that the embedding feed needs to know
//! about come back as [`Intent`]s; everything else resolves internally.
//!
//! Fullscreen is confirmed, not optimistic: the carousel only learns about
//! a mode change through [`Command::SetFullscreen`] once the window
//! actually switched, so chrome can never render for a mode the window is
//! not in.

use std::collections::HashSet;

use crate::feed::MediaRecord;
use crate::player::input::NavDirection;
use crate::player::layout::{frame_for, FrameMode};
use crate::player::navigation::NavigationController;
use crate::player::overlay::{OpenMenu, OverlayCoordinator, Resolution, SubtitleTrack};
use crate::player::playback::PlaybackController;
use crate::player::surface::{MediaSurface, SurfaceUpdate};
use crate::player::{PlaybackRate, Volume};

/// Everything the carousel can be asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    TogglePlay,
    SetVolume(Volume),
    ToggleMute,
    SetRate(PlaybackRate),
    /// Seek to an absolute position in seconds; clamped internally.
    Seek(f64),
    Next,
    Previous,
    GoTo(usize),
    /// Resolved swipe gesture.
    Swipe(NavDirection),
    ToggleCaption,
    ToggleMenu(OpenMenu),
    SelectSubtitle(SubtitleTrack),
    /// Rate picked from the speed menu; also closes it.
    SelectRate(PlaybackRate),
    SelectResolution(Resolution),
    ToggleSubtitles,
    SetBrightness(f32),
    SetContrast(f32),
    SetOverlayTint([u8; 4]),
    ClearOverlayTint,
    /// Revert display adjustments and playback rate to defaults. The
    /// settings panel stays open.
    ResetDisplaySettings,
    CloseMenus,
    Like,
    Comment,
    Share,
    /// Toggle following the active record's author.
    Follow,
    /// Confirmed window mode change, reported after the fact.
    SetFullscreen(bool),
}

/// Outcome the embedding feed is told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The active record changed to this index.
    IndexChanged(usize),
    /// The user liked the record with this id.
    Liked(String),
    /// The user asked for the comment sheet of this record.
    Commented(String),
    /// The user shared this record.
    Shared(String),
    /// The user started following this author handle.
    Followed(String),
}

#[derive(Debug)]
pub struct Carousel {
    records: Vec<MediaRecord>,
    playback: PlaybackController,
    navigation: NavigationController,
    overlay: OverlayCoordinator,
    /// Author handles the user follows, session-scoped.
    followed: HashSet<String>,
    is_fullscreen: bool,
}

impl Carousel {
    /// Builds a carousel over `records` and loads the first one.
    #[must_use]
    pub fn new(records: Vec<MediaRecord>, surface: &mut dyn MediaSurface) -> Self {
        let navigation = NavigationController::new(records.len());
        let mut carousel = Self {
            records,
            playback: PlaybackController::new(),
            navigation,
            overlay: OverlayCoordinator::new(),
            followed: HashSet::new(),
            is_fullscreen: false,
        };
        carousel.load_active(surface);
        carousel
    }

    #[must_use]
    pub fn records(&self) -> &[MediaRecord] {
        &self.records
    }

    #[must_use]
    pub fn active_record(&self) -> Option<&MediaRecord> {
        self.records.get(self.navigation.active_index())
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.navigation.active_index()
    }

    #[must_use]
    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    #[must_use]
    pub fn overlay(&self) -> &OverlayCoordinator {
        &self.overlay
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// True if the user follows the active record's author.
    #[must_use]
    pub fn following_active(&self) -> bool {
        self.active_record()
            .is_some_and(|record| self.followed.contains(&record.handle))
    }

    /// Frame geometry for the active record under the current mode.
    #[must_use]
    pub fn frame(&self) -> FrameMode {
        let aspect = self
            .active_record()
            .map(|record| record.aspect_ratio)
            .unwrap_or_default();
        frame_for(aspect, self.is_fullscreen)
    }

    /// Replaces the record sequence, keeping the active index in range and
    /// reloading the now-active record.
    pub fn set_records(&mut self, records: Vec<MediaRecord>, surface: &mut dyn MediaSurface) {
        self.records = records;
        self.navigation.set_len(self.records.len());
        self.load_active(surface);
    }

    /// Executes one command against the current state.
    pub fn handle(&mut self, command: Command, surface: &mut dyn MediaSurface) -> Option<Intent> {
        match command {
            Command::TogglePlay => {
                self.playback.toggle_play(surface);
                None
            }
            Command::SetVolume(volume) => {
                self.playback.set_volume(volume, surface);
                None
            }
            Command::ToggleMute => {
                self.playback.toggle_mute(surface);
                None
            }
            Command::SetRate(rate) => {
                self.playback.set_rate(rate, surface);
                None
            }
            Command::Seek(target_secs) => {
                self.playback.seek(target_secs, surface);
                None
            }
            Command::Next => {
                let moved = self.navigation.next();
                self.moved(moved, surface)
            }
            Command::Previous => {
                let moved = self.navigation.previous();
                self.moved(moved, surface)
            }
            Command::GoTo(index) => {
                let moved = self.navigation.go_to(index);
                self.moved(moved, surface)
            }
            Command::Swipe(direction) => {
                let moved = match direction {
                    NavDirection::Next => self.navigation.next(),
                    NavDirection::Previous => self.navigation.previous(),
                };
                self.moved(moved, surface)
            }
            Command::ToggleCaption => {
                self.overlay.toggle_caption();
                None
            }
            Command::ToggleMenu(menu) => {
                // Menus are fullscreen chrome only
                if self.is_fullscreen {
                    self.overlay.toggle_menu(menu);
                }
                None
            }
            Command::SelectSubtitle(track) => {
                self.overlay.select_subtitle(track);
                None
            }
            Command::SelectRate(rate) => {
                self.playback.set_rate(rate, surface);
                self.overlay.rate_selected();
                None
            }
            Command::SelectResolution(resolution) => {
                self.overlay.select_resolution(resolution);
                None
            }
            Command::ToggleSubtitles => {
                self.overlay.toggle_subtitles();
                None
            }
            Command::SetBrightness(brightness) => {
                self.overlay.set_brightness(brightness);
                None
            }
            Command::SetContrast(contrast) => {
                self.overlay.set_contrast(contrast);
                None
            }
            Command::SetOverlayTint(tint) => {
                self.overlay.set_overlay_tint(tint);
                None
            }
            Command::ClearOverlayTint => {
                self.overlay.clear_overlay_tint();
                None
            }
            Command::ResetDisplaySettings => {
                self.overlay.reset_display();
                self.playback.set_rate(PlaybackRate::default(), surface);
                None
            }
            Command::CloseMenus => {
                self.overlay.close_menus();
                None
            }
            Command::Like => self
                .active_record()
                .map(|record| Intent::Liked(record.id.clone())),
            Command::Comment => self
                .active_record()
                .map(|record| Intent::Commented(record.id.clone())),
            Command::Share => self
                .active_record()
                .map(|record| Intent::Shared(record.id.clone())),
            Command::Follow => {
                let handle = self.active_record()?.handle.clone();
                if self.followed.remove(&handle) {
                    None
                } else {
                    self.followed.insert(handle.clone());
                    Some(Intent::Followed(handle))
                }
            }
            Command::SetFullscreen(is_fullscreen) => {
                self.is_fullscreen = is_fullscreen;
                if !is_fullscreen {
                    // Fullscreen-only chrome cannot survive the exit
                    self.overlay.reset_for_navigation();
                }
                None
            }
        }
    }

    /// Applies an observation from the surface, discarding stale ones.
    ///
    /// An update tagged with a superseded index belongs to a record that is
    /// no longer active and must not touch the playhead.
    pub fn apply_surface_update(&mut self, update: &SurfaceUpdate) {
        if update.index != self.navigation.active_index() {
            return;
        }
        self.playback.apply_event(&update.event);
    }

    fn moved(
        &mut self,
        new_index: Option<usize>,
        surface: &mut dyn MediaSurface,
    ) -> Option<Intent> {
        let index = new_index?;
        self.overlay.reset_for_navigation();
        self.load_active(surface);
        Some(Intent::IndexChanged(index))
    }

    fn load_active(&mut self, surface: &mut dyn MediaSurface) {
        let index = self.navigation.active_index();
        if let Some(record) = self.records.get(index) {
            let uri = record.source_uri.clone();
            self.playback.load(index, &uri, surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::sample_feed;
    use crate::player::surface::testing::{RecordingSurface, SurfaceCall};
    use crate::player::surface::SurfaceEvent;
    use crate::test_utils::assert_abs_diff_eq;

    fn carousel() -> (Carousel, RecordingSurface) {
        let mut surface = RecordingSurface::new();
        let carousel = Carousel::new(sample_feed(), &mut surface);
        (carousel, surface)
    }

    #[test]
    fn new_carousel_loads_the_first_record() {
        let (carousel, surface) = carousel();
        assert_eq!(carousel.active_index(), 0);
        assert!(matches!(
            surface.calls.first(),
            Some(SurfaceCall::Load { index: 0, .. })
        ));
    }

    #[test]
    fn empty_feed_is_inert() {
        let mut surface = RecordingSurface::new();
        let mut carousel = Carousel::new(Vec::new(), &mut surface);

        assert!(carousel.active_record().is_none());
        assert_eq!(carousel.handle(Command::Next, &mut surface), None);
        assert_eq!(carousel.handle(Command::Like, &mut surface), None);
        assert!(!surface
            .calls
            .iter()
            .any(|c| matches!(c, SurfaceCall::Load { .. })));
    }

    #[test]
    fn repeated_go_to_notifies_only_on_real_changes() {
        let (mut carousel, mut surface) = carousel();

        // Walk 1, 2, 2: the repeat is a no-op and must stay silent
        assert_eq!(
            carousel.handle(Command::GoTo(1), &mut surface),
            Some(Intent::IndexChanged(1))
        );
        assert_eq!(
            carousel.handle(Command::GoTo(2), &mut surface),
            Some(Intent::IndexChanged(2))
        );
        assert_eq!(carousel.handle(Command::GoTo(2), &mut surface), None);
    }

    #[test]
    fn navigation_has_no_wraparound() {
        let (mut carousel, mut surface) = carousel();

        assert_eq!(carousel.handle(Command::Previous, &mut surface), None);

        carousel.handle(Command::GoTo(2), &mut surface);
        assert_eq!(carousel.handle(Command::Next, &mut surface), None);
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn swipe_directions_map_to_navigation() {
        let (mut carousel, mut surface) = carousel();

        assert_eq!(
            carousel.handle(Command::Swipe(NavDirection::Next), &mut surface),
            Some(Intent::IndexChanged(1))
        );
        assert_eq!(
            carousel.handle(Command::Swipe(NavDirection::Previous), &mut surface),
            Some(Intent::IndexChanged(0))
        );
    }

    #[test]
    fn navigation_reloads_surface_and_resets_playhead() {
        let (mut carousel, mut surface) = carousel();

        carousel.apply_surface_update(&SurfaceUpdate {
            index: 0,
            event: SurfaceEvent::Position {
                position_secs: 9.0,
                duration_secs: 30.0,
            },
        });

        surface.calls.clear();
        carousel.handle(Command::Next, &mut surface);

        assert!(matches!(
            surface.calls.first(),
            Some(SurfaceCall::Load { index: 1, .. })
        ));
        assert_abs_diff_eq!(carousel.playback().position_secs(), 0.0);
    }

    #[test]
    fn navigation_collapses_caption_and_menus() {
        let (mut carousel, mut surface) = carousel();
        carousel.handle(Command::SetFullscreen(true), &mut surface);
        carousel.handle(Command::ToggleCaption, &mut surface);
        carousel.handle(Command::ToggleMenu(OpenMenu::Speed), &mut surface);

        carousel.handle(Command::Next, &mut surface);

        assert!(!carousel.overlay().caption_expanded());
        assert_eq!(carousel.overlay().open_menu(), OpenMenu::None);
    }

    #[test]
    fn play_state_survives_navigation() {
        let (mut carousel, mut surface) = carousel();

        carousel.handle(Command::TogglePlay, &mut surface);
        carousel.handle(Command::Next, &mut surface);

        assert!(carousel.playback().is_playing());
        // The reload ends in a play command for the new record
        assert!(matches!(surface.last_call(), Some(SurfaceCall::Play)));
    }

    #[test]
    fn stale_surface_updates_are_discarded() {
        let (mut carousel, mut surface) = carousel();
        carousel.handle(Command::Next, &mut surface);

        // Late event from the superseded first record
        carousel.apply_surface_update(&SurfaceUpdate {
            index: 0,
            event: SurfaceEvent::Position {
                position_secs: 25.0,
                duration_secs: 30.0,
            },
        });
        assert_abs_diff_eq!(carousel.playback().position_secs(), 0.0);

        // Event from the active record lands
        carousel.apply_surface_update(&SurfaceUpdate {
            index: 1,
            event: SurfaceEvent::Loaded {
                duration_secs: 12.0,
            },
        });
        assert_abs_diff_eq!(carousel.playback().duration_secs(), 12.0);
    }

    #[test]
    fn mute_round_trip_restores_volume() {
        let (mut carousel, mut surface) = carousel();

        carousel.handle(Command::SetVolume(Volume::new(0.4)), &mut surface);
        carousel.handle(Command::ToggleMute, &mut surface);
        assert!(carousel.playback().volume().is_muted());

        carousel.handle(Command::ToggleMute, &mut surface);
        assert_abs_diff_eq!(carousel.playback().volume().value(), 0.4);
    }

    #[test]
    fn menus_require_fullscreen() {
        let (mut carousel, mut surface) = carousel();

        carousel.handle(Command::ToggleMenu(OpenMenu::Subtitles), &mut surface);
        assert_eq!(carousel.overlay().open_menu(), OpenMenu::None);

        carousel.handle(Command::SetFullscreen(true), &mut surface);
        carousel.handle(Command::ToggleMenu(OpenMenu::Subtitles), &mut surface);
        assert_eq!(carousel.overlay().open_menu(), OpenMenu::Subtitles);
    }

    #[test]
    fn leaving_fullscreen_closes_chrome() {
        let (mut carousel, mut surface) = carousel();
        carousel.handle(Command::SetFullscreen(true), &mut surface);
        carousel.handle(Command::ToggleMenu(OpenMenu::Settings), &mut surface);
        carousel.handle(Command::ToggleCaption, &mut surface);

        carousel.handle(Command::SetFullscreen(false), &mut surface);

        assert_eq!(carousel.overlay().open_menu(), OpenMenu::None);
        assert!(!carousel.overlay().caption_expanded());
    }

    #[test]
    fn select_rate_applies_and_closes_the_menu() {
        let (mut carousel, mut surface) = carousel();
        carousel.handle(Command::SetFullscreen(true), &mut surface);
        carousel.handle(Command::ToggleMenu(OpenMenu::Speed), &mut surface);

        carousel.handle(Command::SelectRate(PlaybackRate::Double), &mut surface);

        assert_eq!(carousel.playback().rate(), PlaybackRate::Double);
        assert_eq!(carousel.overlay().open_menu(), OpenMenu::None);
    }

    #[test]
    fn reset_restores_rate_and_display_but_keeps_panel() {
        let (mut carousel, mut surface) = carousel();
        carousel.handle(Command::SetFullscreen(true), &mut surface);
        carousel.handle(Command::ToggleMenu(OpenMenu::Settings), &mut surface);
        carousel.handle(Command::SetRate(PlaybackRate::Half), &mut surface);
        carousel.handle(Command::SetBrightness(1.4), &mut surface);
        carousel.handle(Command::SetOverlayTint([255, 0, 0, 40]), &mut surface);

        carousel.handle(Command::ResetDisplaySettings, &mut surface);

        assert_eq!(carousel.playback().rate(), PlaybackRate::Normal);
        assert_abs_diff_eq!(carousel.overlay().settings().brightness, 1.0);
        assert_eq!(carousel.overlay().settings().overlay_tint, None);
        assert_eq!(carousel.overlay().open_menu(), OpenMenu::Settings);
    }

    #[test]
    fn engagement_intents_carry_the_active_record_id() {
        let (mut carousel, mut surface) = carousel();
        carousel.handle(Command::GoTo(1), &mut surface);

        assert_eq!(
            carousel.handle(Command::Like, &mut surface),
            Some(Intent::Liked("2".to_string()))
        );
        assert_eq!(
            carousel.handle(Command::Comment, &mut surface),
            Some(Intent::Commented("2".to_string()))
        );
        assert_eq!(
            carousel.handle(Command::Share, &mut surface),
            Some(Intent::Shared("2".to_string()))
        );
    }

    #[test]
    fn follow_is_tracked_per_handle() {
        let (mut carousel, mut surface) = carousel();

        assert_eq!(
            carousel.handle(Command::Follow, &mut surface),
            Some(Intent::Followed("@polarwatch".to_string()))
        );
        assert!(carousel.following_active());

        // Records 0 and 1 share an author; the follow carries over
        carousel.handle(Command::GoTo(1), &mut surface);
        assert!(carousel.following_active());

        // A different author is not followed
        carousel.handle(Command::GoTo(2), &mut surface);
        assert!(!carousel.following_active());

        // Unfollow is silent
        carousel.handle(Command::GoTo(0), &mut surface);
        assert_eq!(carousel.handle(Command::Follow, &mut surface), None);
        assert!(!carousel.following_active());
    }

    #[test]
    fn frame_follows_mode_and_aspect_ratio() {
        let (mut carousel, mut surface) = carousel();

        assert!(matches!(carousel.frame(), FrameMode::FixedSquare(_)));

        carousel.handle(Command::SetFullscreen(true), &mut surface);
        carousel.handle(Command::GoTo(1), &mut surface);
        assert_abs_diff_eq!(carousel.frame().ratio(), 16.0 / 9.0);

        carousel.handle(Command::GoTo(2), &mut surface);
        assert_abs_diff_eq!(carousel.frame().ratio(), 9.0 / 16.0);
    }

    #[test]
    fn set_records_reclamps_the_active_index() {
        let (mut carousel, mut surface) = carousel();
        carousel.handle(Command::GoTo(2), &mut surface);

        let shorter = sample_feed().into_iter().take(1).collect();
        carousel.set_records(shorter, &mut surface);

        assert_eq!(carousel.active_index(), 0);
        assert!(matches!(
            surface.last_call(),
            Some(SurfaceCall::Pause | SurfaceCall::Play)
        ));
    }
}
