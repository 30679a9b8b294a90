// SPDX-License-Identifier: MPL-2.0
//! Feed component encapsulating carousel state and update logic.
//!
//! Owns the [`Carousel`], the simulated media surface, and the gesture
//! trackers, and maps widget and raw-event input onto carousel commands.
//! Raw events only arrive here when no widget captured them, so the
//! innermost control always wins over surface gestures.

use iced::widget::{column, container, mouse_area, row, text, Column};
use iced::{event, keyboard, mouse, touch, window, Color, Element, Length};
use std::time::Instant;

use crate::config::Config;
use crate::feed::MediaRecord;
use crate::infrastructure::SimulatedSurface;
use crate::player::{
    Carousel, Command, DisplaySettings, FrameMode, Intent, PlaybackRate, SubtitleTrack,
    SwipeTracker, TapAction, TapArbiter, Volume,
};
use crate::ui::feed::{chrome, controls};

/// Messages handled by the feed component.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    Chrome(chrome::Message),
    /// Press landed on the control bar region, including the padding
    /// between its widgets. Consumed so it never reaches the surface
    /// gesture handlers.
    BarPressed,
    /// Release over the control bar region. Abandons any drag that began
    /// on the surface.
    BarReleased,
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    Tick(Instant),
}

/// Side effects the application should perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Ask the window system for this fullscreen state. The component is
    /// only told about the result via [`State::set_fullscreen`].
    RequestFullscreen(bool),
    /// A persisted preference changed; write the config file.
    PersistPreferences,
    /// Something the embedding feed must react to.
    Intent(Intent),
}

/// Complete feed component state.
pub struct State {
    carousel: Carousel,
    surface: SimulatedSurface,
    taps: TapArbiter,
    swipe: SwipeTracker,
    cursor_position: Option<iced::Point>,
}

impl State {
    /// Builds the component over `records`, restoring persisted
    /// preferences before the first frame renders.
    #[must_use]
    pub fn new(records: Vec<MediaRecord>, config: &Config) -> Self {
        let mut surface = SimulatedSurface::new();
        let carousel = Carousel::new(records, &mut surface);
        let mut state = Self {
            carousel,
            surface,
            taps: TapArbiter::new(),
            swipe: SwipeTracker::new(),
            cursor_position: None,
        };
        state.apply_config(config);
        state
    }

    fn apply_config(&mut self, config: &Config) {
        if let Some(volume) = config.volume {
            self.run(Command::SetVolume(Volume::new(volume)));
        }
        if config.muted == Some(true) {
            self.run(Command::ToggleMute);
        }
        if let Some(rate) = config.playback_rate {
            self.run(Command::SetRate(PlaybackRate::nearest(rate)));
        }
        if let Some(track) = config
            .subtitle_track
            .as_deref()
            .and_then(SubtitleTrack::from_label)
        {
            self.run(Command::SelectSubtitle(track));
        }
    }

    /// Current preferences in persistable form.
    #[must_use]
    pub fn preferences(&self) -> Config {
        let playback = self.carousel.playback();
        let muted = playback.volume().is_muted();
        let volume = if muted {
            playback.last_audible_volume()
        } else {
            playback.volume()
        };
        let track = self.carousel.overlay().settings().subtitle_track;
        Config {
            volume: Some(volume.value()),
            muted: Some(muted),
            playback_rate: Some(playback.rate().value()),
            subtitle_track: (track != SubtitleTrack::Off).then(|| track.label().to_string()),
        }
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.carousel.is_fullscreen()
    }

    /// Applies a confirmed window mode change.
    pub fn set_fullscreen(&mut self, is_fullscreen: bool) {
        self.run(Command::SetFullscreen(is_fullscreen));
    }

    /// Handles a message, returning the effect the app should perform.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Controls(message) => self.handle_controls(message),
            Message::Chrome(message) => self.handle_chrome(message),
            Message::BarPressed => Effect::None,
            Message::BarReleased => {
                self.swipe.cancel();
                Effect::None
            }
            Message::RawEvent { window: _, event } => self.handle_raw_event(event),
            Message::Tick(now) => self.handle_tick(now),
        }
    }

    fn handle_controls(&mut self, message: controls::Message) -> Effect {
        use controls::Message::*;
        match message {
            TogglePlayback => self.run(Command::TogglePlay),
            Seek(target_secs) => self.run(Command::Seek(target_secs)),
            SetVolume(volume) => self.run_persisting(Command::SetVolume(Volume::new(volume))),
            ToggleMute => self.run_persisting(Command::ToggleMute),
            ToggleFullscreen => Effect::RequestFullscreen(!self.carousel.is_fullscreen()),
            ToggleMenu(menu) => self.run(Command::ToggleMenu(menu)),
            SelectSubtitle(track) => self.run_persisting(Command::SelectSubtitle(track)),
            SelectRate(rate) => self.run_persisting(Command::SelectRate(rate)),
            SelectResolution(resolution) => self.run(Command::SelectResolution(resolution)),
            ToggleSubtitles => self.run(Command::ToggleSubtitles),
            SetBrightness(brightness) => self.run(Command::SetBrightness(brightness)),
            SetContrast(contrast) => self.run(Command::SetContrast(contrast)),
            ClearOverlayTint => self.run(Command::ClearOverlayTint),
            ResetDisplaySettings => self.run_persisting(Command::ResetDisplaySettings),
        }
    }

    fn handle_chrome(&mut self, message: chrome::Message) -> Effect {
        match message {
            chrome::Message::ToggleCaption => self.run(Command::ToggleCaption),
            chrome::Message::Like => self.run(Command::Like),
            chrome::Message::Comment => self.run(Command::Comment),
            chrome::Message::Share => self.run(Command::Share),
            chrome::Message::Follow => self.run(Command::Follow),
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Effect {
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key_pressed(key)
            }
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::CursorMoved { position } => {
                    self.cursor_position = Some(position);
                    Effect::None
                }
                mouse::Event::CursorLeft => {
                    self.cursor_position = None;
                    self.swipe.cancel();
                    Effect::None
                }
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    if let Some(position) = self.cursor_position {
                        self.swipe.begin(position.y);
                    }
                    Effect::None
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    match self.cursor_position {
                        Some(position) => self.handle_pointer_release(position.y),
                        None => {
                            self.swipe.cancel();
                            Effect::None
                        }
                    }
                }
                _ => Effect::None,
            },
            event::Event::Touch(touch_event) => match touch_event {
                touch::Event::FingerPressed { position, .. } => {
                    self.swipe.begin(position.y);
                    Effect::None
                }
                touch::Event::FingerLifted { position, .. } => {
                    self.handle_pointer_release(position.y)
                }
                touch::Event::FingerLost { .. } => {
                    self.swipe.cancel();
                    self.taps.cancel();
                    Effect::None
                }
                touch::Event::FingerMoved { .. } => Effect::None,
            },
            _ => Effect::None,
        }
    }

    fn handle_key_pressed(&mut self, key: keyboard::Key) -> Effect {
        match key {
            keyboard::Key::Named(keyboard::key::Named::Space) => self.run(Command::TogglePlay),
            keyboard::Key::Named(keyboard::key::Named::ArrowUp) => self.run(Command::Previous),
            keyboard::Key::Named(keyboard::key::Named::ArrowDown) => self.run(Command::Next),
            keyboard::Key::Named(keyboard::key::Named::F11) => {
                Effect::RequestFullscreen(!self.carousel.is_fullscreen())
            }
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                if self.carousel.is_fullscreen() {
                    Effect::RequestFullscreen(false)
                } else {
                    Effect::None
                }
            }
            keyboard::Key::Character(ref c) if c.as_str() == "m" => {
                self.run_persisting(Command::ToggleMute)
            }
            _ => Effect::None,
        }
    }

    /// Resolves a press/release pair: a swipe navigates, anything shorter
    /// goes to the tap arbiter.
    fn handle_pointer_release(&mut self, y: f32) -> Effect {
        if let Some(direction) = self.swipe.finish(y) {
            // A drag can no longer be part of a tap sequence
            self.taps.cancel();
            return self.run(Command::Swipe(direction));
        }
        match self.taps.press(Instant::now()) {
            Some(TapAction::Like) => self.run(Command::Like),
            Some(TapAction::TogglePlay) | None => Effect::None,
        }
    }

    fn handle_tick(&mut self, now: Instant) -> Effect {
        for update in self.surface.poll(now) {
            self.carousel.apply_surface_update(&update);
        }
        match self.taps.poll(now) {
            Some(TapAction::TogglePlay) => self.run(Command::TogglePlay),
            Some(TapAction::Like) | None => Effect::None,
        }
    }

    fn run(&mut self, command: Command) -> Effect {
        match self.carousel.handle(command, &mut self.surface) {
            Some(intent) => Effect::Intent(intent),
            None => Effect::None,
        }
    }

    /// Like [`run`](Self::run), but the command changes a persisted
    /// preference.
    fn run_persisting(&mut self, command: Command) -> Effect {
        match self.carousel.handle(command, &mut self.surface) {
            Some(intent) => Effect::Intent(intent),
            None => Effect::PersistPreferences,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let playback = self.carousel.playback();
        let overlay = self.carousel.overlay();
        let is_fullscreen = self.carousel.is_fullscreen();

        let controls_ctx = controls::ControlsContext {
            is_playing: playback.is_playing(),
            position_secs: playback.position_secs(),
            duration_secs: playback.duration_secs(),
            volume: playback.volume().value(),
            muted: playback.volume().is_muted(),
            rate: playback.rate(),
            is_fullscreen,
            open_menu: overlay.open_menu(),
            settings: overlay.settings(),
        };
        // The mouse area captures presses over the whole bar, padding
        // included; widget events already capture on their own.
        let control_bar = mouse_area(controls::view(&controls_ctx).map(Message::Controls))
            .on_press(Message::BarPressed)
            .on_release(Message::BarReleased);

        let frame = self.media_frame();

        let Some(record) = self.carousel.active_record() else {
            let empty: Column<'_, Message> =
                column![text("No videos in feed").size(16), control_bar]
                    .spacing(8)
                    .align_x(iced::Alignment::Center);
            return container(empty)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        };

        if !is_fullscreen {
            let content: Column<'_, Message> = column![frame, control_bar]
                .spacing(8)
                .align_x(iced::Alignment::Center);
            return container(content)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        }

        let chrome_ctx = chrome::ChromeContext {
            record,
            caption_expanded: overlay.caption_expanded(),
            following: self.carousel.following_active(),
            settings: overlay.settings(),
        };
        let header = chrome::header(&chrome_ctx).map(Message::Chrome);
        let caption = chrome::caption(&chrome_ctx).map(Message::Chrome);
        let engagement = chrome::engagement(&chrome_ctx).map(Message::Chrome);

        let body = row![frame, engagement]
            .spacing(8)
            .align_y(iced::Alignment::End);

        let content: Column<'_, Message> = column![header, body, caption, control_bar]
            .spacing(8)
            .align_x(iced::Alignment::Center);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// The media frame itself: a colored surface standing in for decoded
    /// video, carrying the display filters and the paused/failed overlays.
    fn media_frame(&self) -> Element<'_, Message> {
        let playback = self.carousel.playback();
        let settings = self.carousel.overlay().settings();
        let fill = frame_fill(settings);

        let status = if playback.load_failed() {
            "Video unavailable"
        } else if !playback.is_playing() {
            "▶"
        } else {
            ""
        };

        let inner = container(text(status).size(28))
            .style(move |_theme| container::Style {
                background: Some(fill.into()),
                ..container::Style::default()
            })
            .center_x(Length::Fill)
            .center_y(Length::Fill);

        match self.carousel.frame() {
            FrameMode::FixedSquare(side) => inner
                .width(Length::Fixed(side))
                .height(Length::Fixed(side))
                .into(),
            FrameMode::Ratio(ratio) => {
                // Fill the shorter axis; derive the other from the ratio
                let height = 540.0;
                inner
                    .width(Length::Fixed(height * ratio))
                    .height(Length::Fixed(height))
                    .into()
            }
        }
    }
}

/// Computes the frame fill color from the display filters.
///
/// Brightness and contrast act on a dark base tone; the optional tint is
/// alpha-composited on top. Pure so the filter math stays testable.
fn frame_fill(settings: &DisplaySettings) -> Color {
    let base = 0.15_f32;
    // Contrast pivots around mid-gray, brightness scales the result
    let adjusted = ((base - 0.5) * settings.contrast + 0.5) * settings.brightness;
    let value = adjusted.clamp(0.0, 1.0);

    let (mut r, mut g, mut b) = (value, value, value);
    if let Some([tr, tg, tb, ta]) = settings.overlay_tint {
        let alpha = f32::from(ta) / 255.0;
        r = r * (1.0 - alpha) + (f32::from(tr) / 255.0) * alpha;
        g = g * (1.0 - alpha) + (f32::from(tg) / 255.0) * alpha;
        b = b * (1.0 - alpha) + (f32::from(tb) / 255.0) * alpha;
    }
    Color::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::sample_feed;
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;

    fn state() -> State {
        State::new(sample_feed(), &Config::default())
    }

    fn key_press(key: keyboard::key::Named) -> Message {
        Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key),
                modified_key: keyboard::Key::Named(key),
                physical_key: keyboard::key::Physical::Unidentified(
                    keyboard::key::NativeCode::Unidentified,
                ),
                location: keyboard::Location::Standard,
                modifiers: keyboard::Modifiers::default(),
                text: None,
                repeat: false,
            }),
        }
    }

    #[test]
    fn config_preferences_are_applied_on_startup() {
        let config = Config {
            volume: Some(0.3),
            muted: Some(true),
            playback_rate: Some(2.0),
            subtitle_track: Some("English".to_string()),
        };
        let state = State::new(sample_feed(), &config);

        let playback = state.carousel().playback();
        assert!(playback.volume().is_muted());
        assert_abs_diff_eq!(playback.last_audible_volume().value(), 0.3);
        assert_eq!(playback.rate(), PlaybackRate::Double);
        assert_eq!(
            state.carousel().overlay().settings().subtitle_track,
            SubtitleTrack::English
        );
    }

    #[test]
    fn preferences_round_trip_through_config() {
        let config = Config {
            volume: Some(0.7),
            muted: Some(true),
            playback_rate: Some(1.5),
            subtitle_track: Some("Italian".to_string()),
        };
        let state = State::new(sample_feed(), &config);

        let saved = state.preferences();
        assert_eq!(saved.muted, Some(true));
        assert_abs_diff_eq!(saved.volume.unwrap(), 0.7);
        assert_eq!(saved.playback_rate, Some(1.5));
        assert_eq!(saved.subtitle_track, Some("Italian".to_string()));
    }

    #[test]
    fn space_key_toggles_playback() {
        let mut state = state();

        state.update(key_press(keyboard::key::Named::Space));
        assert!(state.carousel().playback().is_playing());

        state.update(key_press(keyboard::key::Named::Space));
        assert!(!state.carousel().playback().is_playing());
    }

    #[test]
    fn arrow_keys_navigate_the_sequence() {
        let mut state = state();

        let effect = state.update(key_press(keyboard::key::Named::ArrowDown));
        assert_eq!(effect, Effect::Intent(Intent::IndexChanged(1)));

        let effect = state.update(key_press(keyboard::key::Named::ArrowUp));
        assert_eq!(effect, Effect::Intent(Intent::IndexChanged(0)));

        // At the start, stepping back is silent
        let effect = state.update(key_press(keyboard::key::Named::ArrowUp));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn f11_requests_fullscreen_without_flipping_state() {
        let mut state = state();

        let effect = state.update(key_press(keyboard::key::Named::F11));
        assert_eq!(effect, Effect::RequestFullscreen(true));
        // Confirmed, not optimistic: nothing changed yet
        assert!(!state.is_fullscreen());

        state.set_fullscreen(true);
        assert!(state.is_fullscreen());

        let effect = state.update(key_press(keyboard::key::Named::Escape));
        assert_eq!(effect, Effect::RequestFullscreen(false));
    }

    #[test]
    fn escape_outside_fullscreen_is_silent() {
        let mut state = state();
        let effect = state.update(key_press(keyboard::key::Named::Escape));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn touch_swipe_navigates() {
        let mut state = state();

        state.update(Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Touch(touch::Event::FingerPressed {
                id: touch::Finger(1),
                position: iced::Point::new(100.0, 400.0),
            }),
        });
        let effect = state.update(Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Touch(touch::Event::FingerLifted {
                id: touch::Finger(1),
                position: iced::Point::new(100.0, 300.0),
            }),
        });

        assert_eq!(effect, Effect::Intent(Intent::IndexChanged(1)));
    }

    #[test]
    fn short_touch_becomes_a_deferred_tap() {
        let mut state = state();

        state.update(Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Touch(touch::Event::FingerPressed {
                id: touch::Finger(1),
                position: iced::Point::new(100.0, 400.0),
            }),
        });
        let effect = state.update(Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Touch(touch::Event::FingerLifted {
                id: touch::Finger(1),
                position: iced::Point::new(100.0, 390.0),
            }),
        });
        // The single tap is deferred, not resolved immediately
        assert_eq!(effect, Effect::None);
        assert!(!state.carousel().playback().is_playing());

        // Once the double-tap window passes, the tick commits it
        let later = Instant::now() + Duration::from_millis(400);
        state.update(Message::Tick(later));
        assert!(state.carousel().playback().is_playing());
    }

    #[test]
    fn double_tap_likes_without_toggling_playback() {
        let mut state = state();

        for _ in 0..2 {
            state.update(Message::RawEvent {
                window: window::Id::unique(),
                event: event::Event::Touch(touch::Event::FingerPressed {
                    id: touch::Finger(1),
                    position: iced::Point::new(100.0, 400.0),
                }),
            });
            let effect = state.update(Message::RawEvent {
                window: window::Id::unique(),
                event: event::Event::Touch(touch::Event::FingerLifted {
                    id: touch::Finger(1),
                    position: iced::Point::new(100.0, 400.0),
                }),
            });
            if effect != Effect::None {
                assert_eq!(effect, Effect::Intent(Intent::Liked("1".to_string())));
            }
        }

        // Neither tap may toggle playback, now or later
        let later = Instant::now() + Duration::from_secs(2);
        state.update(Message::Tick(later));
        assert!(!state.carousel().playback().is_playing());
    }

    #[test]
    fn presses_on_the_control_bar_never_toggle_playback() {
        let mut state = state();

        // A click on the bar's padding lands here instead of the raw-event
        // path, so no tap is ever pended.
        state.update(Message::BarPressed);
        state.update(Message::BarReleased);

        let later = Instant::now() + Duration::from_millis(400);
        state.update(Message::Tick(later));
        assert!(!state.carousel().playback().is_playing());
    }

    #[test]
    fn a_drag_released_over_the_control_bar_does_not_navigate() {
        let mut state = state();

        state.update(Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Touch(touch::Event::FingerPressed {
                id: touch::Finger(1),
                position: iced::Point::new(100.0, 400.0),
            }),
        });
        let effect = state.update(Message::BarReleased);

        assert_eq!(effect, Effect::None);
        assert_eq!(state.carousel().active_index(), 0);
    }

    #[test]
    fn tick_routes_surface_updates_into_the_carousel() {
        let mut state = state();

        let later = Instant::now() + Duration::from_millis(crate::config::LOAD_DELAY_MS + 50);
        state.update(Message::Tick(later));

        // Metadata arrived through the simulated surface
        assert!(state.carousel().playback().duration_secs() > 0.0);
    }

    #[test]
    fn volume_changes_request_persistence() {
        let mut state = state();
        let effect = state.update(Message::Controls(controls::Message::SetVolume(0.5)));
        assert_eq!(effect, Effect::PersistPreferences);
    }

    #[test]
    fn views_render_in_both_modes() {
        let mut state = state();
        let _windowed = state.view();
        drop(_windowed);

        state.set_fullscreen(true);
        let _fullscreen = state.view();
    }

    #[test]
    fn frame_fill_applies_tint() {
        let mut settings = DisplaySettings::default();
        let untinted = frame_fill(&settings);

        settings.overlay_tint = Some([255, 0, 0, 255]);
        let tinted = frame_fill(&settings);

        assert_abs_diff_eq!(tinted.r, 1.0);
        assert!(tinted.r > untinted.r);
        assert_abs_diff_eq!(tinted.g, 0.0);
    }

    #[test]
    fn frame_fill_clamps_extremes() {
        let mut settings = DisplaySettings::default();
        settings.brightness = 1.5;
        settings.contrast = 0.5;
        let color = frame_fill(&settings);
        assert!((0.0..=1.0).contains(&color.r));
    }
}
