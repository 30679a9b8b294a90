// SPDX-License-Identifier: MPL-2.0
//! Playback control bar and overlay menus.
//!
//! Renders the always-visible transport row (play/pause, scrubber, time,
//! volume, fullscreen) and, in fullscreen, the menu strip with its popup
//! panels. Every widget emits a [`Message`] the component maps onto a
//! carousel command; widget interaction captures the event, so taps on the
//! controls never reach the gesture layer.

use iced::widget::{button, column, container, row, slider, text, Column, Row, Space};
use iced::{Element, Length};

use crate::player::{DisplaySettings, OpenMenu, PlaybackRate, Resolution, SubtitleTrack};

/// Slider step for the scrubber, in seconds.
const SEEK_STEP_SECS: f64 = 0.1;

/// Messages emitted by the control bar widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TogglePlayback,
    /// Absolute seek target in seconds.
    Seek(f64),
    SetVolume(f32),
    ToggleMute,
    ToggleFullscreen,
    ToggleMenu(OpenMenu),
    SelectSubtitle(SubtitleTrack),
    SelectRate(PlaybackRate),
    SelectResolution(Resolution),
    ToggleSubtitles,
    SetBrightness(f32),
    SetContrast(f32),
    ClearOverlayTint,
    ResetDisplaySettings,
}

/// Snapshot of player state the control bar renders from.
#[derive(Debug, Clone)]
pub struct ControlsContext<'a> {
    pub is_playing: bool,
    pub position_secs: f64,
    pub duration_secs: f64,
    pub volume: f32,
    pub muted: bool,
    pub rate: PlaybackRate,
    pub is_fullscreen: bool,
    pub open_menu: OpenMenu,
    pub settings: &'a DisplaySettings,
}

/// Renders the transport row plus, in fullscreen, the menu strip and any
/// open panel stacked above it.
pub fn view(ctx: &ControlsContext<'_>) -> Element<'static, Message> {
    let play_pause = button(text(if ctx.is_playing { "Pause" } else { "Play" }))
        .on_press(Message::TogglePlayback)
        .padding(4);

    // Zero-length range keeps the slider inert before metadata arrives
    let scrubber = slider(
        0.0..=ctx.duration_secs.max(0.0),
        ctx.position_secs,
        Message::Seek,
    )
    .step(SEEK_STEP_SECS)
    .width(Length::FillPortion(1));

    let time_display = text(format!(
        "{} / {}",
        format_time(ctx.position_secs),
        format_time(ctx.duration_secs)
    ))
    .size(14);

    let mute_button = button(text(if ctx.muted { "Unmute" } else { "Mute" }))
        .on_press(Message::ToggleMute)
        .padding(4);

    let volume_slider = slider(0.0..=1.0, ctx.volume, Message::SetVolume)
        .step(0.01)
        .width(Length::Fixed(80.0));

    let fullscreen_button = button(text(if ctx.is_fullscreen {
        "Exit Fullscreen"
    } else {
        "Fullscreen"
    }))
    .on_press(Message::ToggleFullscreen)
    .padding(4);

    let transport: Row<'static, Message> = row![
        play_pause,
        scrubber,
        time_display,
        mute_button,
        volume_slider,
        fullscreen_button,
    ]
    .spacing(8)
    .padding(4)
    .align_y(iced::Alignment::Center);

    if !ctx.is_fullscreen {
        return container(transport).width(Length::Fill).into();
    }

    let menu_strip: Row<'static, Message> = row![
        Space::new().width(Length::Fill),
        menu_button("Subtitles", OpenMenu::Subtitles, ctx.open_menu),
        menu_button(ctx.rate.label(), OpenMenu::Speed, ctx.open_menu),
        menu_button(
            ctx.settings.resolution.label(),
            OpenMenu::Resolution,
            ctx.open_menu
        ),
        menu_button("Settings", OpenMenu::Settings, ctx.open_menu),
    ]
    .spacing(8)
    .padding(4);

    let mut stacked: Column<'static, Message> = Column::new().spacing(4).width(Length::Fill);
    match ctx.open_menu {
        OpenMenu::None => {}
        OpenMenu::Subtitles => stacked = stacked.push(subtitles_panel(ctx.settings)),
        OpenMenu::Speed => stacked = stacked.push(speed_panel(ctx.rate)),
        OpenMenu::Resolution => stacked = stacked.push(resolution_panel(ctx.settings)),
        OpenMenu::Settings => stacked = stacked.push(settings_panel(ctx.settings)),
    }
    stacked = stacked.push(menu_strip).push(transport);

    container(stacked).width(Length::Fill).into()
}

fn menu_button(
    label: impl text::IntoFragment<'static>,
    menu: OpenMenu,
    open: OpenMenu,
) -> Element<'static, Message> {
    let label = if menu == open {
        text(label).size(14).style(text::primary)
    } else {
        text(label).size(14)
    };
    button(label)
        .on_press(Message::ToggleMenu(menu))
        .padding(4)
        .into()
}

fn subtitles_panel(settings: &DisplaySettings) -> Element<'static, Message> {
    let mut options: Column<'static, Message> = Column::new().spacing(2).padding(4);
    for track in SubtitleTrack::ALL {
        let selected = settings.subtitle_track == track;
        let label = if selected {
            text(track.label()).size(14).style(text::primary)
        } else {
            text(track.label()).size(14)
        };
        options = options.push(
            button(label)
                .on_press(Message::SelectSubtitle(track))
                .padding(4),
        );
    }
    container(options).width(Length::Fill).into()
}

fn speed_panel(current: PlaybackRate) -> Element<'static, Message> {
    let mut options: Column<'static, Message> = Column::new().spacing(2).padding(4);
    for rate in PlaybackRate::ALL {
        let label = if rate == current {
            text(rate.label()).size(14).style(text::primary)
        } else {
            text(rate.label()).size(14)
        };
        options = options.push(button(label).on_press(Message::SelectRate(rate)).padding(4));
    }
    container(options).width(Length::Fill).into()
}

fn resolution_panel(settings: &DisplaySettings) -> Element<'static, Message> {
    let mut options: Column<'static, Message> = Column::new().spacing(2).padding(4);
    for resolution in Resolution::ALL {
        let selected = settings.resolution == resolution;
        let label = if selected {
            text(resolution.label()).size(14).style(text::primary)
        } else {
            text(resolution.label()).size(14)
        };
        options = options.push(
            button(label)
                .on_press(Message::SelectResolution(resolution))
                .padding(4),
        );
    }
    container(options).width(Length::Fill).into()
}

fn settings_panel(settings: &DisplaySettings) -> Element<'static, Message> {
    use crate::config::{MAX_BRIGHTNESS, MAX_CONTRAST, MIN_BRIGHTNESS, MIN_CONTRAST};

    let brightness_row: Row<'static, Message> = row![
        text("Brightness").size(14).width(Length::Fixed(90.0)),
        slider(
            MIN_BRIGHTNESS..=MAX_BRIGHTNESS,
            settings.brightness,
            Message::SetBrightness
        )
        .step(0.05),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    let contrast_row: Row<'static, Message> = row![
        text("Contrast").size(14).width(Length::Fixed(90.0)),
        slider(
            MIN_CONTRAST..=MAX_CONTRAST,
            settings.contrast,
            Message::SetContrast
        )
        .step(0.05),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    let subtitles_toggle = button(text(if settings.subtitles_on {
        "Subtitles: On"
    } else {
        "Subtitles: Off"
    }))
    .on_press(Message::ToggleSubtitles)
    .padding(4);

    let mut actions: Row<'static, Message> = row![
        subtitles_toggle,
        button(text("Reset"))
            .on_press(Message::ResetDisplaySettings)
            .padding(4),
    ]
    .spacing(8);

    if settings.overlay_tint.is_some() {
        actions = actions.push(
            button(text("Clear Overlay"))
                .on_press(Message::ClearOverlayTint)
                .padding(4),
        );
    }

    let panel: Column<'static, Message> =
        column![brightness_row, contrast_row, actions].spacing(6).padding(6);

    container(panel).width(Length::Fill).into()
}

/// Formats a duration in MM:SS, or HH:MM:SS for hour-long media.
pub fn format_time(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
