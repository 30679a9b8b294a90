// SPDX-License-Identifier: MPL-2.0
//! Fullscreen social chrome.
//!
//! Header with author identity and follow state, the expandable caption,
//! the audio label, and the engagement column. Only rendered in
//! fullscreen; windowed mode shows the bare frame and transport.

use iced::widget::{button, column, container, row, text, Column, Row, Space};
use iced::{Element, Length};

use crate::feed::MediaRecord;
use crate::player::{DisplaySettings, SubtitleTrack};

/// Caption length above which the collapsed view truncates.
const CAPTION_PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleCaption,
    Like,
    Comment,
    Share,
    Follow,
}

/// Snapshot of the state the chrome renders from.
#[derive(Debug, Clone)]
pub struct ChromeContext<'a> {
    pub record: &'a MediaRecord,
    pub caption_expanded: bool,
    pub following: bool,
    pub settings: &'a DisplaySettings,
}

/// Header row: author identity and the follow toggle.
pub fn header(ctx: &ChromeContext<'_>) -> Element<'static, Message> {
    let identity: Column<'static, Message> = column![
        text(ctx.record.display_name.clone()).size(16),
        text(ctx.record.handle.clone()).size(13),
    ]
    .spacing(2);

    let follow = button(text(if ctx.following { "Following" } else { "Follow" }))
        .on_press(Message::Follow)
        .padding(4);

    container(
        row![identity, Space::new().width(Length::Fill), follow]
            .spacing(8)
            .padding(8)
            .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .into()
}

/// Caption block with expand/collapse, plus the audio label and the active
/// subtitle line when subtitles are on.
pub fn caption(ctx: &ChromeContext<'_>) -> Element<'static, Message> {
    let full = ctx.record.caption.as_str();
    let needs_toggle = full.chars().count() > CAPTION_PREVIEW_CHARS;

    let shown = if ctx.caption_expanded || !needs_toggle {
        full.to_string()
    } else {
        let preview: String = full.chars().take(CAPTION_PREVIEW_CHARS).collect();
        format!("{}…", preview.trim_end())
    };

    let mut block: Column<'static, Message> = column![text(shown).size(14)].spacing(4);

    if needs_toggle {
        let toggle_label = if ctx.caption_expanded {
            "See less"
        } else {
            "See more"
        };
        block = block.push(
            button(text(toggle_label).size(13))
                .on_press(Message::ToggleCaption)
                .padding(2),
        );
    }

    block = block.push(text(format!("♪ {}", ctx.record.audio_label)).size(13));

    if ctx.settings.subtitles_on && ctx.settings.subtitle_track != SubtitleTrack::Off {
        block = block.push(
            text(format!(
                "[{}] subtitles",
                ctx.settings.subtitle_track.label()
            ))
            .size(13),
        );
    }

    container(block).width(Length::Fill).padding(8).into()
}

/// Engagement column: like, comment, share with formatted counts, and the
/// impression count underneath.
pub fn engagement(ctx: &ChromeContext<'_>) -> Element<'static, Message> {
    let record = ctx.record;

    let actions: Column<'static, Message> = column![
        engagement_button("Like", record.like_count, Message::Like),
        engagement_button("Comment", record.comment_count, Message::Comment),
        engagement_button("Share", record.share_count, Message::Share),
        text(format!("{} views", format_count(record.impression_count))).size(12),
    ]
    .spacing(8)
    .align_x(iced::Alignment::Center);

    container(actions).padding(8).into()
}

fn engagement_button(
    label: &'static str,
    count: u64,
    message: Message,
) -> Element<'static, Message> {
    let content: Row<'static, Message> = row![
        text(label).size(13),
        text(format_count(count)).size(13),
    ]
    .spacing(4);
    button(content).on_press(message).padding(4).into()
}

/// Compact count formatting: 999 stays as-is, then 1.2K, 3.4M, 1.1B.
pub fn format_count(count: u64) -> String {
    const STEPS: [(u64, &str); 3] = [
        (1_000_000_000, "B"),
        (1_000_000, "M"),
        (1_000, "K"),
    ];

    for (threshold, suffix) in STEPS {
        if count >= threshold {
            let scaled = count as f64 / threshold as f64;
            return if scaled >= 10.0 {
                format!("{:.0}{}", scaled.floor(), suffix)
            } else {
                // One decimal, truncated rather than rounded
                format!("{:.1}{}", (scaled * 10.0).floor() / 10.0, suffix)
            };
        }
    }
    count.to_string()
}
