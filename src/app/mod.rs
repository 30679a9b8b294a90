// SPDX-License-Identifier: MPL-2.0
//! Application shell: window lifecycle, config persistence, and the glue
//! between the Iced runtime and the feed component.
//!
//! Fullscreen transitions are confirmed rather than optimistic: the shell
//! asks the window system for the mode, reads the mode back, and only then
//! tells the component. Chrome that depends on fullscreen can never get
//! ahead of the actual window state.

mod subscription;

use crate::config;
use crate::feed::{load_feed, sample_feed, MediaRecord};
use crate::player::Intent;
use crate::ui::feed;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::Path;

/// Launch parameters collected by `main.rs`.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional path to a TOML feed file; the built-in sample feed is used
    /// when absent.
    pub feed_path: Option<String>,
    /// Overrides the platform config location (`--config`).
    pub config_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Feed(feed::Message),
    MainWindow(Option<window::Id>),
    FullscreenConfirmed(window::Mode),
}

pub struct App {
    feed: feed::State,
    window_id: Option<window::Id>,
    config_path: Option<std::path::PathBuf>,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot; the RefCell lets it consume the
    // flags exactly once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(720.0, 640.0),
        min_size: Some(iced::Size::new(560.0, 560.0)),
        ..window::Settings::default()
    }
}

fn load_records(feed_path: Option<&str>) -> Vec<MediaRecord> {
    match feed_path {
        Some(path) => match load_feed(Path::new(path)) {
            Ok(records) => records,
            Err(error) => {
                eprintln!("Failed to load feed {}: {}", path, error);
                Vec::new()
            }
        },
        None => sample_feed(),
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let loaded = match &flags.config_path {
            Some(path) if path.exists() => config::load_from_path(path),
            Some(_) => Ok(config::Config::default()),
            None => config::load(),
        };
        let config = match loaded {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Failed to load config: {}", error);
                config::Config::default()
            }
        };
        let records = load_records(flags.feed_path.as_deref());

        let app = App {
            feed: feed::State::new(records, &config),
            window_id: None,
            config_path: flags.config_path,
        };
        (app, window::latest().map(Message::MainWindow))
    }

    fn title(&self) -> String {
        match self.feed.carousel().active_record() {
            Some(record) => format!("{} - Iced Reel", record.handle),
            None => "Iced Reel".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Feed(message) => {
                let effect = self.feed.update(message);
                self.perform_effect(effect)
            }
            Message::MainWindow(id) => {
                self.window_id = id;
                Task::none()
            }
            Message::FullscreenConfirmed(mode) => {
                self.feed
                    .set_fullscreen(mode == window::Mode::Fullscreen);
                Task::none()
            }
        }
    }

    fn perform_effect(&mut self, effect: feed::Effect) -> Task<Message> {
        match effect {
            feed::Effect::None => Task::none(),
            feed::Effect::RequestFullscreen(desired) => self.request_fullscreen(desired),
            feed::Effect::PersistPreferences => {
                let preferences = self.feed.preferences();
                let result = match &self.config_path {
                    Some(path) => config::save_to_path(&preferences, path),
                    None => config::save(&preferences),
                };
                if let Err(error) = result {
                    eprintln!("Failed to save config: {}", error);
                }
                Task::none()
            }
            feed::Effect::Intent(intent) => {
                report_intent(&intent);
                Task::none()
            }
        }
    }

    /// Asks the window system for the desired mode, then reads the actual
    /// mode back before telling the component anything.
    fn request_fullscreen(&mut self, desired: bool) -> Task<Message> {
        let Some(window_id) = self.window_id else {
            return Task::none();
        };
        let mode = if desired {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::set_mode(window_id, mode)
            .chain(window::mode(window_id).map(Message::FullscreenConfirmed))
    }

    fn view(&self) -> Element<'_, Message> {
        self.feed.view().map(Message::Feed)
    }
}

/// Standing in for the embedding feed's callbacks.
fn report_intent(intent: &Intent) {
    match intent {
        Intent::IndexChanged(index) => eprintln!("feed: now showing video {}", index),
        Intent::Liked(id) => eprintln!("feed: liked video {}", id),
        Intent::Commented(id) => eprintln!("feed: comments requested for video {}", id),
        Intent::Shared(id) => eprintln!("feed: shared video {}", id),
        Intent::Followed(handle) => eprintln!("feed: followed {}", handle),
    }
}
