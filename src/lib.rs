// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a short-form video feed player built with the Iced GUI
//! framework.
//!
//! It renders one video at a time from an ordered feed, with tap/swipe
//! gesture arbitration, fullscreen social chrome, and session display
//! settings. The player core in [`player`] is toolkit-agnostic; the
//! [`ui`] and [`app`] layers bind it to Iced.

#![doc(html_root_url = "https://docs.rs/iced_reel/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod feed;
pub mod infrastructure;
pub mod player;
pub mod ui;

#[cfg(test)]
mod test_utils;
