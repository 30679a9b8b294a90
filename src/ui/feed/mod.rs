// SPDX-License-Identifier: MPL-2.0
//! Feed UI: the carousel component and its widget layers.

pub mod chrome;
pub mod component;
pub mod controls;

pub use component::{Effect, Message, State};
