// SPDX-License-Identifier: MPL-2.0
//! Adapters implementing the player's ports.

mod sim_surface;

pub use sim_surface::SimulatedSurface;
