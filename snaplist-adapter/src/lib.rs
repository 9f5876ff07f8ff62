//! Adapter utilities for the `snaplist` crate.
//!
//! The `snaplist` crate is UI-agnostic and only holds the snap state machine. This crate
//! provides the pieces a host toolkit needs around it:
//!
//! - [`ListSurface`], the services a host list must expose (first row geometry, smooth scroll,
//!   touch handling)
//! - [`SnappingList`], the widget wiring: post queue, touch interception, accessors
//! - Tween-based smooth scrolling helpers (adapter-driven)
//! - [`SimulatedList`], a headless list surface for tests and demos
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod list;
mod simulated;
mod surface;
mod tween;

#[cfg(test)]
mod tests;

pub use list::SnappingList;
pub use simulated::SimulatedList;
pub use surface::ListSurface;
pub use tween::{Easing, Tween};
