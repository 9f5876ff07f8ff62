//! A headless snap-to-row controller for scrolling lists.
//!
//! When a list comes to rest, the first visible row is usually cut by the viewport edge. This
//! crate decides how far to smooth-scroll so that a full row is shown again: forward onto the
//! next row when less than half of the cut row is left, back onto the cut row otherwise.
//!
//! For host wiring (post queue, touch interception, tweens, a simulated list), see the
//! `snaplist-adapter` crate.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the index of the first visible row on every layout pass
//! - scroll state changes (idle, dragging, flinging)
//! - the height and visible height of the first visible row, after layout
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod options;
mod snap;
mod types;


pub use controller::SnapController;
pub use options::{DEFAULT_SNAP_DURATION_MS, SnapOptions};
pub use snap::snap_delta;
pub use types::{
    ListEvent, PendingSnap, RowGeometry, ScrollDirection, ScrollState, SnapCorrection, SnapSkip,
    TouchEvent, TouchPhase, TouchRouting, VisibleRange,
};
