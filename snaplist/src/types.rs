use core::fmt;

/// Scroll state reported by the host list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollState {
    /// All motion (touch and inertial) has ceased.
    #[default]
    Idle,
    /// The user is dragging the list.
    TouchDrag,
    /// The list keeps moving after the finger was lifted.
    Fling,
}

/// Direction of travel through the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Toward higher indexes (content moves up, the user scrolls down).
    Forward,
    /// Toward lower indexes (the user scrolls up).
    Backward,
}

/// Phase of a raw touch input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub x: f32,
    pub y: f32,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }

    pub fn is_move(&self) -> bool {
        self.phase == TouchPhase::Move
    }
}

/// What to do with a touch event after interception.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchRouting {
    /// Hand the event to the underlying list.
    Forward,
    /// Report the event as handled without forwarding it.
    Consume,
}

/// The visible window reported on every layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub first_visible: usize,
    pub visible_count: usize,
    pub total_count: usize,
}

/// Geometry of the first visible row, read after layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowGeometry {
    pub width: u32,
    /// Rendered height of the row.
    pub height: u32,
    /// Height of the part of the row still inside the viewport.
    ///
    /// Signed because some hosts report an inverted clip rect; only the magnitude is used.
    pub visible_height: i32,
}

impl RowGeometry {
    pub fn new(width: u32, height: u32, visible_height: i32) -> Self {
        Self {
            width,
            height,
            visible_height,
        }
    }

    /// The magnitude of the visible (clipped) height.
    pub fn clipped(&self) -> u32 {
        self.visible_height.unsigned_abs()
    }

    pub fn is_fully_visible(&self) -> bool {
        self.clipped() >= self.height
    }
}

/// Host events consumed by [`crate::SnapController::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListEvent {
    VisibleRangeChanged(VisibleRange),
    ScrollStateChanged(ScrollState),
}

/// A correction scheduled on return to idle, to be run after the current layout pass.
///
/// The ticket ties it to the scroll-state generation it was issued in; once the list leaves
/// that generation the snap is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingSnap {
    pub direction: ScrollDirection,
    pub ticket: u64,
}

/// A smooth-scroll command for the host list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapCorrection {
    pub direction: ScrollDirection,
    /// Pixels to scroll; negative values scroll back toward the start.
    pub delta_px: i32,
    pub duration_ms: i32,
}

impl SnapCorrection {
    pub fn is_noop(&self) -> bool {
        self.delta_px == 0
    }
}

/// Why a posted correction did not produce a scroll command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapSkip {
    /// The list has no rows on screen.
    NoFirstRow,
    /// A scroll-state change happened after the snap was scheduled.
    Superseded,
}

impl fmt::Display for SnapSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFirstRow => f.write_str("no first visible row"),
            Self::Superseded => f.write_str("superseded by a later scroll state change"),
        }
    }
}
