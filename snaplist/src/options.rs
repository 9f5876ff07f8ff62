/// Default duration of the corrective animation, in milliseconds.
pub const DEFAULT_SNAP_DURATION_MS: i32 = 300;

/// Configuration for [`crate::SnapController`].
///
/// Every field can be changed at any time; new values apply to the next event the controller
/// sees. Nothing is validated: a negative or zero duration is handed to the host's animation
/// primitive as is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnapOptions {
    /// Master switch for snap-on-idle.
    pub snapping_enabled: bool,
    /// When `false`, touch move events are swallowed. Down/up/cancel still reach the list.
    pub scrollable: bool,
    /// Duration of the corrective smooth scroll.
    pub snap_duration_ms: i32,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            snapping_enabled: true,
            scrollable: true,
            snap_duration_ms: DEFAULT_SNAP_DURATION_MS,
        }
    }
}

impl SnapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapping_enabled(mut self, snapping_enabled: bool) -> Self {
        self.snapping_enabled = snapping_enabled;
        self
    }

    pub fn with_scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    pub fn with_snap_duration_ms(mut self, snap_duration_ms: i32) -> Self {
        self.snap_duration_ms = snap_duration_ms;
        self
    }
}
