use core::cmp;

use crate::snap::snap_delta;
use crate::{
    ListEvent, PendingSnap, RowGeometry, ScrollDirection, ScrollState, SnapCorrection,
    SnapOptions, SnapSkip, TouchEvent, TouchRouting, VisibleRange,
};

/// The snap-on-idle state machine.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter feeds it visible-range and scroll-state events from the host list.
/// - When the list comes to rest after moving across a row boundary, it hands back a
///   [`PendingSnap`]. The adapter posts it to run after the current layout pass, then calls
///   [`SnapController::resolve`] with the first visible row's final geometry and issues the
///   returned smooth scroll.
///
/// All methods are expected to be called from the UI thread. For a ready-made wiring against a
/// host list, see the `snaplist-adapter` crate.
#[derive(Clone, Debug, Default)]
pub struct SnapController {
    options: SnapOptions,
    last_first_visible: usize,
    pending: Option<ScrollDirection>,
    scroll_state: ScrollState,
    generation: u64,
}

impl SnapController {
    pub fn new(options: SnapOptions) -> Self {
        sdebug!(
            snapping_enabled = options.snapping_enabled,
            scrollable = options.scrollable,
            snap_duration_ms = options.snap_duration_ms,
            "SnapController::new"
        );
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &SnapOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SnapOptions) {
        strace!(
            snapping_enabled = options.snapping_enabled,
            scrollable = options.scrollable,
            snap_duration_ms = options.snap_duration_ms,
            "SnapController::set_options"
        );
        self.options = options;
    }

    /// Copies the current options, applies `f`, then stores the result.
    pub fn update_options(&mut self, f: impl FnOnce(&mut SnapOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    /// Enables or disables snapping. Takes effect on the next event.
    pub fn set_snapping_enabled(&mut self, snapping_enabled: bool) {
        self.options.snapping_enabled = snapping_enabled;
    }

    pub fn is_snapping_enabled(&self) -> bool {
        self.options.snapping_enabled
    }

    /// Enables or disables free dragging. Taps still go through when disabled.
    pub fn set_scrollable(&mut self, scrollable: bool) {
        self.options.scrollable = scrollable;
    }

    pub fn is_scrollable(&self) -> bool {
        self.options.scrollable
    }

    /// Sets the duration of the corrective animation in milliseconds.
    pub fn set_snap_speed(&mut self, snap_duration_ms: i32) {
        self.options.snap_duration_ms = snap_duration_ms;
    }

    pub fn snap_speed(&self) -> i32 {
        self.options.snap_duration_ms
    }

    pub fn last_first_visible(&self) -> usize {
        self.last_first_visible
    }

    /// The direction recorded since the last idle, if any.
    pub fn pending_direction(&self) -> Option<ScrollDirection> {
        self.pending
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    /// Incremented on every scroll-state transition; posted snaps from older generations are
    /// stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Single entry point for host events.
    ///
    /// Returns a snap to post when the event is the list coming to rest with a direction
    /// pending. The pending direction is consumed in the same step.
    pub fn handle(&mut self, event: ListEvent) -> Option<PendingSnap> {
        match event {
            ListEvent::VisibleRangeChanged(range) => {
                self.record_first_visible(range.first_visible);
                None
            }
            ListEvent::ScrollStateChanged(state) => self.transition(state),
        }
    }

    /// Host callback fired on every layout pass while scrolling.
    pub fn on_scroll(&mut self, first_visible: usize, visible_count: usize, total_count: usize) {
        self.on_visible_range_changed(VisibleRange {
            first_visible,
            visible_count,
            total_count,
        });
    }

    pub fn on_visible_range_changed(&mut self, range: VisibleRange) {
        self.handle(ListEvent::VisibleRangeChanged(range));
    }

    pub fn on_scroll_state_changed(&mut self, state: ScrollState) -> Option<PendingSnap> {
        self.handle(ListEvent::ScrollStateChanged(state))
    }

    /// Returns `true` while no scroll-state change happened since `snap` was issued.
    pub fn is_current(&self, snap: &PendingSnap) -> bool {
        snap.ticket == self.generation
    }

    /// Turns a posted snap into a scroll command, using the geometry of the first visible row
    /// as it is after layout.
    pub fn resolve(
        &self,
        snap: PendingSnap,
        first_row: Option<RowGeometry>,
    ) -> Result<SnapCorrection, SnapSkip> {
        if !self.is_current(&snap) {
            sdebug!(
                ticket = snap.ticket,
                generation = self.generation,
                "resolve: stale snap"
            );
            return Err(SnapSkip::Superseded);
        }
        let Some(row) = first_row else {
            sdebug!("resolve: no first visible row");
            return Err(SnapSkip::NoFirstRow);
        };

        let delta_px = snap_delta(row);
        strace!(
            height = row.height,
            visible_height = row.visible_height,
            delta_px,
            "resolve"
        );
        Ok(SnapCorrection {
            direction: snap.direction,
            delta_px,
            duration_ms: self.options.snap_duration_ms,
        })
    }

    /// Decides whether a raw touch event reaches the underlying list.
    pub fn route_touch(&self, event: &TouchEvent) -> TouchRouting {
        if self.options.scrollable || !event.is_move() {
            return TouchRouting::Forward;
        }
        strace!("route_touch: move swallowed");
        TouchRouting::Consume
    }

    fn record_first_visible(&mut self, first_visible: usize) {
        if !self.options.snapping_enabled {
            return;
        }
        let direction = match first_visible.cmp(&self.last_first_visible) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => None,
        };
        if let Some(direction) = direction {
            if self.pending != Some(direction) {
                strace!(
                    ?direction,
                    from = self.last_first_visible,
                    to = first_visible,
                    "direction changed"
                );
            }
            self.pending = Some(direction);
        }
        self.last_first_visible = first_visible;
    }

    fn transition(&mut self, state: ScrollState) -> Option<PendingSnap> {
        if self.scroll_state != state {
            self.scroll_state = state;
            self.generation = self.generation.wrapping_add(1);
        }
        if !self.options.snapping_enabled || state != ScrollState::Idle {
            return None;
        }

        let direction = self.pending.take()?;
        sdebug!(?direction, ticket = self.generation, "snap scheduled");
        Some(PendingSnap {
            direction,
            ticket: self.generation,
        })
    }
}
