use alloc::collections::VecDeque;

use snaplist::{
    PendingSnap, ScrollState, SnapController, SnapCorrection, SnapOptions, SnapSkip, TouchEvent,
    TouchRouting, VisibleRange,
};

use crate::ListSurface;

/// A list widget that snaps to the closest full row when scrolling stops.
///
/// This wraps a [`SnapController`] together with the host's [`ListSurface`] and a queue standing
/// in for the host's "post to UI thread" primitive. Adapters drive it by calling:
/// - `on_scroll` (or `sync_visible_range`) on every layout pass
/// - `on_scroll_state_changed` when the host reports idle/drag/fling
/// - `dispatch_touch_event` for every raw touch event
/// - `run_posted` once the current layout pass has finished
///
/// Snaps are resolved in `run_posted` rather than inline so the first row's geometry is read
/// after layout settles.
#[derive(Debug)]
pub struct SnappingList<S> {
    controller: SnapController,
    surface: S,
    posted: VecDeque<PendingSnap>,
}

impl<S: ListSurface> SnappingList<S> {
    pub fn new(surface: S) -> Self {
        Self::with_options(surface, SnapOptions::default())
    }

    pub fn with_options(surface: S, options: SnapOptions) -> Self {
        Self {
            controller: SnapController::new(options),
            surface,
            posted: VecDeque::new(),
        }
    }

    pub fn controller(&self) -> &SnapController {
        &self.controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn options(&self) -> &SnapOptions {
        self.controller.options()
    }

    pub fn set_options(&mut self, options: SnapOptions) {
        self.controller.set_options(options);
    }

    pub fn set_snapping_enabled(&mut self, snapping_enabled: bool) {
        self.controller.set_snapping_enabled(snapping_enabled);
    }

    pub fn is_snapping_enabled(&self) -> bool {
        self.controller.is_snapping_enabled()
    }

    pub fn set_scrollable(&mut self, scrollable: bool) {
        self.controller.set_scrollable(scrollable);
    }

    pub fn is_scrollable(&self) -> bool {
        self.controller.is_scrollable()
    }

    pub fn set_snap_speed(&mut self, snap_duration_ms: i32) {
        self.controller.set_snap_speed(snap_duration_ms);
    }

    pub fn snap_speed(&self) -> i32 {
        self.controller.snap_speed()
    }

    pub fn on_scroll(&mut self, first_visible: usize, visible_count: usize, total_count: usize) {
        self.controller
            .on_scroll(first_visible, visible_count, total_count);
    }

    /// Reads the visible window from the surface and feeds it to the controller.
    pub fn sync_visible_range(&mut self) -> VisibleRange {
        let range = self.surface.visible_range();
        self.controller.on_visible_range_changed(range);
        range
    }

    /// Forwards a scroll-state change. A snap returned by the controller is posted, not run.
    pub fn on_scroll_state_changed(&mut self, state: ScrollState) {
        if let Some(snap) = self.controller.on_scroll_state_changed(state) {
            atrace!(ticket = snap.ticket, "posting snap");
            self.posted.push_back(snap);
        }
    }

    /// Touch interception. Returns whether the event counts as handled.
    ///
    /// Move events are consumed without reaching the list while scrolling is disabled.
    pub fn dispatch_touch_event(&mut self, event: TouchEvent) -> bool {
        match self.controller.route_touch(&event) {
            TouchRouting::Forward => self.surface.dispatch_touch(event),
            TouchRouting::Consume => true,
        }
    }

    pub fn has_posted(&self) -> bool {
        !self.posted.is_empty()
    }

    /// Runs posted snaps against the current layout.
    ///
    /// Returns the number of smooth-scroll commands issued to the surface.
    pub fn run_posted(&mut self) -> usize {
        let mut issued = 0usize;
        while let Some(snap) = self.posted.pop_front() {
            match self.resolve(snap) {
                Ok(correction) => {
                    adebug!(
                        direction = ?correction.direction,
                        delta_px = correction.delta_px,
                        duration_ms = correction.duration_ms,
                        "smooth_scroll_by"
                    );
                    self.surface
                        .smooth_scroll_by(correction.delta_px, correction.duration_ms);
                    issued += 1;
                }
                Err(_skip) => {
                    adebug!(reason = %_skip, "snap skipped");
                }
            }
        }
        issued
    }

    fn resolve(&self, snap: PendingSnap) -> Result<SnapCorrection, SnapSkip> {
        self.controller
            .resolve(snap, self.surface.first_visible_row())
    }
}
