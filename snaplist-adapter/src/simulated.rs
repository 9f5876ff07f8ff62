use alloc::vec::Vec;

use snaplist::{RowGeometry, TouchEvent, VisibleRange};

use crate::{Easing, ListSurface, Tween};

/// A headless vertical list that implements [`ListSurface`].
///
/// Rows are stacked without gaps. The scroll offset is clamped to
/// `[0, total_height - viewport]`. Smooth scrolls run as a [`Tween`] advanced by `tick`; the
/// host clock is whatever `now_ms` was last passed to `tick`.
///
/// Useful for tests, demos and for driving the snap logic from a terminal UI.
#[derive(Clone, Debug)]
pub struct SimulatedList {
    rows: Vec<u32>,
    // ends[i] = bottom edge of row i
    ends: Vec<u64>,
    viewport: u32,
    width: u32,
    scroll_offset: u64,
    now_ms: u64,
    easing: Easing,
    tween: Option<Tween>,
    touches: Vec<TouchEvent>,
}

impl SimulatedList {
    pub fn new(rows: Vec<u32>, viewport: u32) -> Self {
        let mut ends = Vec::with_capacity(rows.len());
        let mut acc = 0u64;
        for &h in &rows {
            acc = acc.saturating_add(u64::from(h));
            ends.push(acc);
        }
        Self {
            rows,
            ends,
            viewport,
            width: 0,
            scroll_offset: 0,
            now_ms: 0,
            easing: Easing::Decelerate,
            tween: None,
            touches: Vec::new(),
        }
    }

    /// `count` rows of the same height.
    pub fn uniform(count: usize, row_height: u32, viewport: u32) -> Self {
        Self::new(alloc::vec![row_height; count], viewport)
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn viewport(&self) -> u32 {
        self.viewport
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn total_height(&self) -> u64 {
        self.ends.last().copied().unwrap_or(0)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_height()
            .saturating_sub(u64::from(self.viewport))
    }

    pub fn row_start(&self, index: usize) -> Option<u64> {
        let end = *self.ends.get(index)?;
        Some(end - u64::from(self.rows[index]))
    }

    /// Index of the row containing the top edge of the viewport.
    pub fn first_visible_index(&self) -> Option<usize> {
        if self.viewport == 0 {
            return None;
        }
        let i = self.ends.partition_point(|&end| end <= self.scroll_offset);
        (i < self.rows.len()).then_some(i)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Events that reached the list through `dispatch_touch`.
    pub fn touch_log(&self) -> &[TouchEvent] {
        &self.touches
    }

    /// Moves the list by `delta` pixels, as a finger drag would. Cancels any running tween.
    ///
    /// Returns the applied (clamped) offset.
    pub fn drag_by(&mut self, delta: i64) -> u64 {
        self.tween = None;
        self.scroll_offset = self.offset_plus(delta);
        self.scroll_offset
    }

    /// Jumps to `offset` (clamped). Cancels any running tween.
    pub fn set_scroll_offset(&mut self, offset: u64) -> u64 {
        self.tween = None;
        self.scroll_offset = offset.min(self.max_scroll_offset());
        self.scroll_offset
    }

    /// Advances the clock and any running tween.
    ///
    /// Returns the new offset while a tween was running, `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        self.now_ms = now_ms;
        let tween = self.tween?;

        self.scroll_offset = tween.sample(now_ms).min(self.max_scroll_offset());
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(self.scroll_offset)
    }

    fn offset_plus(&self, delta: i64) -> u64 {
        let max = self.max_scroll_offset();
        if delta >= 0 {
            self.scroll_offset
                .saturating_add(delta.unsigned_abs())
                .min(max)
        } else {
            self.scroll_offset
                .saturating_sub(delta.unsigned_abs())
                .min(max)
        }
    }
}

impl ListSurface for SimulatedList {
    fn first_visible_row(&self) -> Option<RowGeometry> {
        let index = self.first_visible_index()?;
        let height = self.rows[index];
        let end = self.ends[index];
        let start = end - u64::from(height);

        let view_start = self.scroll_offset;
        let view_end = view_start.saturating_add(u64::from(self.viewport));
        let visible = end
            .min(view_end)
            .saturating_sub(start.max(view_start));
        let visible_height = i32::try_from(visible).unwrap_or(i32::MAX);
        Some(RowGeometry::new(self.width, height, visible_height))
    }

    fn visible_range(&self) -> VisibleRange {
        let total_count = self.rows.len();
        let Some(first_visible) = self.first_visible_index() else {
            return VisibleRange {
                first_visible: 0,
                visible_count: 0,
                total_count,
            };
        };
        let view_end = self
            .scroll_offset
            .saturating_add(u64::from(self.viewport));
        // First row whose top edge is at or below the viewport bottom.
        let end_index = self.ends[first_visible..]
            .iter()
            .zip(&self.rows[first_visible..])
            .position(|(&end, &h)| end - u64::from(h) >= view_end)
            .map_or(total_count, |p| first_visible + p);
        VisibleRange {
            first_visible,
            visible_count: end_index - first_visible,
            total_count,
        }
    }

    fn smooth_scroll_by(&mut self, delta_px: i32, duration_ms: i32) {
        let to = self.offset_plus(i64::from(delta_px));
        atrace!(
            from = self.scroll_offset,
            to,
            duration_ms,
            "SimulatedList::smooth_scroll_by"
        );
        if to == self.scroll_offset {
            self.tween = None;
            return;
        }
        self.tween = Some(Tween::with_signed_duration(
            self.scroll_offset,
            to,
            self.now_ms,
            duration_ms,
            self.easing,
        ));
    }

    fn dispatch_touch(&mut self, event: TouchEvent) -> bool {
        self.touches.push(event);
        true
    }
}
