use snaplist::{RowGeometry, TouchEvent, VisibleRange};

/// Services a host list provides to [`crate::SnappingList`].
///
/// Implement this over your toolkit's list widget. All calls happen on the UI thread.
pub trait ListSurface {
    /// The first row currently on screen, with its full height and the height of the part that
    /// is still inside the viewport. `None` when the list shows no rows.
    fn first_visible_row(&self) -> Option<RowGeometry>;

    /// The current visible window. Used by hosts that poll after layout instead of pushing
    /// scroll callbacks.
    fn visible_range(&self) -> VisibleRange;

    /// Animates the scroll offset by `delta_px` over `duration_ms`.
    ///
    /// The duration is not validated; zero or negative values mean whatever the host's
    /// animation primitive makes of them.
    fn smooth_scroll_by(&mut self, delta_px: i32, duration_ms: i32);

    /// The list's own touch handling. Returns whether the event was handled.
    fn dispatch_touch(&mut self, event: TouchEvent) -> bool;
}

impl<S: ListSurface + ?Sized> ListSurface for &mut S {
    fn first_visible_row(&self) -> Option<RowGeometry> {
        (**self).first_visible_row()
    }

    fn visible_range(&self) -> VisibleRange {
        (**self).visible_range()
    }

    fn smooth_scroll_by(&mut self, delta_px: i32, duration_ms: i32) {
        (**self).smooth_scroll_by(delta_px, duration_ms);
    }

    fn dispatch_touch(&mut self, event: TouchEvent) -> bool {
        (**self).dispatch_touch(event)
    }
}
