use snaplist::{ScrollState, TouchEvent, TouchPhase};
use snaplist_adapter::{ListSurface, SimulatedList, SnappingList};

const ROW_HEIGHT: u32 = 48;
const VIEWPORT: u32 = 480;

fn main() {
    // Example: a screen showing 100 rows, snapping with a slow (1s) correction.
    let labels: Vec<String> = (0..100).map(|i| format!("Element_{i}")).collect();
    let surface = SimulatedList::uniform(labels.len(), ROW_HEIGHT, VIEWPORT).with_width(360);

    let mut list = SnappingList::new(surface);
    list.set_snap_speed(1000);

    let mut now_ms = 0u64;

    // A drag that stops with a row cut in half by the top edge.
    list.dispatch_touch_event(TouchEvent::new(TouchPhase::Down, 180.0, 400.0));
    list.on_scroll_state_changed(ScrollState::TouchDrag);
    for _ in 0..10 {
        list.dispatch_touch_event(TouchEvent::new(TouchPhase::Move, 180.0, 387.0));
        list.surface_mut().drag_by(13);
        list.sync_visible_range();
    }
    list.dispatch_touch_event(TouchEvent::new(TouchPhase::Up, 180.0, 270.0));
    list.on_scroll_state_changed(ScrollState::Idle);
    print_top(&list, &labels, "released");

    // Host finished layout: run posted work, then animate at 60fps.
    list.run_posted();
    list.on_scroll_state_changed(ScrollState::Fling);
    while list.surface().is_animating() {
        now_ms += 16;
        list.surface_mut().tick(now_ms);
        list.sync_visible_range();
        if now_ms % 160 == 0 {
            println!("t={now_ms}ms off={}", list.surface().scroll_offset());
        }
    }
    list.on_scroll_state_changed(ScrollState::Idle);
    list.run_posted();
    print_top(&list, &labels, "snapped");

    // With scrolling disabled, move events never reach the list; taps still do.
    list.set_scrollable(false);
    let before = list.surface().touch_log().len();
    list.dispatch_touch_event(TouchEvent::new(TouchPhase::Down, 180.0, 100.0));
    list.dispatch_touch_event(TouchEvent::new(TouchPhase::Move, 180.0, 50.0));
    list.dispatch_touch_event(TouchEvent::new(TouchPhase::Up, 180.0, 50.0));
    println!(
        "scrollable=false: {} of 3 events forwarded",
        list.surface().touch_log().len() - before
    );
}

fn print_top(list: &SnappingList<SimulatedList>, labels: &[String], when: &str) {
    let range = list.surface().visible_range();
    let row = list.surface().first_visible_row();
    println!(
        "{when}: off={} top={} visible_rows={} first_row={row:?}",
        list.surface().scroll_offset(),
        labels[range.first_visible],
        range.visible_count,
    );
}
