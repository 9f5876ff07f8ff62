use snaplist::{RowGeometry, ScrollState, SnapController};

fn main() {
    // Example: drive the controller by hand, the way a host list would.
    let mut c = SnapController::default();

    c.on_scroll_state_changed(ScrollState::TouchDrag);
    for first in [0, 1, 2, 3] {
        c.on_scroll(first, 10, 100);
    }
    let snap = c
        .on_scroll_state_changed(ScrollState::Idle)
        .expect("moved across rows");
    println!("scheduled: {snap:?}");

    // After layout, the host reads the first row: 48px tall, 19px still on screen.
    let row = RowGeometry::new(360, 48, 19);
    match c.resolve(snap, Some(row)) {
        Ok(correction) => println!(
            "smooth_scroll_by({}, {})",
            correction.delta_px, correction.duration_ms
        ),
        Err(skip) => println!("skipped: {skip}"),
    }
}
