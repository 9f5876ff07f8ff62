use crate::*;

use snaplist::{RowGeometry, ScrollState, SnapOptions, TouchEvent, TouchPhase, VisibleRange};

const ROW: u32 = 48;
const VIEWPORT: u32 = 480;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i64
    }
}

fn list() -> SnappingList<SimulatedList> {
    SnappingList::new(SimulatedList::uniform(100, ROW, VIEWPORT).with_width(320))
}

/// A finger drag: the host reports dragging, moves, lays out, then reports idle.
fn drag(list: &mut SnappingList<SimulatedList>, delta: i64) {
    list.on_scroll_state_changed(ScrollState::TouchDrag);
    list.surface_mut().drag_by(delta);
    list.sync_visible_range();
    list.on_scroll_state_changed(ScrollState::Idle);
}

/// Runs posted work and animates until the list is at rest, the way a host would report it.
fn settle(list: &mut SnappingList<SimulatedList>, mut now_ms: u64) -> u64 {
    for _ in 0..4 {
        list.surface_mut().tick(now_ms);
        list.run_posted();
        if !list.surface().is_animating() {
            break;
        }
        list.on_scroll_state_changed(ScrollState::Fling);
        while list.surface().is_animating() {
            now_ms += 16;
            list.surface_mut().tick(now_ms);
            list.sync_visible_range();
        }
        list.on_scroll_state_changed(ScrollState::Idle);
    }
    assert!(!list.has_posted());
    now_ms
}

fn first_row(list: &SnappingList<SimulatedList>) -> RowGeometry {
    list.surface().first_visible_row().unwrap()
}

#[test]
fn forward_snap_when_less_than_half_visible() {
    let mut l = list();
    drag(&mut l, 130);
    assert!(l.has_posted());
    assert_eq!(l.surface().scroll_offset(), 130);

    // Row 2 spans 96..144; 14px of it are left on screen.
    assert_eq!(first_row(&l), RowGeometry::new(320, ROW, 14));
    settle(&mut l, 0);
    assert_eq!(l.surface().scroll_offset(), 144);
    assert!(first_row(&l).is_fully_visible());
}

#[test]
fn backward_snap_when_more_than_half_visible() {
    let mut l = list();
    drag(&mut l, 110);
    assert_eq!(l.run_posted(), 1);
    assert!(l.surface().is_animating());
    settle(&mut l, 0);
    assert_eq!(l.surface().scroll_offset(), 96);
}

#[test]
fn exact_half_snaps_backward() {
    let mut l = list();
    drag(&mut l, 120);
    assert_eq!(first_row(&l).visible_height, 24);
    settle(&mut l, 0);
    assert_eq!(l.surface().scroll_offset(), 96);
}

#[test]
fn upward_drag_snaps_too() {
    let mut l = list();
    drag(&mut l, 480);
    let now = settle(&mut l, 0);
    assert_eq!(l.surface().scroll_offset(), 480);

    drag(&mut l, -100);
    assert_eq!(l.surface().scroll_offset(), 380);
    assert_eq!(
        l.controller().pending_direction(),
        None,
        "consumed on idle"
    );
    settle(&mut l, now);
    // Row 7 spans 336..384 with 4px left: continue onto row 8.
    assert_eq!(l.surface().scroll_offset(), 384);
}

#[test]
fn drag_within_a_row_does_not_snap() {
    let mut l = list();
    drag(&mut l, 20);
    assert!(!l.has_posted());
    assert_eq!(l.run_posted(), 0);
    assert_eq!(l.surface().scroll_offset(), 20);
}

#[test]
fn disabled_snapping_leaves_list_where_it_stopped() {
    let mut l = SnappingList::with_options(
        SimulatedList::uniform(100, ROW, VIEWPORT),
        SnapOptions::new().with_snapping_enabled(false),
    );
    drag(&mut l, 130);
    drag(&mut l, 200);
    assert!(!l.has_posted());
    settle(&mut l, 0);
    assert_eq!(l.surface().scroll_offset(), 330);
}

#[test]
fn empty_list_skips_correction() {
    let mut l = SnappingList::new(SimulatedList::uniform(0, ROW, VIEWPORT));
    l.on_scroll(1, 0, 0);
    l.on_scroll_state_changed(ScrollState::Idle);
    assert!(l.has_posted());
    assert_eq!(l.run_posted(), 0);
    assert!(!l.has_posted());
    assert!(!l.surface().is_animating());
}

#[test]
fn new_drag_cancels_posted_snap() {
    let mut l = list();
    drag(&mut l, 130);
    assert!(l.has_posted());

    l.on_scroll_state_changed(ScrollState::TouchDrag);
    assert_eq!(l.run_posted(), 0);
    assert!(!l.surface().is_animating());
}

#[test]
fn snap_runs_over_configured_duration() {
    let mut l = list();
    l.set_snap_speed(1000);
    assert_eq!(l.snap_speed(), 1000);
    drag(&mut l, 130);
    l.run_posted();

    assert!(l.surface_mut().tick(500).is_some());
    assert!(l.surface().is_animating());
    let mid = l.surface().scroll_offset();
    assert!(mid > 130 && mid < 144, "mid={mid}");
    assert_eq!(l.surface_mut().tick(1000), Some(144));
    assert!(!l.surface().is_animating());
}

#[test]
fn non_positive_duration_jumps() {
    let mut l = list();
    l.set_snap_speed(-20);
    drag(&mut l, 110);
    l.run_posted();
    assert_eq!(l.surface_mut().tick(1), Some(96));
    assert!(!l.surface().is_animating());
}

#[test]
fn move_events_swallowed_when_not_scrollable() {
    let mut l = list();
    l.set_scrollable(false);
    assert!(!l.is_scrollable());

    assert!(l.dispatch_touch_event(TouchEvent::new(TouchPhase::Move, 5.0, 40.0)));
    assert!(l.surface().touch_log().is_empty());

    assert!(l.dispatch_touch_event(TouchEvent::new(TouchPhase::Down, 5.0, 40.0)));
    assert!(l.dispatch_touch_event(TouchEvent::new(TouchPhase::Up, 5.0, 40.0)));
    let phases: std::vec::Vec<_> = l.surface().touch_log().iter().map(|e| e.phase).collect();
    assert_eq!(phases, [TouchPhase::Down, TouchPhase::Up]);

    l.set_scrollable(true);
    l.dispatch_touch_event(TouchEvent::new(TouchPhase::Move, 5.0, 60.0));
    assert_eq!(l.surface().touch_log().len(), 3);
}

#[test]
fn random_drags_that_cross_rows_come_to_rest_aligned() {
    let mut rng = Lcg::new(42);
    let mut l = list();
    let mut now = 0u64;
    for _ in 0..300 {
        let before = l.surface().first_visible_index();
        drag(&mut l, rng.gen_range_i64(-700, 700));
        let crossed = l.surface().first_visible_index() != before;
        now = settle(&mut l, now);
        if crossed {
            let off = l.surface().scroll_offset();
            assert!(first_row(&l).is_fully_visible(), "offset={off}");
            assert_eq!(off % u64::from(ROW), 0);
        }
    }
}

#[test]
fn borrowed_surface_works() {
    let mut sim = SimulatedList::uniform(20, ROW, VIEWPORT);
    {
        let mut l = SnappingList::new(&mut sim);
        l.on_scroll_state_changed(ScrollState::TouchDrag);
        l.surface_mut().drag_by(70);
        l.sync_visible_range();
        l.on_scroll_state_changed(ScrollState::Idle);
        assert_eq!(l.run_posted(), 1);
    }
    assert_eq!(sim.tick(1_000), Some(48));
}

#[test]
fn simulated_list_geometry() {
    let mut sim = SimulatedList::new(std::vec![10, 20, 30, 40], 35);
    assert_eq!(sim.total_height(), 100);
    assert_eq!(sim.max_scroll_offset(), 65);
    assert_eq!(sim.row_start(2), Some(30));
    assert_eq!(sim.row_start(4), None);

    assert_eq!(sim.drag_by(15), 15);
    assert_eq!(sim.first_visible_index(), Some(1));
    assert_eq!(sim.first_visible_row(), Some(RowGeometry::new(0, 20, 15)));
    assert_eq!(
        sim.visible_range(),
        VisibleRange {
            first_visible: 1,
            visible_count: 2,
            total_count: 4,
        }
    );

    assert_eq!(sim.drag_by(1_000), 65);
    assert_eq!(sim.drag_by(-1_000), 0);
    assert_eq!(sim.first_visible_row(), Some(RowGeometry::new(0, 10, 10)));
}

#[test]
fn simulated_list_visible_range_counts_partial_rows() {
    let mut sim = SimulatedList::uniform(100, ROW, VIEWPORT);
    sim.set_scroll_offset(130);
    assert_eq!(
        sim.visible_range(),
        VisibleRange {
            first_visible: 2,
            visible_count: 11,
            total_count: 100,
        }
    );
}

#[test]
fn tween_samples_monotonically_and_ends_on_target() {
    let t = Tween::new(200, 100, 0, 100, Easing::SmoothStep);
    let mut last = 200u64;
    for now_ms in [0u64, 10, 20, 40, 80, 100, 120] {
        let v = t.sample(now_ms);
        assert!(v <= last);
        last = v;
    }
    assert!(t.is_done(100));
    assert_eq!(t.sample(100), 100);
}

#[test]
fn tween_with_signed_duration_clamps_to_one_ms() {
    let t = Tween::with_signed_duration(0, 50, 10, -300, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert!(t.is_done(11));
    assert_eq!(t.sample(11), 50);
}

#[test]
fn tween_retarget_starts_from_current_sample() {
    let mut t = Tween::new(0, 100, 0, 100, Easing::Linear);
    t.retarget(50, 20, 100);
    assert_eq!(t.from, 50);
    assert_eq!(t.to, 20);
    assert_eq!(t.start_ms, 50);
}

#[test]
fn easing_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::Decelerate,
    ] {
        assert!(easing.sample(0.0).abs() < 1e-6, "{easing:?}");
        assert!((easing.sample(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
    }
}
