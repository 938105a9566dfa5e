use std::fmt::Write as _;

use insta::assert_snapshot;
use smithay::utils::Point;

use super::*;
use crate::layout::tests::{dropped_serials, rect, test_view, TestClock, TestWorkspace};
use crate::layout::types::{DragMotionResult, SwipeScrollResult};
use crate::layout::workspace::{DesktopId, DragPayload, WindowId, WindowPositionFlags};

fn format_view(view: &WorkspacesView<TestWorkspace>) -> String {
    let mut buf = String::new();
    for (idx, y) in view.workspace_offsets().into_iter().enumerate() {
        let visible = if view.is_workspace_visible(idx) {
            "visible"
        } else {
            "hidden"
        };
        writeln!(buf, "{idx}: y={y} {visible}").unwrap();
    }
    buf
}

fn payload() -> DragPayload {
    DragPayload::Window(WindowId(7))
}

#[test]
fn resting_layout_around_active() {
    let clock = TestClock::new();
    let mut view = test_view(4, 1, &clock, Options::default());
    view.set_spacing(10.);
    view.activate(false);

    assert_snapshot!(format_view(&view), @r"
    0: y=-810 hidden
    1: y=0 visible
    2: y=810 hidden
    3: y=1620 hidden
    ");
    assert_eq!(view.motion(), Motion::Idle);
}

#[test]
fn ratio_spacing_adds_to_step() {
    let clock = TestClock::new();
    let mut view = test_view(3, 0, &clock, Options::default());
    view.set_spacing(4.);
    view.set_geometry(rect(0., 20., 900., 700.), 16.);
    view.activate(false);

    assert_eq!(view.workspace_step(), 720.);
    assert_eq!(view.workspace_offsets(), vec![0., 720., 1440.]);
}

#[test]
fn set_geometry_twice_is_noop() {
    let clock = TestClock::new();
    let mut view = test_view(2, 0, &clock, Options::default());
    let area = rect(10., 10., 500., 400.);

    assert!(view.set_geometry(area, 0.));
    assert!(!view.set_geometry(area, 0.));

    for ws in view.workspaces() {
        // Once from test_view(), once from the first call above.
        assert_eq!(ws.geometry_updates, 2);
        assert_eq!(ws.geometry, Some(area));
    }
}

#[test]
fn animated_activation_shows_all_until_done() {
    let mut clock = TestClock::new();
    let mut view = test_view(3, 0, &clock, Options::default());

    view.active_workspace_changed(2);
    assert_eq!(view.motion(), Motion::Animating);
    assert_eq!(view.visible_workspaces(), vec![0, 1, 2]);
    assert_eq!(view.scroll_adjustment().target_value(), 2.);
    assert!(view.are_animations_ongoing());

    clock.advance(100);
    view.advance_animations();
    assert_eq!(view.motion(), Motion::Animating);

    clock.advance(200);
    view.advance_animations();
    assert_eq!(view.motion(), Motion::Idle);
    assert_eq!(view.visible_workspaces(), vec![2]);
    assert_eq!(view.workspace_offsets(), vec![-1600., -800., 0.]);
    assert_eq!(view.scroll_adjustment().value(), 2.);
    assert!(!view.are_animations_ongoing());

    // The tween of the adjustment is not a user scroll.
    assert!(view.take_requests().is_empty());
}

#[test]
fn new_tween_replaces_old_one() {
    let mut clock = TestClock::new();
    let mut view = test_view(3, 0, &clock, Options::default());

    view.active_workspace_changed(2);
    clock.advance(100);
    view.advance_animations();

    view.active_workspace_changed(1);
    clock.advance(249);
    view.advance_animations();
    assert_eq!(view.motion(), Motion::Animating);

    clock.advance(1);
    view.advance_animations();
    assert_eq!(view.motion(), Motion::Idle);
    assert_eq!(view.workspace_offsets(), vec![-800., 0., 800.]);
}

#[test]
fn single_workspace_scroll_keeps_position() {
    let clock = TestClock::new();
    let mut view = test_view(1, 0, &clock, Options::default());
    assert_eq!(view.scroll_adjustment().upper(), 1.);

    view.start_swipe_scroll();
    view.set_scroll_value(0.6);

    assert_eq!(view.scroll_adjustment().value(), 0.);
    assert_eq!(view.workspace_offsets(), vec![0.]);
    assert!(view.take_requests().is_empty());
}

#[test]
fn empty_view_survives_everything() {
    let mut clock = TestClock::new();
    let mut view = test_view(0, 0, &clock, Options::default());

    view.activate(true);
    view.start_swipe_scroll();
    view.set_scroll_value(1.);
    view.end_swipe_scroll(SwipeScrollResult::Click, Some(Point::from((1., 1.))));
    view.drag_begin();
    view.drag_motion(&payload(), false);
    view.drag_end();
    clock.advance(300);
    view.advance_animations();

    assert!(view.active_workspace().is_none());
    assert_eq!(view.motion(), Motion::Idle);
}

#[test]
fn swipe_scroll_follows_value() {
    let clock = TestClock::new();
    let mut view = test_view(4, 0, &clock, Options::default());

    view.start_swipe_scroll();
    assert_eq!(view.motion(), Motion::Scrolling);

    view.set_scroll_value(1.5);
    assert_snapshot!(format_view(&view), @r"
    0: y=-1200 hidden
    1: y=-400 visible
    2: y=400 visible
    3: y=1200 hidden
    ");

    assert_eq!(
        view.take_requests(),
        vec![OverviewRequest::ActivateWorkspace(2)]
    );
}

#[test]
fn repeated_scroll_requests_are_coalesced() {
    let clock = TestClock::new();
    let mut view = test_view(4, 0, &clock, Options::default());

    view.start_swipe_scroll();
    view.set_scroll_value(0.8);
    view.set_scroll_value(1.2);
    view.set_scroll_value(1.4);
    view.set_scroll_value(2.1);

    assert_eq!(
        view.take_requests(),
        vec![
            OverviewRequest::ActivateWorkspace(1),
            OverviewRequest::ActivateWorkspace(2),
        ]
    );
}

#[test]
fn swipe_end_waits_for_activation() {
    let mut clock = TestClock::new();
    let mut view = test_view(3, 0, &clock, Options::default());

    view.start_swipe_scroll();
    view.set_scroll_value(1.);
    view.end_swipe_scroll(SwipeScrollResult::Swipe, None);
    assert_eq!(view.motion(), Motion::Idle);
    assert_eq!(view.workspace_offsets(), vec![-800., 0., 800.]);

    // The window manager confirms.
    view.active_workspace_changed(1);
    clock.advance(250);
    view.advance_animations();

    assert_eq!(view.active_workspace_idx(), 1);
    assert_eq!(view.visible_workspaces(), vec![1]);
    assert_eq!(view.workspace_offsets(), vec![-800., 0., 800.]);
}

#[test]
fn swipe_end_snaps_back_without_activation() {
    let mut clock = TestClock::new();
    let mut view = test_view(3, 1, &clock, Options::default());

    view.start_swipe_scroll();
    view.set_scroll_value(1.3);
    view.end_swipe_scroll(SwipeScrollResult::Swipe, None);
    assert!(view.take_requests().is_empty());
    assert_eq!(view.motion(), Motion::Animating);

    clock.advance(250);
    view.advance_animations();
    assert_eq!(view.workspace_offsets(), vec![-800., 0., 800.]);
    assert_eq!(view.scroll_adjustment().value(), 1.);
}

#[test]
fn click_on_empty_workspace_hides_overview() {
    let clock = TestClock::new();
    let mut view = test_view(2, 0, &clock, Options::default());

    view.start_swipe_scroll();
    view.end_swipe_scroll(SwipeScrollResult::Click, Some(Point::from((500., 400.))));
    assert_eq!(view.take_requests(), vec![OverviewRequest::HideOverview]);

    // Outside of the view.
    view.start_swipe_scroll();
    view.end_swipe_scroll(SwipeScrollResult::Click, Some(Point::from((1500., 400.))));
    assert!(view.take_requests().is_empty());

    // Workspace with windows.
    view.workspace_mut(0).unwrap().empty = false;
    view.start_swipe_scroll();
    view.end_swipe_scroll(SwipeScrollResult::Click, Some(Point::from((500., 400.))));
    assert!(view.take_requests().is_empty());
}

#[test]
fn swipe_start_stops_slides() {
    let mut clock = TestClock::new();
    let mut view = test_view(3, 0, &clock, Options::default());

    view.active_workspace_changed(1);
    clock.advance(125);
    let offsets = view.workspace_offsets();

    view.start_swipe_scroll();
    clock.advance(125);
    assert_eq!(view.workspace_offsets(), offsets);
    assert_eq!(view.motion(), Motion::Scrolling);
}

#[test]
fn drag_shows_neighbors() {
    let clock = TestClock::new();
    let mut view = test_view(5, 2, &clock, Options::default());

    view.drag_begin();
    assert!(view.is_in_drag());
    assert_eq!(view.visible_workspaces(), vec![1, 2, 3]);

    view.drag_end();
    assert_eq!(view.visible_workspaces(), vec![2]);
}

#[test]
fn drag_reserves_slot_once() {
    let clock = TestClock::new();
    let mut view = test_view(3, 0, &clock, Options::default());
    view.set_extra_workspaces(vec![TestWorkspace::new(None, 1)]);

    view.drag_begin();
    for _ in 0..3 {
        assert_eq!(view.drag_motion(&payload(), false), DragMotionResult::Continue);
    }

    for ws in view.workspaces().chain(view.extra_workspaces()) {
        assert_eq!(ws.reserve_calls, 1);
        assert_eq!(ws.reserved, Some(payload()));
    }

    view.drag_end();
    for ws in view.workspaces().chain(view.extra_workspaces()) {
        assert_eq!(ws.reserved, None);
    }
}

#[test]
fn drag_motion_ignored_while_overview_animates() {
    let clock = TestClock::new();
    let mut view = test_view(2, 0, &clock, Options::default());

    view.drag_begin();
    view.drag_motion(&payload(), true);
    assert!(view.workspaces().all(|ws| ws.reserve_calls == 0));

    view.drag_motion(&payload(), false);
    assert!(view.workspaces().all(|ws| ws.reserve_calls == 1));
}

#[test]
fn drag_without_motion_leaves_nothing_reserved() {
    let clock = TestClock::new();
    let mut view = test_view(3, 1, &clock, Options::default());

    view.drag_begin();
    view.drag_end();

    assert!(!view.is_in_drag());
    assert!(view.workspaces().all(|ws| ws.reserved.is_none()));
    assert_eq!(view.visible_workspaces(), vec![1]);
}

#[test]
fn drag_ignored_while_scrolling() {
    let clock = TestClock::new();
    let mut view = test_view(3, 1, &clock, Options::default());

    view.start_swipe_scroll();
    view.drag_begin();
    assert!(!view.is_in_drag());
}

#[test]
fn growing_appends_without_moving_others() {
    let mut clock = TestClock::new();
    let mut view = test_view(2, 1, &clock, Options::default());
    let serials: Vec<_> = view.workspaces().map(|ws| ws.serial).collect();

    view.push_workspace(TestWorkspace::new(Some(DesktopId(2)), 0));
    view.update_workspace_count(2, 3);

    assert_eq!(view.len(), 3);
    assert_eq!(view.workspace(2).unwrap().geometry, Some(view.area()));
    assert_eq!(
        view.workspaces().take(2).map(|ws| ws.serial).collect::<Vec<_>>(),
        serials
    );
    assert_eq!(view.workspace_offsets(), vec![-800., 0., 800.]);
    assert_eq!(view.scroll_adjustment().target_upper(), 3.);

    clock.advance(250);
    view.advance_animations();
    assert_eq!(view.scroll_adjustment().upper(), 3.);
    assert_eq!(view.visible_workspaces(), vec![1]);
}

#[test]
fn removing_clamps_active() {
    let mut clock = TestClock::new();
    let mut view = test_view(3, 2, &clock, Options::default());

    let removed = view.remove_workspaces(1..3);
    assert_eq!(removed.len(), 2);
    drop(removed);
    view.update_workspace_count(3, 1);

    assert_eq!(view.active_workspace_idx(), 0);
    clock.advance(250);
    view.advance_animations();
    assert_eq!(view.workspace_offsets(), vec![0.]);
    assert_eq!(view.scroll_adjustment().upper(), 1.);
    assert_eq!(view.scroll_adjustment().value(), 0.);
}

#[test]
fn secondary_view_only_mirrors() {
    let mut clock = TestClock::new();
    let workspaces = (0..3)
        .map(|idx| TestWorkspace::new(Some(DesktopId(idx)), 1))
        .collect();
    let mut view = WorkspacesView::new(
        1,
        ViewRole::Secondary,
        workspaces,
        0,
        clock.clock.clone(),
        Rc::new(Options::default()),
    );
    view.set_geometry(rect(1000., 0., 800., 600.), 0.);

    view.active_workspace_changed(2);
    assert!(!view.scroll_adjustment().is_animating_value());
    assert_eq!(view.scroll_adjustment().value(), 0.);

    view.mirror_scroll_value(1.5);
    assert_eq!(view.scroll_adjustment().value(), 1.5);
    assert!(view.take_requests().is_empty());

    clock.advance(250);
    view.advance_animations();
    assert_eq!(view.workspace_offsets(), vec![-1200., -600., 0.]);
}

#[test]
fn zoom_to_and_from_overview() {
    let clock = TestClock::new();
    let mut view = test_view(2, 0, &clock, Options::default());
    view.set_extra_workspaces(vec![TestWorkspace::new(None, 1)]);
    view.set_clip_rect(rect(0., 0., 900., 700.));

    view.zoom_to_overview();
    assert!(view.workspaces().chain(view.extra_workspaces()).all(|ws| ws.in_overview));
    assert_eq!(view.applied_clip(), None);

    view.overview_shown();
    assert_eq!(view.applied_clip(), Some(rect(0., 0., 900., 700.)));

    view.zoom_from_overview();
    assert_eq!(view.applied_clip(), None);
    assert!(view.workspaces().chain(view.extra_workspaces()).all(|ws| !ws.in_overview));
}

#[test]
fn window_positions_refresh_animates() {
    let clock = TestClock::new();
    let mut view = test_view(2, 0, &clock, Options::default());

    view.update_window_positions();
    for ws in view.workspaces() {
        assert_eq!(ws.positioned, vec![WindowPositionFlags::ANIMATE]);
    }
}

#[test]
fn opacity_hides_at_zero() {
    let clock = TestClock::new();
    let mut view = test_view(1, 0, &clock, Options::default());

    view.set_opacity(0.);
    assert!(view.is_hidden());
    view.set_opacity(0.5);
    assert!(!view.is_hidden());
}

#[test]
fn dropping_view_in_drag_drops_workspaces() {
    let clock = TestClock::new();
    let mut view = test_view(2, 0, &clock, Options::default());
    let serials: Vec<_> = view.workspaces().map(|ws| ws.serial).collect();
    view.drag_begin();
    view.drag_motion(&payload(), false);

    drop(view);
    let dropped = dropped_serials();
    assert!(serials.iter().all(|serial| dropped.contains(serial)));
}
