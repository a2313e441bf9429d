//! End-to-end scroll scenarios
//!
//! Every test drives a [`Scrollable`] over a [`HeadlessHost`] with a fake
//! clock, the way a host application would: input in, frames pumped, side
//! effects read back from the host.

use glide_animation::{Easing, FrameScheduler, ManualScheduler};
use glide_core::{Axis, HostError, Modifiers, PointerEvent, Size, WheelEvent, WheelOutcome};
use glide_scroll::{
    BarVisibility, ContentSource, HeadlessHost, Part, ScrollConfig, ScrollError, ScrollHost,
    ScrollToOptions, Scrollable,
};

type Scroll = Scrollable<HeadlessHost, ManualScheduler>;

fn mount(viewport: Size, content: Size, config: ScrollConfig) -> Scroll {
    let host = HeadlessHost::new(viewport, content);
    Scrollable::new(host, ManualScheduler::new(), config, ContentSource::WrapChildren).unwrap()
}

/// 500px tall viewport over 1500px of content: extent 1000
fn tall(config: ScrollConfig) -> Scroll {
    mount(Size::new(300.0, 500.0), Size::new(300.0, 1500.0), config)
}

fn assert_rest_invariant(scroll: &Scroll) {
    if !scroll.is_running() {
        assert_eq!(scroll.current(), scroll.target());
        assert_eq!(scroll.clamp_value(), 0.0);
    }
}

#[test]
fn test_trackpad_gesture_settles_on_target() {
    let mut scroll = tall(ScrollConfig::default());
    assert_eq!(scroll.scrollable_extent(), 1000.0);

    scroll.on_wheel(&WheelEvent::trackpad(0.0, -50.0));
    assert_eq!(scroll.target(), 50.0);
    assert_eq!(scroll.axis_state().current_decay, 0.05);

    scroll.run_until_idle(1000);
    assert!((scroll.current() - 50.0).abs() <= 1e-5);
    assert_eq!(scroll.scroll_top(), 50.0);
    assert!(!scroll.is_running());
}

#[test]
fn test_wheel_notch_moves_by_scroll_distance() {
    let mut scroll = tall(ScrollConfig::default());

    scroll.on_wheel(&WheelEvent::notch(-1));
    assert_eq!(scroll.target(), 80.0);
    assert_eq!(scroll.axis_state().current_decay, 0.01);

    scroll.on_wheel(&WheelEvent::notch(-2));
    assert_eq!(scroll.target(), 240.0);
}

#[test]
fn test_fling_past_end_rubber_bands_back() {
    let mut scroll = tall(ScrollConfig::default());
    let resting_thumb = scroll.host().thumb(Axis::Vertical).unwrap().0;

    scroll.on_wheel(&WheelEvent::trackpad(0.0, -1100.0));
    assert_eq!(scroll.target(), 1100.0);
    assert_eq!(scroll.clamp(scroll.target(), 0.0), 1000.0);

    let mut saw_clamping = false;
    let mut smallest_thumb = resting_thumb;
    let mut frames = 0;
    while scroll.scheduler().has_pending_frames() {
        scroll.advance_frames(1);
        frames += 1;
        assert!(frames < 5000, "rubber band never settled");

        let offset = scroll.scroll_top();
        assert!((0.0..=1000.0).contains(&offset));
        if scroll.clamp_value() != 0.0 {
            assert!(scroll.current() > 1000.0);
        }
        if scroll.is_clamping() {
            saw_clamping = true;
            let transform = scroll.host().transform().unwrap();
            assert_eq!(transform.axis, Axis::Vertical);
            assert!(transform.offset <= 0.0);
            smallest_thumb = smallest_thumb.min(scroll.host().thumb(Axis::Vertical).unwrap().0);
        }
        assert_rest_invariant(&scroll);
    }

    assert!(saw_clamping);
    assert!(smallest_thumb < resting_thumb);
    assert_eq!(scroll.current(), 1000.0);
    assert_eq!(scroll.target(), 1000.0);
    assert_eq!(scroll.clamp_value(), 0.0);
    assert_eq!(scroll.host().transform(), None);
    assert_eq!(scroll.host().thumb(Axis::Vertical).unwrap().0, resting_thumb);
}

#[test]
fn test_overscroll_above_start_translates_down() {
    let mut scroll = tall(ScrollConfig::default());
    for _ in 0..5 {
        scroll.on_wheel(&WheelEvent::notch(2));
    }
    assert_eq!(scroll.target(), -500.0);

    let mut saw_positive = false;
    while scroll.scheduler().has_pending_frames() {
        scroll.advance_frames(1);
        assert_eq!(scroll.scroll_top(), 0.0);
        if let Some(transform) = scroll.host().transform() {
            assert!(transform.offset >= 0.0);
            saw_positive |= transform.offset > 0.0;
        }
    }
    assert!(saw_positive);
    assert_eq!(scroll.current(), 0.0);
}

#[test]
fn test_content_shrink_clamps_resting_position_and_hides_bar() {
    let mut scroll = mount(
        Size::new(300.0, 500.0),
        Size::new(300.0, 2000.0),
        ScrollConfig::default(),
    );
    assert_eq!(scroll.scrollable_extent(), 1500.0);

    scroll.on_wheel(&WheelEvent::trackpad(0.0, -1210.0));
    scroll.run_until_idle(2000);
    assert_eq!(scroll.current(), 1210.0);
    assert_eq!(scroll.bar_visibility(Axis::Vertical), BarVisibility::Visible);

    scroll.host_mut().set_content_size(Size::new(300.0, 500.0));
    scroll.on_content_resized();

    assert_eq!(scroll.scrollable_extent(), 0.0);
    assert_eq!(scroll.current(), 0.0);
    assert_eq!(scroll.target(), 0.0);
    assert_eq!(scroll.scroll_top(), 0.0);
    assert_eq!(scroll.bar_visibility(Axis::Vertical), BarVisibility::Hiding);
    assert!(scroll.host().has_class(Part::Bar(Axis::Vertical), "hide"));
    assert!(!scroll.host().has_class(Part::Bar(Axis::Vertical), "none"));

    scroll.advance(1000.0);
    assert_eq!(scroll.bar_visibility(Axis::Vertical), BarVisibility::Removed);
    assert!(scroll.host().has_class(Part::Bar(Axis::Vertical), "none"));
}

#[test]
fn test_content_shrink_mid_animation_springs_to_zero() {
    let mut scroll = mount(
        Size::new(300.0, 500.0),
        Size::new(300.0, 2000.0),
        ScrollConfig::default(),
    );
    scroll.on_wheel(&WheelEvent::trackpad(0.0, -1210.0));
    scroll.advance_frames(4);
    assert!(scroll.is_running());

    scroll.host_mut().set_content_size(Size::new(300.0, 500.0));
    scroll.on_content_resized();
    assert!(scroll.target() <= 500.0);

    scroll.run_until_idle(5000);
    assert_eq!(scroll.current(), 0.0);
    assert_eq!(scroll.target(), 0.0);
    assert_eq!(scroll.host().transform(), None);
    assert_ne!(scroll.bar_visibility(Axis::Vertical), BarVisibility::Visible);
}

#[test]
fn test_zero_delta_is_a_no_op() {
    let mut scroll = tall(ScrollConfig::default());
    scroll.on_wheel(&WheelEvent::default());

    assert_eq!(scroll.target(), 0.0);
    assert_eq!(scroll.current(), 0.0);
    assert!(!scroll.is_running());
    assert!(!scroll.scheduler().has_pending_frames());
}

#[test]
fn test_rest_invariant_over_mixed_input() {
    let mut scroll = tall(ScrollConfig::default());
    let inputs = [
        WheelEvent::notch(-3),
        WheelEvent::trackpad(0.0, -37.0),
        WheelEvent::notch(5),
        WheelEvent::trackpad(0.0, 913.0),
        WheelEvent::notch(-30),
        WheelEvent::trackpad(0.0, -7.5),
    ];

    for (i, event) in inputs.iter().enumerate() {
        scroll.on_wheel(event);
        scroll.advance_frames(3 + i * 7);
        assert_rest_invariant(&scroll);
        assert!((0.0..=1000.0).contains(&scroll.scroll_top()));
    }

    scroll.run_until_idle(5000);
    assert_rest_invariant(&scroll);
    assert_eq!(scroll.scroll_top(), scroll.current());
}

#[test]
fn test_scrollout_lets_edge_events_bubble() {
    let mut scroll = tall(ScrollConfig::default());

    // Already at the top, scrolling up: nothing to do here
    let up = scroll.on_wheel(&WheelEvent::notch(1));
    assert!(up.prevent_default);
    assert!(!up.stop_propagation);

    let down = scroll.on_wheel(&WheelEvent::notch(-1));
    assert_eq!(down, WheelOutcome::CONSUMED);

    let mut contained = tall(ScrollConfig {
        scrollout: false,
        ..Default::default()
    });
    assert_eq!(contained.on_wheel(&WheelEvent::notch(1)), WheelOutcome::CONSUMED);
}

#[test]
fn test_ctrl_wheel_and_disabled_override_pass_through() {
    let mut scroll = tall(ScrollConfig::default());
    let zoom = WheelEvent::notch(-1).with_modifiers(Modifiers::new(false, true, false, false));
    assert_eq!(scroll.on_wheel(&zoom), WheelOutcome::PASS_THROUGH);
    assert_eq!(scroll.target(), 0.0);

    let mut native = tall(ScrollConfig {
        override_scroll: false,
        ..Default::default()
    });
    assert_eq!(native.on_wheel(&WheelEvent::notch(-1)), WheelOutcome::PASS_THROUGH);
    assert!(!native.is_running());
}

#[test]
fn test_disabled_consumes_without_moving() {
    let mut scroll = mount(
        Size::new(300.0, 500.0),
        Size::new(900.0, 1500.0),
        ScrollConfig::default(),
    );
    scroll.set_disabled(true);

    let outcome = scroll.on_wheel(&WheelEvent::notch(-1));
    assert!(outcome.prevent_default);
    scroll.on_wheel(&WheelEvent::trackpad(-40.0, -25.0));

    assert_eq!(scroll.target(), 0.0);
    assert_eq!(scroll.scroll_offset(Axis::Horizontal), 0.0);
    assert!(!scroll.is_running());

    scroll.set_disabled(false);
    scroll.on_wheel(&WheelEvent::notch(-1));
    assert_eq!(scroll.target(), 80.0);
}

#[test]
fn test_instant_mode_jumps_by_raw_delta() {
    let mut scroll = tall(ScrollConfig::instant());

    scroll.on_wheel(&WheelEvent::notch(-1));
    assert_eq!(scroll.scroll_top(), 120.0);
    assert_eq!(scroll.current(), 120.0);
    assert!(!scroll.scheduler().has_pending_frames());

    scroll.on_wheel(&WheelEvent::notch(-20));
    assert_eq!(scroll.scroll_top(), 1000.0);

    scroll.on_wheel(&WheelEvent::notch(50));
    assert_eq!(scroll.scroll_top(), 0.0);
}

#[test]
fn test_trackpad_pans_cross_axis_natively() {
    let mut scroll = mount(
        Size::new(300.0, 500.0),
        Size::new(900.0, 1500.0),
        ScrollConfig::default(),
    );

    scroll.on_wheel(&WheelEvent::trackpad(-40.0, 0.0));
    assert_eq!(scroll.scroll_offset(Axis::Horizontal), 40.0);
    assert_eq!(scroll.target(), 0.0);
    assert!(!scroll.is_running());

    // Diagonal: both axes move, only the primary one animates
    scroll.on_wheel(&WheelEvent::trackpad(-1000.0, -30.0));
    assert_eq!(scroll.scroll_offset(Axis::Horizontal), 600.0);
    assert_eq!(scroll.target(), 30.0);
    assert!(scroll.is_running());
}

#[test]
fn test_horizontal_scroller_animates_x() {
    let mut scroll = mount(
        Size::new(300.0, 500.0),
        Size::new(1300.0, 500.0),
        ScrollConfig::horizontal(),
    );
    assert_eq!(scroll.scrollable_extent(), 1000.0);

    scroll.on_wheel(&WheelEvent::trackpad(-50.0, 0.0));
    assert_eq!(scroll.target(), 50.0);
    scroll.run_until_idle(1000);
    assert_eq!(scroll.scroll_offset(Axis::Horizontal), 50.0);
    assert_eq!(scroll.scroll_top(), 0.0);
}

#[test]
fn test_thumb_drag_maps_pointer_to_offset() {
    let mut scroll = mount(
        Size::new(300.0, 500.0),
        Size::new(300.0, 2000.0),
        ScrollConfig::default(),
    );
    assert_eq!(scroll.host().thumb(Axis::Vertical), Some((125.0, 0.0)));

    assert!(scroll.on_thumb_pointer_down(Axis::Vertical, PointerEvent::new(295.0, 50.0)));
    assert!(scroll.on_pointer_move(PointerEvent::new(295.0, 237.5)));
    // Dropped: a drag frame is already pending
    assert!(scroll.on_pointer_move(PointerEvent::new(295.0, 400.0)));
    assert_eq!(scroll.scroll_top(), 0.0);

    scroll.advance_frames(1);
    assert_eq!(scroll.scroll_top(), 750.0);
    assert_eq!(scroll.current(), 750.0);
    assert_eq!(scroll.target(), 750.0);
    assert_eq!(scroll.host().thumb(Axis::Vertical), Some((125.0, 187.5)));

    // Releasing drops the pending frame
    scroll.on_pointer_move(PointerEvent::new(295.0, 500.0));
    scroll.on_pointer_up();
    scroll.advance_frames(1);
    assert_eq!(scroll.scroll_top(), 750.0);
    assert!(!scroll.on_pointer_move(PointerEvent::new(295.0, 10.0)));
}

#[test]
fn test_thumb_drag_interrupts_animation() {
    let mut scroll = mount(
        Size::new(300.0, 500.0),
        Size::new(300.0, 2000.0),
        ScrollConfig::default(),
    );
    scroll.on_wheel(&WheelEvent::notch(-5));
    scroll.advance_frames(3);
    assert!(scroll.is_running());

    let thumb_top = scroll.host().metrics().unwrap().vertical_thumb.y;
    scroll.on_thumb_pointer_down(Axis::Vertical, PointerEvent::new(295.0, thumb_top + 10.0));
    scroll.on_pointer_move(PointerEvent::new(295.0, 2000.0));
    scroll.advance_frames(1);

    assert!(!scroll.is_running());
    assert_eq!(scroll.scroll_top(), 1500.0);
    assert_eq!(scroll.current(), 1500.0);
    assert!(!scroll.scheduler().has_pending_frames());
}

#[test]
fn test_scroll_to_tweens_and_resolves() {
    let mut scroll = tall(ScrollConfig::default());
    let done = scroll.scroll_to(600.0, ScrollToOptions::default());
    assert!(scroll.is_tweening());

    scroll.advance_frames(10);
    let midway = scroll.scroll_top();
    assert!(midway > 0.0 && midway < 600.0);

    scroll.run_until_idle(200);
    assert!(!scroll.is_tweening());
    assert_eq!(scroll.scroll_top(), 600.0);
    assert_eq!(scroll.current(), 600.0);
    assert!(pollster::block_on(done));
}

#[test]
fn test_new_scroll_to_supersedes_previous() {
    let mut scroll = tall(ScrollConfig::default());
    let first = scroll.scroll_to(900.0, ScrollToOptions::default());
    scroll.advance_frames(5);

    let second = scroll.scroll_to(
        100.0,
        ScrollToOptions {
            duration: 0.2,
            easing: Easing::Linear,
        },
    );
    scroll.run_until_idle(200);

    assert!(!pollster::block_on(first));
    assert!(pollster::block_on(second));
    assert_eq!(scroll.scroll_top(), 100.0);
}

#[test]
fn test_scroll_to_with_negative_duration_lands_immediately() {
    let mut scroll = tall(ScrollConfig::default());
    let mut done = scroll.scroll_to(
        400.0,
        ScrollToOptions {
            duration: -1.0,
            ..Default::default()
        },
    );
    scroll.advance_frames(1);

    assert_eq!(scroll.scroll_top(), 400.0);
    assert_eq!(done.try_result(), Some(true));
}

#[test]
fn test_to_bottom_waits_a_frame_then_glides() {
    let mut scroll = tall(ScrollConfig::default());
    let mut done = scroll.to_bottom();
    assert_eq!(done.try_result(), None);
    assert_eq!(scroll.target(), 0.0);

    scroll.advance_frames(1);
    assert_eq!(done.try_result(), Some(true));
    assert_eq!(scroll.target(), 1000.0);

    scroll.run_until_idle(5000);
    assert_eq!(scroll.scroll_top(), 1000.0);
}

#[test]
fn test_loop_tween_and_to_bottom_share_frames() {
    let mut scroll = tall(ScrollConfig::default());
    scroll.on_wheel(&WheelEvent::notch(-1));
    scroll.advance_frames(2);
    assert!(scroll.is_running());

    let mut bottom = scroll.to_bottom();
    let mut tween = scroll.scroll_to(600.0, ScrollToOptions::default());
    scroll.advance_frames(1);
    assert_eq!(bottom.try_result(), Some(true));
    assert_eq!(scroll.target(), 1000.0);
    assert!(scroll.is_tweening());

    scroll.advance_frames(200);
    assert!(!scroll.is_tweening());
    assert_eq!(tween.try_result(), Some(true));

    scroll.run_until_idle(5000);
    assert_eq!(scroll.scroll_top(), 1000.0);
    assert_rest_invariant(&scroll);
}

#[test]
fn test_to_bottom_in_instant_mode() {
    let mut scroll = tall(ScrollConfig::instant());
    let done = scroll.to_bottom();
    scroll.advance_frames(1);

    assert_eq!(scroll.scroll_top(), 1000.0);
    assert!(pollster::block_on(done));
}

#[test]
fn test_invalid_container_fails_construction() {
    let result = Scrollable::new(
        HeadlessHost::invalid(),
        ManualScheduler::new(),
        ScrollConfig::default(),
        ContentSource::WrapChildren,
    );
    assert!(matches!(result, Err(ScrollError::InvalidContainer(_))));
}

#[test]
fn test_initial_measurement_failure_is_reported() {
    let host = HeadlessHost::new(Size::new(300.0, 500.0), Size::new(300.0, 1500.0));
    host.fail_next_measurements(1);
    let result = Scrollable::new(
        host,
        ManualScheduler::new(),
        ScrollConfig::default(),
        ContentSource::Markup("<p>hello</p>".to_string()),
    );
    assert!(matches!(
        result,
        Err(ScrollError::Host(HostError::Measurement(_)))
    ));
}

#[test]
fn test_failed_remeasure_keeps_observing() {
    let mut scroll = tall(ScrollConfig::default());
    scroll.host().fail_next_measurements(1);
    scroll.host_mut().set_content_size(Size::new(300.0, 2500.0));
    scroll.on_content_resized();
    assert_eq!(scroll.scrollable_extent(), 1000.0);

    scroll.on_content_resized();
    assert_eq!(scroll.scrollable_extent(), 2000.0);
}

#[test]
fn test_children_observed_once_and_resizes_coalesce() {
    let host = HeadlessHost::new(Size::new(300.0, 500.0), Size::new(300.0, 1500.0))
        .with_children([1, 2]);
    let mut scroll = Scrollable::new(
        host,
        ManualScheduler::new(),
        ScrollConfig::default(),
        ContentSource::Existing,
    )
    .unwrap();
    assert_eq!(scroll.host().observed_children(), &[1, 2]);

    scroll.host_mut().push_child(3);
    scroll.on_children_changed();
    scroll.on_children_changed();
    assert_eq!(scroll.host().observed_children(), &[1, 2, 3]);

    scroll.host_mut().set_content_size(Size::new(300.0, 3000.0));
    scroll.on_child_resized(1);
    scroll.on_child_resized(3);
    assert_eq!(scroll.scheduler().pending_count(), 2); // remeasure + horizontal hide
    assert_eq!(scroll.scrollable_extent(), 1000.0);

    scroll.advance_frames(1);
    assert_eq!(scroll.scrollable_extent(), 2500.0);
}

#[test]
fn test_added_children_grow_the_extent() {
    let mut scroll = tall(ScrollConfig::default());
    assert_eq!(scroll.scrollable_extent(), 1000.0);

    scroll.host_mut().push_child(2);
    scroll.host_mut().set_content_size(Size::new(300.0, 2500.0));
    scroll.on_children_changed();
    scroll.advance_frames(1);

    assert_eq!(scroll.scrollable_extent(), 2000.0);
    scroll.on_wheel(&WheelEvent::trackpad(0.0, -1510.0));
    scroll.run_until_idle(5000);
    assert_eq!(scroll.scroll_top(), 1510.0);
}

#[test]
fn test_bar_insets_follow_content_box() {
    let host = HeadlessHost::new(Size::new(300.0, 500.0), Size::new(300.0, 1500.0))
        .with_container(Size::new(340.0, 600.0), (20.0, 40.0));
    let scroll = Scrollable::new(
        host,
        ManualScheduler::new(),
        ScrollConfig::default(),
        ContentSource::WrapChildren,
    )
    .unwrap();

    assert_eq!(scroll.host().bar_insets(Axis::Vertical), Some((40.0, 60.0)));
    assert_eq!(scroll.host().bar_insets(Axis::Horizontal), Some((20.0, 30.0)));
}

#[test]
fn test_scrolling_class_tracks_offset() {
    let mut scroll = tall(ScrollConfig::default());
    assert!(!scroll.host().has_class(Part::Content, "scrolling"));

    scroll.on_wheel(&WheelEvent::notch(-1));
    scroll.run_until_idle(2000);
    assert!(scroll.host().has_class(Part::Content, "scrolling"));

    scroll.on_wheel(&WheelEvent::notch(1));
    scroll.run_until_idle(2000);
    assert!(!scroll.host().has_class(Part::Content, "scrolling"));
}

#[test]
fn test_debug_trace_records_ticks() {
    let mut scroll = tall(ScrollConfig {
        debug: true,
        ..Default::default()
    });
    assert_eq!(scroll.debug_trace().capacity(), 100);

    scroll.on_wheel(&WheelEvent::notch(-1));
    let frames = scroll.run_until_idle(2000);

    let trace = scroll.debug_trace();
    // The deferred start frame records nothing
    assert_eq!(trace.len(), (frames - 1).min(100));
    let first = trace.samples().next().unwrap();
    assert!(frames - 1 > 100 || first.input_frame);
    assert_eq!(trace.samples().last().unwrap().delta, 0.0);
    assert!(trace.samples().skip(1).all(|sample| !sample.input_frame));
}

#[test]
fn test_destroy_cancels_everything() {
    let mut scroll = tall(ScrollConfig::default());
    scroll.on_wheel(&WheelEvent::notch(-3));
    let tween = scroll.scroll_to(500.0, ScrollToOptions::default());
    let bottom = scroll.to_bottom();
    scroll.advance_frames(2);

    scroll.destroy();
    assert!(scroll.is_destroyed());
    assert_eq!(scroll.scheduler().pending_count(), 0);
    assert!(scroll.host().is_detached());
    assert!(!scroll.is_running());
    assert!(!pollster::block_on(tween));
    assert!(pollster::block_on(bottom));

    assert_eq!(
        scroll.on_wheel(&WheelEvent::notch(-1)),
        WheelOutcome::PASS_THROUGH
    );
    assert!(!pollster::block_on(scroll.to_bottom()));
    scroll.destroy();
}

#[test]
fn test_destroy_drops_pending_to_bottom() {
    let mut scroll = tall(ScrollConfig::default());
    let bottom = scroll.to_bottom();
    scroll.destroy();
    assert!(!pollster::block_on(bottom));
}
