//! Tick/draw workflows through `ToolView`.

use crate::helpers::{Recorder, ScriptedDevice, pt};
use canvas_tool::ToolView;

#[test]
fn test_press_drag_release_fires_once_in_world_space() {
    let recorder = Recorder::new();
    let mut device = ScriptedDevice::new()
        .idle_at(100, 100)
        .left_at(100, 100)
        .left_at(120, 100)
        .idle_at(150, 110);

    let mut view = ToolView::new();
    view.initialize(&mut device);
    view.transform_mut().set_scroll_offset(pt(10.0, 20.0));
    view.assign_mode("place", recorder.callback("place"));

    assert!(!view.update(&mut device), "press must not fire");
    assert!(!view.update(&mut device), "drag must not fire");
    assert!(view.update(&mut device), "release fires");

    assert_eq!(recorder.hits(), vec![("place", pt(140.0, 90.0))]);
    assert!(!view.modes().is_armed());

    // Idle ticks afterwards change nothing
    assert!(!view.update(&mut device));
    assert_eq!(recorder.count(), 1);
}

#[test]
fn test_button_held_at_startup_does_not_fire() {
    let recorder = Recorder::new();
    let mut device = ScriptedDevice::new().left_at(0, 0).left_at(0, 0);

    let mut view = ToolView::new();
    view.initialize(&mut device);
    view.assign_mode("place", recorder.callback("place"));

    assert!(!view.update(&mut device));
    assert_eq!(recorder.count(), 0);
    assert!(view.modes().is_armed());
}

#[test]
fn test_release_without_mode_is_harmless() {
    let mut device = ScriptedDevice::new()
        .idle_at(0, 0)
        .left_at(0, 0)
        .idle_at(0, 0);

    let mut view = ToolView::new();
    view.initialize(&mut device);
    assert!(!view.update(&mut device));
    assert!(!view.update(&mut device));
    assert!(view.mouse().left_released());
}

#[test]
fn test_reassigned_mode_only_fires_latest() {
    let recorder = Recorder::new();
    let mut device = ScriptedDevice::new()
        .idle_at(30, 40)
        .left_at(30, 40)
        .idle_at(30, 40);

    let mut view = ToolView::new();
    view.initialize(&mut device);

    view.assign_mode("place start", recorder.callback("start"));
    assert_eq!(view.modes().current_label(), Some("place start"));
    view.assign_mode("place end", recorder.callback("end"));
    assert_eq!(view.modes().current_label(), Some("place end"));

    view.update(&mut device);
    view.update(&mut device);
    assert_eq!(recorder.hits(), vec![("end", pt(30.0, 40.0))]);
}

#[test]
fn test_status_line_follows_mode() {
    let mut device = ScriptedDevice::new()
        .idle_at(100, 100)
        .left_at(100, 100)
        .idle_at(150, 110);

    let mut view = ToolView::new();
    view.initialize(&mut device);
    insta::assert_snapshot!(view.status_line(), @"(100,100)");

    view.assign_mode("place start", |_, _| {});
    let mut status = String::new();
    view.draw(&mut status);
    insta::assert_snapshot!(status, @"(100,100), place start");

    view.update(&mut device);
    view.update(&mut device);
    view.draw(&mut status);
    insta::assert_snapshot!(status, @"(150,110)");
}

#[test]
fn test_chained_mode_survives_fire() {
    let recorder = Recorder::new();
    let end = recorder.callback("end");
    let mut device = ScriptedDevice::new()
        .idle_at(0, 0)
        .left_at(10, 10)
        .idle_at(10, 10)
        .left_at(20, 20)
        .idle_at(20, 20);

    let mut view = ToolView::new();
    view.initialize(&mut device);
    view.assign_mode("place start", move |_, modes| {
        modes.assign_mode("place end", end);
    });

    view.update(&mut device);
    assert!(view.update(&mut device));
    assert_eq!(view.modes().current_label(), Some("place end"));
    assert_eq!(view.status_line(), "(10,10), place end");

    view.update(&mut device);
    assert!(view.update(&mut device));
    assert_eq!(recorder.hits(), vec![("end", pt(20.0, 20.0))]);
    assert!(!view.modes().is_armed());
}

#[test]
fn test_scroll_change_between_ticks_is_seen() {
    let recorder = Recorder::new();
    let mut device = ScriptedDevice::new()
        .idle_at(50, 50)
        .left_at(50, 50)
        .idle_at(50, 50);

    let mut view = ToolView::new();
    view.initialize(&mut device);
    view.assign_mode("place", recorder.callback("place"));

    view.update(&mut device);
    view.transform_mut().scroll_by(pt(-25.0, 5.0));
    view.update(&mut device);

    assert_eq!(recorder.hits(), vec![("place", pt(75.0, 45.0))]);
}
