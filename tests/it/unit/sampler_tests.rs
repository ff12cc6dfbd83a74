//! Unit tests for the mouse sampler.

use crate::helpers::ScriptedDevice;
use canvas_tool::input::{Button, ButtonState, DeviceSample, MouseSampler};

#[test]
fn test_no_edge_on_first_tick_with_button_held() {
    // Button already down at startup, still down on the first tick
    let mut device = ScriptedDevice::new().left_at(5, 5).left_at(5, 5);
    let mut sampler = MouseSampler::new();
    sampler.initialize(&mut device);
    sampler.update(&mut device);

    for button in Button::ALL {
        assert!(!sampler.released(button));
    }
    assert!(sampler.left_held());
}

#[test]
fn test_release_fires_once_after_long_hold() {
    let mut device = ScriptedDevice::new().idle_at(0, 0);
    for _ in 0..5 {
        device = device.left_at(0, 0);
    }
    device = device.idle_at(0, 0).idle_at(0, 0);

    let mut sampler = MouseSampler::new();
    sampler.initialize(&mut device);

    let mut edges = Vec::new();
    for _ in 0..7 {
        sampler.update(&mut device);
        edges.push(sampler.left_released());
    }
    assert_eq!(edges, vec![false, false, false, false, false, true, false]);
}

#[test]
fn test_previous_tracks_prior_current() {
    let middle = ButtonState::NONE.with(Button::Middle);
    let mut device = ScriptedDevice::new()
        .idle_at(0, 0)
        .push(DeviceSample::at(0, 0).with_buttons(middle))
        .idle_at(0, 0);

    let mut sampler = MouseSampler::new();
    sampler.initialize(&mut device);

    let mut last = sampler.buttons();
    while device.remaining() > 0 {
        sampler.update(&mut device);
        assert_eq!(sampler.previous_buttons(), last);
        last = sampler.buttons();
    }
    assert!(sampler.middle_released());
}

#[test]
fn test_position_and_motion_replaced_each_tick() {
    let mut device = ScriptedDevice::new()
        .idle_at(1, 1)
        .push(DeviceSample::at(4, 6).with_motion(3, 5))
        .push(DeviceSample::at(4, 6));

    let mut sampler = MouseSampler::new();
    sampler.initialize(&mut device);
    assert_eq!(sampler.position(), (1, 1));

    sampler.update(&mut device);
    assert_eq!(sampler.position(), (4, 6));
    assert_eq!(sampler.motion(), (3, 5));

    sampler.update(&mut device);
    assert_eq!(sampler.motion(), (0, 0));
}
