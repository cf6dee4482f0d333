use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use ball_game::interaction::input::{capture_frame_input, FrameInput, MouseTracker};
use ball_game::logic::ButtonState;

fn capture_app() -> (App, Entity) {
    let mut app = App::new();
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.insert_resource(ButtonInput::<MouseButton>::default());
    app.add_event::<MouseWheel>();
    app.init_resource::<FrameInput>();
    app.init_resource::<MouseTracker>();
    app.add_systems(Update, capture_frame_input);
    let window = app.world_mut().spawn((Window::default(), PrimaryWindow)).id();
    (app, window)
}

fn wheel(unit: MouseScrollUnit, x: f32, y: f32, window: Entity) -> MouseWheel {
    MouseWheel { unit, x, y, window }
}

#[test]
fn snapshots_follow_keys_buttons_and_cursor() {
    let (mut app, window) = capture_app();
    app.world_mut()
        .get_mut::<Window>(window)
        .unwrap()
        .set_cursor_position(Some(Vec2::new(200.0, 150.0)));
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyA);
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Back);
    app.update();

    let frame = app.world().resource::<FrameInput>();
    assert!(frame.keyboard.is_key_down(KeyCode::KeyA));
    assert!(frame.keyboard.is_key_up(KeyCode::Space));
    assert_eq!(frame.mouse.position(), Vec2::new(200.0, 150.0));
    assert_eq!(frame.mouse.left, ButtonState::Pressed);
    assert_eq!(frame.mouse.right, ButtonState::Released);
    assert_eq!(frame.mouse.x1, ButtonState::Pressed);
    assert_eq!(frame.mouse.x2, ButtonState::Released);
}

#[test]
fn cursor_outside_window_keeps_last_position() {
    let (mut app, window) = capture_app();
    app.world_mut()
        .get_mut::<Window>(window)
        .unwrap()
        .set_cursor_position(Some(Vec2::new(40.0, 60.0)));
    app.update();
    app.world_mut()
        .get_mut::<Window>(window)
        .unwrap()
        .set_cursor_position(None);
    app.update();

    let frame = app.world().resource::<FrameInput>();
    assert_eq!(frame.mouse.position(), Vec2::new(40.0, 60.0));
}

#[test]
fn scroll_values_accumulate_across_frames() {
    let (mut app, window) = capture_app();
    app.world_mut()
        .send_event(wheel(MouseScrollUnit::Line, 0.0, 1.0, window));
    app.world_mut()
        .send_event(wheel(MouseScrollUnit::Pixel, 30.0, 0.0, window));
    app.update();
    {
        let mouse = &app.world().resource::<FrameInput>().mouse;
        assert_eq!(mouse.scroll_wheel_value, 120);
        assert_eq!(mouse.horizontal_scroll_wheel_value, 30);
    }

    app.world_mut()
        .send_event(wheel(MouseScrollUnit::Line, 0.0, -2.0, window));
    app.update();
    let mouse = &app.world().resource::<FrameInput>().mouse;
    assert_eq!(mouse.scroll_wheel_value, -120);
    assert_eq!(mouse.horizontal_scroll_wheel_value, 30);
}

#[test]
fn released_keys_leave_the_snapshot() {
    let (mut app, _) = capture_app();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowLeft);
    app.update();
    assert!(app
        .world()
        .resource::<FrameInput>()
        .keyboard
        .is_key_down(KeyCode::ArrowLeft));

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(KeyCode::ArrowLeft);
    app.update();
    assert_eq!(
        app.world().resource::<FrameInput>().keyboard.pressed_keys().count(),
        0
    );
}
