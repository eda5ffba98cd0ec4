//! Host-side tests for the joystick position classifier.

use as5013::Position;

#[test]
fn centered_stick_reports_center() {
    assert_eq!(Position::from_axes(0, 0), Position::Center);
}

#[test]
fn cardinal_directions() {
    assert_eq!(Position::from_axes(0, 70), Position::Top);
    assert_eq!(Position::from_axes(-70, 0), Position::Right);
    assert_eq!(Position::from_axes(70, 0), Position::Left);
    assert_eq!(Position::from_axes(0, -70), Position::Bottom);
}

#[test]
fn diagonal_directions() {
    assert_eq!(Position::from_axes(-40, 30), Position::TopRight);
    assert_eq!(Position::from_axes(-40, -30), Position::BottomRight);
    assert_eq!(Position::from_axes(40, -30), Position::TopLeft);
    assert_eq!(Position::from_axes(40, 30), Position::BottomLeft);
}

#[test]
fn top_band_upper_bound_is_exclusive() {
    // The top zone takes ox in [-20, 20); the bottom zone takes [-20, 20].
    assert_eq!(Position::from_axes(19, 60), Position::Top);
    assert_eq!(Position::from_axes(20, 60), Position::Center);
    assert_eq!(Position::from_axes(-20, 60), Position::Top);

    assert_eq!(Position::from_axes(20, -60), Position::Bottom);
    assert_eq!(Position::from_axes(-20, -60), Position::Bottom);
    assert_eq!(Position::from_axes(21, -60), Position::TopLeft);
}

#[test]
fn diagonal_zones_override_axis_zones() {
    // ox in (20, 60) or (-60, -20) always lands in a diagonal zone, even
    // when the y reading would otherwise qualify for a cardinal one.
    assert_eq!(Position::from_axes(25, 70), Position::BottomLeft);
    assert_eq!(Position::from_axes(-25, 70), Position::TopRight);
    assert_eq!(Position::from_axes(25, -70), Position::TopLeft);
    assert_eq!(Position::from_axes(-25, -70), Position::BottomRight);
}

#[test]
fn left_right_threshold_boundaries() {
    assert_eq!(Position::from_axes(-60, 0), Position::Right);
    assert_eq!(Position::from_axes(-59, 0), Position::BottomRight);
    assert_eq!(Position::from_axes(-21, 0), Position::BottomRight);
    assert_eq!(Position::from_axes(-20, 0), Position::Center);

    assert_eq!(Position::from_axes(60, 0), Position::Left);
    assert_eq!(Position::from_axes(59, 0), Position::BottomLeft);
    assert_eq!(Position::from_axes(21, 0), Position::BottomLeft);
    assert_eq!(Position::from_axes(20, 0), Position::Center);
}

#[test]
fn deflection_past_sixty_ignores_the_y_axis() {
    assert_eq!(Position::from_axes(-61, 70), Position::Right);
    assert_eq!(Position::from_axes(-61, -70), Position::Right);
    assert_eq!(Position::from_axes(61, 70), Position::Left);
    assert_eq!(Position::from_axes(61, -70), Position::Left);
}

#[test]
fn extreme_readings_classify() {
    assert_eq!(Position::from_axes(i8::MIN, i8::MIN), Position::Right);
    assert_eq!(Position::from_axes(i8::MAX, i8::MAX), Position::Left);
    assert_eq!(Position::from_axes(0, i8::MIN), Position::Bottom);
    assert_eq!(Position::from_axes(0, i8::MAX), Position::Top);
}

#[test]
fn classification_is_deterministic_over_the_full_range() {
    for ox in i8::MIN..=i8::MAX {
        for oy in i8::MIN..=i8::MAX {
            let first = Position::from_axes(ox, oy);
            let second = Position::from_axes(ox, oy);
            assert_eq!(first, second, "unstable result for ({ox}, {oy})");
            assert!(u8::from(first) <= 8);
        }
    }
}

#[test]
fn position_codes_match_the_device_numbering() {
    assert_eq!(u8::from(Position::Center), 0);
    assert_eq!(u8::from(Position::Top), 1);
    assert_eq!(u8::from(Position::TopRight), 2);
    assert_eq!(u8::from(Position::Right), 3);
    assert_eq!(u8::from(Position::BottomRight), 4);
    assert_eq!(u8::from(Position::Bottom), 5);
    assert_eq!(u8::from(Position::BottomLeft), 6);
    assert_eq!(u8::from(Position::Left), 7);
    assert_eq!(u8::from(Position::TopLeft), 8);
}
