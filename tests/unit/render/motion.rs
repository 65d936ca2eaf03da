use super::*;

#[test]
fn every_effect_rests_at_time_zero() {
    for effect in [
        MotionEffect::None,
        MotionEffect::Pulse,
        MotionEffect::Spin,
        MotionEffect::Glitch,
        MotionEffect::Rain,
    ] {
        for i in 0..8 {
            assert_eq!(
                motion_delta(effect, 0.0, i, Canvas::default()),
                MotionDelta::IDENTITY
            );
        }
    }
}

#[test]
fn pulse_oscillates_within_amplitude() {
    let quarter = motion_delta(MotionEffect::Pulse, PULSE_PERIOD_MS / 4.0, 0, Canvas::default());
    assert!((quarter.scale - 1.1).abs() < 1e-9);
    for t in 1..200 {
        let d = motion_delta(MotionEffect::Pulse, f64::from(t) * 7.0, 0, Canvas::default());
        assert!(d.scale >= 0.9 - 1e-9 && d.scale <= 1.1 + 1e-9);
    }
}

#[test]
fn spin_is_linear_in_time() {
    let d = motion_delta(MotionEffect::Spin, 500.0, 3, Canvas::default());
    assert!((d.rotation - 90.0).abs() < 1e-9);
}

#[test]
fn glitch_is_deterministic_sparse_and_bounded() {
    let canvas = Canvas::default();
    let mut jittered = 0;
    for frame in 1..=300 {
        let t = f64::from(frame) * 1000.0 / 30.0;
        let a = motion_delta(MotionEffect::Glitch, t, 0, canvas);
        assert_eq!(a, motion_delta(MotionEffect::Glitch, t, 0, canvas));
        if a.offset != Vec2::ZERO {
            jittered += 1;
            assert!(a.offset.x.abs() <= GLITCH_MAX_OFFSET && a.offset.y.abs() <= GLITCH_MAX_OFFSET);
        }
    }
    assert!(jittered > 20 && jittered < 120, "jittered {jittered}/300");
}

#[test]
fn rain_is_periodic_and_inside_canvas() {
    let canvas = Canvas::new(200).unwrap();
    let streaks = rain_streaks(canvas, 1234.0);
    assert_eq!(streaks.len(), RAIN_STREAKS);
    for (start, _) in &streaks {
        assert!((0.0..200.0).contains(&start.x) && (0.0..200.0).contains(&start.y));
    }
    assert_eq!(rain_streaks(canvas, 50.0), rain_streaks(canvas, 50.0));
    assert_ne!(rain_streaks(canvas, 0.0), rain_streaks(canvas, 100.0));
}
