use super::*;

#[test]
fn fps_frame_times_are_exact_multiples() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.frames_for_secs(2.0), 60);
    assert_eq!(fps.frame_time_ms(FrameIndex(0)), 0.0);
    assert!((fps.frame_time_ms(FrameIndex(3)) - 100.0).abs() < 1e-9);
}

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn canvas_geometry_is_centered() {
    let c = Canvas::new(1024).unwrap();
    assert_eq!(c.center(), Point::new(512.0, 512.0));
    assert_eq!(c.radius(), 512.0);
    assert_eq!(c.unit(), 1.0);
    assert!(Canvas::new(0).is_err());
    assert!(Canvas::new(70_000).is_err());
}
