use super::*;

#[test]
fn square_photo_fits_at_unit_scale() {
    let t = auto_fit(800.0, 800.0, 512.0);
    assert!((t.scale - 1.0).abs() < 1e-12);
    assert_eq!(t.rotation, 0.0);
    assert_eq!(t.position, crate::foundation::core::Vec2::ZERO);
}

#[test]
fn non_square_scale_is_min_of_aspect_and_inverse() {
    for (w, h) in [(1600.0, 900.0), (900.0, 1600.0), (3000.0, 1000.0), (640.0, 480.0)] {
        let a: f64 = w / h;
        let t = auto_fit(w, h, 512.0);
        let expected = a.min(1.0 / a);
        assert!((t.scale - expected).abs() < 1e-12, "{w}x{h}: {}", t.scale);
        assert!(t.scale < 1.0);
    }
}

#[test]
fn cover_fills_the_bounding_square() {
    let c = cover_ratio(2000.0, 1000.0, 512.0);
    assert!((1000.0 * c - 1024.0).abs() < 1e-9);
    assert!(2000.0 * c >= 1024.0);
    assert!((contain_ratio(2000.0, 1000.0, 512.0) * 2000.0 - 1024.0).abs() < 1e-9);
}

#[test]
fn extreme_aspect_is_floored() {
    let t = auto_fit(100_000.0, 10.0, 512.0);
    assert_eq!(t.scale, crate::model::layers::MIN_PHOTO_SCALE);
}

#[test]
fn floor_crops_the_long_side_past_ten_to_one() {
    let radius = 512.0;
    let (w, h) = (2000.0, 100.0);
    let t = auto_fit(w, h, radius);
    assert_eq!(t.scale, crate::model::layers::MIN_PHOTO_SCALE);

    let shown = w * cover_ratio(w, h, radius) * t.scale;
    assert!(shown > 2.0 * radius, "long side {shown} should overflow the disk");

    // Exactly 10:1 still fits.
    let t = auto_fit(1000.0, 100.0, radius);
    let shown = 1000.0 * cover_ratio(1000.0, 100.0, radius) * t.scale;
    assert!((shown - 2.0 * radius).abs() < 1e-9);
}

#[test]
fn degenerate_sizes_do_not_divide_by_zero() {
    assert_eq!(cover_ratio(0.0, 10.0, 512.0), 1.0);
    assert_eq!(auto_fit(0.0, 0.0, 512.0).scale, 1.0);
}
