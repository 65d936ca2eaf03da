use super::*;

#[test]
fn approx_metrics_scale_with_chars_and_size() {
    let mut m = ApproxMetrics;
    assert_eq!(m.measure("", "x", 40.0), 0.0);
    assert!((m.measure("HI", "x", 40.0) - 48.0).abs() < 1e-9);
    assert!((m.measure("héllo", "x", 10.0) - 30.0).abs() < 1e-9);
}

#[test]
fn empty_book_falls_back_to_approximation() {
    let mut engine = TextEngine::default();
    assert!(engine.shape("HI", "sans-serif", 40.0, Color::WHITE).is_none());
    assert!((engine.measure("HI", "sans-serif", 40.0) - 48.0).abs() < 1e-9);
}

#[test]
fn system_fonts_shape_when_available() {
    let mut engine = TextEngine::new(FontBook::load(&[], true));
    if engine.book_mut().face_count() == 0 {
        return;
    }
    let Some(shaped) = engine.shape("Halo", "sans-serif", 32.0, Color::WHITE) else {
        return;
    };
    assert!(!shaped.glyphs.is_empty());
    assert!(shaped.width > 0.0);
    let wide = engine.measure("HaloHalo", "sans-serif", 32.0);
    assert!(wide > shaped.width);
}
