use super::*;

#[test]
fn sizes_round_up_to_buckets() {
    assert_eq!(bucket(1.0), 32);
    assert_eq!(bucket(32.0), 32);
    assert_eq!(bucket(33.0), 64);
    assert_eq!(bucket(f64::NAN), 32);
    assert_eq!(bucket(1e9), MAX_SPRITE);
}

#[test]
fn known_icons_rasterize_and_are_reused() {
    let mut cache = SpriteCache::new();
    let a = cache.sprite("heart", 90.0).unwrap();
    assert_eq!((a.width, a.height), (96, 96));
    let b = cache.sprite("heart", 70.0).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 1);
    assert!(a.rgba8_premul.chunks_exact(4).any(|px| px[3] == 255));
}

#[test]
fn unknown_icon_is_none_and_cached() {
    let mut cache = SpriteCache::new();
    assert!(cache.sprite("unicorn", 64.0).is_none());
    assert!(cache.sprite("unicorn", 64.0).is_none());
    assert_eq!(cache.len(), 1);
}
