use std::collections::HashMap;
use std::io::Cursor;

use super::*;

struct MapLoader(HashMap<&'static str, Vec<u8>>);

impl TextureLoader for MapLoader {
    fn load(&self, url: &str) -> HaloResult<Vec<u8>> {
        self.0
            .get(url)
            .cloned()
            .ok_or_else(|| HaloError::decode(format!("no such texture {url}")))
    }
}

fn png(px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba(px));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn request_is_pending_until_pumped() {
    let loader = MapLoader(HashMap::from([("a.png", png([1, 2, 3, 255]))]));
    let mut cache = TextureCache::new();
    assert!(matches!(cache.request("a.png"), TextureState::Pending));
    assert!(cache.resolve("a.png").is_none());

    assert_eq!(cache.pump(&loader), 1);
    assert!(matches!(cache.state("a.png"), Some(TextureState::Ready(_))));
    assert!(cache.resolve("a.png").is_some());
}

#[test]
fn repeated_requests_queue_once() {
    let mut cache = TextureCache::new();
    cache.request("a.png");
    cache.request("a.png");
    assert_eq!(cache.pending(), 1);
}

#[test]
fn failed_load_keeps_previous_texture() {
    let loader = MapLoader(HashMap::from([("good.png", png([9, 9, 9, 255]))]));
    let mut cache = TextureCache::new();
    cache.request("good.png");
    cache.pump(&loader);

    cache.request("broken.png");
    assert_eq!(cache.pump(&loader), 0);
    assert!(matches!(cache.state("broken.png"), Some(TextureState::Failed(_))));
    let fallback = cache.resolve("broken.png").unwrap();
    assert_eq!(fallback.rgba8_premul[0], 9);

    cache.retry("broken.png");
    assert!(cache.state("broken.png").is_none());
}

#[test]
fn pending_url_resolves_to_placeholder_even_after_other_loads() {
    let loader = MapLoader(HashMap::from([
        ("a.png", png([200, 0, 0, 255])),
        ("b.png", png([0, 0, 200, 255])),
    ]));
    let mut cache = TextureCache::new();
    cache.request("a.png");
    cache.pump(&loader);

    cache.request("b.png");
    assert!(matches!(cache.state("b.png"), Some(TextureState::Pending)));
    assert!(cache.resolve("b.png").is_none());

    cache.pump(&loader);
    assert_eq!(cache.resolve("b.png").unwrap().rgba8_premul[2], 200);
}

#[test]
fn failed_load_without_history_resolves_to_placeholder() {
    let mut cache = TextureCache::new();
    cache.request("missing.png");
    cache.pump(&MapLoader(HashMap::new()));
    assert!(cache.resolve("missing.png").is_none());
}

#[test]
fn rel_paths_are_normalized_and_traversal_rejected() {
    assert_eq!(normalize_rel_path("./tex\\a.png").unwrap(), "tex/a.png");
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("").is_err());
}

#[test]
fn dir_loader_reads_relative_files() {
    let dir = std::env::temp_dir().join(format!("haloframe-tex-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("t.png"), png([5, 5, 5, 255])).unwrap();

    let loader = DirTextureLoader::new(&dir);
    assert!(loader.load("t.png").is_ok());
    assert!(loader.load("nope.png").is_err());
    let _ = std::fs::remove_dir_all(&dir);
}
