use super::*;
use crate::model::layers::StickerConfig;

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("haloframe_store_{tag}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn request(name: &str) -> PublishRequest {
    let mut document = DesignDocument::default();
    document.stickers.push(StickerConfig::new("s1", "crown"));
    PublishRequest {
        name: name.to_owned(),
        description: "for the team page".to_owned(),
        tags: vec![" gold ".to_owned(), String::new()],
        document,
        png: vec![0x89, b'P', b'N', b'G'],
    }
}

#[test]
fn slug_is_url_safe() {
    assert_eq!(slug("My Gold Frame!"), "my-gold-frame");
    assert_eq!(slug("  ***  "), "design");
    assert_eq!(slug("Ünïcode ok"), "n-code-ok");
}

#[test]
fn publish_then_load_round_trips() {
    let dir = temp_dir("roundtrip");
    let mut store = DirDesignStore::new(&dir);
    let req = request("Gold Crown");
    let id = store.publish(&req).unwrap();
    assert!(id.starts_with("gold-crown-"));

    let json = store.load(&id).unwrap();
    assert_eq!(DesignDocument::from_json(&json).unwrap(), req.document);
    assert_eq!(std::fs::read(dir.join(format!("{id}.png"))).unwrap(), req.png);
    let meta = store.meta(&id).unwrap();
    assert_eq!(meta.tags, vec!["gold".to_owned()]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn ids_cannot_escape_the_store() {
    let store = DirDesignStore::new(temp_dir("escape"));
    assert!(store.load("../etc/passwd").is_err());
    assert!(store.load("").is_err());
}

#[test]
fn empty_name_is_rejected() {
    let mut store = DirDesignStore::new(temp_dir("noname"));
    assert!(store.publish(&request("   ")).is_err());
}

#[test]
fn vec_avatar_sink_keeps_the_png() {
    let mut sink: Vec<u8> = Vec::new();
    sink.accept_avatar(vec![1, 2, 3]).unwrap();
    assert_eq!(sink, vec![1, 2, 3]);
}
