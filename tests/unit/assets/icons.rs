use super::*;
use crate::assets::decode::parse_svg;

#[test]
fn every_icon_parses_with_the_shared_box() {
    for key in STICKER_ICONS {
        let src = icon_svg(key).unwrap_or_else(|| panic!("missing icon {key}"));
        let tree = parse_svg(src.as_bytes()).unwrap();
        assert_eq!(tree.size().width(), 24.0, "{key}");
        assert_eq!(tree.size().height(), 24.0, "{key}");
    }
}

#[test]
fn unknown_key_has_no_source() {
    assert!(icon_svg("unicorn").is_none());
}
