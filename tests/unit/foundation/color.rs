use super::*;
use serde_json::json;

#[test]
fn parses_short_long_and_alpha_hex() {
    assert_eq!(Color::parse_hex("#f00").unwrap(), Color::rgb(255, 0, 0));
    assert_eq!(Color::parse_hex("00FF00").unwrap(), Color::rgb(0, 255, 0));
    assert_eq!(
        Color::parse_hex("#0000ff80").unwrap(),
        Color::rgba(0, 0, 255, 128)
    );
    assert!(Color::parse_hex("#12345").is_err());
    assert!(Color::parse_hex("#zzzzzz").is_err());
}

#[test]
fn hex_output_omits_opaque_alpha() {
    assert_eq!(Color::rgb(255, 0, 16).to_hex(), "#ff0010");
    assert_eq!(Color::rgba(255, 0, 16, 0).to_hex(), "#ff001000");
}

#[test]
fn serde_accepts_hex_object_and_array() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgb(255, 0, 0));

    let c: Color = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3})).unwrap();
    assert_eq!(c, Color::rgb(1, 2, 3));

    let c: Color = serde_json::from_value(json!([1, 2, 3, 4])).unwrap();
    assert_eq!(c, Color::rgba(1, 2, 3, 4));

    assert_eq!(serde_json::to_value(c).unwrap(), json!("#01020304"));
}
