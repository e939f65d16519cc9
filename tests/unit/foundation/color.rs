use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 1.0));

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn parses_transparent_keyword() {
    let c: Color = serde_json::from_value(json!("transparent")).unwrap();
    assert!(c.is_transparent());
    assert!("#1a1a1a".parse::<Color>().unwrap() == Color::INK);
}

#[test]
fn parses_rgba_object_with_optional_alpha() {
    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Color =
        serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75, "a": 0.9})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));
}

#[test]
fn rejects_hsla_objects_and_arrays() {
    assert!(serde_json::from_value::<Color>(json!({"h": 0.0, "s": 1.0, "l": 0.5})).is_err());
    assert!(serde_json::from_value::<Color>(json!([0.25, 0.5, 0.75, 0.9])).is_err());
    assert!(serde_json::from_value::<Color>(json!(12)).is_err());
}

#[test]
fn serializes_as_hex_and_round_trips() {
    let json = serde_json::to_value(Color::INK).unwrap();
    assert_eq!(json, json!("#1a1a1aff"));
    assert_eq!(Color::INK.to_hex_rgb(), "#1a1a1a");
    let back: Color = serde_json::from_value(json).unwrap();
    assert_eq!(back.to_rgba8(), Color::INK.to_rgba8());
}

#[test]
fn rejects_malformed_hex() {
    assert!("#12345".parse::<Color>().is_err());
    assert!("#zzzzzz".parse::<Color>().is_err());
    assert!("#ff00ff0".parse::<Color>().is_err());
    assert!("#ÿÿÿ".parse::<Color>().is_err());
    assert_eq!("FF8000".parse::<Color>().unwrap().to_rgba8(), [255, 128, 0, 255]);
}
