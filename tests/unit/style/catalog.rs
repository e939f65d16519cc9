use super::*;

fn style(name: &str) -> HandwritingStyle {
    HandwritingStyle {
        name: name.to_string(),
        font_family: "Caveat".to_string(),
        base_font_size_pt: 30.0,
        rotation_variance_deg: Span(-4.0, 4.0),
        spacing_variance_em: Span(-0.05, 0.1),
        stroke_width_variance_factor: Span(0.5, 1.5),
        active: true,
    }
}

#[test]
fn create_rejects_duplicates_and_invalid_styles() {
    let mut cat = StyleCatalog::default();
    cat.create(style("partner")).unwrap();
    assert!(cat.create(style("partner")).is_err());

    let mut bad = style("bad");
    bad.base_font_size_pt = 0.0;
    assert!(cat.create(bad).is_err());

    let mut unnamed = style(" ");
    unnamed.font_family = "x".to_string();
    assert!(cat.create(unnamed).is_err());
}

#[test]
fn deactivate_is_soft() {
    let mut cat = StyleCatalog::from_styles([style("a"), style("b")]).unwrap();
    assert!(cat.deactivate("a").unwrap());
    assert!(!cat.deactivate("a").unwrap());
    assert!(cat.deactivate("missing").is_err());

    assert!(cat.get("a").is_some());
    assert!(!cat.get("a").unwrap().active);
    let active: Vec<_> = cat.active().map(|s| s.name.as_str()).collect();
    assert_eq!(active, vec!["b"]);
    assert_eq!(cat.all().count(), 2);

    // Name stays reserved after deactivation.
    assert!(cat.create(style("a")).is_err());
}

#[test]
fn json_round_trip_keeps_inactive_styles() {
    let mut cat = StyleCatalog::from_styles([style("a"), style("b")]).unwrap();
    cat.deactivate("b").unwrap();
    let json = cat.to_json().unwrap();
    assert!(json.contains("baseFontSizePt"));
    let back = StyleCatalog::from_json(&json).unwrap();
    assert_eq!(back, cat);
}

#[test]
fn style_overlays_jitter_ranges() {
    let cfg = style("a").jitter_config(&JitterConfig::default(), 40.0);
    assert_eq!(cfg.rotation_deg, Span(-4.0, 4.0));
    assert!((cfg.spacing_px.min() + 2.0).abs() < 1e-9);
    assert!((cfg.spacing_px.max() - 4.0).abs() < 1e-9);
    assert!((cfg.intensity - 1.0).abs() < 1e-9);
    assert_eq!(cfg.opacity, JitterConfig::default().opacity);
}

#[test]
fn active_defaults_to_true_when_omitted() {
    let json = r#"[{
        "name": "clerk",
        "fontFamily": "Caveat",
        "baseFontSizePt": 28,
        "rotationVarianceDeg": [-2, 2],
        "spacingVarianceEm": [0, 0.05],
        "strokeWidthVarianceFactor": [0.9, 1.1]
    }]"#;
    let cat = StyleCatalog::from_json(json).unwrap();
    assert!(cat.get("clerk").unwrap().active);
}
