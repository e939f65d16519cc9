use super::*;

#[test]
fn canvas_clamps_out_of_range_sizes() {
    let c = Canvas::clamped(-20, 100_000);
    assert_eq!(c.width, MIN_DIM);
    assert_eq!(c.height, MAX_DIM);

    let c = Canvas::clamped(350, 80);
    assert_eq!((c.width, c.height), (350, 80));
    assert_eq!(c.rgba_len(), 350 * 80 * 4);
    assert_eq!(c.center(), Point::new(175.0, 40.0));
}

#[test]
fn span_sanitizes_reversed_and_non_finite_bounds() {
    let fallback = Span(0.0, 1.0);
    assert_eq!(Span(3.0, -3.0).sanitized(fallback), Span(-3.0, 3.0));
    assert_eq!(Span(f64::NAN, 2.0).sanitized(fallback), fallback);
    assert_eq!(Span::symmetric(-2.5), Span(-2.5, 2.5));
    assert!((Span(0.8, 1.2).mid() - 1.0).abs() < 1e-12);
}

#[test]
fn span_serializes_as_pair() {
    let json = serde_json::to_string(&Span(-1.0, 2.0)).unwrap();
    assert_eq!(json, "[-1.0,2.0]");
}

#[test]
fn placement_parses_case_insensitively() {
    assert_eq!("Top".parse::<Placement>().unwrap(), Placement::Top);
    assert_eq!(" bottom ".parse::<Placement>().unwrap(), Placement::Bottom);
    assert!("middle".parse::<Placement>().is_err());
}
