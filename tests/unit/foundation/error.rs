use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        InkdateError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(InkdateError::render("x").to_string().contains("render error:"));
    assert!(InkdateError::asset("x").to_string().contains("asset error:"));
    assert!(
        InkdateError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = InkdateError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: InkdateError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, InkdateError::Serde(_)));
    assert!(err.to_string().starts_with("serialization error:"));
}
