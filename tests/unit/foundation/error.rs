use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        HaloError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(HaloError::decode("x").to_string().contains("decode error:"));
    assert!(HaloError::render("x").to_string().contains("render error:"));
    assert!(HaloError::export("x").to_string().contains("export error:"));
    assert!(
        HaloError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = HaloError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
