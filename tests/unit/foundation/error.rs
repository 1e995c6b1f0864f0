use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BrickscaleError::invalid_dimension("x")
            .to_string()
            .contains("invalid dimension:")
    );
    assert!(
        BrickscaleError::incomplete_sample("x")
            .to_string()
            .contains("incomplete sample:")
    );
    assert!(
        BrickscaleError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BrickscaleError::tiler("x")
            .to_string()
            .contains("tiler error:")
    );
    assert!(
        BrickscaleError::parse("x")
            .to_string()
            .contains("parse error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BrickscaleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_converts_into_other() {
    fn fails() -> BrickscaleResult<()> {
        Err(anyhow::anyhow!("disk on fire"))?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(matches!(err, BrickscaleError::Other(_)));
}
