use super::*;

#[test]
fn validation_message_is_prefixed() {
    let err = OrbitmapError::validation("region must be non-degenerate");
    assert_eq!(
        err.to_string(),
        "validation error: region must be non-degenerate"
    );
}

#[test]
fn encode_message_is_prefixed() {
    let err = OrbitmapError::encode("unsupported extension '.bmp'");
    assert_eq!(err.to_string(), "encode error: unsupported extension '.bmp'");
}

#[test]
fn other_is_transparent() {
    let err = OrbitmapError::from(anyhow::anyhow!("disk full"));
    assert_eq!(err.to_string(), "disk full");
}
