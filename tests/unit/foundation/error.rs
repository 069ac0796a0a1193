use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CropViewError::invalid_dimension("x")
            .to_string()
            .contains("invalid dimension:")
    );
    assert!(
        CropViewError::metadata_unavailable("x")
            .to_string()
            .contains("metadata unavailable:")
    );
    assert!(
        CropViewError::playback_start("x")
            .to_string()
            .contains("playback start failure:")
    );
    assert!(
        CropViewError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CropViewError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn retagging_keeps_message_and_is_idempotent() {
    let err = CropViewError::invalid_dimension("zero").into_metadata_unavailable();
    assert!(matches!(&err, CropViewError::MetadataUnavailable(m) if m.contains("zero")));

    let err = CropViewError::metadata_unavailable("eof").into_metadata_unavailable();
    assert!(matches!(&err, CropViewError::MetadataUnavailable(m) if m == "eof"));

    let err = CropViewError::Other(anyhow::anyhow!("decoder busy")).into_playback_start();
    assert!(matches!(&err, CropViewError::PlaybackStartFailure(m) if m.contains("decoder busy")));
}
