use super::*;

#[test]
fn empty_json_yields_defaults() {
    let opts = ControllerOpts::from_json_str("{}").unwrap();
    assert_eq!(opts, ControllerOpts::default());
    assert!(opts.video.is_unset());
    assert_eq!(opts.resize_policy, ResizePolicy::Ignore);
}

#[test]
fn full_json_round_trips_fields() {
    let opts =
        ControllerOpts::from_json_str(r#"{"video": {"raw": 42}, "resize_policy": "recompute"}"#)
            .unwrap();
    assert_eq!(
        opts,
        ControllerOpts::for_video(VideoResource::Raw(42))
            .with_resize_policy(ResizePolicy::Recompute)
    );
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ControllerOpts::from_json_str(r#"{"resize_policy": "sometimes"}"#).unwrap_err();
    assert!(matches!(err, CropViewError::Serde(_)));
}
