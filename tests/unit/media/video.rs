use super::*;

#[test]
fn zero_handle_means_no_video() {
    assert_eq!(VideoResource::from_raw(0), VideoResource::Unset);
    assert_eq!(VideoResource::from_raw(7), VideoResource::Raw(7));
    assert!(VideoResource::Unset.is_unset());
    assert!(VideoResource::Raw(0).is_unset());
    assert!(!VideoResource::Path("a.mp4".into()).is_unset());
    assert!(VideoResource::default().is_unset());
}

#[test]
fn dimensions_are_cached_once() {
    let mut d = VideoDescriptor::new(VideoResource::Raw(3));
    assert_eq!(d.dimensions(), None);

    let first = VideoSize::new(1920, 1080).unwrap();
    let second = VideoSize::new(640, 480).unwrap();
    assert_eq!(d.cache_dimensions(first), first);
    assert_eq!(d.cache_dimensions(second), first);
    assert_eq!(d.dimensions(), Some(first));
    assert_eq!(d.resource(), &VideoResource::Raw(3));
}

#[test]
fn resource_deserializes_from_tagged_json() {
    let r: VideoResource = serde_json::from_str(r#"{"raw": 12}"#).unwrap();
    assert_eq!(r, VideoResource::Raw(12));
    let r: VideoResource = serde_json::from_str(r#"{"path": "clips/loop.mp4"}"#).unwrap();
    assert_eq!(r, VideoResource::Path("clips/loop.mp4".into()));
    let r: VideoResource = serde_json::from_str(r#""unset""#).unwrap();
    assert_eq!(r, VideoResource::Unset);
}
