use super::*;

#[test]
fn video_size_rejects_zero_axes() {
    assert!(VideoSize::new(1920, 1080).is_ok());
    assert!(matches!(
        VideoSize::new(0, 1080),
        Err(CropViewError::InvalidDimension(_))
    ));
    assert!(matches!(
        VideoSize::new(1920, 0),
        Err(CropViewError::InvalidDimension(_))
    ));
}

#[test]
fn viewport_degenerate_detection() {
    assert!(Viewport::new(0, 10).is_degenerate());
    assert!(Viewport::new(10, 0).is_degenerate());
    assert!(!Viewport::new(1, 1).is_degenerate());
}

#[test]
fn display_forms() {
    assert_eq!(VideoSize::new(640, 360).unwrap().to_string(), "640x360");
    assert_eq!(SurfaceId(7).to_string(), "surface#7");
}
