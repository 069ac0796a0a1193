use super::*;
use crate::foundation::core::Vec2;
use kurbo::Point;

const EPS: f64 = 1e-9;

const SIZES: [(u32, u32); 9] = [
    (1, 1),
    (1080, 1920),
    (1920, 1080),
    (1280, 720),
    (720, 1280),
    (640, 480),
    (333, 777),
    (4096, 2160),
    (3, 1000),
];

fn rendered(viewport: (u32, u32), t: CropTransform) -> (f64, f64) {
    (
        f64::from(viewport.0) * t.scale_x,
        f64::from(viewport.1) * t.scale_y,
    )
}

#[test]
fn portrait_viewport_landscape_video_crops_width() {
    let t = compute_crop_transform(1080, 1920, 1920, 1080).unwrap();

    let height_scale: f64 = 1920.0 / 1080.0;
    let scaled_width = 1920.0 * height_scale;
    assert!((scaled_width - 3413.333_333).abs() < 1e-3);
    assert!((t.scale_x - scaled_width / 1080.0).abs() < EPS);
    assert!((t.scale_x - 3.1605).abs() < 1e-3);
    assert_eq!(t.scale_y, 1.0);
    assert!((t.translate_x - -1166.666_666).abs() < 1e-3);
    assert_eq!(t.translate_y, 0.0);
    assert_eq!(t.cropped_axis(), CropAxis::Width);
}

#[test]
fn landscape_viewport_portrait_video_crops_height() {
    let t = compute_crop_transform(1920, 1080, 1080, 1920).unwrap();
    assert_eq!(t.scale_x, 1.0);
    assert_eq!(t.translate_x, 0.0);
    assert!(t.scale_y > 1.0);
    assert!(t.translate_y < 0.0);
    assert_eq!(t.cropped_axis(), CropAxis::Height);
}

#[test]
fn fill_axis_matches_viewport_and_other_axis_overflows() {
    for &vp in &SIZES {
        for &content in &SIZES {
            let t = compute_crop_transform(vp.0, vp.1, content.0, content.1).unwrap();
            let (w, h) = rendered(vp, t);
            let (vw, vh) = (f64::from(vp.0), f64::from(vp.1));

            let width_fills = (w - vw).abs() < 1e-6 * vw.max(1.0);
            let height_fills = (h - vh).abs() < 1e-6 * vh.max(1.0);
            assert!(
                width_fills || height_fills,
                "viewport {vp:?} content {content:?}: neither axis fills ({w}, {h})"
            );
            assert!(w >= vw - 1e-6 * vw, "{vp:?} {content:?}");
            assert!(h >= vh - 1e-6 * vh, "{vp:?} {content:?}");

            // Aspect ratio of the rendered content equals the native one.
            let native = f64::from(content.0) / f64::from(content.1);
            assert!(((w / h) - native).abs() < 1e-9 * native.max(1.0));
        }
    }
}

#[test]
fn cropped_axis_translation_centers_content() {
    for &vp in &SIZES {
        for &content in &SIZES {
            let t = compute_crop_transform(vp.0, vp.1, content.0, content.1).unwrap();
            let (w, h) = rendered(vp, t);
            let (vw, vh) = (f64::from(vp.0), f64::from(vp.1));
            match t.cropped_axis() {
                CropAxis::Width => {
                    assert!((t.translate_x - -(w - vw) / 2.0).abs() < 1e-6);
                    assert_eq!(t.translate_y, 0.0);
                }
                CropAxis::Height => {
                    assert!((t.translate_y - -(h - vh) / 2.0).abs() < 1e-6);
                    assert_eq!(t.translate_x, 0.0);
                }
                CropAxis::None => {
                    assert_eq!(t, CropTransform::IDENTITY);
                }
            }
        }
    }
}

#[test]
fn equal_ratios_are_an_exact_no_op() {
    for (vp, content) in [
        ((1920, 1080), (1280, 720)),
        ((1080, 1920), (720, 1280)),
        ((500, 500), (7, 7)),
        ((640, 480), (640, 480)),
    ] {
        let t = compute_crop_transform(vp.0, vp.1, content.0, content.1).unwrap();
        assert_eq!(t, CropTransform::IDENTITY);
        assert_eq!(t.cropped_axis(), CropAxis::None);
        assert_eq!(t.to_affine(), Affine::IDENTITY);
    }
}

#[test]
fn swapping_axes_transposes_the_transform() {
    for &vp in &SIZES {
        for &content in &SIZES {
            let t = compute_crop_transform(vp.0, vp.1, content.0, content.1).unwrap();
            let s = compute_crop_transform(vp.1, vp.0, content.1, content.0).unwrap();
            assert!((t.scale_x - s.scale_y).abs() < EPS);
            assert!((t.scale_y - s.scale_x).abs() < EPS);
            assert!((t.translate_x - s.translate_y).abs() < 1e-6);
            assert!((t.translate_y - s.translate_x).abs() < 1e-6);
        }
    }
}

#[test]
fn zero_dimensions_are_rejected() {
    for args in [
        (0, 1920, 1920, 1080),
        (1080, 0, 1920, 1080),
        (1080, 1920, 0, 1080),
        (1080, 1920, 1920, 0),
        (0, 0, 0, 0),
    ] {
        let res = compute_crop_transform(args.0, args.1, args.2, args.3);
        assert!(
            matches!(res, Err(CropViewError::InvalidDimension(_))),
            "{args:?}"
        );
    }
}

#[test]
fn typed_entry_point_matches_raw_one() {
    let vp = Viewport::new(1080, 1920);
    let video = VideoSize::new(1920, 1080).unwrap();
    assert_eq!(
        crop_transform_for(vp, video).unwrap(),
        compute_crop_transform(1080, 1920, 1920, 1080).unwrap()
    );
    assert!(crop_transform_for(Viewport::new(0, 1), video).is_err());
}

#[test]
fn affine_maps_viewport_edges_to_centered_window() {
    let t = compute_crop_transform(100, 200, 200, 100).unwrap();
    let a = t.to_affine();
    let left = a * Point::new(0.0, 0.0);
    let right = a * Point::new(100.0, 200.0);
    // Content is 400 wide once the height fills, so 150 px hang off each side.
    assert!((left.x - -150.0).abs() < EPS);
    assert!((right.x - 250.0).abs() < EPS);
    assert_eq!(left.y, 0.0);
    assert_eq!(right.y, 200.0);
}

#[test]
fn post_concat_runs_base_transform_first() {
    let t = compute_crop_transform(100, 200, 200, 100).unwrap();
    let base = Affine::translate(Vec2::new(10.0, 0.0));
    let combined = t.post_concat(base);

    let p = combined * Point::new(0.0, 0.0);
    // base moves x to 10, crop then scales by 4 and shifts by -150.
    assert!((p.x - (10.0 * 4.0 - 150.0)).abs() < EPS);
    assert_eq!(t.post_concat(Affine::IDENTITY), t.to_affine());
}

#[test]
fn serializes_with_named_fields() {
    let t = CropTransform::IDENTITY;
    let json = serde_json::to_value(t).unwrap();
    assert_eq!(json["scale_x"], 1.0);
    assert_eq!(json["translate_y"], 0.0);
}
