//! Center-crop ("cover") scaling of a video raster onto a viewport.
//!
//! The host surface already stretches the decoded frame to the viewport size. The transform
//! computed here undoes that stretch on one axis: the axis that must fill the viewport keeps a
//! scale of `1`, the other axis is scaled up until the content's aspect ratio is restored and
//! then shifted left/up by half of the overflow so the visible window stays centered.

use crate::foundation::core::{Affine, VideoSize, Viewport};
use crate::foundation::error::{CropViewError, CropViewResult};

/// Which content axis overflows (and is therefore cropped) by the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropAxis {
    /// Content is wider than the viewport; left and right edges are cut.
    Width,
    /// Content is taller than the viewport; top and bottom edges are cut.
    Height,
    /// Aspect ratios match; nothing is cut.
    None,
}

/// Scale + translate transform (no rotation/skew) mapping the stretched raster to a cover fit.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropTransform {
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Horizontal translation in viewport pixels.
    pub translate_x: f64,
    /// Vertical translation in viewport pixels.
    pub translate_y: f64,
}

impl CropTransform {
    /// Exact fit: unit scale, zero translation.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// The axis along which content overflows the viewport.
    pub fn cropped_axis(&self) -> CropAxis {
        if self.scale_x > 1.0 {
            CropAxis::Width
        } else if self.scale_y > 1.0 {
            CropAxis::Height
        } else {
            CropAxis::None
        }
    }

    /// The 2x3 affine matrix `[sx, 0, 0, sy, tx, ty]`.
    pub fn to_affine(self) -> Affine {
        Affine::new([
            self.scale_x,
            0.0,
            0.0,
            self.scale_y,
            self.translate_x,
            self.translate_y,
        ])
    }

    /// Post-concatenate onto a surface's base transform: `base` runs first, then the crop.
    pub fn post_concat(self, base: Affine) -> Affine {
        crate::transform::affine::compose(self.to_affine(), base)
    }
}

impl Default for CropTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Compute the center-crop transform for a viewport and a content raster.
///
/// Fails with [`CropViewError::InvalidDimension`] when any dimension is zero. The aspect ratio
/// comparison is exact (integer cross-multiplication), so equal ratios always yield
/// [`CropTransform::IDENTITY`].
pub fn compute_crop_transform(
    viewport_width: u32,
    viewport_height: u32,
    content_width: u32,
    content_height: u32,
) -> CropViewResult<CropTransform> {
    if viewport_width == 0 || viewport_height == 0 {
        return Err(CropViewError::invalid_dimension(format!(
            "viewport must be non-zero, got {viewport_width}x{viewport_height}"
        )));
    }
    if content_width == 0 || content_height == 0 {
        return Err(CropViewError::invalid_dimension(format!(
            "content must be non-zero, got {content_width}x{content_height}"
        )));
    }

    // viewport_ratio < content_ratio  <=>  vw * ch < cw * vh
    let lhs = u64::from(viewport_width) * u64::from(content_height);
    let rhs = u64::from(content_width) * u64::from(viewport_height);
    if lhs == rhs {
        return Ok(CropTransform::IDENTITY);
    }

    let (vw, vh) = (f64::from(viewport_width), f64::from(viewport_height));
    let (cw, ch) = (f64::from(content_width), f64::from(content_height));

    if lhs < rhs {
        let height_scale = vh / ch;
        let scaled_width = cw * height_scale;
        Ok(CropTransform {
            scale_x: scaled_width / vw,
            scale_y: 1.0,
            translate_x: -(scaled_width - vw) / 2.0,
            translate_y: 0.0,
        })
    } else {
        let width_scale = vw / cw;
        let scaled_height = ch * width_scale;
        Ok(CropTransform {
            scale_x: 1.0,
            scale_y: scaled_height / vh,
            translate_x: 0.0,
            translate_y: -(scaled_height - vh) / 2.0,
        })
    }
}

/// [`compute_crop_transform`] over typed sizes.
pub fn crop_transform_for(viewport: Viewport, video: VideoSize) -> CropViewResult<CropTransform> {
    compute_crop_transform(viewport.width, viewport.height, video.width, video.height)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/crop.rs"]
mod tests;
