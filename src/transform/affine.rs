//! Affine transform helpers.

use crate::foundation::core::Affine;

/// Compose two transforms so that `inner` is applied first, then `outer`.
#[inline]
pub fn compose(outer: Affine, inner: Affine) -> Affine {
    outer * inner
}

/// `true` when every coefficient of `a` and `b` is within `eps`.
pub fn approx_eq(a: Affine, b: Affine, eps: f64) -> bool {
    a.as_coeffs()
        .iter()
        .zip(b.as_coeffs().iter())
        .all(|(x, y)| (x - y).abs() <= eps)
}
