pub mod affine;
pub mod crop;
