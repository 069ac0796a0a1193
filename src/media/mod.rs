pub(crate) mod metadata;
pub(crate) mod probe;
pub(crate) mod video;
