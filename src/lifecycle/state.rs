use std::fmt;

/// Where a [`LifecycleController`](crate::LifecycleController) is in its surface/playback cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// No surface bound.
    Idle,
    /// A surface is bound; video dimensions are being resolved.
    SurfaceBound,
    /// Dimensions resolved and crop transform applied; no session yet.
    Ready,
    /// A playback session is active on the bound surface.
    Playing,
}

impl LifecycleState {
    /// `true` for every state that holds a surface.
    pub fn has_surface(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// `true` when the crop transform has been applied to the bound surface.
    pub fn is_transformed(self) -> bool {
        matches!(self, Self::Ready | Self::Playing)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::SurfaceBound => "surface_bound",
            Self::Ready => "ready",
            Self::Playing => "playing",
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/state.rs"]
mod tests;
