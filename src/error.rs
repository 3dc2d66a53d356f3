use thiserror::Error;

// ---------------------------------------------------------------------------
// Simulation errors
// ---------------------------------------------------------------------------

/// Errors raised during run setup or by the stepping loop.
///
/// Setup geometry errors are unrecoverable for the run: the computation is
/// deterministic, so a retry would reproduce the same failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Rotation requested about a zero-length axis.
    #[error("rotation axis has zero length")]
    InvalidAxis,

    /// Zero separation between the projectile and the body center.
    #[error("projectile coincides with the reference body center")]
    DegenerateGeometry,

    /// The integrator produced a non-finite value; `step` is the offending
    /// step index.
    #[error("non-finite state produced at step {step}")]
    NonFiniteState { step: usize },
}
