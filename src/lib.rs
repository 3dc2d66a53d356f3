pub mod dynamics;
pub mod error;
pub mod io;
pub mod physics;
pub mod projectile;
pub mod rotation;
pub mod sim;

pub use error::SimError;

// Convenience re-exports for consumers
pub mod types {
    pub use crate::dynamics::state::{forward_axis, Deriv, SimConstants, State, M_EARTH, R_EARTH};
    pub use crate::projectile::{LaunchSetup, Projectile};
    pub use crate::rotation::EulerAngles;
    pub use crate::sim::{simulate, simulate_with, SimOutput};
}
