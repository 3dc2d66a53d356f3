pub mod model;
pub mod state;

pub use model::{derivatives, PointMassDynamics};
pub use state::{Deriv, SimConstants, State};
