pub mod gravity;
pub mod thrust;

pub use gravity::{gravity_accel, gravity_force};
pub use thrust::thrust_force;
