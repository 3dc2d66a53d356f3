use nalgebra::Vector3;

use crate::rotation::EulerAngles;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const M_EARTH: f64 = 5.972e24; // reference body mass, kg
pub const R_EARTH: f64 = 6_371_000.0; // mean body radius, m

/// Body-frame forward axis used as the launch-alignment reference.
pub fn forward_axis() -> Vector3<f64> {
    Vector3::x()
}

// ---------------------------------------------------------------------------
// Integration state
// ---------------------------------------------------------------------------

/// Full integration state vector at a single point in time.
///
/// Attitude is carried as 3-2-1 Euler angles; no torque acts in this model,
/// so it changes only through the one-time launch-alignment setup. Mass is
/// constant (no propellant dynamics).
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub time: f64,         // s
    pub pos: Vector3<f64>, // m, inertial
    pub vel: Vector3<f64>, // m/s, inertial
    pub att: EulerAngles,  // rad, body attitude
    pub mass: f64,         // kg
}

impl State {
    /// Advance state by a derivative scaled by dt (used inside RK4).
    pub fn apply(&self, d: &Deriv, dt: f64) -> State {
        State {
            time: self.time + dt,
            pos: self.pos + d.dpos * dt,
            vel: self.vel + d.dvel * dt,
            att: self.att,
            mass: self.mass,
        }
    }

    /// Radius vector from the body origin to the projectile.
    pub fn radius_from(&self, origin: &Vector3<f64>) -> Vector3<f64> {
        self.pos - origin
    }

    /// True when every numeric component is finite.
    pub fn is_finite(&self) -> bool {
        self.pos.iter().chain(self.vel.iter()).all(|c| c.is_finite())
            && self.time.is_finite()
            && self.mass.is_finite()
    }
}

// ---------------------------------------------------------------------------
// State derivative (dp/dt, dv/dt)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Deriv {
    pub dpos: Vector3<f64>, // velocity
    pub dvel: Vector3<f64>, // acceleration
}

// ---------------------------------------------------------------------------
// Simulation constants
// ---------------------------------------------------------------------------

/// Immutable run configuration, loaded once and read-only thereafter.
///
/// Shared by reference between the force model and the driver; there are no
/// process-wide globals.
#[derive(Debug, Clone)]
pub struct SimConstants {
    pub t0: f64, // start time, s
    pub tf: f64, // end time, s
    pub dt: f64, // integration timestep, s
    pub tl: f64, // thrust cutoff time, s

    pub body_mass: f64,   // kg
    pub body_radius: f64, // m
    /// Center of the reference body in the simulation frame.
    pub origin: Vector3<f64>,

    pub launch_position: Vector3<f64>, // m, initial projectile position
    pub projectile_mass: f64,          // kg
    pub thrust_mag: f64,               // N, accelerator force during the burn

    /// Euler rotation applied to the initial radius vector to produce the
    /// frozen launch direction (default: -90° roll, a surface tangent).
    pub launch_tilt: EulerAngles,

    /// Steps between state-export snapshots (>= 1).
    pub sample_stride: usize,
    /// Print per-sample state lines (consumed by the binary, not the core).
    pub verbose: bool,
}

impl SimConstants {
    /// Number of fixed steps in the run: ceil((tf - t0) / dt).
    pub fn steps(&self) -> usize {
        ((self.tf - self.t0) / self.dt).ceil() as usize
    }
}

impl Default for SimConstants {
    fn default() -> Self {
        Self {
            t0: 0.0,
            tf: 3_000.0,
            dt: 0.05,
            tl: 8.0, // ~8 km/s delta-v at the default force and mass
            body_mass: M_EARTH,
            body_radius: R_EARTH,
            origin: Vector3::zeros(),
            launch_position: Vector3::new(0.0, 0.0, R_EARTH),
            projectile_mass: 10.0,
            thrust_mag: 10_000.0,
            launch_tilt: EulerAngles::new(-std::f64::consts::FRAC_PI_2, 0.0, 0.0),
            sample_stride: 200,
            verbose: false,
        }
    }
}
