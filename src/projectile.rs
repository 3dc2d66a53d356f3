use nalgebra::{Matrix3, Vector3};

use crate::dynamics::state::{forward_axis, SimConstants, State};
use crate::dynamics::PointMassDynamics;
use crate::error::SimError;
use crate::rotation::{dcm_from_euler, euler_from_dcm, rotation_between, EulerAngles};

// ---------------------------------------------------------------------------
// One-time launch setup export
// ---------------------------------------------------------------------------

/// Attitude and launch direction computed once at construction, exported for
/// external consumers (e.g. a launch-vector overlay).
#[derive(Debug, Clone)]
pub struct LaunchSetup {
    /// Rotation aligning the body forward axis with the outward radius: it
    /// maps the normalized initial radius vector onto the forward axis.
    pub dcm: Matrix3<f64>,
    /// The same rotation as 3-2-1 Euler angles, as written into the state.
    pub euler: EulerAngles,
    /// Initial radius vector rotated by the configured launch tilt; frozen
    /// for the whole run and used as the thrust direction. Not normalized.
    pub launch_direction: Vector3<f64>,
}

// ---------------------------------------------------------------------------
// Projectile: dynamics model + state view
// ---------------------------------------------------------------------------

/// The launched projectile. Composes the dynamics model with convenience
/// reads over its state and performs the launch-alignment setup exactly once
/// at construction.
#[derive(Debug, Clone)]
pub struct Projectile {
    model: PointMassDynamics,
    setup: LaunchSetup,
}

impl Projectile {
    /// Build a projectile at the configured launch position with zero
    /// velocity and the launch-aligned attitude.
    ///
    /// Fails with [`SimError::DegenerateGeometry`] when the launch position
    /// coincides with the body origin, and with [`SimError::InvalidAxis`] if
    /// the alignment rotation degenerates; both abort the run before the
    /// main loop starts.
    pub fn new(consts: &SimConstants) -> Result<Self, SimError> {
        let radius = consts.launch_position - consts.origin;
        if radius.norm() < 1e-9 {
            return Err(SimError::DegenerateGeometry);
        }

        let dcm = rotation_between(&radius, &forward_axis())?;
        let euler = euler_from_dcm(&dcm);
        let launch_direction = dcm_from_euler(&consts.launch_tilt) * radius;

        let model = PointMassDynamics::new(State {
            time: consts.t0,
            pos: consts.launch_position,
            vel: Vector3::zeros(),
            att: EulerAngles::default(),
            mass: consts.projectile_mass,
        });

        let mut projectile = Self {
            model,
            setup: LaunchSetup {
                dcm,
                euler,
                launch_direction,
            },
        };
        projectile.set_orientation(euler.phi, euler.theta, euler.psi);
        Ok(projectile)
    }

    /// Advance one timestep under the net force `u` (delegates to the
    /// dynamics model).
    pub fn update(&mut self, t: f64, u: &Vector3<f64>, dt: f64) -> &State {
        self.model.advance(t, u, dt)
    }

    /// Overwrite the attitude. Called once per run, during setup.
    pub fn set_orientation(&mut self, phi: f64, theta: f64, psi: f64) {
        let mut x = self.model.x().clone();
        x.att = EulerAngles::new(phi, theta, psi);
        self.model.set_x(x);
    }

    /// Current position, read back every step for the force computation.
    pub fn position(&self) -> Vector3<f64> {
        self.model.x().pos
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.model.x().vel
    }

    pub fn state(&self) -> &State {
        self.model.x()
    }

    pub fn setup(&self) -> &LaunchSetup {
        &self.setup
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
