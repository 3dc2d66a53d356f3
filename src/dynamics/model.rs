use nalgebra::Vector3;

use crate::dynamics::state::{Deriv, State};

// ---------------------------------------------------------------------------
// Equations of motion (point mass, externally supplied net force)
// ---------------------------------------------------------------------------

/// State derivatives for a given state and net applied force `u`.
///
/// Translational only: dpos/dt = velocity, dvel/dt = u / mass. Attitude is
/// carried without torque and mass is constant, so neither contributes a
/// derivative.
pub fn derivatives(state: &State, u: &Vector3<f64>) -> Deriv {
    Deriv {
        dpos: state.vel,
        dvel: u / state.mass,
    }
}

// ---------------------------------------------------------------------------
// Dynamics model: exclusive owner of the integration vector
// ---------------------------------------------------------------------------

/// Point-mass dynamics model. Owns the integration state vector; all reads
/// and writes from the outside go through [`x`](Self::x)/[`set_x`](Self::set_x)
/// or the per-step [`advance`](Self::advance).
#[derive(Debug, Clone)]
pub struct PointMassDynamics {
    x: State,
}

impl PointMassDynamics {
    pub fn new(x: State) -> Self {
        Self { x }
    }

    /// Advance the state one fixed timestep with a classical RK4 step.
    ///
    /// The net force `u` is held constant over the step; the driver
    /// re-evaluates forces between steps. For a constant force this advances
    /// velocity by exactly `u/m * dt` and position by `v*dt + u/m * dt²/2`.
    /// Identical inputs always produce identical output states.
    pub fn advance(&mut self, t: f64, u: &Vector3<f64>, dt: f64) -> &State {
        let k1 = derivatives(&self.x, u);
        let k2 = derivatives(&self.x.apply(&k1, dt * 0.5), u);
        let k3 = derivatives(&self.x.apply(&k2, dt * 0.5), u);
        let k4 = derivatives(&self.x.apply(&k3, dt), u);

        self.x = State {
            time: t + dt,
            pos: self.x.pos + (k1.dpos + 2.0 * k2.dpos + 2.0 * k3.dpos + k4.dpos) * (dt / 6.0),
            vel: self.x.vel + (k1.dvel + 2.0 * k2.dvel + 2.0 * k3.dvel + k4.dvel) * (dt / 6.0),
            att: self.x.att,
            mass: self.x.mass,
        };
        &self.x
    }

    /// Raw access to the integration vector.
    pub fn x(&self) -> &State {
        &self.x
    }

    /// Replace the integration vector (setup and driver bookkeeping only).
    pub fn set_x(&mut self, x: State) {
        self.x = x;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::EulerAngles;
    use approx::assert_relative_eq;

    fn at_rest(mass: f64) -> State {
        State {
            time: 0.0,
            pos: Vector3::zeros(),
            vel: Vector3::zeros(),
            att: EulerAngles::default(),
            mass,
        }
    }

    #[test]
    fn constant_force_step_from_rest() {
        // From rest under constant force: dv = u/m * dt, dp = u/m * dt^2 / 2.
        let mut model = PointMassDynamics::new(at_rest(2.0));
        let u = Vector3::new(0.0, 0.0, -10.0);
        let dt = 0.5;
        let x = model.advance(0.0, &u, dt);
        assert_relative_eq!(x.vel.z, -10.0 / 2.0 * dt, epsilon = 1e-12);
        assert_relative_eq!(x.pos.z, -10.0 / 2.0 * dt * dt / 2.0, epsilon = 1e-12);
        assert_relative_eq!(x.time, dt, epsilon = 1e-12);
    }

    #[test]
    fn free_drift_is_linear() {
        let mut x0 = at_rest(1.0);
        x0.vel = Vector3::new(3.0, -1.0, 2.0);
        let mut model = PointMassDynamics::new(x0.clone());
        model.advance(0.0, &Vector3::zeros(), 2.0);
        assert_relative_eq!(model.x().pos, x0.vel * 2.0, epsilon = 1e-12);
        assert_relative_eq!(model.x().vel, x0.vel, epsilon = 1e-12);
    }

    #[test]
    fn advance_is_deterministic() {
        let u = Vector3::new(1.0, 2.0, 3.0);
        let mut a = PointMassDynamics::new(at_rest(4.0));
        let mut b = PointMassDynamics::new(at_rest(4.0));
        for k in 0..100 {
            let t = k as f64 * 0.1;
            a.advance(t, &u, 0.1);
            b.advance(t, &u, 0.1);
        }
        assert_eq!(a.x(), b.x());
    }

    #[test]
    fn attitude_and_mass_are_untouched() {
        let mut x0 = at_rest(7.5);
        x0.att = EulerAngles::new(0.4, -0.2, 1.0);
        let mut model = PointMassDynamics::new(x0.clone());
        model.advance(0.0, &Vector3::new(5.0, 0.0, 0.0), 1.0);
        assert_eq!(model.x().att, x0.att);
        assert_eq!(model.x().mass, x0.mass);
    }
}
