use nalgebra::Vector3;

use crate::dynamics::state::{SimConstants, State};
use crate::error::SimError;
use crate::physics::{gravity_force, thrust_force};
use crate::projectile::{LaunchSetup, Projectile};

// ---------------------------------------------------------------------------
// Force composition: thrust until cutoff, then gravity only
// ---------------------------------------------------------------------------

/// Net applied force for the step starting at time `t`, from the position
/// `r` produced by the previous step (initial conditions for step 0).
fn net_force(
    consts: &SimConstants,
    launch_direction: &Vector3<f64>,
    t: f64,
    r: &Vector3<f64>,
) -> Result<Vector3<f64>, SimError> {
    let f_gravity = gravity_force(r, consts.body_mass, consts.projectile_mass, &consts.origin)?;
    let f_thrust = if t < consts.tl {
        thrust_force(launch_direction, consts.thrust_mag)
    } else {
        Vector3::zeros()
    };
    Ok(f_gravity + f_thrust)
}

// ---------------------------------------------------------------------------
// Fixed-timestep simulation loop
// ---------------------------------------------------------------------------

/// Run the full simulation, handing strided state snapshots to `sink`.
///
/// The sink receives `(completed_steps, state)`: once before the first step
/// with the initial state, then after every `sample_stride`-th step. The core
/// retains no trajectory history of its own.
///
/// Force for step k is evaluated from the position produced by step k-1
/// (initial conditions at k = 0), keeping the semi-implicit coupling between
/// force evaluation and integration that makes runs reproducible from
/// (t0, X0) alone. Steps are never split: the loop can only stop at step
/// boundaries, and it halts with the offending step index if the integrator
/// ever produces a non-finite value.
pub fn simulate_with<F>(
    consts: &SimConstants,
    sink: &mut F,
) -> Result<(State, LaunchSetup), SimError>
where
    F: FnMut(usize, &State),
{
    let mut projectile = Projectile::new(consts)?;
    let setup = projectile.setup().clone();
    let stride = consts.sample_stride.max(1);
    let n = consts.steps();

    sink(0, projectile.state());

    let mut r = projectile.position();
    for k in 0..n {
        let t = consts.t0 + k as f64 * consts.dt;
        let u = net_force(consts, &setup.launch_direction, t, &r)?;

        let x = projectile.update(t, &u, consts.dt);
        if !x.is_finite() {
            return Err(SimError::NonFiniteState { step: k });
        }

        r = projectile.position();
        if (k + 1) % stride == 0 {
            sink(k + 1, projectile.state());
        }
    }

    Ok((projectile.state().clone(), setup))
}

/// Result of a [`simulate`] run: strided snapshots, the one-time launch
/// setup, and the state after the final step.
#[derive(Debug, Clone)]
pub struct SimOutput {
    pub samples: Vec<State>,
    pub setup: LaunchSetup,
    pub final_state: State,
}

/// Convenience wrapper collecting the strided snapshots into a `Vec`.
pub fn simulate(consts: &SimConstants) -> Result<SimOutput, SimError> {
    let capacity = (consts.steps() / consts.sample_stride.max(1) + 2).min(200_000);
    let mut samples = Vec::with_capacity(capacity);

    let (final_state, setup) = simulate_with(consts, &mut |_, state: &State| {
        samples.push(state.clone());
    })?;

    Ok(SimOutput {
        samples,
        setup,
        final_state,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
