use rail_sim::physics::gravity_force;
use rail_sim::types::{simulate, SimConstants, State};

fn main() {
    // -----------------------------------------------------------------------
    // Run configuration: rail accelerator on the surface, tangential burn
    // -----------------------------------------------------------------------
    let consts = SimConstants::default();

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let output = match simulate(&consts) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("simulation aborted: {err}");
            std::process::exit(1);
        }
    };

    // -----------------------------------------------------------------------
    // Analyze trajectory
    // -----------------------------------------------------------------------
    let radius = |s: &State| s.radius_from(&consts.origin).norm();

    let apogee = output
        .samples
        .iter()
        .max_by(|a, b| radius(a).total_cmp(&radius(b)))
        .expect("at least the initial sample is present");

    let perigee_r = output
        .samples
        .iter()
        .map(&radius)
        .fold(f64::MAX, f64::min);

    let max_speed = output
        .samples
        .iter()
        .map(|s| s.vel.norm())
        .fold(0.0_f64, f64::max);

    let final_state = &output.final_state;

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  RAIL ACCELERATOR LAUNCH SIMULATION");
    println!("====================================================================");
    println!();
    println!("  Launch Setup");
    println!("  ------------------------------------------------------------------");
    println!(
        "  Orientation (roll/pitch/yaw): {:>8.2}° {:>8.2}° {:>8.2}°",
        output.setup.euler.phi.to_degrees(),
        output.setup.euler.theta.to_degrees(),
        output.setup.euler.psi.to_degrees()
    );
    let dir = output.setup.launch_direction.normalize();
    println!(
        "  Launch direction:             [{:>6.3}, {:>6.3}, {:>6.3}]",
        dir.x, dir.y, dir.z
    );
    println!(
        "  Thrust:        {:>10.0} N     Burn window:  [{:.1}, {:.1}) s",
        consts.thrust_mag, consts.t0, consts.tl
    );
    println!();
    println!("  Trajectory");
    println!("  ------------------------------------------------------------------");
    println!(
        "  Apogee radius: {:>10.1} km    Altitude:     {:>8.1} km",
        radius(apogee) / 1000.0,
        (radius(apogee) - consts.body_radius) / 1000.0
    );
    println!(
        "  Perigee radius:{:>10.1} km    Max speed:    {:>8.1} m/s",
        perigee_r / 1000.0,
        max_speed
    );
    println!(
        "  Final state:   t = {:.1} s, radius = {:.1} km, speed = {:.1} m/s",
        final_state.time,
        radius(final_state) / 1000.0,
        final_state.vel.norm()
    );
    println!(
        "  Steps: {}   Samples: {}",
        consts.steps(),
        output.samples.len()
    );
    println!();

    if consts.verbose {
        println!("  Per-sample state");
        println!("  ------------------------------------------------------------------");
        for s in &output.samples {
            let fg = gravity_force(&s.pos, consts.body_mass, s.mass, &consts.origin)
                .map(|f| f.norm())
                .unwrap_or(f64::NAN);
            let fi = if s.time < consts.tl {
                consts.thrust_mag
            } else {
                0.0
            };
            println!(
                "  t = {:>8.1}  Fg = {:>8.1}  Fi = {:>8.1}  x: {:>11.0}  y: {:>11.0}  z: {:>11.0}  mass: {:.1}",
                s.time, fg, fi, s.pos.x, s.pos.y, s.pos.z, s.mass
            );
        }
    }
}
