use nalgebra::Vector3;

use crate::error::SimError;

// ---------------------------------------------------------------------------
// Central-body point-mass gravity
// ---------------------------------------------------------------------------

/// Gravitational constant, m^3/(kg s^2).
pub const G: f64 = 6.674_30e-11;

/// Separation below this is treated as coincident with the body center.
const MIN_SEPARATION: f64 = 1e-9;

/// Gravitational force on a point mass `mass` at position `r` due to a
/// central mass `body_mass` located at `origin`.
///
/// Magnitude `G*M*m / |r - origin|^2`, directed from the projectile toward
/// the origin. Zero separation is undefined and indicates a configuration
/// error (projectile initialized inside the body center).
pub fn gravity_force(
    r: &Vector3<f64>,
    body_mass: f64,
    mass: f64,
    origin: &Vector3<f64>,
) -> Result<Vector3<f64>, SimError> {
    Ok(gravity_accel(r, body_mass, origin)? * mass)
}

/// Gravitational acceleration at `r` due to `body_mass` at `origin`.
pub fn gravity_accel(
    r: &Vector3<f64>,
    body_mass: f64,
    origin: &Vector3<f64>,
) -> Result<Vector3<f64>, SimError> {
    let rel = r - origin;
    let dist = rel.norm();
    if dist < MIN_SEPARATION {
        return Err(SimError::DegenerateGeometry);
    }
    Ok(rel * (-G * body_mass / (dist * dist * dist)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::{M_EARTH, R_EARTH};
    use approx::assert_relative_eq;

    #[test]
    fn surface_gravity_magnitude() {
        let r = Vector3::new(R_EARTH, 0.0, 0.0);
        let a = gravity_accel(&r, M_EARTH, &Vector3::zeros()).unwrap();
        assert_relative_eq!(a.norm(), 9.82, epsilon = 2e-2);
    }

    #[test]
    fn points_toward_origin() {
        let origin = Vector3::new(1.0e6, -2.0e6, 0.5e6);
        let r = Vector3::new(8.0e6, 1.0e6, -3.0e6);
        let f = gravity_force(&r, M_EARTH, 10.0, &origin).unwrap();
        let toward = (origin - r).normalize();
        assert_relative_eq!(f.normalize(), toward, epsilon = 1e-12);
    }

    #[test]
    fn inverse_square_scaling() {
        let origin = Vector3::zeros();
        let f1 = gravity_force(&Vector3::new(R_EARTH, 0.0, 0.0), M_EARTH, 1.0, &origin)
            .unwrap()
            .norm();
        let f2 = gravity_force(&Vector3::new(2.0 * R_EARTH, 0.0, 0.0), M_EARTH, 1.0, &origin)
            .unwrap()
            .norm();
        assert_relative_eq!(f1 / f2, 4.0, epsilon = 1e-10);
    }

    #[test]
    fn force_scales_with_projectile_mass() {
        let r = Vector3::new(0.0, 0.0, R_EARTH);
        let f1 = gravity_force(&r, M_EARTH, 1.0, &Vector3::zeros()).unwrap();
        let f5 = gravity_force(&r, M_EARTH, 5.0, &Vector3::zeros()).unwrap();
        assert_relative_eq!(f5, f1 * 5.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_separation_is_rejected() {
        let origin = Vector3::new(1.0, 2.0, 3.0);
        let err = gravity_force(&origin, M_EARTH, 1.0, &origin).unwrap_err();
        assert_eq!(err, SimError::DegenerateGeometry);
    }
}
