use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Accelerator thrust
// ---------------------------------------------------------------------------

/// Thrust force of the given magnitude along the direction of `direction`.
///
/// The driver supplies the launch-point vector frozen at setup and switches
/// to a zero magnitude once elapsed time passes the burn cutoff. A zero
/// direction yields the zero vector, matching "no burn".
pub fn thrust_force(direction: &Vector3<f64>, magnitude: f64) -> Vector3<f64> {
    let norm = direction.norm();
    if norm < 1e-12 {
        return Vector3::zeros();
    }
    direction * (magnitude / norm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn magnitude_and_direction() {
        let dir = Vector3::new(0.0, -3.0, 4.0);
        let f = thrust_force(&dir, 10_000.0);
        assert_relative_eq!(f.norm(), 10_000.0, epsilon = 1e-9);
        assert_relative_eq!(f.normalize(), dir.normalize(), epsilon = 1e-12);
    }

    #[test]
    fn zero_direction_gives_zero_force() {
        let f = thrust_force(&Vector3::zeros(), 10_000.0);
        assert_eq!(f, Vector3::zeros());
    }

    #[test]
    fn zero_magnitude_gives_zero_force() {
        let f = thrust_force(&Vector3::x(), 0.0);
        assert_eq!(f, Vector3::zeros());
    }
}
