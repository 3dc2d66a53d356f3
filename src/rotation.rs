use nalgebra::{Matrix3, Vector3};

use crate::error::SimError;

// ---------------------------------------------------------------------------
// Euler angles (3-2-1 yaw-pitch-roll sequence)
// ---------------------------------------------------------------------------

/// Euler angle triple for the 3-2-1 rotation sequence, radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub phi: f64,   // roll, third rotation about body x
    pub theta: f64, // pitch, second rotation about intermediate y
    pub psi: f64,   // yaw, first rotation about inertial z
}

impl EulerAngles {
    pub fn new(phi: f64, theta: f64, psi: f64) -> Self {
        Self { phi, theta, psi }
    }
}

/// Axis norm below this is treated as zero-length.
const MIN_AXIS_NORM: f64 = 1e-12;

// ---------------------------------------------------------------------------
// Euler <-> DCM conversions
// ---------------------------------------------------------------------------

/// Direction cosine matrix for the 3-2-1 sequence, `C = R1(phi)*R2(theta)*R3(psi)`.
///
/// Passive convention: `C * v` expresses the inertial vector `v` in the
/// rotated (body) frame. Inverse of [`euler_from_dcm`] away from the
/// theta = ±90° singularity.
pub fn dcm_from_euler(e: &EulerAngles) -> Matrix3<f64> {
    let (sphi, cphi) = e.phi.sin_cos();
    let (sth, cth) = e.theta.sin_cos();
    let (spsi, cpsi) = e.psi.sin_cos();

    Matrix3::new(
        cth * cpsi,
        cth * spsi,
        -sth,
        sphi * sth * cpsi - cphi * spsi,
        sphi * sth * spsi + cphi * cpsi,
        sphi * cth,
        cphi * sth * cpsi + sphi * spsi,
        cphi * sth * spsi - sphi * cpsi,
        cphi * cth,
    )
}

/// Extract 3-2-1 Euler angles from a DCM.
///
/// The arcsine argument is clamped to [-1, 1] so a matrix perturbed past the
/// pitch singularity still yields a finite, deterministic result instead of
/// NaN. Inputs are assumed orthonormal; arbitrary matrices are not validated.
pub fn euler_from_dcm(m: &Matrix3<f64>) -> EulerAngles {
    EulerAngles {
        phi: m[(1, 2)].atan2(m[(2, 2)]),
        theta: (-m[(0, 2)]).clamp(-1.0, 1.0).asin(),
        psi: m[(0, 1)].atan2(m[(0, 0)]),
    }
}

// ---------------------------------------------------------------------------
// Angle-axis construction (Rodrigues' formula)
// ---------------------------------------------------------------------------

/// Angle between two nonzero vectors, in [0, pi].
///
/// The dot product of the unit vectors is clamped to [-1, 1] before `acos`
/// to guard against floating-point overshoot for (anti)parallel inputs.
pub fn angle_between(u: &Vector3<f64>, v: &Vector3<f64>) -> f64 {
    let cos = u.normalize().dot(&v.normalize());
    cos.clamp(-1.0, 1.0).acos()
}

/// Rotation matrix from an angle and an axis via Rodrigues' formula.
///
/// The axis need not be pre-normalized. Active convention: the returned
/// matrix rotates vectors by `angle` about `axis` (right-hand rule).
/// A zero-length axis is a degenerate rotation and is rejected rather than
/// divided by.
pub fn dcm_from_angle_axis(angle: f64, axis: &Vector3<f64>) -> Result<Matrix3<f64>, SimError> {
    let norm = axis.norm();
    if norm < MIN_AXIS_NORM {
        return Err(SimError::InvalidAxis);
    }
    let n = axis / norm;
    let (s, c) = angle.sin_cos();

    let skew = Matrix3::new(0.0, -n.z, n.y, n.z, 0.0, -n.x, -n.y, n.x, 0.0);
    let outer = n * n.transpose();

    Ok(Matrix3::identity() * c + outer * (1.0 - c) + skew * s)
}

/// Rotation aligning the direction of `u` with the direction of `v`:
/// axis = u × v, angle = [`angle_between`]. The returned matrix maps û to v̂.
///
/// Degenerate geometry is handled explicitly: parallel inputs yield the
/// identity, antiparallel inputs a half-turn about an arbitrary axis
/// perpendicular to `u`. Zero-length inputs are rejected.
pub fn rotation_between(u: &Vector3<f64>, v: &Vector3<f64>) -> Result<Matrix3<f64>, SimError> {
    if u.norm() < MIN_AXIS_NORM || v.norm() < MIN_AXIS_NORM {
        return Err(SimError::InvalidAxis);
    }
    let u_hat = u.normalize();
    let v_hat = v.normalize();

    let angle = angle_between(&u_hat, &v_hat);
    let axis = u_hat.cross(&v_hat);

    if axis.norm() < MIN_AXIS_NORM {
        if angle < std::f64::consts::FRAC_PI_2 {
            return Ok(Matrix3::identity());
        }
        return dcm_from_angle_axis(std::f64::consts::PI, &perpendicular_to(&u_hat));
    }
    dcm_from_angle_axis(angle, &axis)
}

/// Any unit vector perpendicular to the given unit vector.
fn perpendicular_to(n: &Vector3<f64>) -> Vector3<f64> {
    let candidate = n.cross(&Vector3::x());
    if candidate.norm() > MIN_AXIS_NORM {
        candidate.normalize()
    } else {
        n.cross(&Vector3::y()).normalize()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
