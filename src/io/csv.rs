use std::io::{self, Write};

use crate::dynamics::state::State;

/// Write sampled trajectory states to CSV format.
///
/// Columns: time, pos_x, pos_y, pos_z, vel_x, vel_y, vel_z,
///          phi, theta, psi, mass
pub fn write_trajectory<W: Write>(writer: &mut W, samples: &[State]) -> io::Result<()> {
    writeln!(
        writer,
        "time,pos_x,pos_y,pos_z,vel_x,vel_y,vel_z,phi,theta,psi,mass"
    )?;

    for s in samples {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.9},{:.9},{:.9},{:.4}",
            s.time,
            s.pos.x,
            s.pos.y,
            s.pos.z,
            s.vel.x,
            s.vel.y,
            s.vel.z,
            s.att.phi,
            s.att.theta,
            s.att.psi,
            s.mass,
        )?;
    }

    Ok(())
}

/// Write sampled trajectory states to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, samples: &[State]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::EulerAngles;
    use nalgebra::Vector3;

    fn sample(time: f64) -> State {
        State {
            time,
            pos: Vector3::new(1.0, 2.0, 3.0),
            vel: Vector3::new(-0.5, 0.0, 0.25),
            att: EulerAngles::new(0.1, 0.2, 0.3),
            mass: 10.0,
        }
    }

    #[test]
    fn header_and_row_count() {
        let samples = vec![sample(0.0), sample(1.0), sample(2.0)];
        let mut buf = Vec::new();
        write_trajectory(&mut buf, &samples).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("time,pos_x"));
        assert_eq!(lines[0].split(',').count(), 11);
        assert_eq!(lines[1].split(',').count(), 11);
    }

    #[test]
    fn values_round_to_columns() {
        let mut buf = Vec::new();
        write_trajectory(&mut buf, &[sample(1.5)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let row: Vec<&str> = text.lines().nth(1).unwrap().split(',').collect();
        assert_eq!(row[0], "1.5000");
        assert_eq!(row[1], "1.0000");
        assert_eq!(row[10], "10.0000");
    }
}
