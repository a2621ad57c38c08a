/// Rotation operators about the principal axes
use nalgebra::Point3;

/// Rotate `p` by `angle` radians about the X axis (right-handed)
pub fn rotate_x(p: &Point3<f64>, angle: f64) -> Point3<f64> {
    let (sin, cos) = angle.sin_cos();
    Point3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

/// Rotate `p` by `angle` radians about the Y axis (right-handed)
pub fn rotate_y(p: &Point3<f64>, angle: f64) -> Point3<f64> {
    let (sin, cos) = angle.sin_cos();
    Point3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos)
}

/// Rotate `p` by `angle` radians about the Z axis (right-handed)
pub fn rotate_z(p: &Point3<f64>, angle: f64) -> Point3<f64> {
    let (sin, cos) = angle.sin_cos();
    Point3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}

/// Incremental rotation for a single frame (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationStep {
    pub x: f64,
    pub y: f64,
}

impl RotationStep {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Apply the step to a point: Y first, then X
    pub fn apply(&self, p: &Point3<f64>) -> Point3<f64> {
        rotate_x(&rotate_y(p, self.y), self.x)
    }
}

impl Default for RotationStep {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Rotation3, Vector3};
    use std::f64::consts::PI;

    const SAMPLES: [(f64, f64, f64); 4] = [
        (1.0, -1.0, -1.0),
        (0.3, 0.7, -0.2),
        (-5.0, 2.5, 10.0),
        (0.0, 0.0, 0.0),
    ];

    const ANGLES: [f64; 5] = [0.0, 0.1, -1.3, PI, 7.5];

    fn close(a: &Point3<f64>, b: &Point3<f64>) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn test_rotations_preserve_magnitude() {
        for &(x, y, z) in &SAMPLES {
            let p = Point3::new(x, y, z);
            let len = p.coords.norm();
            for &angle in &ANGLES {
                assert!((rotate_x(&p, angle).coords.norm() - len).abs() < 1e-9);
                assert!((rotate_y(&p, angle).coords.norm() - len).abs() < 1e-9);
                assert!((rotate_z(&p, angle).coords.norm() - len).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_rotate_x_round_trip() {
        for &(x, y, z) in &SAMPLES {
            let p = Point3::new(x, y, z);
            for &angle in &ANGLES {
                let back = rotate_x(&rotate_x(&p, angle), -angle);
                assert!(close(&back, &p));
            }
        }
    }

    #[test]
    fn test_matches_right_handed_rotation_matrices() {
        let p = Point3::new(0.3, 0.7, -0.2);
        let angle = 0.8;
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), angle);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), angle);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), angle);
        assert!(close(&rotate_x(&p, angle), &(rx * p)));
        assert!(close(&rotate_y(&p, angle), &(ry * p)));
        assert!(close(&rotate_z(&p, angle), &(rz * p)));
    }

    #[test]
    fn test_quarter_turns() {
        let q = PI / 2.0;
        assert!(close(
            &rotate_x(&Point3::new(0.0, 1.0, 0.0), q),
            &Point3::new(0.0, 0.0, 1.0)
        ));
        assert!(close(
            &rotate_y(&Point3::new(0.0, 0.0, 1.0), q),
            &Point3::new(1.0, 0.0, 0.0)
        ));
        assert!(close(
            &rotate_z(&Point3::new(1.0, 0.0, 0.0), q),
            &Point3::new(0.0, 1.0, 0.0)
        ));
    }

    #[test]
    fn test_nan_propagates() {
        let p = rotate_y(&Point3::new(1.0, 2.0, 3.0), f64::NAN);
        assert!(p.x.is_nan());
        assert_eq!(p.y, 2.0);
        assert!(p.z.is_nan());
    }

    #[test]
    fn test_step_applies_y_then_x() {
        let p = Point3::new(1.0, -1.0, -1.0);
        let step = RotationStep::new(0.4, -0.9);
        let expected = rotate_x(&rotate_y(&p, -0.9), 0.4);
        assert!(close(&step.apply(&p), &expected));
        assert_eq!(RotationStep::zero().apply(&p), p);
    }
}
