use crate::{ArmConfig, Point2D};

/// Margin kept below full extension when clamping the target distance.
pub const REACH_EPSILON: f64 = 1.0;

/// Joint angles in radians.
///
/// The first angle is measured from the positive x-axis at the base, the
/// second is the elbow angle relative to the first link.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointAngles {
    pub angle1: f64,
    pub angle2: f64,
}

impl JointAngles {
    /// Construct joint angles from radians.
    pub fn new(angle1: f64, angle2: f64) -> Self {
        Self { angle1, angle2 }
    }

    /// Get the first angle in degrees.
    pub fn angle1_degree(&self) -> f64 {
        self.angle1.to_degrees()
    }

    /// Get the second angle in degrees.
    pub fn angle2_degree(&self) -> f64 {
        self.angle2.to_degrees()
    }
}

impl std::fmt::Display for JointAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Angle1: {:+.3}rad ({:+.1}°) Angle2: {:+.3}rad ({:+.1}°)",
            self.angle1,
            self.angle1_degree(),
            self.angle2,
            self.angle2_degree()
        )
    }
}

/// Target lies outside the reachable annulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unreachable;

impl std::fmt::Display for Unreachable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "target out of reach")
    }
}

impl std::error::Error for Unreachable {}

/// Outcome of a single solve.
pub type Solution = Result<JointAngles, Unreachable>;

/// Analytic two-link inverse kinematics.
///
/// Always yields the branch with a non-negative elbow angle.
pub struct InverseKinematics {
    l1: f64,
    l2: f64,
    base: Point2D,
}

impl InverseKinematics {
    /// Construct a solver for the arm.
    pub fn new(config: &ArmConfig) -> Self {
        Self {
            l1: config.link1_length(),
            l2: config.link2_length(),
            base: config.base(),
        }
    }

    /// Solve the joint angles placing the end effector at the target.
    pub fn solve(&self, target: &Point2D) -> Solution {
        let dx = target.x - self.base.x;
        let dy = target.y - self.base.y;

        // The clamped distance is informational. The angle formulas below
        // work on the raw displacement.
        let distance = (dx.powi(2) + dy.powi(2)).sqrt();
        let clamped = distance.min(self.l1 + self.l2 - REACH_EPSILON);
        trace!("IK distance: {:.2} (clamped {:.2})", distance, clamped);

        let cos_angle2 = (dx.powi(2) + dy.powi(2) - self.l1.powi(2) - self.l2.powi(2))
            / (2.0 * self.l1 * self.l2);
        trace!("IK cos(angle2): {:.4}", cos_angle2);

        // NaN fails this test as well.
        if !(cos_angle2.abs() <= 1.0) {
            debug!("IK target ({:.1}, {:.1}) out of reach", target.x, target.y);
            return Err(Unreachable);
        }

        let angle2 = cos_angle2.acos();
        let sin_angle2 = angle2.sin();

        let k1 = self.l1 + self.l2 * cos_angle2;
        let k2 = self.l2 * sin_angle2;

        let angle1 = dy.atan2(dx) - k2.atan2(k1);

        let angles = JointAngles { angle1, angle2 };
        trace!("IK {}", angles);

        Ok(angles)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;

    fn reference() -> InverseKinematics {
        InverseKinematics::new(&ArmConfig::default())
    }

    #[test]
    fn solve_reference_target() {
        let angles = reference().solve(&Point2D::new(600.0, 300.0)).unwrap();

        assert_abs_diff_eq!(angles.angle2, (-0.375_f64).acos(), epsilon = 1e-12);
        assert_abs_diff_eq!(angles.angle2, 1.955193, epsilon = 1e-6);
        assert_abs_diff_eq!(angles.angle1, -0.768794, epsilon = 1e-6);
        assert_abs_diff_eq!(angles.angle2_degree(), 112.0243, epsilon = 1e-4);
        assert_abs_diff_eq!(angles.angle1_degree(), -44.0486, epsilon = 1e-4);
    }

    #[test]
    fn solve_beyond_reach() {
        let ik = reference();

        assert_eq!(ik.solve(&Point2D::new(1000.0, 300.0)), Err(Unreachable));
        assert_eq!(ik.solve(&Point2D::new(400.0, 651.0)), Err(Unreachable));
    }

    #[test]
    fn solve_inside_inner_reach() {
        let ik = reference();

        assert_eq!(ik.solve(&Point2D::new(400.0, 300.0)), Err(Unreachable));
        assert_eq!(ik.solve(&Point2D::new(420.0, 320.0)), Err(Unreachable));
    }

    #[test]
    fn solve_non_finite_target() {
        let ik = reference();

        assert_eq!(ik.solve(&Point2D::new(f64::NAN, 0.0)), Err(Unreachable));
        assert_eq!(ik.solve(&Point2D::new(f64::INFINITY, 0.0)), Err(Unreachable));
    }

    #[test]
    fn solve_full_extension() {
        let angles = reference().solve(&Point2D::new(400.0, 650.0)).unwrap();

        assert_eq!(angles.angle2, 0.0);
        assert_abs_diff_eq!(angles.angle1, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn solve_full_fold() {
        let angles = reference().solve(&Point2D::new(450.0, 300.0)).unwrap();

        assert_eq!(angles.angle2, PI);
        assert_abs_diff_eq!(angles.angle1, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn elbow_angle_is_never_negative() {
        let ik = reference();

        for step in 0..360 {
            let theta = (step as f64).to_radians();
            for radius in [50.0, 120.0, 200.0, 275.0, 349.0, 350.0] {
                let target =
                    Point2D::new(400.0 + radius * theta.cos(), 300.0 + radius * theta.sin());
                if let Ok(angles) = ik.solve(&target) {
                    assert!(angles.angle2 >= 0.0 && angles.angle2 <= PI);
                }
            }
        }
    }

    #[test]
    fn solve_is_deterministic() {
        let ik = reference();
        let target = Point2D::new(512.5, 187.25);

        assert_eq!(ik.solve(&target), ik.solve(&target));
    }
}
