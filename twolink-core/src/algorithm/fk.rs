use nalgebra::Vector2;

use crate::{ArmConfig, JointAngles, Point2D, Solution};

/// Joint positions of the arm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Base anchor.
    pub base: Point2D,
    /// Elbow connecting both links.
    pub joint: Point2D,
    /// Tip of the second link.
    pub end_effector: Point2D,
}

impl Pose {
    /// Pose with both links retracted onto the base.
    pub fn retracted(base: Point2D) -> Self {
        Self {
            base,
            joint: base,
            end_effector: base,
        }
    }

    /// Test if the arm collapsed onto its base.
    pub fn is_retracted(&self) -> bool {
        self.joint == self.base && self.end_effector == self.base
    }
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Joint: ({:.2}, {:.2}) End effector: ({:.2}, {:.2})",
            self.joint.x, self.joint.y, self.end_effector.x, self.end_effector.y
        )
    }
}

/// Two-link forward kinematics.
pub struct ForwardKinematics {
    l1: f64,
    l2: f64,
    base: Point2D,
}

impl ForwardKinematics {
    /// Construct a projector for the arm.
    pub fn new(config: &ArmConfig) -> Self {
        Self {
            l1: config.link1_length(),
            l2: config.link2_length(),
            base: config.base(),
        }
    }

    /// Project a solution onto joint positions.
    ///
    /// An unreachable solution retracts the arm onto the base anchor.
    pub fn project(&self, solution: &Solution) -> Pose {
        match solution {
            Ok(angles) => self.forward(angles),
            Err(_) => Pose::retracted(self.base),
        }
    }

    /// Calculate joint positions from joint angles.
    pub fn forward(&self, angles: &JointAngles) -> Pose {
        let JointAngles { angle1, angle2 } = *angles;

        let joint = self.base + Vector2::new(angle1.cos(), angle1.sin()) * self.l1;
        let end_effector =
            joint + Vector2::new((angle1 + angle2).cos(), (angle1 + angle2).sin()) * self.l2;

        Pose {
            base: self.base,
            joint,
            end_effector,
        }
    }
}
