pub mod fk;
pub mod ik;

pub use fk::{ForwardKinematics, Pose};
pub use ik::{InverseKinematics, JointAngles, Solution, Unreachable};
