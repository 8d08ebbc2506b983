use ansi_term::Colour;
use twolink_core::{Point2D, Pose, Solution};

/// Text overlay describing a single frame.
pub struct Status {
    lines: Vec<(String, bool)>,
}

impl Status {
    pub fn new(target: &Point2D, solution: &Solution, pose: &Pose) -> Self {
        let mut lines = vec![(
            format!("Target: ({}, {})", target.x, target.y),
            false,
        )];

        match solution {
            Ok(angles) => {
                lines.push((format!("Angle1: {:.2}°", angles.angle1_degree()), false));
                lines.push((format!("Angle2: {:.2}°", angles.angle2_degree()), false));
                lines.push((format!("Joint1: {}", truncated(&pose.joint)), false));
                lines.push((
                    format!("End Effector: {}", truncated(&pose.end_effector)),
                    false,
                ));
            }
            Err(_) => lines.push(("Target out of reach".to_string(), true)),
        }

        Self { lines }
    }

    /// Plain status lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|(line, _)| line.as_str())
    }

    /// Render the status, alerts in red when colored.
    pub fn render(&self, color: bool) -> String {
        self.lines
            .iter()
            .map(|(line, alert)| {
                if *alert && color {
                    Colour::Red.paint(line.as_str()).to_string()
                } else {
                    line.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Format point coordinates truncated toward zero.
fn truncated(point: &Point2D) -> String {
    format!("({}, {})", point.x.trunc() as i64, point.y.trunc() as i64)
}
