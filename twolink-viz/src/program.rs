use std::{collections::VecDeque, f64::consts::PI, path::Path};

use twolink_core::Point2D;

/// Number of radius oscillations per sweep revolution.
const SWEEP_BREATHS: f64 = 4.0;

/// Queue of targets, played back one per frame.
pub struct Program(VecDeque<Point2D>);

impl Program {
    /// Load a program from a JSON file of `[x, y]` pairs.
    pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let str = std::fs::read_to_string(path)?;
        Ok(Self::parse(&str)?)
    }

    /// Parse a program from a JSON string of `[x, y]` pairs.
    pub fn parse(str: &str) -> serde_json::Result<Self> {
        Ok(serde_json::from_str::<Vec<[f64; 2]>>(str)?
            .iter()
            .map(|v| Point2D::new(v[0], v[1]))
            .collect())
    }

    /// Targets orbiting the base once while the radius oscillates.
    pub fn sweep(center: Point2D, min_radius: f64, max_radius: f64, frames: usize) -> Self {
        (0..frames)
            .map(|i| {
                let t = i as f64 / frames as f64;
                let theta = 2.0 * PI * t;
                let swing = (1.0 - (2.0 * PI * SWEEP_BREATHS * t).cos()) / 2.0;
                let radius = min_radius + (max_radius - min_radius) * swing;

                Point2D::new(
                    center.x + radius * theta.cos(),
                    center.y + radius * theta.sin(),
                )
            })
            .collect()
    }

    /// Iterate over the remaining targets.
    pub fn iter(&self) -> impl Iterator<Item = &Point2D> {
        self.0.iter()
    }

    /// Number of remaining targets.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take the next target.
    pub fn next(&mut self) -> Option<Point2D> {
        self.0.pop_front()
    }
}

impl FromIterator<Point2D> for Program {
    fn from_iter<T: IntoIterator<Item = Point2D>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse a target from a line of input.
///
/// Coordinates are separated by whitespace or a comma.
pub fn parse_target(line: &str) -> Option<Point2D> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());

    let x = parts.next()?.parse::<f64>().ok()?;
    let y = parts.next()?.parse::<f64>().ok()?;

    if parts.next().is_some() || !x.is_finite() || !y.is_finite() {
        return None;
    }

    Some(Point2D::new(x, y))
}

#[cfg(test)]
mod tests {
    use twolink_core::nalgebra;
    use twolink_core::ArmConfig;

    use super::*;

    #[test]
    fn parse_program() {
        let mut program = Program::parse("[[600, 300], [1000.5, 300.0]]").unwrap();

        assert_eq!(program.len(), 2);
        assert_eq!(program.next(), Some(Point2D::new(600.0, 300.0)));
        assert_eq!(program.next(), Some(Point2D::new(1000.5, 300.0)));
        assert_eq!(program.next(), None);
        assert!(program.is_empty());
    }

    #[test]
    fn demo_program_mixes_reach() {
        let config = ArmConfig::default();
        let program = Program::parse(include_str!("../demos/reach.json")).unwrap();

        assert_eq!(program.len(), 8);
        assert_eq!(program.iter().filter(|p| config.is_within_reach(p)).count(), 6);
    }

    #[test]
    fn parse_malformed_program() {
        assert!(Program::parse("[[600]]").is_err());
        assert!(Program::parse("{\"x\": 1}").is_err());
    }

    #[test]
    fn sweep_crosses_reach() {
        let config = ArmConfig::default();
        let program = Program::sweep(config.base(), 20.0, 400.0, 240);

        assert_eq!(program.len(), 240);
        assert!(program.iter().any(|p| config.is_within_reach(p)));
        assert!(program
            .iter()
            .any(|p| nalgebra::distance(p, &config.base()) > config.reach()));
        assert!(program
            .iter()
            .any(|p| nalgebra::distance(p, &config.base()) < config.inner_reach()));
    }

    #[test]
    fn parse_target_line() {
        assert_eq!(parse_target("600 300"), Some(Point2D::new(600.0, 300.0)));
        assert_eq!(parse_target(" 12.5,\t-4 "), Some(Point2D::new(12.5, -4.0)));
        assert_eq!(parse_target("1, 2"), Some(Point2D::new(1.0, 2.0)));
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target("12"), None);
        assert_eq!(parse_target("a b"), None);
        assert_eq!(parse_target("1 2 3"), None);
        assert_eq!(parse_target("NaN 2"), None);
    }
}
