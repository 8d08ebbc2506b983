use serde_derive::Deserialize;

use crate::{Error, Point2D};

/// Default length of the first link.
pub const DEFAULT_LINK1_LENGTH: f64 = 200.0;
/// Default length of the second link.
pub const DEFAULT_LINK2_LENGTH: f64 = 150.0;
/// Default base anchor, the center of an 800x600 screen.
pub const DEFAULT_BASE: [f64; 2] = [400.0, 300.0];

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
struct RawArmConfig {
    link1_length: f64,
    link2_length: f64,
    base: [f64; 2],
}

impl Default for RawArmConfig {
    fn default() -> Self {
        Self {
            link1_length: DEFAULT_LINK1_LENGTH,
            link2_length: DEFAULT_LINK2_LENGTH,
            base: DEFAULT_BASE,
        }
    }
}

/// Arm geometry.
///
/// Two links of fixed length attached to a fixed base anchor. The
/// configuration is validated on construction and never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawArmConfig")]
pub struct ArmConfig {
    link1_length: f64,
    link2_length: f64,
    base: Point2D,
}

impl ArmConfig {
    /// Construct a new arm configuration.
    ///
    /// Both link lengths must be positive and finite.
    pub fn new(link1_length: f64, link2_length: f64, base: Point2D) -> Result<Self, Error> {
        if !(link1_length.is_finite() && link1_length > 0.0) {
            return Err(Error::InvalidLength("link1_length", link1_length));
        }
        if !(link2_length.is_finite() && link2_length > 0.0) {
            return Err(Error::InvalidLength("link2_length", link2_length));
        }
        if !(base.x.is_finite() && base.y.is_finite()) {
            return Err(Error::InvalidValue("base must be a finite point"));
        }

        Ok(Self {
            link1_length,
            link2_length,
            base,
        })
    }

    /// Length of the link attached to the base.
    #[inline]
    pub fn link1_length(&self) -> f64 {
        self.link1_length
    }

    /// Length of the link carrying the end effector.
    #[inline]
    pub fn link2_length(&self) -> f64 {
        self.link2_length
    }

    /// Base anchor of the first link.
    #[inline]
    pub fn base(&self) -> Point2D {
        self.base
    }

    /// Distance from the base at full extension.
    #[inline]
    pub fn reach(&self) -> f64 {
        self.link1_length + self.link2_length
    }

    /// Distance from the base when fully folded.
    #[inline]
    pub fn inner_reach(&self) -> f64 {
        (self.link1_length - self.link2_length).abs()
    }

    /// Test if the point lies within the reachable annulus.
    pub fn is_within_reach(&self, point: &Point2D) -> bool {
        let distance = nalgebra::distance(&self.base, point);
        distance >= self.inner_reach() && distance <= self.reach()
    }
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            link1_length: DEFAULT_LINK1_LENGTH,
            link2_length: DEFAULT_LINK2_LENGTH,
            base: Point2D::new(DEFAULT_BASE[0], DEFAULT_BASE[1]),
        }
    }
}

impl TryFrom<RawArmConfig> for ArmConfig {
    type Error = Error;

    fn try_from(value: RawArmConfig) -> Result<Self, Self::Error> {
        ArmConfig::new(
            value.link1_length,
            value.link2_length,
            Point2D::new(value.base[0], value.base[1]),
        )
    }
}

impl std::fmt::Display for ArmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Link 1: {:.1}, Link 2: {:.1}, Base: ({:.1}, {:.1}), Reach: [{:.1}, {:.1}]",
            self.link1_length,
            self.link2_length,
            self.base.x,
            self.base.y,
            self.inner_reach(),
            self.reach()
        )
    }
}
