// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

/// The `twolink-core` library solves a planar arm with two rigid links.
///
/// The `algorithm` module holds the analytic inverse kinematics solver and the
/// forward kinematics projector. The `config` module holds the arm geometry,
/// which is validated once and then shared read-only for the lifetime of the
/// process.
pub mod algorithm;
pub mod config;

mod error;

#[macro_use]
extern crate log;

pub use self::algorithm::{
    ForwardKinematics, InverseKinematics, JointAngles, Pose, Solution, Unreachable,
};
pub use self::config::ArmConfig;
pub use self::error::Error;

pub use nalgebra;

/// Planar point in screen space.
pub type Point2D = nalgebra::Point2<f64>;

/// Load a TOML configuration file.
pub fn from_file<T: serde::de::DeserializeOwned, P: AsRef<std::path::Path>>(
    path: P,
) -> Result<T, Error> {
    let contents = std::fs::read_to_string(path)?;
    from_str(&contents)
}

/// Parse a TOML configuration string.
pub fn from_str<T: serde::de::DeserializeOwned>(contents: &str) -> Result<T, Error> {
    Ok(toml::from_str(contents)?)
}
