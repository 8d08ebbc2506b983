use serde_derive::Deserialize;
use twolink_core::ArmConfig;

/// Logical screen the targets are expressed in.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScreenConfig {
    /// Screen width in pixels.
    pub width: u32,
    /// Screen height in pixels.
    pub height: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Terminal canvas and frame pacing.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewConfig {
    /// Canvas width in character cells.
    pub columns: usize,
    /// Canvas height in character cells.
    pub rows: usize,
    /// Frames per second.
    pub fps: u32,
    /// Colorize the canvas and status text.
    pub color: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            columns: 80,
            rows: 30,
            fps: 60,
            color: true,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Arm geometry.
    pub arm: ArmConfig,
    /// Screen configuration.
    pub screen: ScreenConfig,
    /// View configuration.
    pub view: ViewConfig,
}

impl Config {
    /// Check the values the deserializer cannot.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.screen.width == 0 || self.screen.height == 0 {
            anyhow::bail!("screen size must be non-zero");
        }
        if self.view.columns == 0 || self.view.rows == 0 {
            anyhow::bail!("canvas size must be non-zero");
        }
        if self.view.fps == 0 {
            anyhow::bail!("frame rate must be non-zero");
        }

        Ok(())
    }

    /// Interval between two frames.
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.view.fps as f64)
    }
}
