use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use twolink_core::Point2D;

use crate::canvas::Canvas;
use crate::config::Config;
use crate::frame::{Frame, Kinematics, Stats};
use crate::program::{self, Program};

/// Clear the terminal and home the cursor.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Renders frames to an output stream.
pub struct Viewer<W> {
    kinematics: Kinematics,
    canvas: Option<Canvas>,
    color: bool,
    stats: Stats,
    out: W,
}

impl<W: Write> Viewer<W> {
    /// Construct a new viewer.
    ///
    /// Without a canvas only the status text is printed.
    pub fn new(config: &Config, with_canvas: bool, out: W) -> Self {
        Self {
            kinematics: Kinematics::new(&config.arm),
            canvas: with_canvas.then(|| Canvas::new(&config.screen, &config.view)),
            color: config.view.color,
            stats: Stats::default(),
            out,
        }
    }

    /// Frame counters so far.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Consume the viewer and return the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Compute and print the frame for a single target.
    pub fn show(&mut self, target: Point2D) -> std::io::Result<()> {
        let frame = self.kinematics.frame(target);
        self.stats.record(&frame);

        match &frame.solution {
            Ok(angles) => log::debug!("{} {}", angles, frame.pose),
            Err(e) => log::debug!("({:.1}, {:.1}): {}", target.x, target.y, e),
        }

        self.print(&frame)
    }

    fn print(&mut self, frame: &Frame) -> std::io::Result<()> {
        if let Some(canvas) = self.canvas.as_mut() {
            frame.draw(canvas);
            write!(self.out, "{}", CLEAR_SCREEN)?;
            writeln!(self.out, "{}", canvas.render(self.color))?;
        }

        writeln!(self.out, "{}", frame.status().render(self.color))?;
        self.out.flush()
    }

    /// Play the program back at a fixed frame rate.
    pub async fn play(
        &mut self,
        mut program: Program,
        period: std::time::Duration,
    ) -> std::io::Result<()> {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        while let Some(target) = program.next() {
            interval.tick().await;
            self.show(target)?;
        }

        Ok(())
    }

    /// Show a frame for every target line read from the input.
    ///
    /// Blank lines are ignored, malformed lines are skipped with a warning.
    pub async fn follow<R: AsyncBufRead + Unpin>(&mut self, input: R) -> std::io::Result<()> {
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            match program::parse_target(&line) {
                Some(target) => self.show(target)?,
                None => log::warn!("Ignoring malformed target: {}", line.trim()),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn viewer(with_canvas: bool) -> Viewer<Vec<u8>> {
        let mut config = Config::default();
        config.view.color = false;

        Viewer::new(&config, with_canvas, Vec::new())
    }

    fn output(viewer: Viewer<Vec<u8>>) -> String {
        String::from_utf8(viewer.into_inner()).unwrap()
    }

    #[tokio::test]
    async fn follow_skips_blank_and_malformed_lines() {
        let mut viewer = viewer(false);
        let input: &[u8] = b"600 300\n\n   \nnot a target\n1000,300\n1 2 3\n";

        viewer.follow(input).await.unwrap();

        assert_eq!(
            viewer.stats(),
            &Stats {
                frames: 2,
                unreachable: 1
            }
        );

        let out = output(viewer);
        assert!(out.contains("Target: (600, 300)"));
        assert!(out.contains("Angle1: -44.05°"));
        assert!(out.contains("Target: (1000, 300)\nTarget out of reach"));
        assert!(!out.contains("not a target"));
    }

    #[tokio::test]
    async fn play_consumes_program() {
        let mut viewer = viewer(false);
        let program = Program::parse("[[600, 300], [750, 300], [1000, 300]]").unwrap();

        viewer
            .play(program, Duration::from_millis(1))
            .await
            .unwrap();

        assert_eq!(viewer.stats().frames, 3);
        assert_eq!(viewer.stats().unreachable, 1);
        assert_eq!(output(viewer).matches("Target: ").count(), 3);
    }

    #[test]
    fn status_only_without_canvas() {
        let mut viewer = viewer(false);

        viewer.show(Point2D::new(1000.0, 300.0)).unwrap();

        assert_eq!(output(viewer), "Target: (1000, 300)\nTarget out of reach\n");
    }

    #[test]
    fn canvas_precedes_status() {
        let mut viewer = viewer(true);

        viewer.show(Point2D::new(600.0, 300.0)).unwrap();

        let out = output(viewer);
        assert!(out.starts_with(CLEAR_SCREEN));
        // Canvas rows, then five status lines.
        assert_eq!(out.lines().count(), 30 + 5);
        assert!(out.lines().nth(30).unwrap().starts_with("Target: (600, 300)"));
    }
}
