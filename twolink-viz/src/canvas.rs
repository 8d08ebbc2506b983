use ansi_term::Colour;
use twolink_core::Point2D;

use crate::config::{ScreenConfig, ViewConfig};

/// What a cell depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    /// Link between base and joint.
    Link1,
    /// Link between joint and end effector.
    Link2,
    /// Base, joint or end effector.
    Marker,
    /// Requested target.
    Target,
}

impl Paint {
    fn colour(&self) -> Colour {
        match self {
            Paint::Link1 => Colour::Red,
            Paint::Link2 => Colour::Green,
            Paint::Marker => Colour::White,
            Paint::Target => Colour::Yellow,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub paint: Paint,
}

/// Character raster covering the logical screen.
///
/// Screen coordinates grow right and down. Anything drawn outside the
/// raster is clipped.
pub struct Canvas {
    columns: usize,
    rows: usize,
    scale_x: f64,
    scale_y: f64,
    cells: Vec<Option<Glyph>>,
}

impl Canvas {
    pub fn new(screen: &ScreenConfig, view: &ViewConfig) -> Self {
        Self {
            columns: view.columns,
            rows: view.rows,
            scale_x: view.columns as f64 / screen.width as f64,
            scale_y: view.rows as f64 / screen.height as f64,
            cells: vec![None; view.columns * view.rows],
        }
    }

    /// Erase all cells.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Map a screen point onto a cell position.
    ///
    /// The position may lie outside the raster.
    pub fn cell_of(&self, point: &Point2D) -> (i64, i64) {
        (
            (point.x * self.scale_x).floor() as i64,
            (point.y * self.scale_y).floor() as i64,
        )
    }

    /// Glyph at the cell, if any.
    pub fn get(&self, column: i64, row: i64) -> Option<Glyph> {
        self.index(column, row).and_then(|idx| self.cells[idx])
    }

    fn index(&self, column: i64, row: i64) -> Option<usize> {
        if column < 0 || row < 0 {
            return None;
        }

        let (column, row) = (column as usize, row as usize);
        if column >= self.columns || row >= self.rows {
            None
        } else {
            Some(row * self.columns + column)
        }
    }

    fn plot(&mut self, column: i64, row: i64, glyph: Glyph) {
        if let Some(idx) = self.index(column, row) {
            self.cells[idx] = Some(glyph);
        }
    }

    /// Draw a line segment between two screen points.
    ///
    /// The segment is clipped to the raster before it is walked.
    pub fn line(&mut self, from: &Point2D, to: &Point2D, paint: Paint) {
        let (fx0, fy0) = (from.x * self.scale_x, from.y * self.scale_y);
        let (fx1, fy1) = (to.x * self.scale_x, to.y * self.scale_y);

        let glyph = Glyph {
            ch: slope_char(fx1.floor() - fx0.floor(), fy1.floor() - fy0.floor()),
            paint,
        };

        let Some((fx0, fy0, fx1, fy1)) =
            clip(fx0, fy0, fx1, fy1, self.columns as f64, self.rows as f64)
        else {
            return;
        };

        let max_column = self.columns as i64 - 1;
        let max_row = self.rows as i64 - 1;

        let mut x0 = (fx0.floor() as i64).clamp(0, max_column);
        let mut y0 = (fy0.floor() as i64).clamp(0, max_row);
        let x1 = (fx1.floor() as i64).clamp(0, max_column);
        let y1 = (fy1.floor() as i64).clamp(0, max_row);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, glyph);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Place a single glyph at a screen point.
    pub fn marker(&mut self, point: &Point2D, ch: char, paint: Paint) {
        if !(point.x.is_finite() && point.y.is_finite()) {
            return;
        }

        let (column, row) = self.cell_of(point);
        self.plot(column, row, Glyph { ch, paint });
    }

    /// Render the raster, one line per row.
    pub fn render(&self, color: bool) -> String {
        let mut out = String::with_capacity((self.columns + 1) * self.rows);

        for (idx, row) in self.cells.chunks(self.columns).enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            for cell in row {
                match cell {
                    Some(glyph) if color => {
                        out.push_str(&glyph.paint.colour().paint(glyph.ch.to_string()).to_string())
                    }
                    Some(glyph) => out.push(glyph.ch),
                    None => out.push(' '),
                }
            }
        }

        out
    }
}

/// Clip a segment to the rectangle `[0, width] x [0, height]` (Liang-Barsky).
///
/// Returns `None` when the segment misses the rectangle or is not finite.
fn clip(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    width: f64,
    height: f64,
) -> Option<(f64, f64, f64, f64)> {
    let dx = x1 - x0;
    let dy = y1 - y0;
    if !(x0.is_finite() && y0.is_finite() && dx.is_finite() && dy.is_finite()) {
        return None;
    }

    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [(-dx, x0), (dx, width - x0), (-dy, y0), (dy, height - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }

    Some((x0 + t0 * dx, y0 + t0 * dy, x0 + t1 * dx, y0 + t1 * dy))
}

fn slope_char(dx: f64, dy: f64) -> char {
    if dx.abs() > 2.0 * dy.abs() {
        '-'
    } else if dy.abs() > 2.0 * dx.abs() {
        '|'
    } else if (dx > 0.0) == (dy > 0.0) {
        '\\'
    } else {
        '/'
    }
}
