use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A fixed-size 2D drawing target with canvas-like primitives.
///
/// Coordinates are in pixels with the origin at the top-left corner.
pub trait Surface {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Draw `text` with its baseline starting at `at`.
    fn fill_text(&mut self, text: &str, at: Point, font: &str, color: &str);

    /// Stroke an open path through `points`. A path of `n` points has
    /// `n - 1` segments.
    fn stroke_path(&mut self, points: &[Point], color: &str, line_width: f64);

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);
}

/// A single recorded draw call, serializable for replay on a host canvas.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "op", rename_all = "snake_case")]
#[ts(export)]
pub enum DrawCommand {
    Clear,
    Text {
        text: String,
        at: Point,
        font: String,
        color: String,
    },
    Path {
        points: Vec<Point>,
        color: String,
        line_width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        color: String,
    },
}

/// A [`Surface`] that records draw calls instead of rasterizing them.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &str, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            font: font.to_string(),
            color: color.to_string(),
        });
    }

    fn stroke_path(&mut self, points: &[Point], color: &str, line_width: f64) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            color: color.to_string(),
            line_width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }
}
