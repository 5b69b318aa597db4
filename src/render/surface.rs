use kurbo::Point;

use crate::foundation::error::SketchResult;

/// The drawing seam between styles and a concrete rendering backend.
///
/// Colors cross this boundary as opaque CSS color strings; only a backend
/// interprets them. Styles decompose finished paths into polylines, so a
/// surface only needs to clear and stroke.
pub trait DrawSurface {
    /// Clear the whole surface to a background color.
    fn clear(&mut self, color: &str) -> SketchResult<()>;

    /// Stroke an open polyline. Fewer than two points is a no-op.
    fn stroke_polyline(&mut self, points: &[Point], color: &str, width: f64) -> SketchResult<()>;
}

#[derive(Clone, Debug, PartialEq)]
/// One recorded drawing operation.
pub enum DrawCmd {
    /// Surface cleared to a color.
    Clear {
        /// The background color, verbatim.
        color: String,
    },
    /// A stroked polyline.
    StrokePolyline {
        /// Polyline points in draw order.
        points: Vec<Point>,
        /// Stroke color, verbatim.
        color: String,
        /// Stroke width in pixels.
        width: f64,
    },
}

#[derive(Debug, Default)]
/// A surface that records draw commands instead of rasterizing.
///
/// Lets the engine and styles be exercised without a real rendering surface;
/// two draws of the same built sketch must record identical command streams.
pub struct RecordingSurface {
    commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, in draw order.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Consume the surface, returning the recorded commands.
    pub fn into_commands(self) -> Vec<DrawCmd> {
        self.commands
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, color: &str) -> SketchResult<()> {
        self.commands.clear();
        self.commands.push(DrawCmd::Clear {
            color: color.to_owned(),
        });
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point], color: &str, width: f64) -> SketchResult<()> {
        if points.len() < 2 {
            return Ok(());
        }
        self.commands.push(DrawCmd::StrokePolyline {
            points: points.to_vec(),
            color: color.to_owned(),
            width,
        });
        Ok(())
    }
}
