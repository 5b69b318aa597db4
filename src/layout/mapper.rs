use kurbo::Point;

use crate::{
    domain::grid::{CellCoord, Resolution},
    foundation::error::{SketchError, SketchResult},
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Pure mapping from grid cells to pixel-space positions.
///
/// A uniform padding fraction of the smaller canvas dimension is applied on
/// all sides; the remaining span is distributed evenly so that cell `(0, 0)`
/// maps to the padding inset and `(cols-1, rows-1)` to the opposite inset.
/// A single column (or row) maps to the canvas center on that axis.
///
/// Mapping is deterministic: identical inputs always yield identical outputs,
/// so paths computed once can be redrawn every frame without recomputation.
pub struct CellMapper {
    resolution: Resolution,
    padding_px: f64,
    origin: Point,
    step_x: f64,
    step_y: f64,
    extent: f64,
}

impl CellMapper {
    /// Build a mapper for a grid within a `width x height` pixel area.
    ///
    /// `padding` is a fraction in `[0, 0.5)` of the smaller dimension.
    pub fn new(
        resolution: Resolution,
        padding: f64,
        width: f64,
        height: f64,
    ) -> SketchResult<Self> {
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
            return Err(SketchError::config(
                "mapper width/height must be finite and > 0",
            ));
        }
        if !padding.is_finite() || !(0.0..0.5).contains(&padding) {
            return Err(SketchError::config("padding must be within [0, 0.5)"));
        }

        let padding_px = padding * width.min(height);
        let span_x = width - 2.0 * padding_px;
        let span_y = height - 2.0 * padding_px;

        let (origin_x, step_x) = axis_layout(resolution.cols, padding_px, span_x, width);
        let (origin_y, step_y) = axis_layout(resolution.rows, padding_px, span_y, height);

        let extent = (span_x / f64::from(resolution.cols)).min(span_y / f64::from(resolution.rows));

        Ok(Self {
            resolution,
            padding_px,
            origin: Point::new(origin_x, origin_y),
            step_x,
            step_y,
            extent,
        })
    }

    /// Grid dimensions this mapper was built for.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Padding in pixels, as applied on every side.
    pub fn padding_px(&self) -> f64 {
        self.padding_px
    }

    /// Smaller per-axis cell slot size in pixels; stroke widths derive from it.
    pub fn cell_extent(&self) -> f64 {
        self.extent
    }

    /// Pixel position of a cell.
    pub fn map(&self, cell: CellCoord) -> Point {
        debug_assert!(cell.col < self.resolution.cols && cell.row < self.resolution.rows);
        Point::new(
            self.origin.x + self.step_x * f64::from(cell.col),
            self.origin.y + self.step_y * f64::from(cell.row),
        )
    }
}

fn axis_layout(count: u32, padding_px: f64, span: f64, full: f64) -> (f64, f64) {
    if count > 1 {
        (padding_px, span / f64::from(count - 1))
    } else {
        (full / 2.0, 0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/mapper.rs"]
mod tests;
