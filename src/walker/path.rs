use kurbo::Point;

use crate::{domain::grid::CellCoord, render::style::PathStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// How a walker finished. Both variants are normal terminations.
pub enum Termination {
    /// No open adjacent cell remained.
    Blocked,
    /// The configured step budget was reached.
    BudgetExhausted,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Finalized ordered sequence of cells and world points produced by one
/// walker.
///
/// Immutable once finalized: the draw phase redraws paths every frame and
/// never mutates them.
pub struct CarvedPath {
    cells: Vec<CellCoord>,
    points: Vec<Point>,
    color: String,
    style: PathStyle,
    stroke_width: f64,
    termination: Termination,
}

impl CarvedPath {
    pub(crate) fn new(
        cells: Vec<CellCoord>,
        points: Vec<Point>,
        color: String,
        style: PathStyle,
        stroke_width: f64,
        termination: Termination,
    ) -> Self {
        debug_assert_eq!(cells.len(), points.len());
        Self {
            cells,
            points,
            color,
            style,
            stroke_width,
            termination,
        }
    }

    /// Claimed cells, in walk order.
    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    /// Mapped world points, one per claimed cell.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Assigned palette color, an opaque CSS color string.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Assigned stroke style.
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// Stroke width in pixels, derived from the `size` hint and cell extent.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// How the walker terminated.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Number of claimed cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path holds no cells. Finalized paths always hold at least
    /// their spawn cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Point runs that are safe to stroke as continuous polylines.
    ///
    /// Consecutive cells that are not grid-adjacent (a toroidal seam
    /// crossing) start a new run, so styles never stroke across the wrap.
    pub fn runs(&self) -> Vec<&[Point]> {
        let mut out = Vec::new();
        if self.points.is_empty() {
            return out;
        }
        let mut start = 0;
        for i in 1..self.cells.len() {
            if !self.cells[i - 1].is_adjacent(self.cells[i]) {
                out.push(&self.points[start..i]);
                start = i;
            }
        }
        out.push(&self.points[start..]);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/walker/path.rs"]
mod tests;
