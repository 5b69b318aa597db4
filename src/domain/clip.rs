use kurbo::Point;

use crate::{
    domain::grid::{CellCoord, Domain},
    foundation::error::{SketchError, SketchResult},
    layout::mapper::CellMapper,
};

/// Tolerance for the boundary-inclusive edge test.
const EDGE_EPSILON: f64 = 1e-9;

impl Domain {
    /// Restrict the domain to a world-space polygon.
    ///
    /// Returns a new domain where every cell whose mapped world position
    /// falls outside `polygon` is marked excluded; excluded cells are never
    /// selected as a walk start or step target. Points on a polygon edge
    /// count as inside (fixed for reproducibility). The polygon does not
    /// need to be convex; containment is even-odd.
    pub fn clip_with_world_coords(
        &self,
        polygon: &[Point],
        mapper: &CellMapper,
    ) -> SketchResult<Domain> {
        if polygon.len() < 3 {
            return Err(SketchError::config("clip polygon needs at least 3 points"));
        }
        if mapper.resolution() != self.resolution() {
            return Err(SketchError::domain(
                "clip mapper resolution does not match domain resolution",
            ));
        }

        let mut out = self.clone();
        for row in 0..self.resolution().rows {
            for col in 0..self.resolution().cols {
                let cell = CellCoord::new(col, row);
                if !polygon_contains(polygon, mapper.map(cell)) {
                    out.exclude(cell);
                }
            }
        }
        Ok(out)
    }
}

/// Boundary-inclusive even-odd containment test.
pub(crate) fn polygon_contains(polygon: &[Point], p: Point) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    for i in 0..n {
        if on_segment(polygon[i], polygon[(i + 1) % n], p) {
            return true;
        }
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_at = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_at {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    let ab = b - a;
    let ap = p - a;
    let len2 = ab.hypot2();
    if len2 == 0.0 {
        return ap.hypot() <= EDGE_EPSILON;
    }
    let t = (ap.dot(ab) / len2).clamp(0.0, 1.0);
    let closest = a + ab * t;
    (p - closest).hypot() <= EDGE_EPSILON
}

#[cfg(test)]
#[path = "../../tests/unit/domain/clip.rs"]
mod tests;
