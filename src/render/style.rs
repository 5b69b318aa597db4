use kurbo::Point;

use crate::{
    foundation::core::FrameProps,
    foundation::error::SketchResult,
    render::surface::DrawSurface,
    walker::path::CarvedPath,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Stroke style assigned to a finalized path.
pub enum PathStyle {
    /// One continuous stroked line along all path points.
    #[default]
    Solid,
    /// A repeating dash pattern whose phase cycles with the playhead,
    /// simulating flow along the path.
    InfinitePipe,
    /// Alternate cell-to-cell segments stroked, odd ones skipped.
    Alternating,
}

/// Draw one finalized path in its assigned style.
///
/// Pure with respect to the path and any domain state: styles only read the
/// path and emit strokes. The frame props drive animated styles; static
/// styles ignore them.
pub fn draw_path(
    surface: &mut dyn DrawSurface,
    path: &CarvedPath,
    props: FrameProps,
) -> SketchResult<()> {
    match path.style() {
        PathStyle::Solid => solid(surface, path),
        PathStyle::InfinitePipe => infinite_pipe(surface, path, props),
        PathStyle::Alternating => alternating(surface, path),
    }
}

fn solid(surface: &mut dyn DrawSurface, path: &CarvedPath) -> SketchResult<()> {
    for run in path.runs() {
        surface.stroke_polyline(run, path.color(), path.stroke_width())?;
    }
    Ok(())
}

fn infinite_pipe(
    surface: &mut dyn DrawSurface,
    path: &CarvedPath,
    props: FrameProps,
) -> SketchResult<()> {
    let width = path.stroke_width();
    let dash = width * 2.0;
    let gap = width;
    // The pattern shifts exactly one period over a full playhead cycle.
    let phase = props.playhead * (dash + gap);

    for run in path.runs() {
        for piece in dash_polyline(run, dash, gap, phase) {
            surface.stroke_polyline(&piece, path.color(), width)?;
        }
    }
    Ok(())
}

fn alternating(surface: &mut dyn DrawSurface, path: &CarvedPath) -> SketchResult<()> {
    let mut segment = 0usize;
    for run in path.runs() {
        for pair in run.windows(2) {
            if segment % 2 == 0 {
                surface.stroke_polyline(pair, path.color(), path.stroke_width())?;
            }
            segment += 1;
        }
    }
    Ok(())
}

/// Slice a polyline into dash pieces.
///
/// The dash pattern lives in arc-length space: intervals of `dash` on,
/// `gap` off. `phase` shifts the pattern forward along the line.
fn dash_polyline(run: &[Point], dash: f64, gap: f64, phase: f64) -> Vec<Vec<Point>> {
    let period = dash + gap;
    let mut out = Vec::new();
    if run.len() < 2 || period <= 0.0 {
        return out;
    }

    let mut travelled = 0.0;
    let mut current: Vec<Point> = Vec::new();
    for pair in run.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let seg_len = (b - a).hypot();
        if seg_len == 0.0 {
            continue;
        }

        let mut t0 = 0.0;
        while t0 < seg_len {
            let u = (travelled + t0 - phase).rem_euclid(period);
            let (on, remaining) = if u < dash {
                (true, dash - u)
            } else {
                (false, period - u)
            };
            let t1 = (t0 + remaining).min(seg_len);
            if on {
                let p0 = a.lerp(b, t0 / seg_len);
                let p1 = a.lerp(b, t1 / seg_len);
                if current.is_empty() {
                    current.push(p0);
                }
                current.push(p1);
            } else if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            t0 = t1;
        }
        travelled += seg_len;
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/style.rs"]
mod tests;
