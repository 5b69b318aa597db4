use kurbo::Point;

use crate::{
    foundation::core::{Canvas, Frame},
    foundation::error::{SketchError, SketchResult},
    render::surface::DrawSurface,
};

/// CPU raster surface powered by `vello_cpu`.
///
/// Strokes are rasterized into an internal render context; call
/// [`read_frame`](CpuSurface::read_frame) after a draw pass to read back the
/// premultiplied RGBA8 pixels. The surface performs no IO.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuSurface {
    /// Allocate a surface for a canvas. `vello_cpu` surfaces are limited to
    /// `u16` dimensions; larger canvases are rejected.
    pub fn new(canvas: Canvas) -> SketchResult<Self> {
        let width = u16::try_from(canvas.width)
            .map_err(|_| SketchError::draw("canvas width exceeds cpu surface limit"))?;
        let height = u16::try_from(canvas.height)
            .map_err(|_| SketchError::draw("canvas height exceeds cpu surface limit"))?;
        if width == 0 || height == 0 {
            return Err(SketchError::draw("canvas width/height must be > 0"));
        }
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    /// Rasterize everything drawn since the last clear and read back the
    /// pixels.
    pub fn read_frame(&mut self) -> SketchResult<Frame> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Ok(Frame {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

impl DrawSurface for CpuSurface {
    fn clear(&mut self, color: &str) -> SketchResult<()> {
        let paint = parse_css_color(color)?;
        self.ctx.reset();
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point], color: &str, width: f64) -> SketchResult<()> {
        if points.len() < 2 {
            return Ok(());
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(SketchError::draw("stroke width must be finite and > 0"));
        }
        let paint = parse_css_color(color)?;

        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(vello_cpu::kurbo::Point::new(points[0].x, points[0].y));
        for p in &points[1..] {
            path.line_to(vello_cpu::kurbo::Point::new(p.x, p.y));
        }

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint);
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(width)
                .with_caps(vello_cpu::kurbo::Cap::Round)
                .with_join(vello_cpu::kurbo::Join::Round),
        );
        self.ctx.stroke_path(&path);
        Ok(())
    }
}

/// Parse a CSS color string into a paintable color.
///
/// The core treats palette entries as opaque; parsing happens only here, at
/// the backend boundary.
fn parse_css_color(s: &str) -> SketchResult<vello_cpu::peniko::Color> {
    vello_cpu::peniko::color::parse_color(s.trim())
        .map(|c| c.to_alpha_color::<vello_cpu::peniko::color::Srgb>())
        .map_err(|e| SketchError::draw(format!("cannot parse color '{s}': {e}")))
}
