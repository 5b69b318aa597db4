use crate::{
    domain::grid::Domain,
    foundation::core::{Canvas, FrameProps, SketchSetup},
    foundation::error::SketchResult,
    layout::mapper::CellMapper,
    render::style::draw_path,
    render::surface::DrawSurface,
    sketch::context::SimContext,
    sketch::spec::SketchSpec,
    walker::engine::WalkerEngine,
    walker::path::CarvedPath,
};

/// An immutable, fully carved sketch.
///
/// Produced once by [`build_sketch`]; the only remaining operation is the
/// pure per-frame [`draw`](BuiltSketch::draw).
#[derive(Clone, Debug)]
pub struct BuiltSketch {
    canvas: Canvas,
    pixel_ratio: f64,
    background: String,
    paths: Vec<CarvedPath>,
}

impl BuiltSketch {
    /// Canvas this sketch was built for.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Device pixel ratio the host reported at setup.
    ///
    /// Path coordinates are in logical canvas pixels; hosts that allocate a
    /// physical-resolution surface scale by this factor.
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Background color, opaque CSS syntax.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Every finalized path, in region and spawn order.
    pub fn paths(&self) -> &[CarvedPath] {
        &self.paths
    }

    /// Redraw the whole composition for one frame.
    ///
    /// Clears to the background, then strokes every finalized path in its
    /// assigned style. Performs no simulation and no mutation; invoking it
    /// twice with the same props produces the same draw commands.
    pub fn draw(&self, surface: &mut dyn DrawSurface, props: FrameProps) -> SketchResult<()> {
        surface.clear(&self.background)?;
        for path in &self.paths {
            draw_path(surface, path, props)?;
        }
        Ok(())
    }
}

/// Run the synchronous setup phase: carve every region of `spec` against the
/// host-supplied `setup`, producing an immutable [`BuiltSketch`].
///
/// All walker computation happens here, eagerly; the returned sketch only
/// draws. A region whose domain ends up with zero usable cells contributes
/// zero paths and is not an error.
#[tracing::instrument(skip(setup, spec), fields(regions = spec.regions.len(), seed = spec.seed))]
pub fn build_sketch(setup: &SketchSetup, spec: &SketchSpec) -> SketchResult<BuiltSketch> {
    spec.validate()?;

    let width = f64::from(setup.canvas.width);
    let height = f64::from(setup.canvas.height);
    let ctx = SimContext::new(spec.seed);

    let mut paths = Vec::new();
    for (index, region) in spec.regions.iter().enumerate() {
        let mapper =
            CellMapper::new(region.config.resolution, region.config.padding, width, height)?;
        let mut domain = Domain::new(region.config.resolution, region.config.toroidal);
        if let Some(clip) = &region.clip {
            domain = domain.clip_with_world_coords(clip, &mapper)?;
        }

        let mut region_ctx = ctx.fork(index as u64);
        let mut carved = WalkerEngine::carve(
            &mut domain,
            &region.config,
            &mapper,
            &spec.palette,
            &mut region_ctx,
        )?;
        paths.append(&mut carved);
    }

    Ok(BuiltSketch {
        canvas: setup.canvas,
        pixel_ratio: setup.pixel_ratio,
        background: spec.background.clone(),
        paths,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/build.rs"]
mod tests;
