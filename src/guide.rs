//! # Pathloom guide
//!
//! This module is a standalone walkthrough of pathloom's architecture and
//! public API. If you are looking for copy/paste usage, start with the
//! repository `README.md`; if you are extending the engine, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Domain`](crate::Domain): the grid of addressable cells plus occupancy
//!   and exclusion state, optionally toroidal, optionally clipped to a
//!   world-space polygon
//! - [`CellMapper`](crate::CellMapper): the pure mapping from grid cells to
//!   pixel positions (padding + even distribution)
//! - [`WalkerEngine`](crate::WalkerEngine): spawns walkers that carve
//!   non-overlapping paths across the domain
//! - [`CarvedPath`](crate::CarvedPath): the immutable result of one walker:
//!   cells, world points, color, style, termination
//! - [`DrawSurface`](crate::DrawSurface): the seam between stroke styles and
//!   a concrete backend ([`RecordingSurface`](crate::RecordingSurface) for
//!   tests, [`CpuSurface`](crate::CpuSurface) for pixels)
//! - [`SimContext`](crate::SimContext): the explicitly constructed, seeded
//!   randomness context; one per sketch instance
//!
//! The engine is explicitly two-phase:
//!
//! 1. Build: [`build_sketch`](crate::build_sketch) runs every walker to
//!    termination, eagerly, during setup
//! 2. Draw: [`BuiltSketch::draw`](crate::BuiltSketch::draw) redraws the
//!    finalized paths for a given [`FrameProps`](crate::FrameProps)
//!
//! Nothing in phase 2 mutates engine state, which is what makes the draw
//! step safe to call once per animation frame, and what makes the whole
//! engine testable against a recording surface instead of a real canvas.
//!
//! ---
//!
//! ## Determinism (pathloom's reproducibility contract)
//!
//! A sketch is a pure function of `(SketchSpec, SketchSetup)`:
//!
//! - the spec's `seed` feeds a [`SimContext`](crate::SimContext); each region
//!   forks an independent sub-stream keyed by its index
//! - neighbor candidates are always enumerated in the fixed clockwise order
//!   of [`Direction::CLOCKWISE`](crate::Direction::CLOCKWISE), so ties break
//!   identically on every run
//! - the cell-to-pixel mapping is pure
//!
//! Re-running a build with the same inputs yields byte-identical paths, and
//! re-drawing a built sketch with the same props yields an identical command
//! stream. If you add a new style or step rule, keep every random decision on
//! the context's generator and keep enumeration orders fixed.
//!
//! ---
//!
//! ## The walk, in short
//!
//! Each walker spawns on a uniformly chosen open cell, claims it, and then
//! repeatedly steps to an adjacent open cell (4-neighborhood when `flat`,
//! 8 otherwise), preferring its current heading with probability
//! `heading_bias`. Claimed cells are never released, so paths cannot overlap.
//! A walker finalizes when it is `Blocked` (no open neighbor) or when its
//! `step_size` budget is exhausted; both are normal terminations
//! ([`Termination`](crate::Termination)).
//!
//! Clipping ([`Domain::clip_with_world_coords`](crate::Domain::clip_with_world_coords))
//! excludes cells whose mapped position falls outside a polygon; boundary
//! points count as inside. A domain with zero usable cells simply yields zero
//! paths.
//!
//! ---
//!
//! ## Building and drawing a sketch
//!
//! ```
//! use pathloom::{
//!     Canvas, CpuSurface, FrameProps, Palette, PathStyle, Resolution, SketchSetup,
//!     SketchSpecBuilder, WalkerConfig, build_sketch,
//! };
//!
//! fn main() -> pathloom::SketchResult<()> {
//!     let palette = Palette::new(vec![
//!         "#f4f1de".into(),
//!         "#e07a5f".into(),
//!         "#3d405b".into(),
//!         "#81b29a".into(),
//!     ])?;
//!
//!     let mut config = WalkerConfig::with_resolution(Resolution::new(24, 24)?);
//!     config.walker_count = 20;
//!     config.path_style = PathStyle::InfinitePipe;
//!
//!     let spec = SketchSpecBuilder::new(palette)
//!         .seed(7)
//!         .background("#111111")
//!         .region(config)
//!         .build()?;
//!
//!     let setup = SketchSetup::new(Canvas::new(640, 640)?, 1.0)?;
//!     let sketch = build_sketch(&setup, &spec)?;
//!
//!     let mut surface = CpuSurface::new(sketch.canvas())?;
//!     sketch.draw(&mut surface, FrameProps::at_playhead(0.25)?)?;
//!     let frame = surface.read_frame()?;
//!     assert_eq!(frame.width, 640);
//!     Ok(())
//! }
//! ```
//!
//! The host sketch-runner owns the frame loop: it calls `draw` with a fresh
//! [`FrameProps`](crate::FrameProps) per frame and does whatever it wants
//! with the read-back [`Frame`](crate::Frame) (display, video export). The
//! core deliberately has no opinion about scheduling or output formats.
