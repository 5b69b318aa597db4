//! Pathloom is a deterministic grid-walker engine for generative sketches.
//!
//! Pathloom turns a sketch description (`SketchSpec`) into an immutable set of
//! carved paths (`BuiltSketch`) once, at setup time, and then redraws those
//! paths on every animation frame through a pluggable draw surface.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: `SketchSpec` (seed, palette, background, carved regions)
//! 2. **Build**: `SketchSpec + SketchSetup -> BuiltSketch` (domain construction,
//!    clipping, the one-shot walker carve phase)
//! 3. **Draw**: `BuiltSketch + FrameProps -> DrawSurface` (pure per-frame
//!    redraw in the assigned stroke styles)
//! 4. **Read back** (optional): `CpuSurface -> Frame` (premultiplied RGBA8)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: a seed fully determines the carved paths;
//!   every random decision flows through an explicitly constructed
//!   [`SimContext`], never global state.
//! - **Simulate once, draw many**: all walker computation happens eagerly in
//!   [`build_sketch`]; [`BuiltSketch::draw`] performs only drawing.
//! - **No IO in the core**: frame-loop scheduling and export belong to the
//!   external sketch-runner.
//!
//! # Getting started
//!
//! - For end-user usage, see the repository README.
//! - For a standalone walkthrough of the API and architecture, see
//!   [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod domain;
mod foundation;
mod layout;
mod render;
mod sketch;
mod walker;

/// High-level, standalone documentation for pathloom's concepts and
/// architecture.
pub mod guide;

pub use domain::grid::{CellCoord, Direction, Domain, Resolution};
pub use foundation::core::{Canvas, Frame, FrameProps, Point, Rect, SketchSetup, Vec2};
pub use foundation::error::{SketchError, SketchResult};
pub use foundation::rng::Rng64;
pub use layout::mapper::CellMapper;
pub use render::cpu::CpuSurface;
pub use render::style::{PathStyle, draw_path};
pub use render::surface::{DrawCmd, DrawSurface, RecordingSurface};
pub use sketch::build::{BuiltSketch, build_sketch};
pub use sketch::context::SimContext;
pub use sketch::palette::Palette;
pub use sketch::spec::{RegionSpec, SketchSpec, SketchSpecBuilder};
pub use walker::config::WalkerConfig;
pub use walker::engine::WalkerEngine;
pub use walker::path::{CarvedPath, Termination};
