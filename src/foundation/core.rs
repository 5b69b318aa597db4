use crate::foundation::error::{SketchError, SketchResult};

pub use kurbo::{Point, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Output canvas dimensions in physical pixels.
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a canvas, rejecting zero-sized dimensions.
    pub fn new(width: u32, height: u32) -> SketchResult<Self> {
        if width == 0 || height == 0 {
            return Err(SketchError::config("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Smaller of the two dimensions, as `f64`.
    pub fn min_dimension(self) -> f64 {
        f64::from(self.width.min(self.height))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// What the external sketch-runner hands the core at setup time.
pub struct SketchSetup {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Device pixel ratio applied by the host; `1.0` for raw pixels.
    pub pixel_ratio: f64,
}

impl SketchSetup {
    /// Create a setup descriptor, rejecting a non-positive pixel ratio.
    pub fn new(canvas: Canvas, pixel_ratio: f64) -> SketchResult<Self> {
        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            return Err(SketchError::config("pixel_ratio must be finite and > 0"));
        }
        Ok(Self {
            canvas,
            pixel_ratio,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-frame properties bundle supplied by the external sketch-runner.
///
/// The draw phase is a pure function of a built sketch and one of these
/// bundles; nothing here mutates engine state.
pub struct FrameProps {
    /// Normalized animation progress in `[0, 1]`.
    pub playhead: f64,
    /// 0-based frame counter.
    pub frame: u64,
    /// Elapsed time since the loop started, in seconds.
    pub time_sec: f64,
    /// Time since the previous frame, in seconds.
    pub delta_sec: f64,
}

impl FrameProps {
    /// Props for a single static frame (playhead 0, frame 0).
    pub fn still() -> Self {
        Self {
            playhead: 0.0,
            frame: 0,
            time_sec: 0.0,
            delta_sec: 0.0,
        }
    }

    /// Props at a given playhead position, for hosts that only track progress.
    pub fn at_playhead(playhead: f64) -> SketchResult<Self> {
        if !playhead.is_finite() || !(0.0..=1.0).contains(&playhead) {
            return Err(SketchError::config("playhead must be within [0, 1]"));
        }
        Ok(Self {
            playhead,
            ..Self::still()
        })
    }
}

/// A rendered frame as RGBA8 pixels.
///
/// Frames read back from the CPU surface are **premultiplied alpha**. The
/// `premultiplied` flag makes this explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}
