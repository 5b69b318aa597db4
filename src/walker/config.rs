use crate::{
    domain::grid::Resolution,
    foundation::error::{SketchError, SketchResult},
    render::style::PathStyle,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// Every recognized walker-engine option, with explicit defaults.
///
/// Unknown fields are rejected at deserialization; invalid values fail fast
/// in [`validate`](WalkerConfig::validate) and are never silently clamped.
pub struct WalkerConfig {
    /// Grid dimensions as `[cols, rows]`.
    #[serde(default = "default_resolution")]
    pub resolution: Resolution,
    /// Stroke size hint as a fraction of the cell slot extent.
    #[serde(default = "default_size")]
    pub size: f64,
    /// Maximum number of cells a single path may claim, spawn cell included.
    #[serde(default = "default_step_size")]
    pub step_size: u32,
    /// Number of walkers spawned in the carve phase.
    #[serde(default = "default_walker_count")]
    pub walker_count: u32,
    /// Padding fraction of the smaller canvas dimension, `[0, 0.5)`.
    #[serde(default = "default_padding")]
    pub padding: f64,
    /// Stroke style assigned to every path carved under this config.
    #[serde(default)]
    pub path_style: PathStyle,
    /// `true` restricts steps to the 4-neighborhood; `false` allows all 8.
    #[serde(default = "default_flat")]
    pub flat: bool,
    /// Whether stepping off an edge wraps to the opposite side.
    #[serde(default)]
    pub toroidal: bool,
    /// Probability of keeping the current heading when it is open.
    #[serde(default = "default_heading_bias")]
    pub heading_bias: f64,
    /// Also reject step targets adjacent to the walker's own path.
    #[serde(default)]
    pub self_avoiding: bool,
}

fn default_resolution() -> Resolution {
    Resolution { cols: 16, rows: 16 }
}

fn default_size() -> f64 {
    0.4
}

fn default_step_size() -> u32 {
    64
}

fn default_walker_count() -> u32 {
    16
}

fn default_padding() -> f64 {
    1.0 / 32.0
}

fn default_flat() -> bool {
    true
}

fn default_heading_bias() -> f64 {
    0.6
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            size: default_size(),
            step_size: default_step_size(),
            walker_count: default_walker_count(),
            padding: default_padding(),
            path_style: PathStyle::default(),
            flat: default_flat(),
            toroidal: false,
            heading_bias: default_heading_bias(),
            self_avoiding: false,
        }
    }
}

impl WalkerConfig {
    /// Default options over a given grid.
    pub fn with_resolution(resolution: Resolution) -> Self {
        Self {
            resolution,
            ..Self::default()
        }
    }

    /// Validate every option, failing fast with a descriptive message.
    pub fn validate(&self) -> SketchResult<()> {
        if self.resolution.cols == 0 || self.resolution.rows == 0 {
            return Err(SketchError::config("resolution cols/rows must be > 0"));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(SketchError::config("size must be finite and > 0"));
        }
        if self.step_size == 0 {
            return Err(SketchError::config("step_size must be > 0"));
        }
        if !self.padding.is_finite() || !(0.0..0.5).contains(&self.padding) {
            return Err(SketchError::config("padding must be within [0, 0.5)"));
        }
        if !self.heading_bias.is_finite() || !(0.0..=1.0).contains(&self.heading_bias) {
            return Err(SketchError::config("heading_bias must be within [0, 1]"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/walker/config.rs"]
mod tests;
