use kurbo::Point;

use crate::{
    foundation::error::{SketchError, SketchResult},
    sketch::palette::Palette,
    walker::config::WalkerConfig,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// One carved region of a composition: a walker configuration plus an
/// optional world-space clip polygon.
///
/// Each region owns an independent domain, walker batch, and random
/// sub-stream; regions share no mutable state.
pub struct RegionSpec {
    /// Walker-engine options for this region.
    pub config: WalkerConfig,
    /// Optional clip polygon in world (pixel) coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip: Option<Vec<Point>>,
}

impl RegionSpec {
    /// An unclipped region.
    pub fn new(config: WalkerConfig) -> Self {
        Self { config, clip: None }
    }

    /// A region clipped to a polygon.
    pub fn clipped(config: WalkerConfig, clip: Vec<Point>) -> Self {
        Self {
            config,
            clip: Some(clip),
        }
    }

    /// Validate the region's configuration and clip polygon.
    pub fn validate(&self) -> SketchResult<()> {
        self.config.validate()?;
        if let Some(clip) = &self.clip {
            if clip.len() < 3 {
                return Err(SketchError::config("clip polygon needs at least 3 points"));
            }
            if clip.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
                return Err(SketchError::config("clip polygon points must be finite"));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// A complete sketch description.
///
/// A spec is a pure data model: build it programmatically (see
/// [`SketchSpecBuilder`]) or deserialize it from JSON, then hand it to
/// [`build_sketch`](crate::build_sketch) together with the setup the host
/// runner supplies.
pub struct SketchSpec {
    /// Global deterministic seed; every random decision derives from it.
    #[serde(default)]
    pub seed: u64,
    /// Background color cleared before paths are drawn, opaque CSS syntax.
    #[serde(default = "default_background")]
    pub background: String,
    /// Ordered path colors, cycled per walker.
    pub palette: Palette,
    /// Carved regions, drawn in order.
    pub regions: Vec<RegionSpec>,
}

fn default_background() -> String {
    "#111111".to_owned()
}

impl SketchSpec {
    /// Validate spec invariants and every region.
    pub fn validate(&self) -> SketchResult<()> {
        if self.background.trim().is_empty() {
            return Err(SketchError::config("background must be non-empty"));
        }
        for region in &self.regions {
            region.validate()?;
        }
        Ok(())
    }

    /// Deserialize and validate a spec from JSON.
    pub fn from_json(json: &str) -> SketchResult<Self> {
        let spec: SketchSpec = serde_json::from_str(json)
            .map_err(|e| SketchError::serde(format!("invalid sketch spec: {e}")))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Serialize the spec to pretty JSON.
    pub fn to_json(&self) -> SketchResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SketchError::serde(format!("cannot serialize sketch spec: {e}")))
    }
}

/// Builder for [`SketchSpec`].
pub struct SketchSpecBuilder {
    seed: u64,
    background: String,
    palette: Palette,
    regions: Vec<RegionSpec>,
}

impl SketchSpecBuilder {
    /// Create a builder over a palette.
    pub fn new(palette: Palette) -> Self {
        Self {
            seed: 0,
            background: default_background(),
            palette,
            regions: Vec::new(),
        }
    }

    /// Set the global deterministic seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the background color.
    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    /// Append an unclipped region.
    pub fn region(mut self, config: WalkerConfig) -> Self {
        self.regions.push(RegionSpec::new(config));
        self
    }

    /// Append a region clipped to a world-space polygon.
    pub fn clipped_region(mut self, config: WalkerConfig, clip: Vec<Point>) -> Self {
        self.regions.push(RegionSpec::clipped(config, clip));
        self
    }

    /// Build and validate the final [`SketchSpec`].
    pub fn build(self) -> SketchResult<SketchSpec> {
        let spec = SketchSpec {
            seed: self.seed,
            background: self.background,
            palette: self.palette,
            regions: self.regions,
        };
        spec.validate()?;
        Ok(spec)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/spec.rs"]
mod tests;
