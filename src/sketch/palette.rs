use crate::foundation::error::{SketchError, SketchResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
/// An ordered sequence of CSS color strings, serialized as a plain list.
///
/// Entries are consumed opaquely: the core never validates color syntax,
/// it only indexes into the sequence (cyclically). A concrete rendering
/// backend is the first thing that interprets an entry.
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Create a palette. At least one color is required.
    pub fn new(colors: Vec<String>) -> SketchResult<Self> {
        if colors.is_empty() {
            return Err(SketchError::config("palette must hold at least one color"));
        }
        Ok(Self { colors })
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; construction rejects empty palettes.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for an index, cycling past the end.
    pub fn color_for(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    /// The full ordered sequence.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = SketchError;

    fn try_from(colors: Vec<String>) -> SketchResult<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(p: Palette) -> Self {
        p.colors
    }
}
