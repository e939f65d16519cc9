use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{InkdateError, InkdateResult};
use crate::text::layout::TextLayoutEngine;

/// Environment variable naming an extra font file to try before the configured ones.
pub const FONT_ENV_VAR: &str = "INKDATE_FONT";

/// Generic families appended to every requested font stack.
pub const FALLBACK_FAMILIES: &[&str] = &["Brush Script MT", "Segoe Script", "Comic Sans MS"];

/// A font file bound to the family name callers request it by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFaceConfig {
    /// Family name used in generation options (for example `"Caveat"`).
    pub family: String,
    /// Path to a TTF/OTF file.
    pub path: PathBuf,
}

/// Where the bitmap backend looks for fonts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Explicit family → file bindings, tried first.
    pub faces: Vec<FontFaceConfig>,
    /// Further files to try; each loaded file is known by its embedded family name.
    pub search_paths: Vec<PathBuf>,
    /// Consult [`FONT_ENV_VAR`].
    pub use_env: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            faces: Vec::new(),
            search_paths: default_search_paths(),
            use_env: true,
        }
    }
}

impl FontConfig {
    /// Configuration that never finds a font; engines built from it use markup output.
    pub fn none() -> Self {
        Self {
            faces: Vec::new(),
            search_paths: Vec::new(),
            use_env: false,
        }
    }

    /// Configuration with a single explicit face.
    pub fn single(family: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            faces: vec![FontFaceConfig {
                family: family.into(),
                path: path.into(),
            }],
            search_paths: Vec::new(),
            use_env: false,
        }
    }
}

fn default_search_paths() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
        "/Library/Fonts/Brush Script.ttf",
        "/System/Library/Fonts/Supplemental/Brush Script.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\segoesc.ttf",
        "C:\\Windows\\Fonts\\BRUSHSCI.TTF",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

/// A loaded, validated font face.
#[derive(Clone, Debug)]
pub struct FontFace {
    /// Family name the face answers to in generation options.
    pub family: String,
    /// Family name embedded in the font file.
    pub embedded_family: String,
    /// Source path.
    pub path: PathBuf,
    pub(crate) bytes: Arc<Vec<u8>>,
}

impl FontFace {
    /// Read and validate a face from disk.
    pub fn load(family: Option<&str>, path: &Path) -> InkdateResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            InkdateError::asset(format!("failed to read font '{}': {e}", path.display()))
        })?;
        let engine = TextLayoutEngine::for_font(&bytes)?;
        let embedded_family = engine.family_name().to_string();
        Ok(Self {
            family: family.map_or_else(|| embedded_family.clone(), str::to_string),
            embedded_family,
            path: path.to_path_buf(),
            bytes: Arc::new(bytes),
        })
    }

    fn answers_to(&self, family: &str) -> bool {
        let family = family.trim().trim_matches(|c| c == '"' || c == '\'');
        self.family.eq_ignore_ascii_case(family) || self.embedded_family.eq_ignore_ascii_case(family)
    }
}

/// Ordered set of usable faces, fixed at engine construction.
#[derive(Clone, Debug, Default)]
pub struct FontBook {
    faces: Vec<FontFace>,
}

impl FontBook {
    /// Load every readable face named by `config`; unreadable candidates are skipped.
    pub fn load(config: &FontConfig) -> Self {
        let mut candidates: Vec<(Option<&str>, PathBuf)> = Vec::new();
        let env_path = config
            .use_env
            .then(|| std::env::var_os(FONT_ENV_VAR))
            .flatten()
            .map(PathBuf::from);
        if let Some(p) = env_path {
            candidates.push((None, p));
        }
        for face in &config.faces {
            candidates.push((Some(face.family.as_str()), face.path.clone()));
        }
        for p in &config.search_paths {
            candidates.push((None, p.clone()));
        }

        let mut faces = Vec::new();
        for (family, path) in candidates {
            if !path.is_file() {
                continue;
            }
            match FontFace::load(family, &path) {
                Ok(face) => {
                    tracing::debug!(family = %face.family, path = %path.display(), "loaded font face");
                    faces.push(face);
                }
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "skipping font candidate");
                }
            }
        }
        Self::from_faces(faces)
    }

    /// Build a book from already loaded faces.
    pub fn from_faces(faces: Vec<FontFace>) -> Self {
        Self { faces }
    }

    /// `true` when no face could be loaded.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Loaded faces in priority order.
    pub fn faces(&self) -> &[FontFace] {
        &self.faces
    }

    /// Resolve a requested family through the fallback chain.
    ///
    /// Tries the requested family, then [`FALLBACK_FAMILIES`], then the first loaded face.
    pub fn resolve(&self, family: &str) -> Option<&FontFace> {
        std::iter::once(family)
            .chain(FALLBACK_FAMILIES.iter().copied())
            .find_map(|name| self.faces.iter().find(|f| f.answers_to(name)))
            .or_else(|| self.faces.first())
    }
}

/// CSS-style font stack used by the markup output.
pub(crate) fn css_font_stack(family: &str) -> String {
    let mut out = String::new();
    let primary = family.trim().trim_matches(|c| c == '"' || c == '\'');
    if !primary.is_empty() {
        out.push_str(&format!("'{primary}', "));
    }
    for f in FALLBACK_FAMILIES {
        if !f.eq_ignore_ascii_case(primary) {
            out.push_str(&format!("'{f}', "));
        }
    }
    out.push_str("cursive");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
