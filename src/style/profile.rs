use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Span;

/// Named bundle of handwriting traits.
///
/// Only `curvature` affects rendering today (it scales the base font size). The remaining
/// fields, and any extra keys found in configuration, are kept as given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleTransferProfile {
    /// Lookup key.
    pub name: String,
    /// Stroke curvature in `0..=1`.
    #[serde(default)]
    pub curvature: f64,
    /// Slant in degrees.
    #[serde(default)]
    pub slant: f64,
    /// Pen pressure range.
    #[serde(default = "default_pressure")]
    pub pressure_range: Span,
    /// How connected consecutive strokes are, in `0..=1`.
    #[serde(default)]
    pub connectedness: f64,
    /// Unrecognized fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn default_pressure() -> Span {
    Span(0.5, 1.0)
}

impl StyleTransferProfile {
    fn builtin(name: &str, curvature: f64, slant: f64, pressure: Span, connectedness: f64) -> Self {
        Self {
            name: name.to_string(),
            curvature,
            slant,
            pressure_range: pressure,
            connectedness,
            extra: BTreeMap::new(),
        }
    }

    /// Font-size multiplier contributed by this profile: `1 + curvature * 0.2`.
    pub fn font_scale(&self) -> f64 {
        let curvature = if self.curvature.is_finite() {
            self.curvature.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        1.0 + curvature * 0.2
    }

    /// Apply the profile to a base font size.
    pub fn apply_to_font_size(&self, base: f64) -> f64 {
        base * self.font_scale()
    }
}

/// Built-in profiles plus any configured ones, keyed by name.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, StyleTransferProfile>,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        for p in [
            StyleTransferProfile::builtin("natural-cursive", 0.3, 12.0, Span(0.6, 1.0), 0.8),
            StyleTransferProfile::builtin("formal-script", 0.5, 18.0, Span(0.7, 1.0), 0.9),
            StyleTransferProfile::builtin("casual-hand", 0.1, 4.0, Span(0.5, 0.9), 0.4),
        ] {
            profiles.insert(p.name.clone(), p);
        }
        Self { profiles }
    }
}

impl ProfileRegistry {
    /// Built-ins overlaid with `custom`; a custom profile replaces a built-in of the same name.
    pub fn with_custom(custom: impl IntoIterator<Item = StyleTransferProfile>) -> Self {
        let mut out = Self::default();
        for p in custom {
            out.profiles.insert(normalize_name(&p.name), p);
        }
        out
    }

    /// Look up a profile. Names match case-insensitively, with `_` and spaces read as `-`.
    pub fn get(&self, name: &str) -> Option<&StyleTransferProfile> {
        self.profiles.get(&normalize_name(name))
    }

    /// All profile names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim()
        .to_ascii_lowercase()
        .replace(['_', ' '], "-")
}

#[cfg(test)]
#[path = "../../tests/unit/style/profile.rs"]
mod tests;
