//! User-facing match options and their layered resolution
//!
//! `MatchOptions` is a partial bag: every field may be absent, and absence is
//! meaningful (the comparison capability applies its own default). Layers are
//! merged field-wise with [`MatchOptions::layered`]; [`resolve`] merges and
//! validates in one step.

use crate::errors::{Result, SnapshotError};
use serde::{Deserialize, Serialize};

/// Documented defaults of the comparison capability.
///
/// The policy builder only injects `ignoreCaret`, `ignoreAntialiasing` and
/// `highlightColor`; the rest are applied by comparators when a field is
/// absent from the policy.
pub mod defaults {
    pub const STRICT: bool = false;
    pub const TOLERANCE: f64 = 2.3;
    pub const PIXEL_RATIO: f64 = 1.0;
    pub const IGNORE_CARET: bool = true;
    pub const IGNORE_ANTIALIASING: bool = true;
    pub const ANTIALIASING_TOLERANCE: f64 = 0.0;
    pub const HIGHLIGHT_COLOR: &str = "#ff00ff";
}

/// Partial match options as supplied by a caller or a settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    /// ΔE treated as a difference in non-strict mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_caret: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_antialiasing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antialiasing_tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<String>,
}

impl MatchOptions {
    /// Field-wise merge: a field set in `overrides` wins over `self`
    pub fn layered(&self, overrides: &MatchOptions) -> MatchOptions {
        MatchOptions {
            strict: overrides.strict.or(self.strict),
            tolerance: overrides.tolerance.or(self.tolerance),
            pixel_ratio: overrides.pixel_ratio.or(self.pixel_ratio),
            ignore_caret: overrides.ignore_caret.or(self.ignore_caret),
            ignore_antialiasing: overrides.ignore_antialiasing.or(self.ignore_antialiasing),
            antialiasing_tolerance: overrides
                .antialiasing_tolerance
                .or(self.antialiasing_tolerance),
            highlight_color: overrides
                .highlight_color()
                .or_else(|| self.highlight_color())
                .map(str::to_string),
        }
    }

    /// The highlight colour, with an empty string treated as unset
    pub fn highlight_color(&self) -> Option<&str> {
        self.highlight_color.as_deref().filter(|c| !c.is_empty())
    }

    /// Whether these options select strict comparison
    ///
    /// A tolerance of exactly zero is strict mode spelled differently.
    pub fn is_strict(&self) -> bool {
        self.strict == Some(true) || self.tolerance == Some(0.0)
    }

    /// Check the explicitly-set fields for values no comparator can honour
    ///
    /// `tolerance` is only checked outside strict mode, where it is used.
    pub fn validate(&self) -> Result<()> {
        if let Some(tolerance) = self.tolerance.filter(|_| !self.is_strict()) {
            non_negative("tolerance", tolerance)?;
        }
        if let Some(ratio) = self.pixel_ratio {
            non_negative("pixelRatio", ratio)?;
            if ratio == 0.0 {
                return Err(SnapshotError::InvalidOption {
                    option: "pixelRatio",
                    reason: "must be greater than zero".to_string(),
                }
                .into());
            }
        }
        if let Some(aa) = self.antialiasing_tolerance {
            non_negative("antialiasingTolerance", aa)?;
        }
        if let Some(color) = self.highlight_color() {
            parse_hex_color(color).ok_or_else(|| SnapshotError::InvalidOption {
                option: "highlightColor",
                reason: format!("'{}' is not a #rgb or #rrggbb colour", color),
            })?;
        }
        Ok(())
    }
}

fn non_negative(option: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SnapshotError::InvalidOption {
            option,
            reason: format!("{} must be a finite, non-negative number", value),
        }
        .into());
    }
    Ok(())
}

/// Resolve option layers, lowest precedence first, then validate the result
///
/// Typical layers: settings-file defaults, then per-call overrides.
pub fn resolve<'a, I>(layers: I) -> Result<MatchOptions>
where
    I: IntoIterator<Item = &'a MatchOptions>,
{
    let merged = layers
        .into_iter()
        .fold(MatchOptions::default(), |acc, layer| acc.layered(layer));
    merged.validate()?;
    Ok(merged)
}

/// Parse `#rgb` or `#rrggbb` into RGB components
pub fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let hex = value.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let nibble = c.to_digit(16)? as u8;
                rgb[i] = nibble * 17;
            }
            Some(rgb)
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some([channel(0)?, channel(2)?, channel(4)?])
        }
        _ => None,
    }
}
