//! Diff policy builder
//!
//! Turns partial [`MatchOptions`] into the sparse [`DiffPolicy`] handed to an
//! [`ImageComparator`](crate::comparator::ImageComparator). Only values the
//! caller actually set are forwarded, except for the three fields that always
//! carry a concrete value (`ignoreCaret`, `ignoreAntialiasing`,
//! `highlightColor`). Comparators treat an absent field and an explicit
//! default differently in strict mode, so the sparseness is part of the
//! contract.

use crate::options::{defaults, MatchOptions};
use serde::{Deserialize, Serialize};

/// Normalized comparison settings; absent fields mean "capability default"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffPolicy {
    pub strict: bool,
    /// Never present when `strict` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_ratio: Option<f64>,
    pub ignore_caret: bool,
    pub ignore_antialiasing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antialiasing_tolerance: Option<f64>,
    pub highlight_color: String,
}

impl DiffPolicy {
    /// Build the policy for a set of (already layered) options
    pub fn build(options: &MatchOptions) -> Self {
        let strict = options.is_strict();

        Self {
            strict,
            tolerance: if strict { None } else { options.tolerance },
            pixel_ratio: options.pixel_ratio,
            ignore_caret: options.ignore_caret.unwrap_or(defaults::IGNORE_CARET),
            ignore_antialiasing: options
                .ignore_antialiasing
                .unwrap_or(defaults::IGNORE_ANTIALIASING),
            antialiasing_tolerance: options.antialiasing_tolerance,
            highlight_color: options
                .highlight_color()
                .unwrap_or(defaults::HIGHLIGHT_COLOR)
                .to_string(),
        }
    }

    /// Tolerance a comparator should apply, falling back to the documented default
    pub fn effective_tolerance(&self) -> f64 {
        if self.strict {
            0.0
        } else {
            self.tolerance.unwrap_or(defaults::TOLERANCE)
        }
    }
}

impl Default for DiffPolicy {
    fn default() -> Self {
        Self::build(&MatchOptions::default())
    }
}

impl From<&MatchOptions> for DiffPolicy {
    fn from(options: &MatchOptions) -> Self {
        Self::build(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_build_minimal_policy() {
        let policy = DiffPolicy::build(&MatchOptions::default());

        assert!(!policy.strict);
        assert_eq!(policy.tolerance, None);
        assert_eq!(policy.pixel_ratio, None);
        assert_eq!(policy.antialiasing_tolerance, None);
        assert!(policy.ignore_caret);
        assert!(policy.ignore_antialiasing);
        assert_eq!(policy.highlight_color, "#ff00ff");
    }

    #[test]
    fn test_tolerance_forwarded_in_non_strict_mode() {
        let policy = DiffPolicy::build(&MatchOptions {
            tolerance: Some(5.0),
            ..Default::default()
        });
        assert!(!policy.strict);
        assert_eq!(policy.tolerance, Some(5.0));
    }

    #[test]
    fn test_strict_drops_tolerance_but_keeps_explicit_extras() {
        let policy = DiffPolicy::build(&MatchOptions {
            strict: Some(true),
            tolerance: Some(5.0),
            pixel_ratio: Some(2.0),
            antialiasing_tolerance: Some(4.0),
            ..Default::default()
        });

        assert!(policy.strict);
        assert_eq!(policy.tolerance, None);
        assert_eq!(policy.pixel_ratio, Some(2.0));
        assert_eq!(policy.antialiasing_tolerance, Some(4.0));
    }

    #[test]
    fn test_zero_tolerance_forces_strict() {
        let policy = DiffPolicy::build(&MatchOptions {
            tolerance: Some(0.0),
            ..Default::default()
        });
        assert!(policy.strict);
        assert_eq!(policy.tolerance, None);
        assert_eq!(policy.effective_tolerance(), 0.0);
    }

    #[test]
    fn test_explicit_false_flags_are_kept() {
        let policy = DiffPolicy::build(&MatchOptions {
            ignore_caret: Some(false),
            ignore_antialiasing: Some(false),
            highlight_color: Some("#00ff00".to_string()),
            ..Default::default()
        });
        assert!(!policy.ignore_caret);
        assert!(!policy.ignore_antialiasing);
        assert_eq!(policy.highlight_color, "#00ff00");
    }

    #[test]
    fn test_empty_highlight_color_uses_default() {
        let policy = DiffPolicy::build(&MatchOptions {
            highlight_color: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(policy.highlight_color, "#ff00ff");
    }

    #[test]
    fn test_serialized_policy_omits_unset_fields() {
        let policy = DiffPolicy::build(&MatchOptions {
            strict: Some(true),
            tolerance: Some(1.0),
            ..Default::default()
        });
        let value = serde_json::to_value(&policy).unwrap();
        let obj = value.as_object().unwrap();

        assert!(!obj.contains_key("tolerance"));
        assert!(!obj.contains_key("pixelRatio"));
        assert_eq!(obj["strict"], serde_json::json!(true));
        assert_eq!(obj["highlightColor"], serde_json::json!("#ff00ff"));
    }
}
