//! Confidence labels and bar widths.
//!
//! Confidences arrive as percentages (0-100) and are used directly as CSS
//! widths; nothing here rescales them.

#[cfg(test)]
#[path = "confidence_test.rs"]
mod confidence_test;

/// Shown for a recommendation's next topic when the service omits it.
pub const NEXT_TOPIC_CONF_DEFAULT: f64 = 85.0;
/// Shown for a recommendation's action when the service omits it.
pub const ACTION_CONF_DEFAULT: f64 = 90.0;
/// Shown for a recommendation's difficulty adjustment when the service omits it.
pub const DIFFICULTY_ADJUSTMENT_CONF_DEFAULT: f64 = 95.0;

/// A displayed value paired with its confidence percentage.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfidenceField {
    pub value: String,
    pub conf: f64,
}

impl ConfidenceField {
    pub fn new(value: impl Into<String>, conf: f64) -> Self {
        Self { value: value.into(), conf }
    }

    /// Text under the value, e.g. `"80% confidence"`.
    pub fn label(&self) -> String {
        format!("{}% confidence", self.conf)
    }

    /// CSS width of the bar, e.g. `"80%"`.
    pub fn bar_width(&self) -> String {
        bar_width(self.conf)
    }
}

pub fn bar_width(conf: f64) -> String {
    format!("{conf}%")
}

/// Resolve an optional confidence against its presentation default.
///
/// A zero or non-finite confidence counts as missing, matching how the page
/// has always treated falsy values.
pub fn or_default(conf: Option<f64>, default: f64) -> f64 {
    match conf {
        Some(c) if c.is_finite() && c.abs() >= f64::MIN_POSITIVE => c,
        _ => default,
    }
}
