//! # Measurement Input & Validation
//!
//! Tight-opening measurements as surveyed on site, plus the mounting and
//! door policy flags the Deduction Calculator needs. "Tight" means the raw
//! as-built opening before any manufacturing clearance is subtracted.
//!
//! Validation returns a structured check value rather than an error: the
//! caller (a survey form, typically) decides whether an out-of-bounds
//! dimension blocks progression or just shows a warning.
//!
//! ## Example
//!
//! ```rust
//! use enclosure_core::measure::{check_width, MeasurementInput};
//!
//! let check = check_width(900.0);
//! assert!(check.valid);
//!
//! let check = check_width(150.0);
//! assert!(!check.valid);
//! ```

use serde::{Deserialize, Serialize};

use crate::layout::MountingStyle;

// ============================================================================
// Validity bounds (documented survey limits)
// ============================================================================

/// Tight width bounds (mm)
pub const WIDTH_RANGE_MM: (f64, f64) = (600.0, 3000.0);
/// Tight height bounds (mm)
pub const HEIGHT_RANGE_MM: (f64, f64) = (1800.0, 2400.0);
/// Enclosure depth bounds (mm)
pub const DEPTH_RANGE_MM: (f64, f64) = (600.0, 1500.0);
/// Rake angle bounds (degrees from true vertical/horizontal)
pub const RAKE_RANGE_DEG: (f64, f64) = (1.0, 45.0);

/// Strike-side seal profile hint from the customer's configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SealHint {
    /// Magnetic closing strip, needs a wider strike gap
    Magnetic,
    /// Plain overlap strip
    Standard,
}

/// Per-panel tight measurements and deduction policy flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// Tight opening width (mm)
    pub tight_width_mm: f64,

    /// Tight opening height (mm)
    pub tight_height_mm: f64,

    /// Channel or clamp mounting
    pub mounting: MountingStyle,

    /// Panel runs floor-to-ceiling (adds a top channel)
    #[serde(default)]
    pub ceiling_fixed: bool,

    /// A shower tray threshold sits under the door
    #[serde(default)]
    pub threshold_present: bool,

    /// Strike-side seal profile, doors only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seal_hint: Option<SealHint>,
}

impl MeasurementInput {
    pub fn new(tight_width_mm: f64, tight_height_mm: f64, mounting: MountingStyle) -> Self {
        MeasurementInput {
            tight_width_mm,
            tight_height_mm,
            mounting,
            ceiling_fixed: false,
            threshold_present: false,
            seal_hint: None,
        }
    }

    pub fn with_ceiling_fixed(mut self, ceiling_fixed: bool) -> Self {
        self.ceiling_fixed = ceiling_fixed;
        self
    }

    pub fn with_threshold(mut self, threshold_present: bool) -> Self {
        self.threshold_present = threshold_present;
        self
    }

    pub fn with_seal_hint(mut self, hint: SealHint) -> Self {
        self.seal_hint = Some(hint);
        self
    }
}

// ============================================================================
// Structured validation
// ============================================================================

/// Non-throwing validation outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementCheck {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MeasurementCheck {
    pub fn ok() -> Self {
        MeasurementCheck {
            valid: true,
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        MeasurementCheck {
            valid: false,
            error: Some(error.into()),
        }
    }
}

fn check_range(label: &str, value: f64, range: (f64, f64), unit: &str) -> MeasurementCheck {
    let (min, max) = range;
    if value < min || value > max {
        MeasurementCheck::fail(format!(
            "{} {:.0}{} is outside the supported range {:.0}-{:.0}{}",
            label, value, unit, min, max, unit
        ))
    } else {
        MeasurementCheck::ok()
    }
}

/// Check a tight width against the supported range
pub fn check_width(width_mm: f64) -> MeasurementCheck {
    check_range("Width", width_mm, WIDTH_RANGE_MM, "mm")
}

/// Check a tight height against the supported range
pub fn check_height(height_mm: f64) -> MeasurementCheck {
    check_range("Height", height_mm, HEIGHT_RANGE_MM, "mm")
}

/// Check an enclosure depth against the supported range
pub fn check_depth(depth_mm: f64) -> MeasurementCheck {
    check_range("Depth", depth_mm, DEPTH_RANGE_MM, "mm")
}

/// Check a rake angle against the supported range
pub fn check_rake(angle_deg: f64) -> MeasurementCheck {
    check_range("Rake angle", angle_deg, RAKE_RANGE_DEG, "°")
}

/// Check both tight dimensions of a measurement; the first failure wins
pub fn check_measurement(measurement: &MeasurementInput) -> MeasurementCheck {
    let width = check_width(measurement.tight_width_mm);
    if !width.valid {
        return width;
    }
    check_height(measurement.tight_height_mm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_bounds() {
        assert!(check_width(600.0).valid);
        assert!(check_width(3000.0).valid);
        assert!(!check_width(599.9).valid);
        assert!(!check_width(3000.1).valid);
    }

    #[test]
    fn test_height_bounds() {
        assert!(check_height(1800.0).valid);
        assert!(check_height(2400.0).valid);
        assert!(!check_height(1500.0).valid);
    }

    #[test]
    fn test_depth_and_rake_bounds() {
        assert!(check_depth(800.0).valid);
        assert!(!check_depth(1600.0).valid);
        assert!(check_rake(5.0).valid);
        assert!(!check_rake(0.5).valid);
    }

    #[test]
    fn test_check_message_names_dimension() {
        let check = check_width(200.0);
        assert!(!check.valid);
        let message = check.error.unwrap();
        assert!(message.starts_with("Width"));
        assert!(message.contains("600"));
    }

    #[test]
    fn test_check_measurement_first_failure_wins() {
        let measurement = MeasurementInput::new(100.0, 100.0, MountingStyle::Channel);
        let check = check_measurement(&measurement);
        assert!(!check.valid);
        assert!(check.error.unwrap().starts_with("Width"));
    }

    #[test]
    fn test_measurement_builder() {
        let measurement = MeasurementInput::new(900.0, 2000.0, MountingStyle::Clamps)
            .with_ceiling_fixed(true)
            .with_threshold(true)
            .with_seal_hint(SealHint::Magnetic);
        assert!(measurement.ceiling_fixed);
        assert!(measurement.threshold_present);
        assert_eq!(measurement.seal_hint, Some(SealHint::Magnetic));
    }

    #[test]
    fn test_measurement_serialization() {
        let measurement = MeasurementInput::new(900.0, 2000.0, MountingStyle::Channel)
            .with_seal_hint(SealHint::Standard);
        let json = serde_json::to_string(&measurement).unwrap();
        let roundtrip: MeasurementInput = serde_json::from_str(&json).unwrap();
        assert_eq!(measurement, roundtrip);
    }
}
