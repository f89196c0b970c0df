//! # Design Configuration
//!
//! The immutable configuration a customer builds up while designing an
//! enclosure, plus the typed patch operations the consuming UI applies.
//!
//! Patches replace the ad-hoc partial-object merging a web client would
//! naturally reach for: every mutation is a named operation validated
//! against the recognized option set before it produces a new configuration
//! value. The engine itself never mutates a configuration in place; the
//! caller applies a patch and re-derives deductions, hardware, and quote.
//!
//! ## Example
//!
//! ```rust
//! use enclosure_core::config::{ConfigPatch, DesignConfiguration, DoorOpening};
//!
//! let config = DesignConfiguration::default();
//! let config = ConfigPatch::DoorOpening(DoorOpening::Both).apply(&config).unwrap();
//! assert_eq!(config.door_opening, DoorOpening::Both);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{EnclosureError, EnclosureResult};
use crate::layout::MountingStyle;

/// Glass thicknesses the current toughened-glass catalog stocks (mm)
pub const SUPPORTED_GLASS_THICKNESSES_MM: [f64; 1] = [10.0];

// ============================================================================
// Option enums
// ============================================================================

/// Which way the door swings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DoorOpening {
    Inward,
    #[default]
    Outward,
    Left,
    Right,
    /// Swings freely in and out
    Both,
}

impl DoorOpening {
    pub const ALL: [DoorOpening; 5] = [
        DoorOpening::Inward,
        DoorOpening::Outward,
        DoorOpening::Left,
        DoorOpening::Right,
        DoorOpening::Both,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DoorOpening::Inward => "Inward",
            DoorOpening::Outward => "Outward",
            DoorOpening::Left => "Left",
            DoorOpening::Right => "Right",
            DoorOpening::Both => "Both ways",
        }
    }

    /// Swings outward only (needs the fixed-panel fin seal)
    pub fn is_outward_only(&self) -> bool {
        matches!(self, DoorOpening::Outward)
    }

    /// Swings both ways (needs the hinge-side bubble seal)
    pub fn is_both_ways(&self) -> bool {
        matches!(self, DoorOpening::Both)
    }
}

impl std::fmt::Display for DoorOpening {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Glass tint/finish, priced per square metre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GlassType {
    #[default]
    Clear,
    LowIron,
    Satin,
    Smoked,
}

impl GlassType {
    pub const ALL: [GlassType; 4] = [
        GlassType::Clear,
        GlassType::LowIron,
        GlassType::Satin,
        GlassType::Smoked,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            GlassType::Clear => "Clear toughened",
            GlassType::LowIron => "Low-iron toughened",
            GlassType::Satin => "Satin etched",
            GlassType::Smoked => "Smoked grey",
        }
    }
}

impl std::fmt::Display for GlassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Hardware plating finish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HardwareFinish {
    #[default]
    Chrome,
    BrushedNickel,
    MatteBlack,
    BrushedBrass,
}

impl HardwareFinish {
    pub const ALL: [HardwareFinish; 4] = [
        HardwareFinish::Chrome,
        HardwareFinish::BrushedNickel,
        HardwareFinish::MatteBlack,
        HardwareFinish::BrushedBrass,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            HardwareFinish::Chrome => "Polished chrome",
            HardwareFinish::BrushedNickel => "Brushed nickel",
            HardwareFinish::MatteBlack => "Matte black",
            HardwareFinish::BrushedBrass => "Brushed brass",
        }
    }
}

/// Door handle style, priced from the handle catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HandleType {
    /// Small knob, included with the door kit
    #[default]
    Knob,
    /// 300mm bar handle
    Bar,
    /// Recessed finger grip, cut into the glass
    Recessed,
}

impl HandleType {
    pub const ALL: [HandleType; 3] = [HandleType::Knob, HandleType::Bar, HandleType::Recessed];

    pub fn display_name(&self) -> &'static str {
        match self {
            HandleType::Knob => "Knob",
            HandleType::Bar => "Bar handle",
            HandleType::Recessed => "Recessed grip",
        }
    }
}

/// Hinge product-line preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HingePreference {
    /// Lightest tier whose width and weight limits fit the door
    #[default]
    Automatic,
    /// Always quote the premium tier
    Premium,
}

impl HingePreference {
    pub fn prefer_premium(&self) -> bool {
        matches!(self, HingePreference::Premium)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Everything the customer has chosen about the enclosure besides its
/// layout and measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignConfiguration {
    pub mounting: MountingStyle,
    pub door_opening: DoorOpening,
    pub finish: HardwareFinish,
    pub handle: HandleType,
    pub hinge_preference: HingePreference,
    pub glass: GlassType,
    /// Toughened glass thickness (mm); the current catalog stocks 10mm only
    pub glass_thickness_mm: f64,
    /// Include seal line items in the quote
    pub seals_included: bool,
    /// Include an installation line item in the quote
    pub installation_included: bool,
}

impl Default for DesignConfiguration {
    fn default() -> Self {
        DesignConfiguration {
            mounting: MountingStyle::Channel,
            door_opening: DoorOpening::Outward,
            finish: HardwareFinish::Chrome,
            handle: HandleType::Knob,
            hinge_preference: HingePreference::Automatic,
            glass: GlassType::Clear,
            glass_thickness_mm: 10.0,
            seals_included: true,
            installation_included: true,
        }
    }
}

/// A single named configuration mutation.
///
/// `apply` validates the operation and returns a new configuration; the
/// original is untouched. Callers re-derive the full design after every
/// applied patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value")]
pub enum ConfigPatch {
    Mounting(MountingStyle),
    DoorOpening(DoorOpening),
    Finish(HardwareFinish),
    Handle(HandleType),
    HingePreference(HingePreference),
    Glass(GlassType),
    GlassThickness(f64),
    SealsIncluded(bool),
    InstallationIncluded(bool),
}

impl ConfigPatch {
    /// Validate the patch and produce the updated configuration
    pub fn apply(&self, config: &DesignConfiguration) -> EnclosureResult<DesignConfiguration> {
        let mut next = config.clone();
        match *self {
            ConfigPatch::Mounting(mounting) => next.mounting = mounting,
            ConfigPatch::DoorOpening(opening) => next.door_opening = opening,
            ConfigPatch::Finish(finish) => next.finish = finish,
            ConfigPatch::Handle(handle) => next.handle = handle,
            ConfigPatch::HingePreference(preference) => next.hinge_preference = preference,
            ConfigPatch::Glass(glass) => next.glass = glass,
            ConfigPatch::GlassThickness(thickness_mm) => {
                if !SUPPORTED_GLASS_THICKNESSES_MM
                    .iter()
                    .any(|t| (t - thickness_mm).abs() < f64::EPSILON)
                {
                    return Err(EnclosureError::invalid_input(
                        "glass_thickness_mm",
                        thickness_mm.to_string(),
                        "Thickness is not stocked in the current glass catalog",
                    ));
                }
                next.glass_thickness_mm = thickness_mm;
            }
            ConfigPatch::SealsIncluded(included) => next.seals_included = included,
            ConfigPatch::InstallationIncluded(included) => next.installation_included = included,
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = DesignConfiguration::default();
        assert_eq!(config.glass_thickness_mm, 10.0);
        assert!(config.seals_included);
        assert!(config.installation_included);
    }

    #[test]
    fn test_patch_produces_new_value() {
        let config = DesignConfiguration::default();
        let patched = ConfigPatch::Glass(GlassType::Satin).apply(&config).unwrap();
        assert_eq!(patched.glass, GlassType::Satin);
        assert_eq!(config.glass, GlassType::Clear);
    }

    #[test]
    fn test_thickness_patch_validated_against_catalog() {
        let config = DesignConfiguration::default();
        assert!(ConfigPatch::GlassThickness(10.0).apply(&config).is_ok());

        let err = ConfigPatch::GlassThickness(6.0).apply(&config).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_door_opening_predicates() {
        assert!(DoorOpening::Outward.is_outward_only());
        assert!(!DoorOpening::Both.is_outward_only());
        assert!(DoorOpening::Both.is_both_ways());
        assert!(!DoorOpening::Left.is_both_ways());
    }

    #[test]
    fn test_patch_serialization() {
        let patch = ConfigPatch::DoorOpening(DoorOpening::Both);
        let json = serde_json::to_string(&patch).unwrap();
        assert!(json.contains("\"op\":\"DoorOpening\""));
        let roundtrip: ConfigPatch = serde_json::from_str(&json).unwrap();
        assert_eq!(patch, roundtrip);
    }
}
