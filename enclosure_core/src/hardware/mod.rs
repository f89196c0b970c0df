//! # Hardware Catalogs
//!
//! Static catalogs for the hinge, handle, and seal ranges the enclosure
//! line ships with, plus the selectors that pick from them:
//!
//! - [`hinges`] - weight-derated hinge tier selection
//! - [`seals`] - door-opening and hinge-dependent seal requirements
//!
//! The catalogs are exhaustive for every key the domain model can produce.
//! A failed lookup is therefore a static-data integrity violation (a
//! programming error) and surfaces as a loud `CatalogIntegrity` error, never
//! a recovered default. Calculators take the catalog by reference so tests
//! can substitute fixtures; [`standard_catalog`] is the process-wide default.

pub mod hinges;
pub mod seals;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::HandleType;
use crate::errors::{EnclosureError, EnclosureResult};

pub use hinges::{select_hinge, HingeSelection, DOOR_WEIGHT_ESTIMATE_KG_PER_M2};
pub use seals::required_seals;

// ============================================================================
// Hinges
// ============================================================================

/// Hinge product line, in ascending capability order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HingeBrand {
    /// Light-duty line, doors to 800mm / 40kg
    Aria,
    /// Mid-weight line, doors to 1000mm / 50kg
    Forte,
    /// Premium heavy line, doors to 1200mm / 65kg
    Maxima,
}

impl HingeBrand {
    pub const ALL: [HingeBrand; 3] = [HingeBrand::Aria, HingeBrand::Forte, HingeBrand::Maxima];

    pub fn display_name(&self) -> &'static str {
        match self {
            HingeBrand::Aria => "Aria 80",
            HingeBrand::Forte => "Forte 100",
            HingeBrand::Maxima => "Maxima 120",
        }
    }
}

impl std::fmt::Display for HingeBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which seal profile family a hinge line pairs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SealFamily {
    /// Standard rigid H-profile
    HSeal,
    /// Soft bubble profile (premium line)
    Bubble,
}

/// One hinge catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HingeOption {
    pub brand: HingeBrand,
    /// Cost per hinge (GBP)
    pub unit_cost: f64,
    /// Maximum supportable door width (mm)
    pub max_door_width_mm: f64,
    /// Maximum supportable door weight (kg)
    pub max_door_weight_kg: f64,
    /// Premium product line
    pub premium: bool,
    /// Seal profile family this line pairs with
    pub seal_family: SealFamily,
}

impl HingeOption {
    /// Whether this line's width and weight limits both accommodate the door
    pub fn accommodates(&self, door_width_mm: f64, door_weight_kg: f64) -> bool {
        door_width_mm <= self.max_door_width_mm && door_weight_kg <= self.max_door_weight_kg
    }
}

// ============================================================================
// Handles
// ============================================================================

/// One handle catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleOption {
    pub handle_type: HandleType,
    /// Cost per handle (GBP); zero-priced handles are included with the
    /// door kit and omitted from quotes
    pub unit_cost: f64,
    /// Whether fitting requires a cutout in the glass
    pub requires_cutout: bool,
}

// ============================================================================
// Seals
// ============================================================================

/// Seal profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SealType {
    /// Bottom drip seal, fitted to every door
    Drip,
    /// Soft-fin H-profile for the fixed panel edge
    SoftFinH,
    /// Bubble profile, hinge side
    Bubble,
    /// Standard H-profile, hinge side
    HSeal,
}

impl SealType {
    pub const ALL: [SealType; 4] = [
        SealType::Drip,
        SealType::SoftFinH,
        SealType::Bubble,
        SealType::HSeal,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SealType::Drip => "Drip seal",
            SealType::SoftFinH => "Soft-fin H seal",
            SealType::Bubble => "Bubble seal",
            SealType::HSeal => "H seal",
        }
    }
}

impl std::fmt::Display for SealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Where a seal attaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SealLocation {
    DoorBottom,
    FixedPanelEdge,
    HingeSide,
}

/// One seal catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SealOption {
    pub seal_type: SealType,
    /// Cost per linear metre (GBP)
    pub unit_cost: f64,
    pub location: SealLocation,
}

// ============================================================================
// Catalog
// ============================================================================

/// The full hardware catalog: hinge lines in ascending capability order,
/// handle styles, and seal profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareCatalog {
    /// Hinge lines, ascending capability; selection iterates in order
    pub hinges: Vec<HingeOption>,
    pub handles: Vec<HandleOption>,
    pub seals: Vec<SealOption>,
}

impl HardwareCatalog {
    /// Look up a hinge line. Absence is a data-integrity violation.
    pub fn hinge(&self, brand: HingeBrand) -> EnclosureResult<&HingeOption> {
        self.hinges
            .iter()
            .find(|h| h.brand == brand)
            .ok_or_else(|| EnclosureError::catalog_integrity("hinges", brand.display_name()))
    }

    /// The premium hinge line. Absence is a data-integrity violation.
    pub fn premium_hinge(&self) -> EnclosureResult<&HingeOption> {
        self.hinges
            .iter()
            .find(|h| h.premium)
            .ok_or_else(|| EnclosureError::catalog_integrity("hinges", "premium tier"))
    }

    /// Look up a handle style. Absence is a data-integrity violation.
    pub fn handle(&self, handle_type: HandleType) -> EnclosureResult<&HandleOption> {
        self.handles
            .iter()
            .find(|h| h.handle_type == handle_type)
            .ok_or_else(|| {
                EnclosureError::catalog_integrity("handles", handle_type.display_name())
            })
    }

    /// Look up a seal profile. Absence is a data-integrity violation.
    pub fn seal(&self, seal_type: SealType) -> EnclosureResult<&SealOption> {
        self.seals
            .iter()
            .find(|s| s.seal_type == seal_type)
            .ok_or_else(|| EnclosureError::catalog_integrity("seals", seal_type.display_name()))
    }
}

static STANDARD_CATALOG: Lazy<HardwareCatalog> = Lazy::new(build_standard_catalog);

/// The standard hardware catalog, built once per process
pub fn standard_catalog() -> &'static HardwareCatalog {
    &STANDARD_CATALOG
}

fn build_standard_catalog() -> HardwareCatalog {
    HardwareCatalog {
        hinges: vec![
            HingeOption {
                brand: HingeBrand::Aria,
                unit_cost: 24.50,
                max_door_width_mm: 800.0,
                max_door_weight_kg: 40.0,
                premium: false,
                seal_family: SealFamily::HSeal,
            },
            HingeOption {
                brand: HingeBrand::Forte,
                unit_cost: 38.00,
                max_door_width_mm: 1000.0,
                max_door_weight_kg: 50.0,
                premium: false,
                seal_family: SealFamily::HSeal,
            },
            HingeOption {
                brand: HingeBrand::Maxima,
                unit_cost: 62.00,
                max_door_width_mm: 1200.0,
                max_door_weight_kg: 65.0,
                premium: true,
                seal_family: SealFamily::Bubble,
            },
        ],
        handles: vec![
            HandleOption {
                handle_type: HandleType::Knob,
                unit_cost: 0.0,
                requires_cutout: false,
            },
            HandleOption {
                handle_type: HandleType::Bar,
                unit_cost: 45.00,
                requires_cutout: false,
            },
            HandleOption {
                handle_type: HandleType::Recessed,
                unit_cost: 38.00,
                requires_cutout: true,
            },
        ],
        seals: vec![
            SealOption {
                seal_type: SealType::Drip,
                unit_cost: 8.50,
                location: SealLocation::DoorBottom,
            },
            SealOption {
                seal_type: SealType::SoftFinH,
                unit_cost: 6.00,
                location: SealLocation::FixedPanelEdge,
            },
            SealOption {
                seal_type: SealType::Bubble,
                unit_cost: 7.25,
                location: SealLocation::HingeSide,
            },
            SealOption {
                seal_type: SealType::HSeal,
                unit_cost: 5.50,
                location: SealLocation::HingeSide,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_domain_key() {
        let catalog = standard_catalog();
        for brand in HingeBrand::ALL {
            catalog.hinge(brand).unwrap();
        }
        for handle_type in HandleType::ALL {
            catalog.handle(handle_type).unwrap();
        }
        for seal_type in SealType::ALL {
            catalog.seal(seal_type).unwrap();
        }
    }

    #[test]
    fn test_hinges_ascend_in_capability() {
        let hinges = &standard_catalog().hinges;
        for pair in hinges.windows(2) {
            assert!(pair[0].max_door_width_mm < pair[1].max_door_width_mm);
            assert!(pair[0].max_door_weight_kg < pair[1].max_door_weight_kg);
        }
    }

    #[test]
    fn test_exactly_one_premium_tier() {
        let premium: Vec<_> = standard_catalog()
            .hinges
            .iter()
            .filter(|h| h.premium)
            .collect();
        assert_eq!(premium.len(), 1);
        assert_eq!(premium[0].brand, HingeBrand::Maxima);
        assert_eq!(premium[0].seal_family, SealFamily::Bubble);
    }

    #[test]
    fn test_missing_entry_is_integrity_violation() {
        let catalog = HardwareCatalog {
            hinges: vec![],
            handles: vec![],
            seals: vec![],
        };
        let err = catalog.hinge(HingeBrand::Aria).unwrap_err();
        assert_eq!(err.error_code(), "CATALOG_INTEGRITY");
        assert!(err.is_integrity_violation());
    }

    #[test]
    fn test_accommodates_checks_both_limits() {
        let aria = standard_catalog().hinge(HingeBrand::Aria).unwrap();
        assert!(aria.accommodates(700.0, 35.0));
        assert!(!aria.accommodates(900.0, 35.0)); // width over
        assert!(!aria.accommodates(700.0, 45.0)); // weight over
    }

    #[test]
    fn test_catalog_serialization() {
        let catalog = standard_catalog();
        let json = serde_json::to_string(catalog).unwrap();
        let roundtrip: HardwareCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(*catalog, roundtrip);
    }
}
