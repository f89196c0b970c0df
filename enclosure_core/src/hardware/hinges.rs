//! # Hinge Selection
//!
//! Picks the lightest hinge line whose width and weight limits both
//! accommodate the door. Door weight is estimated from tight dimensions at
//! a flat 25 kg/m², the 10mm-glass figure; the exact per-sheet weight from
//! the Deduction Calculator is not needed at selection time because the
//! tier bands are far coarser than the deduction error.
//!
//! Selection never fails: a door no tier can carry still receives the
//! premium line, with `oversized` set so the caller can show a visible
//! warning instead of a selection that looks comfortably in range.

use serde::{Deserialize, Serialize};

use crate::errors::EnclosureResult;
use crate::hardware::{HardwareCatalog, HingeBrand};
use crate::units::Millimetres;

/// Door weight estimate for hinge banding: 10mm toughened glass at 25 kg/m²
pub const DOOR_WEIGHT_ESTIMATE_KG_PER_M2: f64 = 25.0;

/// Outcome of hinge selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HingeSelection {
    pub brand: HingeBrand,
    /// Estimated door weight used for banding (kg)
    pub estimated_weight_kg: f64,
    /// The selected line's limits do not actually accommodate the door;
    /// the caller must surface a size/weight warning
    pub oversized: bool,
}

/// Select a hinge line for a door of the given tight dimensions.
///
/// Iterates the catalog's hinge lines in ascending capability order and
/// returns the first whose width **and** weight limits both fit. When none
/// qualify, or the caller asks for the premium line outright, the premium
/// tier is returned with `oversized` reporting whether its limits are
/// exceeded.
pub fn select_hinge(
    door_width_mm: f64,
    door_height_mm: f64,
    prefer_premium: bool,
    catalog: &HardwareCatalog,
) -> EnclosureResult<HingeSelection> {
    let area = Millimetres(door_width_mm).area_with(Millimetres(door_height_mm));
    let estimated_weight_kg = area.value() * DOOR_WEIGHT_ESTIMATE_KG_PER_M2;

    if !prefer_premium {
        for hinge in &catalog.hinges {
            if hinge.accommodates(door_width_mm, estimated_weight_kg) {
                return Ok(HingeSelection {
                    brand: hinge.brand,
                    estimated_weight_kg,
                    oversized: false,
                });
            }
        }
    }

    let premium = catalog.premium_hinge()?;
    Ok(HingeSelection {
        brand: premium.brand,
        estimated_weight_kg,
        oversized: !premium.accommodates(door_width_mm, estimated_weight_kg),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::standard_catalog;

    #[test]
    fn test_small_door_takes_lightest_tier() {
        // 700 x 1900: 1.33 m², ~33.25kg, within 800mm/40kg
        let selection = select_hinge(700.0, 1900.0, false, standard_catalog()).unwrap();
        assert_eq!(selection.brand, HingeBrand::Aria);
        assert!((selection.estimated_weight_kg - 33.25).abs() < 0.01);
        assert!(!selection.oversized);
    }

    #[test]
    fn test_weight_derates_past_lightest_tier() {
        // 790 x 2100: width fits Aria but 41.5kg exceeds its 40kg limit
        let selection = select_hinge(790.0, 2100.0, false, standard_catalog()).unwrap();
        assert_eq!(selection.brand, HingeBrand::Forte);
        assert!(!selection.oversized);
    }

    #[test]
    fn test_wide_door_lands_on_top_tier() {
        // 1100mm exceeds Aria's 800mm and Forte's 1000mm; Maxima carries it
        let selection = select_hinge(1100.0, 2000.0, false, standard_catalog()).unwrap();
        assert_eq!(selection.brand, HingeBrand::Maxima);
        assert!(!selection.oversized);
    }

    #[test]
    fn test_oversized_door_flagged_not_silent() {
        // 1300mm exceeds even Maxima's 1200mm limit
        let selection = select_hinge(1300.0, 2200.0, false, standard_catalog()).unwrap();
        assert_eq!(selection.brand, HingeBrand::Maxima);
        assert!(selection.oversized);
    }

    #[test]
    fn test_premium_preference_skips_lighter_tiers() {
        let selection = select_hinge(700.0, 1900.0, true, standard_catalog()).unwrap();
        assert_eq!(selection.brand, HingeBrand::Maxima);
        assert!(!selection.oversized);
    }

    #[test]
    fn test_premium_preference_still_flags_oversized() {
        let selection = select_hinge(1300.0, 2200.0, true, standard_catalog()).unwrap();
        assert_eq!(selection.brand, HingeBrand::Maxima);
        assert!(selection.oversized);
    }

    #[test]
    fn test_selection_serialization() {
        let selection = select_hinge(700.0, 1900.0, false, standard_catalog()).unwrap();
        let json = serde_json::to_string(&selection).unwrap();
        let roundtrip: HingeSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(selection, roundtrip);
    }
}
