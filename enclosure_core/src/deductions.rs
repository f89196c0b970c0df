//! # Deduction Calculator
//!
//! Converts a tight opening plus mounting/door policy into the actual glass
//! cut dimensions and the resulting panel weight. "Deduction" is the
//! millimetres subtracted from a tight dimension so the toughened sheet
//! clears its channel, clamps, or hinge gaps — the numbers below are the
//! manufacturer's gap tolerances and differ by mounting method.
//!
//! This is a pure function of structured inputs. The free-text parser's
//! fuzziness never reaches it; callers hand it a [`PanelKind`] and a
//! [`MeasurementInput`] and get back exact cut sizes.
//!
//! ## Gap policy
//!
//! | Panel | Mounting | Width deduction | Height deduction |
//! |-------|----------|-----------------|------------------|
//! | Fixed | Clamps   | 3mm wall gap    | 3mm floor gap |
//! | Fixed | Channel  | 10mm wall channel | 5mm floor, or 6+6mm floor-to-ceiling |
//! | Door  | any      | 4mm hinge + 4mm strike (11mm magnetic) | 10mm drip rail (16mm threshold) + 4mm top |
//!
//! ## Example
//!
//! ```rust
//! use enclosure_core::deductions::compute_deductions;
//! use enclosure_core::layout::{MountingStyle, PanelKind};
//! use enclosure_core::measure::MeasurementInput;
//!
//! let measurement = MeasurementInput::new(900.0, 2000.0, MountingStyle::Clamps);
//! let result = compute_deductions(PanelKind::Fixed, &measurement, 10.0).unwrap();
//! assert_eq!(result.glass_width_mm, 897.0);
//! assert_eq!(result.glass_height_mm, 1997.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{EnclosureError, EnclosureResult};
use crate::layout::{MountingStyle, PanelKind};
use crate::measure::{MeasurementInput, SealHint};
use crate::units::Millimetres;

// ============================================================================
// Manufacturer gap tolerances (mm)
// ============================================================================

/// Clamp-mounted fixed panel: wall gap
pub const CLAMP_WALL_GAP_MM: f64 = 3.0;
/// Clamp-mounted fixed panel: floor gap
pub const CLAMP_FLOOR_GAP_MM: f64 = 3.0;

/// Channel-mounted fixed panel: wall channel, one side
pub const CHANNEL_WALL_MM: f64 = 10.0;
/// Channel-mounted fixed panel: floor channel
pub const CHANNEL_FLOOR_MM: f64 = 5.0;
/// Channel-mounted fixed panel: top and bottom channel each, floor-to-ceiling
pub const CHANNEL_CEILING_EACH_MM: f64 = 6.0;

/// Door: hinge-side gap
pub const DOOR_HINGE_GAP_MM: f64 = 4.0;
/// Door: strike-side gap, plain strip
pub const DOOR_STRIKE_GAP_MM: f64 = 4.0;
/// Door: strike-side gap, magnetic profile
pub const DOOR_STRIKE_MAGNETIC_MM: f64 = 11.0;
/// Door: bottom clearance over the drip rail
pub const DOOR_BOTTOM_CLEARANCE_MM: f64 = 10.0;
/// Door: bottom clearance over a tray threshold
pub const DOOR_BOTTOM_THRESHOLD_MM: f64 = 16.0;
/// Door: top clearance
pub const DOOR_TOP_CLEARANCE_MM: f64 = 4.0;

/// Toughened glass weighs 2.5 kg per m² per mm of thickness
pub const GLASS_DENSITY_KG_PER_M2_MM: f64 = 2.5;

/// Smallest usable cut dimension. Anything below this is a survey or data
/// entry mistake, not a real panel.
pub const MIN_GLASS_DIMENSION_MM: f64 = 100.0;

/// Glass cut dimensions for one panel, with the deductions that produced
/// them and the resulting sheet weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassDeductionResult {
    /// Final cut width (mm), tight width minus the width deduction
    pub glass_width_mm: f64,
    /// Final cut height (mm), tight height minus the height deduction
    pub glass_height_mm: f64,
    /// Total width deduction (mm)
    pub deduction_width_mm: f64,
    /// Total height deduction (mm)
    pub deduction_height_mm: f64,
    /// Sheet weight (kg), computed from the deducted dimensions
    pub weight_kg: f64,
    /// One human-readable note per applied deduction, for display
    pub notes: Vec<String>,
}

/// Compute the glass cut dimensions for one panel.
///
/// Weight uses the density formula on the **deducted** (final cut)
/// dimensions: area in m² × thickness in mm × 2.5. The hinge selector uses
/// its own flat 25 kg/m² estimate; the two agree at 10mm glass.
///
/// Returns `InvalidInput` when a deducted dimension falls below
/// [`MIN_GLASS_DIMENSION_MM`] — undersized cuts are rejected, never
/// silently produced.
pub fn compute_deductions(
    kind: PanelKind,
    measurement: &MeasurementInput,
    glass_thickness_mm: f64,
) -> EnclosureResult<GlassDeductionResult> {
    let mut notes = Vec::new();

    let (deduction_width_mm, deduction_height_mm) = match kind {
        PanelKind::Fixed => fixed_deductions(measurement, &mut notes),
        PanelKind::HingedDoor => door_deductions(measurement, &mut notes),
    };

    let glass_width_mm = measurement.tight_width_mm - deduction_width_mm;
    let glass_height_mm = measurement.tight_height_mm - deduction_height_mm;

    if glass_width_mm < MIN_GLASS_DIMENSION_MM {
        return Err(EnclosureError::invalid_input(
            "tight_width_mm",
            measurement.tight_width_mm.to_string(),
            format!(
                "Deducted width {:.0}mm is below the {:.0}mm minimum cut size",
                glass_width_mm, MIN_GLASS_DIMENSION_MM
            ),
        ));
    }
    if glass_height_mm < MIN_GLASS_DIMENSION_MM {
        return Err(EnclosureError::invalid_input(
            "tight_height_mm",
            measurement.tight_height_mm.to_string(),
            format!(
                "Deducted height {:.0}mm is below the {:.0}mm minimum cut size",
                glass_height_mm, MIN_GLASS_DIMENSION_MM
            ),
        ));
    }

    let area = Millimetres(glass_width_mm).area_with(Millimetres(glass_height_mm));
    let weight_kg = area.value() * glass_thickness_mm * GLASS_DENSITY_KG_PER_M2_MM;

    Ok(GlassDeductionResult {
        glass_width_mm,
        glass_height_mm,
        deduction_width_mm,
        deduction_height_mm,
        weight_kg,
        notes,
    })
}

fn fixed_deductions(measurement: &MeasurementInput, notes: &mut Vec<String>) -> (f64, f64) {
    match measurement.mounting {
        MountingStyle::Clamps => {
            notes.push(format!(
                "Clamp mounting: -{:.0}mm width (wall gap)",
                CLAMP_WALL_GAP_MM
            ));
            notes.push(format!(
                "Clamp mounting: -{:.0}mm height (floor gap)",
                CLAMP_FLOOR_GAP_MM
            ));
            (CLAMP_WALL_GAP_MM, CLAMP_FLOOR_GAP_MM)
        }
        MountingStyle::Channel => {
            notes.push(format!(
                "Channel mounting: -{:.0}mm width (wall channel)",
                CHANNEL_WALL_MM
            ));
            let height = if measurement.ceiling_fixed {
                notes.push(format!(
                    "Floor-to-ceiling: -{:.0}mm height ({:.0}mm top + {:.0}mm bottom channel)",
                    CHANNEL_CEILING_EACH_MM * 2.0,
                    CHANNEL_CEILING_EACH_MM,
                    CHANNEL_CEILING_EACH_MM
                ));
                CHANNEL_CEILING_EACH_MM * 2.0
            } else {
                notes.push(format!(
                    "Channel mounting: -{:.0}mm height (floor channel)",
                    CHANNEL_FLOOR_MM
                ));
                CHANNEL_FLOOR_MM
            };
            (CHANNEL_WALL_MM, height)
        }
    }
}

fn door_deductions(measurement: &MeasurementInput, notes: &mut Vec<String>) -> (f64, f64) {
    notes.push(format!(
        "Door hinge side: -{:.0}mm width (hinge gap)",
        DOOR_HINGE_GAP_MM
    ));

    let strike = match measurement.seal_hint {
        Some(SealHint::Magnetic) => {
            notes.push(format!(
                "Magnetic seal: -{:.0}mm width (strike gap)",
                DOOR_STRIKE_MAGNETIC_MM
            ));
            DOOR_STRIKE_MAGNETIC_MM
        }
        _ => {
            notes.push(format!(
                "Door strike side: -{:.0}mm width (strike gap)",
                DOOR_STRIKE_GAP_MM
            ));
            DOOR_STRIKE_GAP_MM
        }
    };

    let bottom = if measurement.threshold_present {
        notes.push(format!(
            "Threshold: -{:.0}mm height (bottom clearance)",
            DOOR_BOTTOM_THRESHOLD_MM
        ));
        DOOR_BOTTOM_THRESHOLD_MM
    } else {
        notes.push(format!(
            "Drip rail: -{:.0}mm height (bottom clearance)",
            DOOR_BOTTOM_CLEARANCE_MM
        ));
        DOOR_BOTTOM_CLEARANCE_MM
    };
    notes.push(format!(
        "Door top: -{:.0}mm height (top clearance)",
        DOOR_TOP_CLEARANCE_MM
    ));

    (DOOR_HINGE_GAP_MM + strike, bottom + DOOR_TOP_CLEARANCE_MM)
}
