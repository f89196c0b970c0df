//! # Quote Calculator
//!
//! Prices a configured design into an itemized, VAT-inclusive quote:
//! glass by the square metre, hinges by the selected tier, handle, mounting
//! hardware by the linear metre, seals, and installation. Line totals and
//! the final totals are rounded to whole pence; VAT is a flat 20% and the
//! quote is valid for 30 days from generation.
//!
//! Pricing is deliberately simplified at the glass step: every panel is
//! assumed to share the design's primary tight dimensions, so total area is
//! panel count × width × height. Cutting-exact pricing belongs to the
//! manufacturer's own takeoff, not the customer quote.
//!
//! ## Example
//!
//! ```rust
//! use enclosure_core::design::EnclosureDesign;
//! use enclosure_core::hardware::standard_catalog;
//! use enclosure_core::layout::standard_library;
//! use enclosure_core::quote::{generate_quote, standard_price_book};
//!
//! let template = standard_library().get("corner-left-900").unwrap();
//! let design = EnclosureDesign::from_template(template);
//! let quote = generate_quote(&design, standard_catalog(), standard_price_book()).unwrap();
//! assert!(quote.total > quote.subtotal);
//! ```

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::GlassType;
use crate::design::EnclosureDesign;
use crate::errors::{EnclosureError, EnclosureResult};
use crate::hardware::{required_seals, select_hinge, HardwareCatalog};
use crate::layout::MountingStyle;
use crate::units::{Metres, Millimetres};

/// VAT rate applied to every quote
pub const VAT_RATE: f64 = 0.20;

/// Days a quote remains valid after generation
pub const QUOTE_VALIDITY_DAYS: i64 = 30;

/// Door height above which a third hinge is specified (mm)
pub const THIRD_HINGE_HEIGHT_MM: f64 = 2000.0;

// ============================================================================
// Price book
// ============================================================================

/// Per-square-metre rate for one glass type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassRate {
    pub glass: GlassType,
    pub rate_per_m2: f64,
}

/// Static pricing tables. Constructed once at process start and passed
/// explicitly into the Quote Calculator; [`standard_price_book`] is the
/// process-wide default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBook {
    pub glass_rates: Vec<GlassRate>,
    /// Wall/floor channel, per linear metre (GBP)
    pub channel_per_m: f64,
    /// Glass clamps, per linear metre of run (GBP)
    pub clamps_per_m: f64,
    /// Installation labour, per square metre of glass (GBP)
    pub installation_per_m2: f64,
}

impl PriceBook {
    /// Rate for a glass type. Absence is a data-integrity violation.
    pub fn glass_rate(&self, glass: GlassType) -> EnclosureResult<f64> {
        self.glass_rates
            .iter()
            .find(|r| r.glass == glass)
            .map(|r| r.rate_per_m2)
            .ok_or_else(|| EnclosureError::catalog_integrity("glass rates", glass.display_name()))
    }

    /// Mounting hardware rate per linear metre
    pub fn mounting_per_m(&self, mounting: MountingStyle) -> f64 {
        match mounting {
            MountingStyle::Channel => self.channel_per_m,
            MountingStyle::Clamps => self.clamps_per_m,
        }
    }
}

static STANDARD_PRICE_BOOK: Lazy<PriceBook> = Lazy::new(|| PriceBook {
    glass_rates: vec![
        GlassRate {
            glass: GlassType::Clear,
            rate_per_m2: 85.0,
        },
        GlassRate {
            glass: GlassType::LowIron,
            rate_per_m2: 105.0,
        },
        GlassRate {
            glass: GlassType::Satin,
            rate_per_m2: 120.0,
        },
        GlassRate {
            glass: GlassType::Smoked,
            rate_per_m2: 110.0,
        },
    ],
    channel_per_m: 22.0,
    clamps_per_m: 15.0,
    installation_per_m2: 60.0,
});

/// The standard price book, built once per process
pub fn standard_price_book() -> &'static PriceBook {
    &STANDARD_PRICE_BOOK
}

// ============================================================================
// Quote types
// ============================================================================

/// Line item grouping for display and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineItemCategory {
    Glass,
    Hardware,
    Seals,
    Installation,
    Other,
}

impl LineItemCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            LineItemCategory::Glass => "Glass",
            LineItemCategory::Hardware => "Hardware",
            LineItemCategory::Seals => "Seals",
            LineItemCategory::Installation => "Installation",
            LineItemCategory::Other => "Other",
        }
    }
}

/// One priced line of the quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLineItem {
    pub description: String,
    pub quantity: f64,
    /// Unit the quantity is expressed in ("m²", "m", "each")
    pub unit: String,
    pub unit_price: f64,
    /// quantity × unit price, rounded to pence
    pub total: f64,
    pub category: LineItemCategory,
}

impl QuoteLineItem {
    fn new(
        description: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        unit_price: f64,
        category: LineItemCategory,
    ) -> Self {
        QuoteLineItem {
            description: description.into(),
            quantity,
            unit: unit.into(),
            unit_price,
            total: round2(quantity * unit_price),
            category,
        }
    }
}

/// The full itemized quote. Immutable once handed to persistence or
/// payment collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub id: Uuid,
    pub items: Vec<QuoteLineItem>,
    /// Sum of line totals, rounded to pence
    pub subtotal: f64,
    /// subtotal × 20%, rounded to pence
    pub vat: f64,
    /// subtotal + VAT, rounded to pence
    pub total: f64,
    pub generated: DateTime<Utc>,
    /// Quote expires 30 days after generation
    pub valid_until: DateTime<Utc>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Quote generation
// ============================================================================

/// Price a design into an itemized quote.
///
/// Steps run in a fixed order: glass, hinges, handle, mounting hardware,
/// seals (if enabled), installation (if enabled). Hinge tier and seal list
/// are re-derived here from the same selectors the caller sees, so a quote
/// can never disagree with the hardware specification.
pub fn generate_quote(
    design: &EnclosureDesign,
    catalog: &HardwareCatalog,
    prices: &PriceBook,
) -> EnclosureResult<QuoteBreakdown> {
    let config = &design.config;
    let primary = design.primary_measurement()?;
    let panel_count = design.layout.panels.len();

    let mut items = Vec::new();

    // 1. Glass, uniform-panel area assumption
    let panel_area = Millimetres(primary.tight_width_mm)
        .area_with(Millimetres(primary.tight_height_mm));
    let glass_area_m2 = panel_count as f64 * panel_area.value();
    let glass_rate = prices.glass_rate(config.glass)?;
    items.push(QuoteLineItem::new(
        format!(
            "{} {:.0}mm ({} panels)",
            config.glass, config.glass_thickness_mm, panel_count
        ),
        round2(glass_area_m2),
        "m²",
        glass_rate,
        LineItemCategory::Glass,
    ));

    // 2/3. Door hardware
    if let Some(door) = design.layout.door_panel() {
        let door_measurement = design.measurement_for(&door.id)?;
        let selection = select_hinge(
            door_measurement.tight_width_mm,
            door_measurement.tight_height_mm,
            config.hinge_preference.prefer_premium(),
            catalog,
        )?;
        let hinge = catalog.hinge(selection.brand)?;
        let hinge_count = if door_measurement.tight_height_mm > THIRD_HINGE_HEIGHT_MM {
            3.0
        } else {
            2.0
        };
        items.push(QuoteLineItem::new(
            format!("{} hinge", selection.brand),
            hinge_count,
            "each",
            hinge.unit_cost,
            LineItemCategory::Hardware,
        ));

        let handle = catalog.handle(config.handle)?;
        if handle.unit_cost > 0.0 {
            items.push(QuoteLineItem::new(
                config.handle.display_name(),
                1.0,
                "each",
                handle.unit_cost,
                LineItemCategory::Hardware,
            ));
        }

        // 5. Seals
        if config.seals_included {
            let seal_run_m =
                (door_measurement.tight_height_mm + door_measurement.tight_width_mm) / 1000.0;
            for seal in required_seals(config.door_opening, selection.brand, catalog)? {
                items.push(QuoteLineItem::new(
                    seal.seal_type.display_name(),
                    round2(seal_run_m),
                    "m",
                    seal.unit_cost,
                    LineItemCategory::Seals,
                ));
            }
        }
    }

    // 4. Mounting hardware over the perimeter estimate
    let perimeter: Metres =
        Millimetres(primary.tight_width_mm + 2.0 * primary.tight_height_mm).into();
    let perimeter_m = perimeter.value();
    items.push(QuoteLineItem::new(
        format!("{} mounting", config.mounting),
        round2(perimeter_m),
        "m",
        prices.mounting_per_m(config.mounting),
        LineItemCategory::Hardware,
    ));

    // 6. Installation
    if config.installation_included {
        items.push(QuoteLineItem::new(
            "Installation",
            round2(glass_area_m2),
            "m²",
            prices.installation_per_m2,
            LineItemCategory::Installation,
        ));
    }

    let subtotal = round2(items.iter().map(|i| i.total).sum());
    let vat = round2(subtotal * VAT_RATE);
    let total = round2(subtotal + vat);

    let generated = Utc::now();
    Ok(QuoteBreakdown {
        id: Uuid::new_v4(),
        items,
        subtotal,
        vat,
        total,
        generated,
        valid_until: generated + Duration::days(QUOTE_VALIDITY_DAYS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigPatch, DoorOpening, HandleType, HingePreference};
    use crate::hardware::standard_catalog;
    use crate::layout::standard_library;
    use crate::design::EnclosureDesign;

    fn corner_design() -> EnclosureDesign {
        EnclosureDesign::from_template(standard_library().get("corner-left-900").unwrap())
    }

    fn quote(design: &EnclosureDesign) -> QuoteBreakdown {
        generate_quote(design, standard_catalog(), standard_price_book()).unwrap()
    }

    #[test]
    fn test_vat_and_total_roundings() {
        let breakdown = quote(&corner_design());
        assert_eq!(breakdown.vat, round2(breakdown.subtotal * 0.20));
        assert_eq!(breakdown.total, round2(breakdown.subtotal * 1.20));
        assert_eq!(
            breakdown.subtotal,
            round2(breakdown.items.iter().map(|i| i.total).sum())
        );
    }

    #[test]
    fn test_validity_is_thirty_days() {
        let breakdown = quote(&corner_design());
        assert_eq!(breakdown.valid_until - breakdown.generated, Duration::days(30));
    }

    #[test]
    fn test_glass_line_uses_uniform_panel_area() {
        let breakdown = quote(&corner_design());
        let glass = &breakdown.items[0];
        assert_eq!(glass.category, LineItemCategory::Glass);
        // 2 panels × 0.9m × 2.0m
        assert_eq!(glass.quantity, 3.6);
        assert_eq!(glass.unit, "m²");
    }

    #[test]
    fn test_two_hinges_at_standard_height() {
        let breakdown = quote(&corner_design());
        let hinges = breakdown
            .items
            .iter()
            .find(|i| i.description.contains("hinge"))
            .unwrap();
        assert_eq!(hinges.quantity, 2.0);
    }

    #[test]
    fn test_three_hinges_on_tall_door() {
        let mut design = corner_design();
        for pm in &mut design.measurements {
            pm.measurement.tight_height_mm = 2100.0;
        }
        let breakdown = quote(&design);
        let hinges = breakdown
            .items
            .iter()
            .find(|i| i.description.contains("hinge"))
            .unwrap();
        assert_eq!(hinges.quantity, 3.0);
    }

    #[test]
    fn test_zero_priced_handle_omitted() {
        let design = corner_design();
        assert_eq!(design.config.handle, HandleType::Knob);
        let breakdown = quote(&design);
        assert!(!breakdown.items.iter().any(|i| i.description.contains("handle")));

        let mut with_bar = corner_design();
        with_bar.config = ConfigPatch::Handle(HandleType::Bar)
            .apply(&with_bar.config)
            .unwrap();
        let breakdown = quote(&with_bar);
        let handle = breakdown
            .items
            .iter()
            .find(|i| i.description.contains("handle"))
            .unwrap();
        assert_eq!(handle.total, 45.0);
    }

    #[test]
    fn test_seal_lines_follow_required_seals() {
        let mut design = corner_design();
        design.config = ConfigPatch::DoorOpening(DoorOpening::Both)
            .apply(&design.config)
            .unwrap();
        design.config = ConfigPatch::HingePreference(HingePreference::Premium)
            .apply(&design.config)
            .unwrap();
        let breakdown = quote(&design);
        let seal_lines: Vec<_> = breakdown
            .items
            .iter()
            .filter(|i| i.category == LineItemCategory::Seals)
            .collect();
        // Drip + two bubbles (opening rule and premium brand rule)
        assert_eq!(seal_lines.len(), 3);
        let bubbles = seal_lines
            .iter()
            .filter(|i| i.description.contains("Bubble"))
            .count();
        assert_eq!(bubbles, 2);
        // linear metres = (2000 + 900) / 1000
        assert_eq!(seal_lines[0].quantity, 2.9);
    }

    #[test]
    fn test_seals_and_installation_toggles() {
        let mut design = corner_design();
        design.config = ConfigPatch::SealsIncluded(false)
            .apply(&design.config)
            .unwrap();
        design.config = ConfigPatch::InstallationIncluded(false)
            .apply(&design.config)
            .unwrap();
        let breakdown = quote(&design);
        assert!(!breakdown
            .items
            .iter()
            .any(|i| i.category == LineItemCategory::Seals));
        assert!(!breakdown
            .items
            .iter()
            .any(|i| i.category == LineItemCategory::Installation));
    }

    #[test]
    fn test_walk_in_prices_without_door_hardware() {
        let design =
            EnclosureDesign::from_template(standard_library().get("walk-in-1400").unwrap());
        let breakdown = quote(&design);
        assert!(!breakdown.items.iter().any(|i| i.description.contains("hinge")));
        assert!(!breakdown
            .items
            .iter()
            .any(|i| i.category == LineItemCategory::Seals));
        assert!(breakdown.subtotal > 0.0);
    }

    #[test]
    fn test_mounting_line_uses_perimeter_estimate() {
        let breakdown = quote(&corner_design());
        let mounting = breakdown
            .items
            .iter()
            .find(|i| i.description.contains("mounting"))
            .unwrap();
        // (900 + 2×2000) / 1000
        assert_eq!(mounting.quantity, 4.9);
        assert_eq!(mounting.unit_price, 22.0);
    }

    #[test]
    fn test_quote_serialization() {
        let breakdown = quote(&corner_design());
        let json = serde_json::to_string(&breakdown).unwrap();
        let roundtrip: QuoteBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, roundtrip);
    }
}
