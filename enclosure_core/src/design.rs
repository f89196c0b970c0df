//! # Design Session Container
//!
//! The `EnclosureDesign` struct is the root container for one customer's
//! design session: the layout graph (from a template or the parser),
//! per-panel tight measurements, and the chosen configuration.
//!
//! The engine holds no mutable state of its own. The consuming UI mutates
//! the design through setters and typed config patches, then calls
//! [`EnclosureDesign::derive`] to recompute per-panel cut dimensions,
//! hardware selection, seals, and the quote in one pure pass. Results are
//! idempotent; deriving twice from the same design gives the same numbers.
//!
//! ## Example
//!
//! ```rust
//! use enclosure_core::design::EnclosureDesign;
//! use enclosure_core::hardware::standard_catalog;
//! use enclosure_core::layout::standard_library;
//! use enclosure_core::quote::standard_price_book;
//!
//! let template = standard_library().get("corner-left-900").unwrap();
//! let design = EnclosureDesign::from_template(template);
//! let derivation = design.derive(standard_catalog(), standard_price_book()).unwrap();
//! assert_eq!(derivation.deductions.len(), 2);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::DesignConfiguration;
use crate::deductions::{compute_deductions, GlassDeductionResult};
use crate::errors::{EnclosureError, EnclosureResult};
use crate::hardware::{
    required_seals, select_hinge, HardwareCatalog, HingeSelection, SealOption,
};
use crate::layout::{EnclosureLayout, MountingStyle, Panel, ParsedLayout, Template};
use crate::measure::MeasurementInput;
use crate::quote::{generate_quote, PriceBook, QuoteBreakdown};

/// Tight measurement for one named panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelMeasurement {
    pub panel_id: String,
    pub measurement: MeasurementInput,
}

/// One customer's design session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnclosureDesign {
    pub id: Uuid,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    /// Replaced wholesale on template change
    pub layout: EnclosureLayout,
    pub measurements: Vec<PanelMeasurement>,
    pub config: DesignConfiguration,
}

impl EnclosureDesign {
    fn new(layout: EnclosureLayout, measurements: Vec<PanelMeasurement>) -> Self {
        let now = Utc::now();
        EnclosureDesign {
            id: Uuid::new_v4(),
            created: now,
            modified: now,
            layout,
            measurements,
            config: DesignConfiguration::default(),
        }
    }

    /// Start a session from a template, seeded with its default measurements
    pub fn from_template(template: &Template) -> Self {
        let measurements = template
            .layout
            .panels
            .iter()
            .map(|panel| PanelMeasurement {
                panel_id: panel.id.clone(),
                measurement: MeasurementInput::new(
                    template.defaults.width_for(&panel.id).unwrap_or(900.0),
                    template.defaults.tight_height_mm,
                    MountingStyle::Channel,
                ),
            })
            .collect();
        EnclosureDesign::new(template.layout.clone(), measurements)
    }

    /// Start a session from a parsed free-text description, with survey
    /// placeholder measurements
    pub fn from_parsed(parsed: &ParsedLayout) -> Self {
        let measurements = parsed
            .layout
            .panels
            .iter()
            .map(|panel| PanelMeasurement {
                panel_id: panel.id.clone(),
                measurement: MeasurementInput::new(900.0, 2000.0, MountingStyle::Channel),
            })
            .collect();
        EnclosureDesign::new(parsed.layout.clone(), measurements)
    }

    /// Replace the measurement for one panel
    pub fn set_measurement(
        &mut self,
        panel_id: &str,
        measurement: MeasurementInput,
    ) -> EnclosureResult<()> {
        if self.layout.panel(panel_id).is_none() {
            return Err(EnclosureError::invalid_input(
                "panel_id",
                panel_id,
                "No such panel in the layout",
            ));
        }
        match self.measurements.iter_mut().find(|m| m.panel_id == panel_id) {
            Some(existing) => existing.measurement = measurement,
            None => self.measurements.push(PanelMeasurement {
                panel_id: panel_id.to_string(),
                measurement,
            }),
        }
        self.touch();
        Ok(())
    }

    /// Replace the configuration (typically via [`crate::config::ConfigPatch`])
    pub fn set_config(&mut self, config: DesignConfiguration) {
        self.config = config;
        self.touch();
    }

    fn touch(&mut self) {
        self.modified = Utc::now();
    }

    /// Stored measurement for a panel
    pub fn measurement_for(&self, panel_id: &str) -> EnclosureResult<&MeasurementInput> {
        self.measurements
            .iter()
            .find(|m| m.panel_id == panel_id)
            .map(|m| &m.measurement)
            .ok_or_else(|| EnclosureError::missing_field(format!("measurement for '{}'", panel_id)))
    }

    /// The measurement pricing treats as representative: the door's when
    /// the layout has one, otherwise the first panel's
    pub fn primary_measurement(&self) -> EnclosureResult<&MeasurementInput> {
        let panel_id = self
            .layout
            .door_panel()
            .map(|p| p.id.as_str())
            .or_else(|| self.layout.panels.first().map(|p| p.id.as_str()))
            .ok_or_else(|| EnclosureError::missing_field("layout panels"))?;
        self.measurement_for(panel_id)
    }

    /// The stored measurement with session-level configuration overlaid:
    /// the config's mounting choice wins over whatever the survey recorded.
    fn effective_measurement(&self, panel: &Panel) -> EnclosureResult<MeasurementInput> {
        let mut measurement = self.measurement_for(&panel.id)?.clone();
        measurement.mounting = self.config.mounting;
        Ok(measurement)
    }

    /// Recompute the full derivation: per-panel deductions, hinge
    /// selection, seal list, and quote. Pure; call after every edit.
    pub fn derive(
        &self,
        catalog: &HardwareCatalog,
        prices: &PriceBook,
    ) -> EnclosureResult<DesignDerivation> {
        self.layout.validate()?;

        let mut warnings = Vec::new();

        let mut deductions = Vec::with_capacity(self.layout.panels.len());
        for panel in &self.layout.panels {
            let measurement = self.effective_measurement(panel)?;
            let result =
                compute_deductions(panel.kind, &measurement, self.config.glass_thickness_mm)?;
            deductions.push(PanelDeduction {
                panel_id: panel.id.clone(),
                result,
            });
        }

        let mut hinge = None;
        let mut seals = Vec::new();
        if let Some(door) = self.layout.door_panel() {
            let measurement = self.measurement_for(&door.id)?;
            let selection = select_hinge(
                measurement.tight_width_mm,
                measurement.tight_height_mm,
                self.config.hinge_preference.prefer_premium(),
                catalog,
            )?;
            if selection.oversized {
                warnings.push(format!(
                    "Door exceeds the {} limits ({:.0}mm wide, est. {:.1}kg); specify a custom hinge set",
                    selection.brand, measurement.tight_width_mm, selection.estimated_weight_kg
                ));
            }
            seals = required_seals(self.config.door_opening, selection.brand, catalog)?;
            hinge = Some(selection);
        }

        let quote = generate_quote(self, catalog, prices)?;

        Ok(DesignDerivation {
            deductions,
            hinge,
            seals,
            quote,
            warnings,
        })
    }
}

/// Cut dimensions for one named panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDeduction {
    pub panel_id: String,
    pub result: GlassDeductionResult,
}

/// Everything the engine derives from a design in one pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDerivation {
    pub deductions: Vec<PanelDeduction>,
    /// `None` for layouts without a door
    pub hinge: Option<HingeSelection>,
    pub seals: Vec<SealOption>,
    pub quote: QuoteBreakdown,
    /// Size/weight warnings the UI must surface
    pub warnings: Vec<String>,
}
