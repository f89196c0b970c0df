//! # Template Library
//!
//! A fixed catalog of predefined enclosure layouts. Each template fully
//! specifies its panel/junction graph, the door openings and mountings it
//! supports, default tight measurements, and a recommended glass thickness
//! range. Templates are pure data; picking one seeds a design session with
//! a layout the customer then measures and configures.
//!
//! The standard catalog lives behind a `Lazy` static so the tables are
//! built once per process. Calculators never reach for it implicitly; the
//! caller passes the library (or a test fixture) where needed.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::DoorOpening;
use crate::errors::{EnclosureError, EnclosureResult};
use crate::layout::{
    EnclosureLayout, Junction, MountingStyle, Panel, PanelEdge, PanelPlane, PanelSide,
};

/// Broad layout family, used for catalog filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateCategory {
    /// Panels in a single plane across an alcove
    Inline,
    /// One return plus a front (L-shape)
    Corner,
    /// Two returns plus a front
    UShape,
    /// Open-fronted fixed screen
    WalkIn,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 4] = [
        TemplateCategory::Inline,
        TemplateCategory::Corner,
        TemplateCategory::UShape,
        TemplateCategory::WalkIn,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateCategory::Inline => "Inline",
            TemplateCategory::Corner => "Corner",
            TemplateCategory::UShape => "U-shape",
            TemplateCategory::WalkIn => "Walk-in",
        }
    }
}

/// Default tight width for one template panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDefault {
    pub panel_id: String,
    pub tight_width_mm: f64,
}

/// Default measurements a template seeds a new design with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDefaults {
    pub panel_widths: Vec<PanelDefault>,
    pub tight_height_mm: f64,
}

impl TemplateDefaults {
    /// Default width for a panel, if the template specifies one
    pub fn width_for(&self, panel_id: &str) -> Option<f64> {
        self.panel_widths
            .iter()
            .find(|d| d.panel_id == panel_id)
            .map(|d| d.tight_width_mm)
    }
}

/// A predefined enclosure layout with its defaults and supported options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: TemplateCategory,
    pub tags: Vec<String>,
    pub layout: EnclosureLayout,
    pub supported_openings: Vec<DoorOpening>,
    pub supported_mountings: Vec<MountingStyle>,
    pub defaults: TemplateDefaults,
    /// Recommended toughened glass thickness range (mm)
    pub thickness_range_mm: (f64, f64),
}

impl Template {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// The template catalog, lookup by id / category / tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateLibrary {
    templates: Vec<Template>,
}

impl TemplateLibrary {
    pub fn new(templates: Vec<Template>) -> Self {
        TemplateLibrary { templates }
    }

    /// Look up a template by id
    pub fn get(&self, id: &str) -> EnclosureResult<&Template> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| EnclosureError::template_not_found(id))
    }

    /// All templates in a category
    pub fn by_category(&self, category: TemplateCategory) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Templates carrying every tag in `tags`
    pub fn by_tags(&self, tags: &[&str]) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| tags.iter().all(|tag| t.has_tag(tag)))
            .collect()
    }

    pub fn all(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

// ============================================================================
// Standard catalog
// ============================================================================

static STANDARD_LIBRARY: Lazy<TemplateLibrary> = Lazy::new(build_standard_library);

/// The standard template catalog, built once per process
pub fn standard_library() -> &'static TemplateLibrary {
    &STANDARD_LIBRARY
}

const ALL_MOUNTINGS: [MountingStyle; 2] = [MountingStyle::Channel, MountingStyle::Clamps];

fn defaults(widths: &[(&str, f64)], height_mm: f64) -> TemplateDefaults {
    TemplateDefaults {
        panel_widths: widths
            .iter()
            .map(|(id, w)| PanelDefault {
                panel_id: (*id).to_string(),
                tight_width_mm: *w,
            })
            .collect(),
        tight_height_mm: height_mm,
    }
}

fn build_standard_library() -> TemplateLibrary {
    let inline = Template {
        id: "inline-1200".to_string(),
        name: "Inline door and panel".to_string(),
        category: TemplateCategory::Inline,
        tags: vec!["door".to_string(), "alcove".to_string()],
        layout: EnclosureLayout::new(
            vec![
                Panel::door("door", PanelPlane::Front)
                    .with_position(0)
                    .with_hinge_side(PanelSide::Left)
                    .with_wall_fixed(PanelEdge::Left),
                Panel::fixed("inline_panel", PanelPlane::Front)
                    .with_position(1)
                    .with_wall_fixed(PanelEdge::Right),
            ],
            vec![Junction::glass_to_glass("door_panel", "door", "inline_panel", 180)],
        ),
        supported_openings: vec![
            DoorOpening::Inward,
            DoorOpening::Outward,
            DoorOpening::Both,
        ],
        supported_mountings: ALL_MOUNTINGS.to_vec(),
        defaults: defaults(&[("door", 700.0), ("inline_panel", 500.0)], 2000.0),
        thickness_range_mm: (8.0, 10.0),
    };

    let corner_left = Template {
        id: "corner-left-900".to_string(),
        name: "Corner enclosure, left return".to_string(),
        category: TemplateCategory::Corner,
        tags: vec!["door".to_string(), "corner".to_string(), "left".to_string()],
        layout: EnclosureLayout::new(
            vec![
                Panel::fixed("left_return", PanelPlane::ReturnLeft)
                    .with_wall_fixed(PanelEdge::Left),
                Panel::door("front", PanelPlane::Front)
                    .with_hinge_side(PanelSide::Right)
                    .with_wall_fixed(PanelEdge::Right),
            ],
            vec![Junction::glass_to_glass("corner", "left_return", "front", 90)],
        ),
        supported_openings: vec![DoorOpening::Outward, DoorOpening::Both],
        supported_mountings: ALL_MOUNTINGS.to_vec(),
        defaults: defaults(&[("left_return", 900.0), ("front", 900.0)], 2000.0),
        thickness_range_mm: (8.0, 10.0),
    };

    let corner_right = Template {
        id: "corner-right-900".to_string(),
        name: "Corner enclosure, right return".to_string(),
        category: TemplateCategory::Corner,
        tags: vec!["door".to_string(), "corner".to_string(), "right".to_string()],
        layout: EnclosureLayout::new(
            vec![
                Panel::door("front", PanelPlane::Front)
                    .with_hinge_side(PanelSide::Left)
                    .with_wall_fixed(PanelEdge::Left),
                Panel::fixed("right_return", PanelPlane::ReturnRight)
                    .with_wall_fixed(PanelEdge::Right),
            ],
            vec![Junction::glass_to_glass("corner", "front", "right_return", 90)],
        ),
        supported_openings: vec![DoorOpening::Outward, DoorOpening::Both],
        supported_mountings: ALL_MOUNTINGS.to_vec(),
        defaults: defaults(&[("front", 900.0), ("right_return", 900.0)], 2000.0),
        thickness_range_mm: (8.0, 10.0),
    };

    let u_shape = Template {
        id: "u-shape-1200".to_string(),
        name: "U-shape enclosure with front door".to_string(),
        category: TemplateCategory::UShape,
        tags: vec!["door".to_string(), "u-shape".to_string()],
        layout: EnclosureLayout::new(
            vec![
                Panel::fixed("left_return", PanelPlane::ReturnLeft)
                    .with_wall_fixed(PanelEdge::Left),
                Panel::door("front", PanelPlane::Front).with_hinge_side(PanelSide::Left),
                Panel::fixed("right_return", PanelPlane::ReturnRight)
                    .with_wall_fixed(PanelEdge::Right),
            ],
            vec![
                Junction::glass_to_glass("left_corner", "left_return", "front", 90),
                Junction::glass_to_glass("right_corner", "front", "right_return", 90),
            ],
        ),
        supported_openings: vec![DoorOpening::Outward, DoorOpening::Both],
        supported_mountings: ALL_MOUNTINGS.to_vec(),
        defaults: defaults(
            &[
                ("left_return", 800.0),
                ("front", 1200.0),
                ("right_return", 800.0),
            ],
            2000.0,
        ),
        thickness_range_mm: (10.0, 10.0),
    };

    let walk_in = Template {
        id: "walk-in-1400".to_string(),
        name: "Walk-in screen".to_string(),
        category: TemplateCategory::WalkIn,
        tags: vec!["walk-in".to_string(), "open".to_string()],
        layout: EnclosureLayout::new(
            vec![Panel::fixed("screen", PanelPlane::Front).with_wall_fixed(PanelEdge::Left)],
            vec![Junction::wall_to_glass("wall_fix", "screen", PanelEdge::Left)],
        ),
        supported_openings: vec![],
        supported_mountings: vec![MountingStyle::Channel],
        defaults: defaults(&[("screen", 1400.0)], 2000.0),
        thickness_range_mm: (10.0, 10.0),
    };

    TemplateLibrary::new(vec![inline, corner_left, corner_right, u_shape, walk_in])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let library = standard_library();
        let template = library.get("corner-left-900").unwrap();
        assert_eq!(template.category, TemplateCategory::Corner);
        assert_eq!(template.layout.panels.len(), 2);
    }

    #[test]
    fn test_lookup_missing_id() {
        let err = standard_library().get("corner-9000").unwrap_err();
        assert_eq!(err.error_code(), "TEMPLATE_NOT_FOUND");
    }

    #[test]
    fn test_by_category() {
        let corners = standard_library().by_category(TemplateCategory::Corner);
        assert_eq!(corners.len(), 2);
        assert!(corners.iter().all(|t| t.category == TemplateCategory::Corner));
    }

    #[test]
    fn test_by_tags_requires_all() {
        let library = standard_library();
        assert_eq!(library.by_tags(&["corner", "left"]).len(), 1);
        assert_eq!(library.by_tags(&["door"]).len(), 4);
        assert!(library.by_tags(&["door", "no-such-tag"]).is_empty());
    }

    #[test]
    fn test_every_template_graph_is_consistent() {
        for template in standard_library().all() {
            template
                .layout
                .validate()
                .unwrap_or_else(|e| panic!("template '{}': {}", template.id, e));
        }
    }

    #[test]
    fn test_every_template_default_covers_every_panel() {
        for template in standard_library().all() {
            for panel in &template.layout.panels {
                assert!(
                    template.defaults.width_for(&panel.id).is_some(),
                    "template '{}' has no default width for panel '{}'",
                    template.id,
                    panel.id
                );
            }
        }
    }

    #[test]
    fn test_door_templates_support_an_opening() {
        for template in standard_library().all() {
            if template.layout.door_panel().is_some() {
                assert!(
                    !template.supported_openings.is_empty(),
                    "door template '{}' supports no openings",
                    template.id
                );
            }
        }
    }

    #[test]
    fn test_template_serialization() {
        let template = standard_library().get("u-shape-1200").unwrap();
        let json = serde_json::to_string(template).unwrap();
        let roundtrip: Template = serde_json::from_str(&json).unwrap();
        assert_eq!(*template, roundtrip);
    }
}
