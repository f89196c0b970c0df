//! # Layout Model
//!
//! The Panel/Junction schema describing an enclosure as a graph: panels are
//! glass sheets, junctions are the physical connections between panel edges.
//! The model is pure data; the template library and the free-text parser both
//! produce it, and every calculator downstream consumes it.
//!
//! ## Structure
//!
//! ```text
//! EnclosureLayout
//! ├── panels: Vec<Panel>       (glass sheets, ordered per plane)
//! └── junctions: Vec<Junction> (edge-to-edge connections, 90/135/180°)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use enclosure_core::layout::{EnclosureLayout, Panel, PanelPlane, Junction};
//!
//! let layout = EnclosureLayout::new(
//!     vec![
//!         Panel::fixed("left_return", PanelPlane::ReturnLeft),
//!         Panel::door("front", PanelPlane::Front),
//!     ],
//!     vec![Junction::glass_to_glass("j1", "left_return", "front", 90)],
//! );
//! assert!(layout.validate().is_ok());
//! ```

pub mod parser;
pub mod templates;

use serde::{Deserialize, Serialize};

use crate::errors::{EnclosureError, EnclosureResult};

// Re-export the producers' entry points at module level
pub use parser::{parse_description, ParsedLayout};
pub use templates::{standard_library, Template, TemplateLibrary};

// ============================================================================
// Panel
// ============================================================================

/// What a panel does in the enclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PanelKind {
    /// Fixed glass sheet, wall or channel mounted
    #[default]
    Fixed,
    /// Hinged door panel
    HingedDoor,
}

impl PanelKind {
    pub const ALL: [PanelKind; 2] = [PanelKind::Fixed, PanelKind::HingedDoor];

    pub fn display_name(&self) -> &'static str {
        match self {
            PanelKind::Fixed => "Fixed panel",
            PanelKind::HingedDoor => "Hinged door",
        }
    }

    pub fn is_door(&self) -> bool {
        matches!(self, PanelKind::HingedDoor)
    }
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which wall plane a panel sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PanelPlane {
    /// The opening face of the enclosure
    #[default]
    Front,
    /// Return panel on the left side
    ReturnLeft,
    /// Return panel on the right side
    ReturnRight,
    /// Back wall plane (walk-in layouts)
    Back,
}

impl PanelPlane {
    pub const ALL: [PanelPlane; 4] = [
        PanelPlane::Front,
        PanelPlane::ReturnLeft,
        PanelPlane::ReturnRight,
        PanelPlane::Back,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PanelPlane::Front => "Front",
            PanelPlane::ReturnLeft => "Left return",
            PanelPlane::ReturnRight => "Right return",
            PanelPlane::Back => "Back",
        }
    }

    pub fn is_return(&self) -> bool {
        matches!(self, PanelPlane::ReturnLeft | PanelPlane::ReturnRight)
    }
}

impl std::fmt::Display for PanelPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Left/right side of a panel, viewed from outside the enclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelSide {
    Left,
    Right,
}

impl PanelSide {
    /// The opposite side (handle side is always opposite the hinge side)
    pub fn opposite(&self) -> PanelSide {
        match self {
            PanelSide::Left => PanelSide::Right,
            PanelSide::Right => PanelSide::Left,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PanelSide::Left => "Left",
            PanelSide::Right => "Right",
        }
    }
}

/// One of the four edges of a rectangular panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl PanelEdge {
    pub const ALL: [PanelEdge; 4] = [
        PanelEdge::Left,
        PanelEdge::Right,
        PanelEdge::Top,
        PanelEdge::Bottom,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PanelEdge::Left => "Left edge",
            PanelEdge::Right => "Right edge",
            PanelEdge::Top => "Top edge",
            PanelEdge::Bottom => "Bottom edge",
        }
    }
}

/// Top-edge profile of a panel.
///
/// Sloped tops follow a raked ceiling; the drop is measured at the low end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "profile")]
pub enum TopEdgeProfile {
    /// Level top edge
    #[default]
    Level,
    /// Sloped top edge falling toward one side
    Sloped {
        direction: PanelSide,
        drop_mm: f64,
    },
}

impl TopEdgeProfile {
    pub fn is_sloped(&self) -> bool {
        matches!(self, TopEdgeProfile::Sloped { .. })
    }
}

/// How a panel is fixed to the building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MountingStyle {
    /// Continuous U-channel screwed to wall/floor
    #[default]
    Channel,
    /// Discrete glass clamps
    Clamps,
}

impl MountingStyle {
    pub const ALL: [MountingStyle; 2] = [MountingStyle::Channel, MountingStyle::Clamps];

    pub fn display_name(&self) -> &'static str {
        match self {
            MountingStyle::Channel => "Channel",
            MountingStyle::Clamps => "Clamps",
        }
    }
}

impl std::fmt::Display for MountingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-edge wall-fixing flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EdgeFlags {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub top: bool,
    #[serde(default)]
    pub bottom: bool,
}

impl EdgeFlags {
    pub fn wall_fixed_on(edge: PanelEdge) -> Self {
        let mut flags = EdgeFlags::default();
        match edge {
            PanelEdge::Left => flags.left = true,
            PanelEdge::Right => flags.right = true,
            PanelEdge::Top => flags.top = true,
            PanelEdge::Bottom => flags.bottom = true,
        }
        flags
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Rectangular cutout at the bottom edge of a panel (tray upstands, tiling
/// steps)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BottomNotch {
    /// Offset of the notch from the panel's left edge (mm)
    pub offset_mm: f64,
    /// Notch width (mm)
    pub width_mm: f64,
    /// Notch height (mm)
    pub height_mm: f64,
}

/// A single glass sheet in the enclosure.
///
/// Door-only fields (`hinge_side`, `handle_side`) are `None` on fixed panels.
/// On doors they are mutually exclusive opposite edges; `Panel::door` and
/// `with_hinge_side` maintain the pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Stable identifier, referenced by junctions (e.g. "front", "left_return")
    pub id: String,

    /// Fixed sheet or hinged door
    pub kind: PanelKind,

    /// Wall plane this panel occupies
    pub plane: PanelPlane,

    /// Left-to-right ordering within the plane sequence
    #[serde(default)]
    pub position: u8,

    /// Hinge edge, doors only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hinge_side: Option<PanelSide>,

    /// Handle edge, doors only, always opposite the hinge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_side: Option<PanelSide>,

    /// Bottom-edge cutouts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notches: Vec<BottomNotch>,

    /// Top-edge profile
    #[serde(default)]
    pub top_edge: TopEdgeProfile,

    /// Channel or clamp mounting
    #[serde(default)]
    pub mounting: MountingStyle,

    /// Which edges fix to a wall
    #[serde(default)]
    pub wall_fixed: EdgeFlags,
}

impl Panel {
    /// Create a fixed panel with default mounting
    pub fn fixed(id: impl Into<String>, plane: PanelPlane) -> Self {
        Panel {
            id: id.into(),
            kind: PanelKind::Fixed,
            plane,
            position: 0,
            hinge_side: None,
            handle_side: None,
            notches: Vec::new(),
            top_edge: TopEdgeProfile::Level,
            mounting: MountingStyle::Channel,
            wall_fixed: EdgeFlags::default(),
        }
    }

    /// Create a hinged door panel, hinged on the left by default
    pub fn door(id: impl Into<String>, plane: PanelPlane) -> Self {
        Panel {
            id: id.into(),
            kind: PanelKind::HingedDoor,
            plane,
            position: 0,
            hinge_side: Some(PanelSide::Left),
            handle_side: Some(PanelSide::Right),
            notches: Vec::new(),
            top_edge: TopEdgeProfile::Level,
            mounting: MountingStyle::Channel,
            wall_fixed: EdgeFlags::default(),
        }
    }

    /// Set the hinge side; the handle side follows to the opposite edge
    pub fn with_hinge_side(mut self, side: PanelSide) -> Self {
        self.hinge_side = Some(side);
        self.handle_side = Some(side.opposite());
        self
    }

    /// Set the position index within the plane sequence
    pub fn with_position(mut self, position: u8) -> Self {
        self.position = position;
        self
    }

    /// Set the mounting style
    pub fn with_mounting(mut self, mounting: MountingStyle) -> Self {
        self.mounting = mounting;
        self
    }

    /// Mark an edge as wall-fixed
    pub fn with_wall_fixed(mut self, edge: PanelEdge) -> Self {
        match edge {
            PanelEdge::Left => self.wall_fixed.left = true,
            PanelEdge::Right => self.wall_fixed.right = true,
            PanelEdge::Top => self.wall_fixed.top = true,
            PanelEdge::Bottom => self.wall_fixed.bottom = true,
        }
        self
    }

    /// Add a bottom notch
    pub fn with_notch(mut self, notch: BottomNotch) -> Self {
        self.notches.push(notch);
        self
    }

    pub fn is_door(&self) -> bool {
        self.kind.is_door()
    }

    /// Door panels carry hinge and handle on opposite edges; fixed panels
    /// carry neither.
    pub fn validate(&self) -> EnclosureResult<()> {
        match self.kind {
            PanelKind::Fixed => {
                if self.hinge_side.is_some() || self.handle_side.is_some() {
                    return Err(EnclosureError::invalid_input(
                        "hinge_side",
                        format!("{:?}", self.hinge_side),
                        "Fixed panels cannot carry hinge or handle edges",
                    ));
                }
            }
            PanelKind::HingedDoor => {
                let hinge = self.hinge_side.ok_or_else(|| {
                    EnclosureError::missing_field(format!("panel '{}' hinge_side", self.id))
                })?;
                let handle = self.handle_side.ok_or_else(|| {
                    EnclosureError::missing_field(format!("panel '{}' handle_side", self.id))
                })?;
                if handle != hinge.opposite() {
                    return Err(EnclosureError::invalid_input(
                        "handle_side",
                        format!("{:?}", handle),
                        "Handle side must be opposite the hinge side",
                    ));
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Junction
// ============================================================================

/// Junction angle, constrained to the values the hardware range supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JunctionAngle {
    /// 90° corner
    Ninety,
    /// 135° splay (neo-angle trays)
    OneThirtyFive,
    /// 180° in-line continuation
    Straight,
}

impl JunctionAngle {
    pub const ALL: [JunctionAngle; 3] = [
        JunctionAngle::Ninety,
        JunctionAngle::OneThirtyFive,
        JunctionAngle::Straight,
    ];

    /// Angle in degrees
    pub fn degrees(&self) -> u16 {
        match self {
            JunctionAngle::Ninety => 90,
            JunctionAngle::OneThirtyFive => 135,
            JunctionAngle::Straight => 180,
        }
    }

    /// Parse from degrees; only 90/135/180 are supported by the hardware range
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            90 => Some(JunctionAngle::Ninety),
            135 => Some(JunctionAngle::OneThirtyFive),
            180 => Some(JunctionAngle::Straight),
            _ => None,
        }
    }
}

impl std::fmt::Display for JunctionAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// What the junction joins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JunctionKind {
    /// Two glass edges meeting
    GlassToGlass,
    /// A glass edge fixed against a wall
    WallToGlass,
}

impl JunctionKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            JunctionKind::GlassToGlass => "Glass to glass",
            JunctionKind::WallToGlass => "Wall to glass",
        }
    }
}

/// A physical connection between two panel edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Junction {
    pub id: String,
    /// First panel id
    pub panel_a: String,
    /// Edge of the first panel at the joint
    pub edge_a: PanelEdge,
    /// Second panel id
    pub panel_b: String,
    /// Edge of the second panel at the joint
    pub edge_b: PanelEdge,
    pub angle: JunctionAngle,
    pub kind: JunctionKind,
}

impl Junction {
    /// Glass-to-glass junction between the adjacent vertical edges of two
    /// panels, in layout order (a's right edge meets b's left edge).
    ///
    /// Unsupported angles degrade to 90°; the classifier and templates only
    /// produce catalog angles.
    pub fn glass_to_glass(
        id: impl Into<String>,
        panel_a: impl Into<String>,
        panel_b: impl Into<String>,
        degrees: u16,
    ) -> Self {
        Junction {
            id: id.into(),
            panel_a: panel_a.into(),
            edge_a: PanelEdge::Right,
            panel_b: panel_b.into(),
            edge_b: PanelEdge::Left,
            angle: JunctionAngle::from_degrees(degrees).unwrap_or(JunctionAngle::Ninety),
            kind: JunctionKind::GlassToGlass,
        }
    }

    /// Wall-to-glass junction on the named edge of a panel
    pub fn wall_to_glass(
        id: impl Into<String>,
        panel: impl Into<String>,
        edge: PanelEdge,
    ) -> Self {
        let panel = panel.into();
        Junction {
            id: id.into(),
            panel_a: panel.clone(),
            edge_a: edge,
            panel_b: panel,
            edge_b: edge,
            angle: JunctionAngle::Straight,
            kind: JunctionKind::WallToGlass,
        }
    }
}

// ============================================================================
// Layout graph
// ============================================================================

/// The full enclosure description: panels plus the junctions joining them.
///
/// Created once per design session (from a template or the parser) and
/// replaced wholesale on template change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EnclosureLayout {
    pub panels: Vec<Panel>,
    pub junctions: Vec<Junction>,
}

impl EnclosureLayout {
    pub fn new(panels: Vec<Panel>, junctions: Vec<Junction>) -> Self {
        EnclosureLayout { panels, junctions }
    }

    /// Look up a panel by id
    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// The door panel, if the layout has one
    pub fn door_panel(&self) -> Option<&Panel> {
        self.panels.iter().find(|p| p.is_door())
    }

    /// Panels in a given plane, ordered by position
    pub fn panels_in_plane(&self, plane: PanelPlane) -> Vec<&Panel> {
        let mut panels: Vec<&Panel> = self.panels.iter().filter(|p| p.plane == plane).collect();
        panels.sort_by_key(|p| p.position);
        panels
    }

    /// Graph consistency: every junction's panel references must resolve,
    /// and every panel must satisfy its own door/fixed invariants.
    pub fn validate(&self) -> EnclosureResult<()> {
        for panel in &self.panels {
            panel.validate()?;
        }
        for junction in &self.junctions {
            for panel_id in [&junction.panel_a, &junction.panel_b] {
                if self.panel(panel_id).is_none() {
                    return Err(EnclosureError::InconsistentLayout {
                        junction_id: junction.id.clone(),
                        panel_id: panel_id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_side_opposite() {
        assert_eq!(PanelSide::Left.opposite(), PanelSide::Right);
        assert_eq!(PanelSide::Right.opposite(), PanelSide::Left);
    }

    #[test]
    fn test_door_hinge_handle_pairing() {
        let door = Panel::door("front", PanelPlane::Front).with_hinge_side(PanelSide::Right);
        assert_eq!(door.hinge_side, Some(PanelSide::Right));
        assert_eq!(door.handle_side, Some(PanelSide::Left));
        assert!(door.validate().is_ok());
    }

    #[test]
    fn test_fixed_panel_rejects_hinge() {
        let mut panel = Panel::fixed("side", PanelPlane::ReturnLeft);
        panel.hinge_side = Some(PanelSide::Left);
        assert!(panel.validate().is_err());
    }

    #[test]
    fn test_door_rejects_same_side_handle() {
        let mut door = Panel::door("front", PanelPlane::Front);
        door.handle_side = Some(PanelSide::Left); // same as hinge
        let err = door.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_junction_angle_from_degrees() {
        assert_eq!(JunctionAngle::from_degrees(90), Some(JunctionAngle::Ninety));
        assert_eq!(JunctionAngle::from_degrees(135), Some(JunctionAngle::OneThirtyFive));
        assert_eq!(JunctionAngle::from_degrees(180), Some(JunctionAngle::Straight));
        assert_eq!(JunctionAngle::from_degrees(45), None);
    }

    #[test]
    fn test_layout_validate_detects_dangling_junction() {
        let layout = EnclosureLayout::new(
            vec![Panel::fixed("a", PanelPlane::Front)],
            vec![Junction::glass_to_glass("j1", "a", "missing", 90)],
        );
        let err = layout.validate().unwrap_err();
        assert_eq!(err.error_code(), "INCONSISTENT_LAYOUT");
        assert!(err.is_integrity_violation());
    }

    #[test]
    fn test_panels_in_plane_ordering() {
        let layout = EnclosureLayout::new(
            vec![
                Panel::fixed("b", PanelPlane::Front).with_position(1),
                Panel::fixed("a", PanelPlane::Front).with_position(0),
                Panel::fixed("side", PanelPlane::ReturnLeft),
            ],
            vec![],
        );
        let front: Vec<&str> = layout
            .panels_in_plane(PanelPlane::Front)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(front, vec!["a", "b"]);
    }

    #[test]
    fn test_layout_serialization() {
        let layout = EnclosureLayout::new(
            vec![
                Panel::fixed("left_return", PanelPlane::ReturnLeft),
                Panel::door("front", PanelPlane::Front).with_hinge_side(PanelSide::Right),
            ],
            vec![Junction::glass_to_glass("j1", "left_return", "front", 90)],
        );
        let json = serde_json::to_string(&layout).unwrap();
        let roundtrip: EnclosureLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, roundtrip);
    }
}
