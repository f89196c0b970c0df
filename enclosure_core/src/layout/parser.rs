//! # Layout Parser
//!
//! A best-effort classifier from a customer's free-text description to a
//! panel/junction graph. This is deliberately not a grammar: it normalizes
//! to lowercase, looks for a small set of layout keywords, and branches
//! into one of two fixed topologies. Unrecognized phrasing degrades to the
//! default corner layout rather than failing, and contradictory text is
//! resolved by fixed precedence (a right return wins ties).
//!
//! The fuzziness stops here: downstream calculators only ever see the
//! structured [`EnclosureLayout`] this module emits.
//!
//! ## Example
//!
//! ```rust
//! use enclosure_core::layout::parse_description;
//!
//! let parsed = parse_description("L-shaped corner shower with door on the right");
//! assert_eq!(parsed.layout.panels.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::layout::{EnclosureLayout, Junction, Panel, PanelEdge, PanelPlane, PanelSide};

/// Classifier output: the inferred graph plus the text it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedLayout {
    pub layout: EnclosureLayout,
    pub source_text: String,
}

/// Classify a free-text layout description into a panel/junction graph.
///
/// Total function: every input produces a layout. Recognized cues are
/// `u-shaped`/`u shape`, `corner`/`l-shape`/`return`, `door`, `left`,
/// `right`, and `90`; everything else falls through to the corner default.
pub fn parse_description(text: &str) -> ParsedLayout {
    let normalized = text.to_lowercase();

    let layout = if wants_u_shape(&normalized) {
        u_shape_layout(&normalized)
    } else {
        corner_layout(&normalized)
    };

    ParsedLayout {
        layout,
        source_text: text.to_string(),
    }
}

fn wants_u_shape(text: &str) -> bool {
    text.contains("u-shaped")
        || text.contains("u shape")
        || (text.contains("return") && text.contains("both side"))
}

fn mentions_door(text: &str) -> bool {
    text.contains("door")
}

/// Three panels: left return, front, right return, joined by two 90°
/// corners. The front becomes a hinged door when the text asks for one,
/// hinged left and handled right by convention.
fn u_shape_layout(text: &str) -> EnclosureLayout {
    let front = if mentions_door(text) {
        Panel::door("front", PanelPlane::Front).with_hinge_side(PanelSide::Left)
    } else {
        Panel::fixed("front", PanelPlane::Front)
    };

    EnclosureLayout::new(
        vec![
            Panel::fixed("left_return", PanelPlane::ReturnLeft).with_wall_fixed(PanelEdge::Left),
            front,
            Panel::fixed("right_return", PanelPlane::ReturnRight).with_wall_fixed(PanelEdge::Right),
        ],
        vec![
            Junction::glass_to_glass("left_corner", "left_return", "front", 90),
            Junction::glass_to_glass("right_corner", "front", "right_return", 90),
        ],
    )
}

/// Two panels: one return and one front, joined by a single 90° corner.
/// The return goes left only when the text says so; a right return wins
/// ties. Hinge and handle sit opposite the return side.
fn corner_layout(text: &str) -> EnclosureLayout {
    let return_side = if text.contains("left") && !text.contains("right") {
        PanelSide::Left
    } else {
        PanelSide::Right
    };

    let front = if mentions_door(text) {
        Panel::door("front", PanelPlane::Front).with_hinge_side(return_side.opposite())
    } else {
        Panel::fixed("front", PanelPlane::Front)
    };

    match return_side {
        PanelSide::Left => EnclosureLayout::new(
            vec![
                Panel::fixed("left_return", PanelPlane::ReturnLeft)
                    .with_wall_fixed(PanelEdge::Left),
                front.with_wall_fixed(PanelEdge::Right),
            ],
            vec![Junction::glass_to_glass("corner", "left_return", "front", 90)],
        ),
        PanelSide::Right => EnclosureLayout::new(
            vec![
                front.with_wall_fixed(PanelEdge::Left),
                Panel::fixed("right_return", PanelPlane::ReturnRight)
                    .with_wall_fixed(PanelEdge::Right),
            ],
            vec![Junction::glass_to_glass("corner", "front", "right_return", 90)],
        ),
    }
}
