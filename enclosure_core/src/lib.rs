//! # enclosure_core - Shower Enclosure Dimensioning & Quoting Engine
//!
//! `enclosure_core` turns a customer's rough-opening ("tight") measurements
//! and a chosen enclosure layout into exact per-panel glass cut dimensions,
//! an engineering-constrained hardware bill of materials, and an itemized
//! VAT-inclusive quote. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions from design inputs to derived outputs;
//!   every edit triggers a full, cheap re-derivation
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Static catalogs**: pricing and hardware tables built once and passed
//!   explicitly into the calculators
//!
//! ## Quick Start
//!
//! ```rust
//! use enclosure_core::design::EnclosureDesign;
//! use enclosure_core::hardware::standard_catalog;
//! use enclosure_core::layout::parse_description;
//! use enclosure_core::quote::standard_price_book;
//!
//! // Classify a customer's description into a layout graph
//! let parsed = parse_description("corner shower with a door on the right");
//!
//! // Derive cut sizes, hardware, and the quote in one pass
//! let design = EnclosureDesign::from_parsed(&parsed);
//! let derivation = design.derive(standard_catalog(), standard_price_book()).unwrap();
//! println!("Total inc. VAT: £{:.2}", derivation.quote.total);
//! ```
//!
//! ## Modules
//!
//! - [`layout`] - panel/junction schema, template library, free-text parser
//! - [`measure`] - tight measurements and bounds validation
//! - [`deductions`] - glass cut dimensions from tight openings
//! - [`hardware`] - hinge/handle/seal catalogs and selection
//! - [`config`] - design configuration and typed patches
//! - [`quote`] - price book and quote generation
//! - [`design`] - design-session container and full derivation
//! - [`units`] - type-safe unit wrappers
//! - [`errors`] - structured error types

pub mod config;
pub mod deductions;
pub mod design;
pub mod errors;
pub mod hardware;
pub mod layout;
pub mod measure;
pub mod quote;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use design::{DesignDerivation, EnclosureDesign};
pub use errors::{EnclosureError, EnclosureResult};
pub use layout::{parse_description, standard_library, EnclosureLayout};
