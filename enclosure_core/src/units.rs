//! # Unit Types
//!
//! Type-safe wrappers for glazing units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Glazing manufacture uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Metric Units (Primary)
//!
//! The engine works in metric internally as this matches manufacturer cutting
//! tolerances and UK/EU glass supply:
//! - Length: millimetres (mm) for openings and deductions, metres (m) for
//!   linear hardware runs
//! - Area: square metres (m²) for glass pricing and weight
//! - Mass: kilograms (kg) for hinge load checks
//!
//! ## Example
//!
//! ```rust
//! use enclosure_core::units::{Millimetres, Metres};
//!
//! let width = Millimetres(900.0);
//! let width_m: Metres = width.into();
//! assert_eq!(width_m.0, 0.9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

impl From<Millimetres> for Metres {
    fn from(mm: Millimetres) -> Self {
        Metres(mm.0 / 1000.0)
    }
}

impl From<Metres> for Millimetres {
    fn from(m: Metres) -> Self {
        Millimetres(m.0 * 1000.0)
    }
}

// ============================================================================
// Area and Mass Units
// ============================================================================

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMetres(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl Millimetres {
    /// Rectangle area from two millimetre dimensions
    pub fn area_with(self, other: Millimetres) -> SquareMetres {
        SquareMetres((self.0 / 1000.0) * (other.0 / 1000.0))
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimetres);
impl_arithmetic!(Metres);
impl_arithmetic!(SquareMetres);
impl_arithmetic!(Kilograms);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_metres() {
        let mm = Millimetres(2100.0);
        let m: Metres = mm.into();
        assert_eq!(m.0, 2.1);
    }

    #[test]
    fn test_metres_to_mm() {
        let m = Metres(0.75);
        let mm: Millimetres = m.into();
        assert_eq!(mm.0, 750.0);
    }

    #[test]
    fn test_area_with() {
        let area = Millimetres(1000.0).area_with(Millimetres(2000.0));
        assert_eq!(area.0, 2.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimetres(900.0);
        let b = Millimetres(10.0);
        assert_eq!((a + b).0, 910.0);
        assert_eq!((a - b).0, 890.0);
        assert_eq!((a * 2.0).0, 1800.0);
        assert_eq!((a / 2.0).0, 450.0);
    }

    #[test]
    fn test_serialization() {
        let mm = Millimetres(892.5);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "892.5");

        let roundtrip: Millimetres = serde_json::from_str(&json).unwrap();
        assert_eq!(mm, roundtrip);
    }
}
