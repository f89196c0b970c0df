//! # Seal Requirements
//!
//! Derives the seal bill of materials from the door opening direction and
//! the selected hinge line. The rules are strictly additive; nothing ever
//! removes a seal added by an earlier rule.
//!
//! A both-ways door on the premium hinge line collects the bubble seal
//! twice (once from the opening rule, once from the brand rule). That
//! matches the shipping behavior and is pinned by test until the product
//! owner rules on whether it is an intended two-seal assembly.

use crate::config::DoorOpening;
use crate::errors::EnclosureResult;
use crate::hardware::{HardwareCatalog, HingeBrand, SealFamily, SealOption, SealType};

/// Seals required for a door, in rule order:
///
/// 1. every door gets the bottom drip seal;
/// 2. outward-only doors add the fixed-panel soft-fin H seal;
/// 3. both-ways doors add a hinge-side bubble seal;
/// 4. the hinge line adds its own hinge-side seal — bubble for the premium
///    family, standard H otherwise.
pub fn required_seals(
    opening: DoorOpening,
    hinge_brand: HingeBrand,
    catalog: &HardwareCatalog,
) -> EnclosureResult<Vec<SealOption>> {
    let mut seals = Vec::new();

    seals.push(catalog.seal(SealType::Drip)?.clone());

    if opening.is_outward_only() {
        seals.push(catalog.seal(SealType::SoftFinH)?.clone());
    }

    if opening.is_both_ways() {
        seals.push(catalog.seal(SealType::Bubble)?.clone());
    }

    let brand_seal = match catalog.hinge(hinge_brand)?.seal_family {
        SealFamily::Bubble => SealType::Bubble,
        SealFamily::HSeal => SealType::HSeal,
    };
    seals.push(catalog.seal(brand_seal)?.clone());

    Ok(seals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::standard_catalog;

    fn seal_types(seals: &[SealOption]) -> Vec<SealType> {
        seals.iter().map(|s| s.seal_type).collect()
    }

    #[test]
    fn test_outward_door_standard_hinge() {
        let seals = required_seals(DoorOpening::Outward, HingeBrand::Aria, standard_catalog())
            .unwrap();
        assert_eq!(
            seal_types(&seals),
            vec![SealType::Drip, SealType::SoftFinH, SealType::HSeal]
        );
    }

    #[test]
    fn test_both_ways_premium_collects_bubble_twice() {
        let seals = required_seals(DoorOpening::Both, HingeBrand::Maxima, standard_catalog())
            .unwrap();
        assert_eq!(seals.len(), 3);
        let bubbles = seals
            .iter()
            .filter(|s| s.seal_type == SealType::Bubble)
            .count();
        assert_eq!(bubbles, 2);
    }

    #[test]
    fn test_both_ways_standard_hinge() {
        let seals = required_seals(DoorOpening::Both, HingeBrand::Forte, standard_catalog())
            .unwrap();
        assert_eq!(
            seal_types(&seals),
            vec![SealType::Drip, SealType::Bubble, SealType::HSeal]
        );
    }

    #[test]
    fn test_inward_door_gets_drip_and_brand_seal_only() {
        let seals = required_seals(DoorOpening::Inward, HingeBrand::Aria, standard_catalog())
            .unwrap();
        assert_eq!(seal_types(&seals), vec![SealType::Drip, SealType::HSeal]);
    }

    #[test]
    fn test_drip_seal_always_first() {
        for opening in DoorOpening::ALL {
            for brand in HingeBrand::ALL {
                let seals = required_seals(opening, brand, standard_catalog()).unwrap();
                assert_eq!(seals[0].seal_type, SealType::Drip);
            }
        }
    }
}
