/*
 * Copyright (c):
 * 2024 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of gear-balance.
 *
 * gear-balance is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * gear-balance is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with gear-balance. If not, see <https://www.gnu.org/licenses/>.
 */

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CgError;
use crate::gear::{GearLeg, GearReading, GearReadings};
use crate::mac::{MacReference, PercentMac};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegMoment {
    pub leg: GearLeg,
    pub weight: f64,
    pub arm: f64,
    pub moment: f64
}

impl From<&GearReading> for LegMoment {
    fn from(reading: &GearReading) -> Self {
        LegMoment {
            leg: reading.leg(),
            weight: reading.weight(),
            arm: reading.arm(),
            moment: reading.moment()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CgResult {
    total_weight: f64,
    cg_arm: f64,
    percent_mac: PercentMac,
    moments: Vec<LegMoment>
}

impl CgResult {
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn cg_arm(&self) -> f64 {
        self.cg_arm
    }

    pub fn total_moment(&self) -> f64 {
        self.moments.iter().map(|m| m.moment).sum()
    }

    pub fn percent_mac(&self) -> &PercentMac {
        &self.percent_mac
    }

    /// Per-leg breakdown in NLG, LMLG, RMLG order
    pub fn moments(&self) -> &[LegMoment] {
        &self.moments
    }
}

pub fn compute(readings: &GearReadings, mac_ref: Option<&MacReference>) -> Result<CgResult, CgError> {
    let moments: Vec<LegMoment> = readings.iter().map(LegMoment::from).collect();
    let total_weight = readings.total_weight();
    if total_weight == 0.0 {
        return Err(CgError::invalid_input("cannot compute CG with zero total weight"));
    }
    if !total_weight.is_finite() {
        return Err(CgError::invalid_input("total weight is too large to represent"));
    }
    let total_moment: f64 = moments.iter().map(|m| m.moment).sum();
    if !total_moment.is_finite() {
        return Err(CgError::invalid_input("total moment is too large to represent"));
    }
    let cg_arm = total_moment / total_weight;
    let percent_mac = PercentMac::from_reference(mac_ref, cg_arm);
    debug!("Computed CG arm {} from total weight {} and total moment {}. %MAC {}",
           cg_arm, total_weight, total_moment, percent_mac);
    Ok(CgResult { total_weight, cg_arm, percent_mac, moments })
}

/// Flat form of [compute] taking each value individually.
///
/// %MAC is requested when either of `lemac_arm` or `mac_length` is supplied. Supplying only
/// one of them leaves the CG valid but marks %MAC as invalid.
pub fn compute_from_values(nlg_weight: f64, nlg_arm: f64,
                           lmlg_weight: f64, lmlg_arm: f64,
                           rmlg_weight: f64, rmlg_arm: f64,
                           lemac_arm: Option<f64>,
                           mac_length: Option<f64>) -> Result<CgResult, CgError> {
    let readings = GearReadings::new(nlg_weight, nlg_arm,
                                     lmlg_weight, lmlg_arm,
                                     rmlg_weight, rmlg_arm)?;
    match (lemac_arm, mac_length) {
        (Some(lemac_arm), Some(mac_length)) => {
            compute(&readings, Some(&MacReference::new(lemac_arm, mac_length)))
        }
        (None, None) => compute(&readings, None),
        (lemac_arm, _) => {
            let mut result = compute(&readings, None)?;
            let missing = if lemac_arm.is_none() { "LEMAC arm" } else { "MAC length" };
            result.percent_mac = PercentMac::Invalid(
                CgError::invalid_input(format!("{} is required to compute %MAC", missing)).to_string()
            );
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::calculator::{compute, compute_from_values};
    use crate::error::CgError;
    use crate::gear::{GearLeg, GearReadings};
    use crate::mac::{MacReference, PercentMac};

    fn weighted_mean(pairs: &[(f64, f64)]) -> f64 {
        let total: f64 = pairs.iter().map(|(w, _)| w).sum();
        pairs.iter().map(|(w, v)| w * v).sum::<f64>() / total
    }

    fn example_readings() -> GearReadings {
        GearReadings::new(2000.0, 100.0, 15000.0, 700.0, 15000.0, 700.0).unwrap()
    }

    #[test]
    fn example_weighing() {
        let result = compute(&example_readings(), None).unwrap();
        assert_eq!(result.total_weight(), 32000.0);
        assert_eq!(result.cg_arm(), 662.5);
        assert_eq!(result.percent_mac(), &PercentMac::NotRequested);
        assert_eq!(result.total_moment(), 21_200_000.0);
    }

    #[test]
    fn example_weighing_with_mac() {
        let mac = MacReference::new(600.0, 200.0);
        let result = compute(&example_readings(), Some(&mac)).unwrap();
        assert_eq!(result.cg_arm(), 662.5);
        assert_eq!(result.percent_mac(), &PercentMac::Computed(31.25));
    }

    #[test]
    fn moments_are_reported_per_leg() {
        let result = compute(&example_readings(), None).unwrap();
        let legs: Vec<GearLeg> = result.moments().iter().map(|m| m.leg).collect();
        assert_eq!(legs, GearLeg::ALL.to_vec());
        let nose = &result.moments()[0];
        assert_eq!(nose.weight, 2000.0);
        assert_eq!(nose.arm, 100.0);
        assert_eq!(nose.moment, 200_000.0);
        assert_eq!(result.moments()[2].moment, 10_500_000.0);
    }

    #[test]
    fn zero_total_weight_fails() {
        let readings = GearReadings::new(0.0, 100.0, 0.0, 700.0, 0.0, 700.0).unwrap();
        assert_eq!(compute(&readings, None),
                   Err(CgError::invalid_input("cannot compute CG with zero total weight")));
        let mac = MacReference::new(600.0, 200.0);
        assert!(matches!(compute(&readings, Some(&mac)), Err(CgError::InvalidInput(_))));
    }

    #[test]
    fn overflowing_totals_fail() {
        let huge_weight = compute_from_values(1e308, 1.0, 1e308, 1.0, 1e308, 1.0, None, None);
        assert!(matches!(huge_weight, Err(CgError::InvalidInput(_))));

        let huge_moment = compute_from_values(1e200, 1e200, 1.0, 0.0, 1.0, 0.0, None, None);
        assert!(matches!(huge_moment, Err(CgError::InvalidInput(_))));

        let cancelling = compute_from_values(1e300, 1e10, 1e300, -1e10, 1.0, 0.0, None, None);
        assert!(matches!(cancelling, Err(CgError::InvalidInput(_))));
    }

    #[test]
    fn negative_weight_fails() {
        let res = compute_from_values(2000.0, 100.0, -1.0, 700.0, 15000.0, 700.0, None, None);
        assert!(matches!(res, Err(CgError::InvalidInput(_))));
    }

    #[test]
    fn invalid_mac_length_keeps_cg() {
        for len in [0.0, -200.0] {
            let result = compute(&example_readings(), Some(&MacReference::new(600.0, len))).unwrap();
            assert_eq!(result.total_weight(), 32000.0);
            assert_eq!(result.cg_arm(), 662.5);
            assert!(matches!(result.percent_mac(), PercentMac::Invalid(_)));
            assert_eq!(result.percent_mac().value(), None);
        }
    }

    #[test]
    fn cg_is_weighted_mean_of_arms() {
        let cases = [
            [(1.0, 10.0), (1.0, 20.0), (1.0, 30.0)],
            [(512.5, -40.0), (7300.25, 310.75), (7290.0, 311.0)],
            [(0.0, 93.0), (12000.0, 706.822), (0.0, 706.822)],
            [(3.0, 0.0), (0.0, 0.0), (9.0, 2.5)],
        ];
        for case in cases {
            let [(nw, na), (lw, la), (rw, ra)] = case;
            let result = compute_from_values(nw, na, lw, la, rw, ra, None, None).unwrap();
            let expected = weighted_mean(&case);
            assert!((result.cg_arm() - expected).abs() < 1e-9,
                    "cg {} differs from weighted mean {}", result.cg_arm(), expected);
            assert_eq!(result.total_weight(), nw + lw + rw);
        }
    }

    #[test]
    fn total_weight_is_order_independent() {
        let a = compute_from_values(1200.0, 93.0, 15400.0, 706.822, 15350.0, 706.822, None, None).unwrap();
        let b = compute_from_values(15350.0, 706.822, 1200.0, 93.0, 15400.0, 706.822, None, None).unwrap();
        assert_eq!(a.total_weight(), b.total_weight());
        assert!((a.cg_arm() - b.cg_arm()).abs() < 1e-9);
    }

    #[test]
    fn compute_is_idempotent() {
        let mac = MacReference::new(610.0, 130.0);
        let first = compute(&example_readings(), Some(&mac)).unwrap();
        let second = compute(&example_readings(), Some(&mac)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn partial_mac_reference_is_invalid() {
        let result = compute_from_values(2000.0, 100.0, 15000.0, 700.0, 15000.0, 700.0,
                                         Some(600.0), None).unwrap();
        assert_eq!(result.cg_arm(), 662.5);
        match result.percent_mac() {
            PercentMac::Invalid(reason) => assert!(reason.contains("MAC length")),
            other => panic!("expected invalid %MAC, got {:?}", other)
        }

        let result = compute_from_values(2000.0, 100.0, 15000.0, 700.0, 15000.0, 700.0,
                                         None, Some(200.0)).unwrap();
        match result.percent_mac() {
            PercentMac::Invalid(reason) => assert!(reason.contains("LEMAC")),
            other => panic!("expected invalid %MAC, got {:?}", other)
        }
    }

    #[test]
    fn flat_interface_matches_structured() {
        let flat = compute_from_values(2000.0, 100.0, 15000.0, 700.0, 15000.0, 700.0,
                                       Some(600.0), Some(200.0)).unwrap();
        let structured = compute(&example_readings(), Some(&MacReference::new(600.0, 200.0))).unwrap();
        assert_eq!(flat, structured);
    }
}
