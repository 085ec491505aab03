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

use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

use crate::error::CgError;

/// Position and length of the mean aerodynamic chord, measured from the same datum as the gear arms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacReference {
    pub lemac_arm: f64,
    pub mac_length: f64
}

impl MacReference {
    pub fn new(lemac_arm: f64, mac_length: f64) -> MacReference {
        MacReference { lemac_arm, mac_length }
    }

    pub fn percent_mac(&self, cg_arm: f64) -> Result<f64, CgError> {
        if !self.lemac_arm.is_finite() {
            return Err(CgError::invalid_input("LEMAC arm must be a finite number"));
        }
        if !self.mac_length.is_finite() || self.mac_length <= 0.0 {
            return Err(CgError::invalid_input(
                format!("MAC length must be greater than zero to compute %MAC (got {})", self.mac_length)
            ));
        }
        let pct = (cg_arm - self.lemac_arm) / self.mac_length * 100.0;
        if !pct.is_finite() {
            return Err(CgError::invalid_input("%MAC is too large to represent"));
        }
        Ok(pct)
    }

    /// Arm of the trailing edge of the MAC
    pub fn temac_arm(&self) -> f64 {
        self.lemac_arm + self.mac_length
    }
}

/// CG position expressed as a percentage of MAC.
///
/// A missing or unusable MAC reference is kept distinct from a computed value so that
/// a CG sitting exactly on the leading edge (0%) can never be confused with "not computed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum PercentMac {
    NotRequested,
    Computed(f64),
    Invalid(String)
}

impl PercentMac {
    pub fn from_reference(mac_ref: Option<&MacReference>, cg_arm: f64) -> PercentMac {
        match mac_ref {
            None => PercentMac::NotRequested,
            Some(r) => match r.percent_mac(cg_arm) {
                Ok(pct) => PercentMac::Computed(pct),
                Err(e) => PercentMac::Invalid(e.to_string())
            }
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            PercentMac::Computed(pct) => Some(*pct),
            _ => None
        }
    }
}

impl Display for PercentMac {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PercentMac::NotRequested => write!(f, "not computed (no MAC reference)"),
            PercentMac::Computed(pct) => write!(f, "{}%", pct),
            PercentMac::Invalid(reason) => write!(f, "not computed ({})", reason)
        }
    }
}
