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

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GearLeg {
    #[serde(rename = "NLG")]
    Nose,
    #[serde(rename = "LMLG")]
    LeftMain,
    #[serde(rename = "RMLG")]
    RightMain
}

impl GearLeg {
    pub const ALL: [GearLeg; 3] = [GearLeg::Nose, GearLeg::LeftMain, GearLeg::RightMain];

    pub fn as_str(&self) -> &'static str {
        match self {
            GearLeg::Nose => "NLG",
            GearLeg::LeftMain => "LMLG",
            GearLeg::RightMain => "RMLG"
        }
    }
}

impl Display for GearLeg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single scale reading taken under one gear leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GearReading {
    leg: GearLeg,
    weight: f64,
    arm: f64
}

impl GearReading {
    pub fn new(leg: GearLeg, weight: f64, arm: f64) -> Result<GearReading, CgError> {
        if !weight.is_finite() {
            return Err(CgError::invalid_input(format!("{} weight must be a finite number", leg)));
        }
        if weight < 0.0 {
            return Err(CgError::invalid_input(format!("{} weight cannot be negative ({})", leg, weight)));
        }
        if !arm.is_finite() {
            return Err(CgError::invalid_input(format!("{} arm must be a finite number", leg)));
        }
        Ok(GearReading { leg, weight, arm })
    }

    pub fn leg(&self) -> GearLeg {
        self.leg
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn arm(&self) -> f64 {
        self.arm
    }

    pub fn moment(&self) -> f64 {
        self.weight * self.arm
    }
}

/// One reading for each of the three gear legs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GearReadings {
    nlg: GearReading,
    lmlg: GearReading,
    rmlg: GearReading
}

impl GearReadings {
    pub fn new(nlg_weight: f64, nlg_arm: f64,
               lmlg_weight: f64, lmlg_arm: f64,
               rmlg_weight: f64, rmlg_arm: f64) -> Result<GearReadings, CgError> {
        Ok(GearReadings {
            nlg: GearReading::new(GearLeg::Nose, nlg_weight, nlg_arm)?,
            lmlg: GearReading::new(GearLeg::LeftMain, lmlg_weight, lmlg_arm)?,
            rmlg: GearReading::new(GearLeg::RightMain, rmlg_weight, rmlg_arm)?
        })
    }

    /// Readings in NLG, LMLG, RMLG order
    pub fn iter(&self) -> impl Iterator<Item = &GearReading> {
        [&self.nlg, &self.lmlg, &self.rmlg].into_iter()
    }

    pub fn total_weight(&self) -> f64 {
        self.iter().map(GearReading::weight).sum()
    }
}
