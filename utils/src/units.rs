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
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// The unit system values are labelled with. Values are never converted between systems,
/// callers are expected to supply weights and arms consistently.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Imperial,
    Metric
}

impl UnitSystem {
    pub const IMPERIAL_STRING: &'static str = "imperial";
    pub const METRIC_STRING: &'static str = "metric";

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => UnitSystem::IMPERIAL_STRING,
            UnitSystem::Metric => UnitSystem::METRIC_STRING
        }
    }

    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "lb",
            UnitSystem::Metric => "kg"
        }
    }

    pub fn arm_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "in",
            UnitSystem::Metric => "m"
        }
    }

    pub fn moment_unit(&self) -> String {
        format!("{}·{}", self.weight_unit(), self.arm_unit())
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        UnitSystem::Imperial
    }
}

impl Display for UnitSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            UnitSystem::IMPERIAL_STRING => Ok(UnitSystem::Imperial),
            UnitSystem::METRIC_STRING => Ok(UnitSystem::Metric),
            other => Err(format!("unknown unit system '{}'", other))
        }
    }
}
