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

//! Centre of gravity calculation from landing-gear scale readings.
//!
//! A weighing gives one scale reading per gear leg. Each reading is reduced to a moment
//! about the datum, the moments are summed and divided by the total weight to give the
//! CG arm, which can then be expressed as a percentage of the mean aerodynamic chord.

pub mod aircraft;
pub mod calculator;
pub mod error;
pub mod gear;
pub mod mac;

pub use aircraft::{AircraftPreset, PresetLibrary};
pub use calculator::{compute, compute_from_values, CgResult, LegMoment};
pub use error::CgError;
pub use gear::{GearLeg, GearReading, GearReadings};
pub use mac::{MacReference, PercentMac};
