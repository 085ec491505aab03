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

use std::fmt::Write;
use cg_calc::CgResult;
use utils::numeric::{is_valid_percentage, round_float_to};
use utils::units::UnitSystem;

use crate::cli::OutputFormat;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("json encoding error")]
    Json(#[from] serde_json::Error),
    #[error("toml encoding error")]
    Toml(#[from] toml::ser::Error),
    #[error("formatting error")]
    Fmt(#[from] std::fmt::Error)
}

pub fn render(result: &CgResult,
              format: OutputFormat,
              aircraft: Option<&str>,
              units: UnitSystem,
              decimal_places: u32) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => render_text(result, aircraft, units, decimal_places),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Toml => Ok(toml::to_string(result)?)
    }
}

pub fn render_text(result: &CgResult,
                   aircraft: Option<&str>,
                   units: UnitSystem,
                   decimal_places: u32) -> Result<String, ReportError> {
    let dp = decimal_places as usize;
    let round = |v: f64| round_float_to(v, decimal_places);
    let mut out = String::new();
    if let Some(label) = aircraft {
        writeln!(out, "Aircraft: {}", label)?;
    }
    writeln!(out, "{:<6}{:>16}{:>14}{:>22}",
             "Leg",
             format!("Weight ({})", units.weight_unit()),
             format!("Arm ({})", units.arm_unit()),
             format!("Moment ({})", units.moment_unit()))?;
    for m in result.moments() {
        writeln!(out, "{:<6}{:>16.dp$}{:>14.dp$}{:>22.dp$}",
                 m.leg.as_str(), round(m.weight), round(m.arm), round(m.moment))?;
    }
    writeln!(out)?;
    writeln!(out, "Total weight: {:.dp$} {}", round(result.total_weight()), units.weight_unit())?;
    writeln!(out, "Total moment: {:.dp$} {}", round(result.total_moment()), units.moment_unit())?;
    writeln!(out, "CG arm:       {:.dp$} {}", round(result.cg_arm()), units.arm_unit())?;
    match result.percent_mac().value() {
        Some(pct) => {
            writeln!(out, "%MAC:         {:.dp$}%", round(pct))?;
            if !is_valid_percentage(pct) {
                writeln!(out, "Note: CG lies outside the MAC")?;
            }
        }
        None => writeln!(out, "%MAC:         {}", result.percent_mac())?
    }
    Ok(out)
}
