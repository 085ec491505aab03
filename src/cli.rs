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

use clap::{Args, Parser, Subcommand, ValueEnum};
use cg_calc::{CgError, PresetLibrary};
use utils::units::UnitSystem;

#[derive(Parser, Debug)]
#[command(name = "gear-balance", version, about = "Aircraft centre of gravity from landing gear scale readings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute total weight, CG arm and %MAC from a weighing
    Compute(ComputeArgs),
    /// List the available aircraft presets
    Presets
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Toml
}

#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Nose landing gear scale weight
    #[arg(long, allow_negative_numbers = true)]
    pub nlg_weight: f64,
    /// Left main landing gear scale weight
    #[arg(long, allow_negative_numbers = true)]
    pub lmlg_weight: f64,
    /// Right main landing gear scale weight
    #[arg(long, allow_negative_numbers = true)]
    pub rmlg_weight: f64,

    /// Aircraft preset supplying arms, LEMAC and MAC length
    #[arg(long)]
    pub aircraft: Option<String>,

    /// Nose landing gear arm from the datum, overrides the preset
    #[arg(long, allow_negative_numbers = true)]
    pub nlg_arm: Option<f64>,
    /// Left main landing gear arm from the datum, overrides the preset
    #[arg(long, allow_negative_numbers = true)]
    pub lmlg_arm: Option<f64>,
    /// Right main landing gear arm from the datum, overrides the preset
    #[arg(long, allow_negative_numbers = true)]
    pub rmlg_arm: Option<f64>,

    /// Arm of the leading edge of the mean aerodynamic chord
    #[arg(long, allow_negative_numbers = true)]
    pub lemac: Option<f64>,
    /// Length of the mean aerodynamic chord
    #[arg(long, allow_negative_numbers = true)]
    pub mac_length: Option<f64>,

    /// Unit system used to label the output. Defaults to the configured one
    #[arg(long)]
    pub units: Option<UnitSystem>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat
}

/// Inputs for a calculation once preset values and overrides have been merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInputs {
    pub aircraft: Option<String>,
    pub nlg: (f64, f64),
    pub lmlg: (f64, f64),
    pub rmlg: (f64, f64),
    pub lemac_arm: Option<f64>,
    pub mac_length: Option<f64>
}

impl ComputeArgs {
    /// Arms given on the command line take precedence over the preset's.
    pub fn resolve(&self, library: &PresetLibrary) -> Result<ResolvedInputs, CgError> {
        let preset = match &self.aircraft {
            Some(label) => Some(library.get(label)?),
            None => None
        };
        let arm = |given: Option<f64>, from_preset: Option<f64>, leg: &str| -> Result<f64, CgError> {
            given.or(from_preset).ok_or_else(|| {
                CgError::invalid_input(format!("{} arm is required when no aircraft preset is given", leg))
            })
        };
        Ok(ResolvedInputs {
            aircraft: preset.map(|p| p.label.clone()),
            nlg: (self.nlg_weight, arm(self.nlg_arm, preset.map(|p| p.nlg_arm), "NLG")?),
            lmlg: (self.lmlg_weight, arm(self.lmlg_arm, preset.map(|p| p.lmlg_arm), "LMLG")?),
            rmlg: (self.rmlg_weight, arm(self.rmlg_arm, preset.map(|p| p.rmlg_arm), "RMLG")?),
            lemac_arm: self.lemac.or(preset.map(|p| p.lemac)),
            mac_length: self.mac_length.or(preset.map(|p| p.mac_length))
        })
    }
}
