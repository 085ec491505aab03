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

mod cli;
mod report;
mod settings;

use std::env;
use std::process::ExitCode;
use clap::Parser;
use itertools::Itertools;
use tracing::{error, info, warn};
use tracing_appender;
use tracing_subscriber;

use cg_calc::{compute_from_values, CgError, PresetLibrary};

use crate::cli::{Cli, Command, ComputeArgs};
use crate::settings::GlobalSettings;


fn init_logging() {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "gear_balance.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }
}

fn run_compute(args: &ComputeArgs, settings: &GlobalSettings, library: &PresetLibrary) -> Result<String, String> {
    let inputs = args.resolve(library).map_err(|e| e.to_string())?;
    info!("Computing CG for {} with readings NLG {:?} LMLG {:?} RMLG {:?}",
          inputs.aircraft.as_deref().unwrap_or("manual input"), inputs.nlg, inputs.lmlg, inputs.rmlg);
    let result = compute_from_values(inputs.nlg.0, inputs.nlg.1,
                                     inputs.lmlg.0, inputs.lmlg.1,
                                     inputs.rmlg.0, inputs.rmlg.1,
                                     inputs.lemac_arm, inputs.mac_length)
        .map_err(|e: CgError| e.to_string())?;
    info!("Total weight {} CG arm {} %MAC {}", result.total_weight(), result.cg_arm(), result.percent_mac());
    let units = args.units.unwrap_or_else(|| settings.unit_system());
    report::render(&result, args.format, inputs.aircraft.as_deref(), units, settings.decimal_places())
        .map_err(|e| e.to_string())
}

fn list_presets(library: &PresetLibrary) -> String {
    library.sorted()
        .into_iter()
        .map(|p| {
            let mac = p.mac_reference();
            format!("{}: NLG {} LMLG {} RMLG {} MAC {} (LEMAC {} to TEMAC {})",
                    p.label, p.nlg_arm, p.lmlg_arm, p.rmlg_arm,
                    mac.mac_length, mac.lemac_arm, mac.temac_arm())
        })
        .join("\n")
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let settings = GlobalSettings::load().unwrap_or_else(|e| {
        warn!("Failed to load settings, using defaults. {}", e.to_string());
        GlobalSettings::default()
    });
    let library = PresetLibrary::load_with_user_presets(&settings.presets_path());

    let output = match &cli.command {
        Command::Compute(args) => run_compute(args, &settings, &library),
        Command::Presets => Ok(list_presets(&library))
    };
    match output {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use cg_calc::PresetLibrary;
    use crate::list_presets;

    #[test]
    fn preset_listing() {
        let listing = list_presets(&PresetLibrary::builtin());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Boeing 737: NLG 93 LMLG 706.822"));
        assert!(lines[0].ends_with("MAC 130 (LEMAC 610 to TEMAC 740)"));
        assert!(lines[1].starts_with("Boeing 787"));
        assert!(lines[1].ends_with("(LEMAC 700 to TEMAC 730)"));
    }
}
