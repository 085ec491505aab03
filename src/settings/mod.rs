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

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use config::{Config, ConfigError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utils::units::UnitSystem;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GlobalSettings {
    unit_system: String,
    presets_path: String,
    decimal_places: u32
}

impl GlobalSettings {
    const UNIT_SYSTEM: &'static str = "unit_system";
    const PRESETS_PATH: &'static str = "presets_path";
    const DECIMAL_PLACES: &'static str = "decimal_places";
    const CONFIG_FILENAME: &'static str = "gear-balance-conf";
    const ENV_PREFIX: &'static str = "GEAR_BALANCE";
    const DEFAULT_DECIMAL_PLACES: u32 = 3;
    const MAX_DECIMAL_PLACES: u32 = 15;

    pub fn default() -> Self {
        GlobalSettings {
            unit_system: UnitSystem::default().as_str().to_string(),
            presets_path: get_default_presets_path().to_string_lossy().into_owned(),
            decimal_places: GlobalSettings::DEFAULT_DECIMAL_PLACES
        }
    }

    fn builder_with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default(GlobalSettings::UNIT_SYSTEM, UnitSystem::default().as_str())?
            .set_default(GlobalSettings::PRESETS_PATH, get_default_presets_path().to_string_lossy().into_owned())?
            .set_default(GlobalSettings::DECIMAL_PLACES, GlobalSettings::DEFAULT_DECIMAL_PLACES as i64)
    }

    pub fn load() -> Result<Self, ConfigError> {
        match GlobalSettings::builder_with_defaults()?
            .add_source(config::File::with_name(GlobalSettings::CONFIG_FILENAME))
            .add_source(config::Environment::with_prefix(GlobalSettings::ENV_PREFIX))
            .build() {
            Ok(settings) => {
                settings.try_deserialize()
            }
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let settings = GlobalSettings::builder_with_defaults()?
                    .add_source(config::Environment::with_prefix(GlobalSettings::ENV_PREFIX))
                    .build()?;
                let ret: GlobalSettings = settings.try_deserialize()?;
                ret.write().unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
                Ok(ret)
            }
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        UnitSystem::from_str(&self.unit_system).unwrap_or_else(|e| {
            warn!("{}. Falling back to {}", e, UnitSystem::default());
            UnitSystem::default()
        })
    }

    pub fn presets_path(&self) -> PathBuf {
        PathBuf::from(&self.presets_path)
    }

    /// Capped at 15, beyond which f64 has no meaningful digits left
    pub fn decimal_places(&self) -> u32 {
        if self.decimal_places > GlobalSettings::MAX_DECIMAL_PLACES {
            warn!("decimal_places {} is too large. Using {}",
                  self.decimal_places, GlobalSettings::MAX_DECIMAL_PLACES);
            return GlobalSettings::MAX_DECIMAL_PLACES;
        }
        self.decimal_places
    }

    pub fn write(&self) -> std::io::Result<()> {
        fs::write(format!("{}.toml", GlobalSettings::CONFIG_FILENAME), toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}

pub fn get_default_presets_path() -> PathBuf {
    match ProjectDirs::from("", "zephyrj", "gear-balance") {
        Some(dirs) => dirs.data_dir().join("presets"),
        None => PathBuf::from("presets")
    }
}
