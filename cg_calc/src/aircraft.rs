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

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utils::filesystem::get_filetypes_in_path;

use crate::error::CgError;
use crate::mac::MacReference;

pub const PRESET_FILE_SUFFIX: &'static str = "toml";

/// Fixed reference data for an aircraft type so that only scale weights need entering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftPreset {
    pub label: String,
    pub nlg_arm: f64,
    pub lmlg_arm: f64,
    pub rmlg_arm: f64,
    pub lemac: f64,
    pub mac_length: f64
}

impl AircraftPreset {
    pub fn boeing_737() -> AircraftPreset {
        // LEMAC and MAC length are illustrative only
        AircraftPreset {
            label: String::from("Boeing 737"),
            nlg_arm: 93.0,
            lmlg_arm: 706.822,
            rmlg_arm: 706.822,
            lemac: 610.0,
            mac_length: 130.0
        }
    }

    pub fn boeing_787() -> AircraftPreset {
        // Placeholder values. Replace with approved weight and balance manual data
        AircraftPreset {
            label: String::from("Boeing 787"),
            nlg_arm: 200.0,
            lmlg_arm: 800.0,
            rmlg_arm: 800.0,
            lemac: 700.0,
            mac_length: 30.0
        }
    }

    pub fn builtin() -> Vec<AircraftPreset> {
        vec![AircraftPreset::boeing_787(), AircraftPreset::boeing_737()]
    }

    pub fn from_toml_file(path: &Path) -> Result<AircraftPreset, CgError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CgError::PresetLoad(path.display().to_string(), e.to_string())
        })?;
        toml::from_str(&contents).map_err(|e| {
            CgError::PresetLoad(path.display().to_string(), e.to_string())
        })
    }

    pub fn mac_reference(&self) -> MacReference {
        MacReference::new(self.lemac, self.mac_length)
    }
}

/// Known presets keyed by lowercase label.
#[derive(Debug, Clone)]
pub struct PresetLibrary {
    presets: BTreeMap<String, AircraftPreset>
}

impl PresetLibrary {
    pub fn builtin() -> PresetLibrary {
        let mut library = PresetLibrary { presets: BTreeMap::new() };
        for preset in AircraftPreset::builtin() {
            library.insert(preset);
        }
        library
    }

    /// Built-in presets overlaid with any presets found in `preset_dir`.
    /// Files that fail to load are skipped.
    pub fn load_with_user_presets(preset_dir: &Path) -> PresetLibrary {
        let mut library = PresetLibrary::builtin();
        if !preset_dir.is_dir() {
            info!("No user preset directory at {}", preset_dir.display());
            return library;
        }
        let preset_files = match get_filetypes_in_path(preset_dir, PRESET_FILE_SUFFIX) {
            Ok(files) => files,
            Err(e) => {
                warn!("Failed to read preset directory {}. {}", preset_dir.display(), e.to_string());
                return library;
            }
        };
        for path in preset_files {
            match AircraftPreset::from_toml_file(&path) {
                Ok(preset) => {
                    info!("Loaded preset '{}' from {}", preset.label, path.display());
                    if let Some(old) = library.insert(preset) {
                        info!("Preset '{}' overrides the built-in values", old.label);
                    }
                }
                Err(e) => warn!("{}", e.to_string())
            }
        }
        library
    }

    pub fn insert(&mut self, mut preset: AircraftPreset) -> Option<AircraftPreset> {
        preset.label = preset.label.trim().to_string();
        self.presets.insert(preset_key(&preset.label), preset)
    }

    pub fn get(&self, label: &str) -> Result<&AircraftPreset, CgError> {
        self.presets.get(&preset_key(label)).ok_or_else(|| {
            CgError::UnknownPreset(label.to_string())
        })
    }

    /// All presets ordered by label
    pub fn sorted(&self) -> Vec<&AircraftPreset> {
        self.presets.values().sorted_by(|a, b| a.label.cmp(&b.label)).collect()
    }
}

fn preset_key(label: &str) -> String {
    label.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use crate::aircraft::{AircraftPreset, PresetLibrary};
    use crate::calculator::compute;
    use crate::error::CgError;
    use crate::gear::GearReadings;
    use crate::mac::PercentMac;

    #[test]
    fn builtin_lookup_is_case_insensitive() {
        let library = PresetLibrary::builtin();
        assert_eq!(library.get("boeing 737").unwrap().nlg_arm, 93.0);
        assert_eq!(library.get(" BOEING 787 ").unwrap().mac_length, 30.0);
        let sorted = library.sorted();
        let labels: Vec<&str> = sorted.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Boeing 737", "Boeing 787"]);
    }

    #[test]
    fn unknown_preset() {
        let library = PresetLibrary::builtin();
        assert_eq!(library.get("Cessna 172").unwrap_err(),
                   CgError::UnknownPreset(String::from("Cessna 172")));
    }

    #[test]
    fn preset_feeds_calculation() {
        let preset = AircraftPreset::boeing_737();
        let readings = GearReadings::new(2500.0, preset.nlg_arm,
                                         30000.0, preset.lmlg_arm,
                                         30000.0, preset.rmlg_arm).unwrap();
        let result = compute(&readings, Some(&preset.mac_reference())).unwrap();
        let expected_cg = (2500.0 * 93.0 + 60000.0 * 706.822) / 62500.0;
        assert!((result.cg_arm() - expected_cg).abs() < 1e-9);
        let expected_pct = (expected_cg - 610.0) / 130.0 * 100.0;
        match result.percent_mac() {
            PercentMac::Computed(pct) => assert!((pct - expected_pct).abs() < 1e-9),
            other => panic!("expected computed %MAC, got {:?}", other)
        }
    }

    #[test]
    fn user_presets_override_and_extend() {
        let dir = tempfile::tempdir().unwrap();
        let mut custom_737 = AircraftPreset::boeing_737();
        custom_737.lemac = 625.5;
        custom_737.mac_length = 155.0;
        fs::write(dir.path().join("b737.toml"), toml::to_string(&custom_737).unwrap()).unwrap();
        fs::write(dir.path().join("a320.toml"), r#"
label = "Airbus A320"
nlg_arm = 5.07
lmlg_arm = 17.73
rmlg_arm = 17.73
lemac = 16.46
mac_length = 4.19
"#).unwrap();
        fs::write(dir.path().join("broken.toml"), "label = ").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a preset").unwrap();

        let library = PresetLibrary::load_with_user_presets(dir.path());
        assert_eq!(library.sorted().len(), 3);
        assert_eq!(library.get("Boeing 737").unwrap(), &custom_737);
        assert_eq!(library.get("airbus a320").unwrap().mac_length, 4.19);
        assert_eq!(library.get("Boeing 787").unwrap(), &AircraftPreset::boeing_787());
    }

    #[test]
    fn padded_label_is_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("padded.toml"), r#"
label = "  Dash 8  "
nlg_arm = 40.0
lmlg_arm = 420.0
rmlg_arm = 420.0
lemac = 380.0
mac_length = 90.0
"#).unwrap();
        let library = PresetLibrary::load_with_user_presets(dir.path());
        let preset = library.get("dash 8").unwrap();
        assert_eq!(preset.label, "Dash 8");
        assert_eq!(library.get("  DASH 8 ").unwrap(), preset);
    }

    #[test]
    fn missing_preset_dir_gives_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let library = PresetLibrary::load_with_user_presets(&dir.path().join("does-not-exist"));
        assert_eq!(library.sorted().len(), 2);
    }

    #[test]
    fn broken_preset_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "label = \"x\"").unwrap();
        match AircraftPreset::from_toml_file(&path) {
            Err(CgError::PresetLoad(p, _)) => assert!(p.ends_with("broken.toml")),
            other => panic!("expected PresetLoad, got {:?}", other)
        }
    }
}
