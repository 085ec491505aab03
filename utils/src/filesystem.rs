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

use std::{fs, io};
use std::path::{Path, PathBuf};

pub fn get_filetypes_in_path(path: &Path, file_type: &str) -> io::Result<Vec<PathBuf>> {
    let dir_entries = fs::read_dir(path)?;
    let mut files: Vec<PathBuf> = dir_entries.filter_map(|e| {
        match e {
            Ok(dir_entry) => {
                let entry_path = dir_entry.path();
                if !entry_path.is_file() {
                    return None;
                }
                match entry_path.extension() {
                    Some(ext) if ext == file_type => Some(entry_path),
                    _ => None
                }
            },
            _ => None
        }
    }).collect();
    files.sort();
    Ok(files)
}
