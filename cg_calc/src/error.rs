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

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CgError {
    #[error("invalid input. {0}")]
    InvalidInput(String),
    #[error("unknown aircraft preset `{0}`")]
    UnknownPreset(String),
    #[error("failed to load preset `{0}`. {1}")]
    PresetLoad(String, String)
}

impl CgError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        CgError::InvalidInput(reason.into())
    }
}
