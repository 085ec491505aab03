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

/// Rounds to `decimal_places`. Values that can't be scaled without overflowing are returned as is.
pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_base: u64 = 10;
    let precision_factor = match precision_base.checked_pow(decimal_places) {
        Some(factor) => factor as f64,
        None => return float
    };
    let scaled = float * precision_factor;
    if !scaled.is_finite() {
        return float;
    }
    scaled.round() / precision_factor
}

pub fn is_valid_percentage(val: f64) -> bool {
    val >= 0.0 && val <= 100.0
}
