// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/sony.rs - Password recovery for Sony laptops.
 *  Copyright (C) 2026  bioskey developers
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/*!
 * # `sony` Module
 *
 * Password recovery for older Sony laptops. The firmware derives the
 * power-on password from a 7-digit serial through a position-dependent
 * digit substitution, so recovery is a single table lookup per digit.
 */

use std::sync::OnceLock;

use regex::Regex;

// One 10-character row per serial position, indexed by the digit value.
const SUBSTITUTION_TABLE: &str =
    "0987654321876543210976543210982109876543109876543221098765436543210987";

/// Returns whether `serial` looks like a Sony serial number.
///
/// The match is unanchored: any string containing a run of 7 decimal digits
/// is accepted, including strings with surrounding characters. Real service
/// tags sometimes carry prefixes, so this is kept deliberately permissive;
/// the solver's exact-length precondition does the final gating.
pub fn check(serial: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| Regex::new(r"\d{7}").unwrap());
    pattern.is_match(serial)
}

/// Recovers the password for a 7-digit Sony serial number.
///
/// Produces exactly one candidate for a well-formed serial and no candidate
/// otherwise. The input must be exactly 7 characters; serials that only
/// contain a 7-digit run pass [check] but yield nothing here.
pub fn solve(serial: &str) -> Vec<String> {
    if serial.len() != 7 {
        return Vec::new();
    }

    let mut password = String::with_capacity(7);
    for (i, ch) in serial.chars().enumerate() {
        let digit = match ch.to_digit(10) {
            Some(d) => d as usize,
            None => return Vec::new(),
        };
        match SUBSTITUTION_TABLE.as_bytes().get(10 * i + digit) {
            Some(&b) => password.push(b as char),
            None => return Vec::new(),
        }
    }

    vec![password]
}
