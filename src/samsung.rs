// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/samsung.rs - Password recovery for Samsung laptops.
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
 * # `samsung` Module
 *
 * Password recovery for Samsung laptops that display a 12, 14, or 16 digit
 * hexadecimal code at the power-on password prompt.
 *
 * The firmware obfuscates the stored password by rotating each byte left by
 * a per-position amount taken from a fixed table, selected by a key derived
 * from the first byte of the code. Two rotation tables have been observed in
 * the wild, and the decrypted bytes may hold either keyboard scan codes or
 * plain ASCII depending on the firmware revision. Without knowing the exact
 * revision, all plausible reversals are computed and every reading that
 * survives is returned as a candidate.
 */

use crate::keyboard::scancodes_to_ascii;

// Per-byte left-rotation amounts, indexed by [key][position]. The two tables
// correspond to the two obfuscation variants observed across firmware
// revisions.
const ROTATIONS_A: [[u8; 7]; 5] = [
    [7, 1, 5, 3, 0, 6, 2],
    [5, 2, 3, 0, 6, 1, 7],
    [6, 1, 5, 2, 7, 1, 0],
    [3, 7, 6, 1, 0, 5, 2],
    [1, 5, 7, 3, 2, 0, 6],
];

const ROTATIONS_B: [[u8; 7]; 5] = [
    [1, 6, 2, 5, 7, 3, 0],
    [7, 1, 6, 2, 5, 0, 3],
    [0, 6, 5, 1, 1, 7, 2],
    [5, 2, 3, 7, 6, 2, 1],
    [3, 7, 6, 5, 0, 1, 7],
];

/// Returns whether `serial` looks like a Samsung power-on password code.
pub fn check(serial: &str) -> bool {
    matches!(serial.len(), 12 | 14 | 16) && serial.chars().all(|c| c.is_ascii_hexdigit())
}

// Splits the code into the key selector (first byte, mod 5) and the
// encrypted password bytes (every byte after the first).
fn parse_code(serial: &str) -> Option<(usize, Vec<u8>)> {
    let bytes = serial.as_bytes();
    if bytes.len() < 2 || bytes.len() % 2 != 0 {
        return None;
    }

    let key = u8::from_str_radix(serial.get(0..2)?, 16).ok()? as usize % 5;

    let mut encrypted = Vec::with_capacity(bytes.len() / 2 - 1);
    for i in 1..bytes.len() / 2 {
        let pair = serial.get(2 * i..2 * i + 2)?;
        encrypted.push(u8::from_str_radix(pair, 16).ok()?);
    }

    Some((key, encrypted))
}

fn decrypt(encrypted: &[u8], key: usize, rotations: &[[u8; 7]; 5]) -> Vec<u8> {
    encrypted
        .iter()
        .enumerate()
        .map(|(i, &b)| b.rotate_left(rotations[key][i] as u32))
        .collect()
}

// Reads decrypted bytes as printable ASCII, stopping at a 0 terminator. A
// byte outside the printable range discards the whole reading.
fn bytes_to_ascii(bytes: &[u8]) -> Option<String> {
    let mut out = String::new();
    for &b in bytes {
        if b == 0 {
            return Some(out);
        }
        if !(32..=127).contains(&b) {
            return None;
        }
        out.push(b as char);
    }

    Some(out)
}

/// Recovers password candidates for a Samsung power-on password code.
///
/// Both rotation tables are tried and each result is read both as keyboard
/// scan codes and as raw ASCII. Candidates are returned in a fixed order:
/// the scan-code reading (table A, falling back to table B when table A
/// translates to nothing), then the ASCII readings of table A and table B.
/// Readings that fail to translate are dropped, so the list holds between
/// zero and three candidates.
pub fn solve(serial: &str) -> Vec<String> {
    let Some((key, encrypted)) = parse_code(serial) else {
        return Vec::new();
    };

    let decrypted_a = decrypt(&encrypted, key, &ROTATIONS_A);
    let decrypted_b = decrypt(&encrypted, key, &ROTATIONS_B);

    let mut scancode_password = scancodes_to_ascii(&decrypted_a);
    if scancode_password.is_empty() {
        scancode_password = scancodes_to_ascii(&decrypted_b);
    }

    let mut candidates = Vec::with_capacity(3);
    if !scancode_password.is_empty() {
        candidates.push(scancode_password);
    }
    for decrypted in [&decrypted_a, &decrypted_b] {
        if let Some(ascii) = bytes_to_ascii(decrypted)
            && !ascii.is_empty()
        {
            candidates.push(ascii);
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accepts_hex_codes() {
        assert!(check("07088120410C0000"));
        assert!(check("070881204100"));
        assert!(check("07088120410c00"));
        assert!(check("abcdefABCDEF"));
    }

    #[test]
    fn test_check_rejects_bad_shapes() {
        assert!(!check("07088120410C000")); // 15 digits
        assert!(!check("0708812041")); // 10 digits
        assert!(!check("07088120410G0000")); // non-hex
        assert!(!check(""));
    }

    #[test]
    fn test_solve_known_code() {
        // Key 07 % 5 = 2, table A decrypts to scan codes for "12345".
        assert_eq!(solve("07088120410C0000"), vec!["12345".to_string()]);
    }

    #[test]
    fn test_solve_ascii_reading() {
        // Key 0, bytes rotated right by table A's first row from "abcde".
        // The scan-code readings fail (0x61 and 0x85 are unmapped), leaving
        // only the table A ASCII reading.
        assert_eq!(solve("00C2311B8C65"), vec!["abcde".to_string()]);
    }

    #[test]
    fn test_solve_is_deterministic() {
        assert_eq!(solve("07088120410C0000"), solve("07088120410C0000"));
    }

    #[test]
    fn test_solve_candidate_bounds() {
        for serial in ["07088120410C0000", "000000000000", "FFFFFFFFFFFFFF"] {
            let candidates = solve(serial);
            assert!(candidates.len() <= 3);
            assert!(candidates.iter().all(|c| !c.is_empty()));
        }
    }

    #[test]
    fn test_solve_lowercase_hex() {
        assert_eq!(solve("07088120410c0000"), solve("07088120410C0000"));
    }
}
