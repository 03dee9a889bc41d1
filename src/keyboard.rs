// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/keyboard.rs - Keyboard scan code translation.
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
 * # `keyboard` Module
 *
 * Translation of raw keyboard scan codes into ASCII characters. Some BIOSes
 * store the power-on password as the scan codes of the keys that were
 * pressed rather than as character data, so a decrypted password byte
 * sequence may need to be read back through this table.
 */

// Set-1 make codes for the digit row, the top and bottom letter rows, and
// the head of the home row. Codes 39-43 and 51-53 are intentionally absent:
// those keys have not been observed in recovered passwords and are left
// unmapped rather than guessed.
const SCANCODE_MAP: [(u8, char); 36] = [
    (2, '1'),
    (3, '2'),
    (4, '3'),
    (5, '4'),
    (6, '5'),
    (7, '6'),
    (8, '7'),
    (9, '8'),
    (10, '9'),
    (11, '0'),
    (16, 'q'),
    (17, 'w'),
    (18, 'e'),
    (19, 'r'),
    (20, 't'),
    (21, 'y'),
    (22, 'u'),
    (23, 'i'),
    (24, 'o'),
    (25, 'p'),
    (30, 'a'),
    (31, 's'),
    (32, 'd'),
    (33, 'f'),
    (34, 'g'),
    (35, 'h'),
    (36, 'j'),
    (37, 'k'),
    (38, 'l'),
    (44, 'z'),
    (45, 'x'),
    (46, 'c'),
    (47, 'v'),
    (48, 'b'),
    (49, 'n'),
    (50, 'm'),
];

fn ascii_for_scancode(code: u8) -> Option<char> {
    SCANCODE_MAP
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, ch)| *ch)
}

/// Translates a sequence of keyboard scan codes into an ASCII string.
///
/// A code of 0 terminates the sequence; everything accumulated up to that
/// point is returned and the terminator itself is dropped. Any other code
/// with no table entry invalidates the whole sequence, producing `""`
/// rather than a partial translation.
pub fn scancodes_to_ascii(codes: &[u8]) -> String {
    let mut out = String::new();

    for &code in codes {
        if code == 0 {
            return out;
        }
        match ascii_for_scancode(code) {
            Some(ch) => out.push(ch),
            None => return String::new(),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_row() {
        assert_eq!(scancodes_to_ascii(&[2, 3, 4]), "123");
        assert_eq!(scancodes_to_ascii(&[11, 10, 9]), "098");
    }

    #[test]
    fn test_terminator_stops_translation() {
        assert_eq!(scancodes_to_ascii(&[0, 2, 3]), "");
        assert_eq!(scancodes_to_ascii(&[2, 3, 0, 4]), "12");
    }

    #[test]
    fn test_unmapped_code_invalidates_sequence() {
        // 1 is Escape, which has no table entry.
        assert_eq!(scancodes_to_ascii(&[2, 3, 1, 4]), "");
        // 51-53 are deliberately unmapped.
        assert_eq!(scancodes_to_ascii(&[51]), "");
        assert_eq!(scancodes_to_ascii(&[255]), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(scancodes_to_ascii(&[]), "");
    }

    #[test]
    fn test_letter_rows() {
        assert_eq!(scancodes_to_ascii(&[16, 17, 18, 19, 20]), "qwert");
        assert_eq!(scancodes_to_ascii(&[30, 31, 32]), "asd");
        assert_eq!(scancodes_to_ascii(&[44, 45, 46, 50]), "zxcm");
    }
}
