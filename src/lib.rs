// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - BIOS power-on password recovery library.
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
 * # `bioskey` Crate
 *
 * A library for recovering laptop BIOS power-on passwords from the serial
 * or service-tag string printed on the machine, by reversing the
 * key-derivation and obfuscation schemes the firmware uses.
 *
 * Each supported vendor is modeled as a [decoder::Decoder]: a recognizer
 * for that vendor's serial format paired with a solver that reverses its
 * scheme. A serial may decode to several candidate passwords when the
 * firmware revision (and with it the exact obfuscation variant) is unknown;
 * all plausible candidates are returned and trying them at the password
 * prompt is left to the user.
 *
 * 1. [keyboard]: Translates keyboard scan codes to ASCII.
 * 2. [sony]: Recovery for 7-digit Sony serials.
 * 3. [samsung]: Recovery for 12/14/16-digit hexadecimal Samsung codes.
 * 4. [decoder]: The decoder registry and dispatch.
 *
 * ## Usage Example
 *
 * ```
 * use bioskey::decoder::find_password;
 *
 * let results = find_password("07088120410C0000");
 * for result in &results {
 *     println!("{} candidates:", result.decoder.name);
 *     for candidate in &result.candidates {
 *         println!("  {}", candidate);
 *     }
 * }
 * ```
 *
 * This library never talks to hardware and cannot verify that a candidate
 * actually unlocks a machine.
 */

pub mod decoder;
pub mod keyboard;
pub mod samsung;
pub mod sony;
