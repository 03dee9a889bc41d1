// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/decoder.rs - Decoder registry and dispatch.
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
 * # `decoder` Module
 *
 * This module bundles each vendor's recognizer and solver into a [Decoder]
 * record, holds the static registry of known decoders, and dispatches a
 * serial number across them.
 *
 * ## Usage Example
 *
 * ```
 * use bioskey::decoder::find_password;
 *
 * for result in find_password("1234567") {
 *     println!("{}:", result.decoder.name);
 *     for candidate in &result.candidates {
 *         println!("  {}", candidate);
 *     }
 * }
 * ```
 */

use crate::samsung;
use crate::sony;

/// The vendor families with a modeled recovery scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BiosModel {
    Sony,
    Samsung,
}

/// A vendor's recovery capability: a recognizer for its serial format and
/// the solver that reverses its key derivation.
///
/// The recognizer and solver form one unit. A solver assumes the shape its
/// recognizer accepted, so callers go through [run_decoder] rather than
/// calling `solve` on an arbitrary string.
#[derive(Debug)]
pub struct Decoder {
    /// The vendor family this decoder handles.
    pub model: BiosModel,
    /// Display name of the vendor.
    pub name: &'static str,
    /// Optional note about the serial format, for presentation only.
    pub description: Option<&'static str>,
    /// Example serials this decoder recognizes, for presentation only.
    pub examples: &'static [&'static str],
    /// Returns whether a serial matches this vendor's format.
    pub check: fn(&str) -> bool,
    /// Produces the ordered password candidates for a recognized serial.
    pub solve: fn(&str) -> Vec<String>,
}

/// Password candidates paired with the decoder that produced them.
#[derive(Debug)]
pub struct PasswordMatch {
    /// Candidate passwords, most plausible first.
    pub candidates: Vec<String>,
    /// The decoder whose recognizer and solver produced the candidates.
    pub decoder: &'static Decoder,
}

/// All known decoders, in the order they are tried.
pub static DECODERS: [Decoder; 2] = [
    Decoder {
        model: BiosModel::Sony,
        name: "Sony",
        description: Some("7-digit serial number"),
        examples: &["1234567"],
        check: sony::check,
        solve: sony::solve,
    },
    Decoder {
        model: BiosModel::Samsung,
        name: "Samsung",
        description: Some("12, 14, or 16 hexadecimal digits"),
        examples: &["07088120410C0000"],
        check: samsung::check,
        solve: samsung::solve,
    },
];

/// Runs a single decoder against a serial number.
///
/// Returns the solver's candidates when the recognizer accepts the serial
/// and an empty list otherwise. A recognizer miss is the normal way a
/// decoder reports "not applicable"; there is no error path.
pub fn run_decoder(serial: &str, decoder: &Decoder) -> Vec<String> {
    if (decoder.check)(serial) {
        (decoder.solve)(serial)
    } else {
        Vec::new()
    }
}

/// Runs every decoder in `decoders` against a serial number.
///
/// Decoders that produce no candidates are dropped; the rest are returned
/// in registration order, not ranked by candidate count.
pub fn run_decoders(serial: &str, decoders: &'static [Decoder]) -> Vec<PasswordMatch> {
    assert!(!decoders.is_empty(), "decoder registry must not be empty");

    decoders
        .iter()
        .map(|decoder| PasswordMatch {
            candidates: run_decoder(serial, decoder),
            decoder,
        })
        .filter(|result| !result.candidates.is_empty())
        .collect()
}

/// Recovers password candidates for a serial number using every known
/// decoder. This is the canonical entry point.
pub fn find_password(serial: &str) -> Vec<PasswordMatch> {
    run_decoders(serial, &DECODERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_decoder_not_applicable() {
        assert!(run_decoder("xyz", &DECODERS[0]).is_empty());
        assert!(run_decoder("xyz", &DECODERS[1]).is_empty());
    }

    #[test]
    fn test_run_decoder_applies_solver() {
        assert_eq!(run_decoder("1234567", &DECODERS[0]), vec!["9648669"]);
    }

    #[test]
    fn test_find_password_sony() {
        let results = find_password("1234567");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].decoder.model, BiosModel::Sony);
        assert_eq!(results[0].candidates, vec!["9648669"]);
    }

    #[test]
    fn test_find_password_samsung() {
        let results = find_password("07088120410C0000");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].decoder.model, BiosModel::Samsung);
        assert_eq!(results[0].candidates, vec!["12345"]);
    }

    #[test]
    fn test_find_password_unrecognized() {
        assert!(find_password("not-a-serial").is_empty());
        assert!(find_password("").is_empty());
    }

    #[test]
    fn test_find_password_is_deterministic() {
        let first = find_password("07088120410C0000");
        let second = find_password("07088120410C0000");
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.candidates, b.candidates);
            assert_eq!(a.decoder.model, b.decoder.model);
        }
    }

    #[test]
    fn test_results_follow_registry_order() {
        // 16 decimal digits contain a 7-digit run and are also valid hex,
        // so the Sony recognizer accepts this serial but its solver drops
        // it on the length precondition. Only Samsung may contribute, and
        // any contribution stays in registration order.
        let results = find_password("0708812041000000");
        for result in &results {
            assert_eq!(result.decoder.model, BiosModel::Samsung);
        }
    }

    #[test]
    #[should_panic(expected = "decoder registry must not be empty")]
    fn test_empty_registry_panics() {
        run_decoders("1234567", &[]);
    }
}
