// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  recover.rs - Password recovery demo.
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

use clap::Parser;

use bioskey::decoder::{DECODERS, find_password};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The serial number printed on the laptop.
    serial: String,
}

fn main() {
    let args = Args::parse();

    let results = find_password(&args.serial);
    if results.is_empty() {
        eprintln!("No decoder produced a password for {:?}.", &args.serial);
        eprintln!("Supported formats:");
        for decoder in &DECODERS {
            match decoder.description {
                Some(description) => eprintln!("  {}: {}", decoder.name, description),
                None => eprintln!("  {}", decoder.name),
            }
        }
        return;
    }

    for result in &results {
        println!("{}:", result.decoder.name);
        for candidate in &result.candidates {
            println!("  {}", candidate);
        }
    }
}
