//! `geo.dat` writer.
//!
//! Layout: a title card, body cards terminated by `END`, zone cards
//! terminated by `END`, then the zone-to-medium table. Every card after the
//! title starts on a new line; the file ends with a newline.

use std::fmt::Write;

use crate::error::Result;
use crate::input::{BodyCard, ZoneCard};
use crate::writer::format::float_to_fixed_width;

/// Title written on the first `geo.dat` card.
pub const GEOMETRY_NAME: &str = "xxxxxxxxxxxxxxxxxxxxxxxxxxxxNAMExxxxxxxxxxxxxxxxxxxxxxxxxxxx";

const BODY_ARGUMENTS_PER_LINE: usize = 6;
const CONSTRUCTIONS_PER_LINE: usize = 9;
const TABLE_ENTRIES_PER_LINE: usize = 14;
const ZONE_NAME_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Fixed-length zone name for the `n`-th zone, least significant letter first.
pub fn zone_name(mut n: usize, length: usize) -> String {
    let base = ZONE_NAME_ALPHABET.len();
    let mut name = String::with_capacity(length);
    for _ in 0..length {
        name.push(char::from(ZONE_NAME_ALPHABET[n % base]));
        n /= base;
    }
    name
}

fn write_bodies<W: Write>(out: &mut W, bodies: &[BodyCard]) -> Result<()> {
    for body in bodies {
        write!(out, "\n  {:>3} {:>4}", body.identifier, body.id)?;
        for (line, chunk) in body.arguments.chunks(BODY_ARGUMENTS_PER_LINE).enumerate() {
            if line > 0 {
                write!(out, "\n{:10}", "")?;
            }
            for &value in chunk {
                write!(out, "{}", float_to_fixed_width(value, 10))?;
            }
            for _ in chunk.len()..BODY_ARGUMENTS_PER_LINE {
                write!(out, "{:10}", "")?;
            }
        }
    }
    write!(out, "\n  END")?;
    Ok(())
}

fn write_zones<W: Write>(out: &mut W, zones: &[ZoneCard]) -> Result<()> {
    for (n, zone) in zones.iter().enumerate() {
        for (line, chunk) in zone.constructions.chunks(CONSTRUCTIONS_PER_LINE).enumerate() {
            let name = if line == 0 { zone_name(n, 3) } else { String::new() };
            write!(out, "\n  {:>3}{:>5}", name, zone.id)?;
            for construction in chunk {
                let body = format!("{}{}", construction.sign.symbol(), construction.body);
                write!(out, "{:>2}{:>5}", construction.op.symbol(), body)?;
            }
        }
    }
    write!(out, "\n  END")?;
    Ok(())
}

fn write_zone_materials<W: Write>(out: &mut W, zones: &[ZoneCard]) -> Result<()> {
    let columns: [fn(&ZoneCard) -> i64; 2] = [|z| z.id, |z| z.material];
    for column in columns {
        for chunk in zones.chunks(TABLE_ENTRIES_PER_LINE) {
            writeln!(out)?;
            for zone in chunk {
                write!(out, "{:>5}", column(zone))?;
            }
        }
    }
    Ok(())
}

/// Write the complete geometry file.
pub fn write_geometry<W: Write>(out: &mut W, bodies: &[BodyCard], zones: &[ZoneCard]) -> Result<()> {
    write!(out, "{:>5}{:>5}{:>10}{:>60}", 0, 0, "", GEOMETRY_NAME)?;
    write_bodies(out, bodies)?;
    write_zones(out, zones)?;
    write_zone_materials(out, zones)?;
    writeln!(out)?;
    Ok(())
}
