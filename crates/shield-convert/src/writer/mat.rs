//! `mat.dat` writer.

use std::fmt::Write;

use crate::error::Result;
use crate::input::{CompoundMedium, Medium, PredefinedMedium};

fn write_predefined<W: Write>(out: &mut W, medium: &PredefinedMedium) -> Result<()> {
    writeln!(out, "MEDIUM {}", medium.id)?;
    if let Some(state) = medium.state {
        writeln!(out, "STATE {}", state)?;
    }
    if let Some(density) = medium.density {
        writeln!(out, "RHO {:.6}", density)?;
    }
    writeln!(out, "ICRU {}", medium.icru)?;
    if medium.load_dedx {
        writeln!(out, "LOADDEDX")?;
    }
    writeln!(out, "END")?;
    Ok(())
}

fn write_compound<W: Write>(out: &mut W, medium: &CompoundMedium) -> Result<()> {
    writeln!(out, "MEDIUM {}", medium.id)?;
    writeln!(out, "STATE {}", medium.state)?;
    writeln!(out, "RHO {:.6}", medium.density)?;
    for nuclide in &medium.nuclides {
        writeln!(out, "NUCLID {} {}", nuclide.code, nuclide.fraction)?;
        if let Some(mass) = nuclide.atomic_mass {
            writeln!(out, "AMASS {:.6}", mass)?;
        }
        if let Some(i_value) = nuclide.i_value {
            writeln!(out, "IVALUE {:.6}", i_value)?;
        }
    }
    if let Some(icru) = medium.dedx_from {
        writeln!(out, "LOADDEDX {}", icru)?;
    }
    writeln!(out, "END")?;
    Ok(())
}

/// Write one `MEDIUM` block per medium.
pub fn write_materials<W: Write>(out: &mut W, media: &[Medium]) -> Result<()> {
    for medium in media {
        match medium {
            Medium::Predefined(m) => write_predefined(out, m)?,
            Medium::Compound(m) => write_compound(out, m)?,
        }
    }
    Ok(())
}
