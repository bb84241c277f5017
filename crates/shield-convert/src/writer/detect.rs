//! `detect.dat` writer.

use std::fmt::Write;

use crate::error::Result;
use crate::input::{Argument, DetectorCard};
use crate::writer::format::{column_indicators, float_to_fixed_width};

const COLUMN_WIDTH: usize = 10;
const ARGUMENTS_PER_LINE: usize = 6;

fn write_argument<W: Write>(out: &mut W, argument: &Argument) -> Result<()> {
    match argument {
        Argument::Float(v) => write!(out, "{}", float_to_fixed_width(*v, COLUMN_WIDTH))?,
        Argument::Int(v) => write!(out, "{:>10}", v)?,
        Argument::Text(v) => write!(out, "{:<10}", v)?,
    }
    Ok(())
}

/// Write every detector card, each under its own column ruler.
pub fn write_detectors<W: Write>(out: &mut W, detectors: &[DetectorCard]) -> Result<()> {
    let ruler = column_indicators(&[COLUMN_WIDTH; ARGUMENTS_PER_LINE + 1]);
    for detector in detectors {
        out.write_str(&ruler)?;
        for (line, chunk) in detector.arguments.chunks(ARGUMENTS_PER_LINE).enumerate() {
            if line == 0 {
                write!(out, "{:<10}", detector.keyword)?;
            } else {
                write!(out, "{:10}", "")?;
            }
            for argument in chunk {
                write_argument(out, argument)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Argument::{Float, Int, Text};

    fn text(s: &str) -> Argument {
        Text(s.to_string())
    }

    fn card(keyword: &'static str, arguments: Vec<Argument>) -> DetectorCard {
        DetectorCard {
            detector_id: 1,
            keyword,
            arguments,
            filename: String::new(),
        }
    }

    const RULER: &str = "*--------><--------><--------><--------><--------><--------><-------->";

    #[test]
    fn test_single_cylinder() {
        let cards = vec![card(
            "CYL",
            vec![
                Float(0.0),
                Float(-10.0),
                Float(-1.0),
                Float(10.0),
                Float(20.0),
                Float(30.0),
                Int(10),
                Int(200),
                Int(1000),
                Int(-1),
                text("ENERGY"),
                text("ala_ma_psa0"),
            ],
        )];
        let mut out = String::new();
        write_detectors(&mut out, &cards).unwrap();
        let expected = [
            RULER,
            "CYL               0.      -10.       -1.       10.       20.       30.",
            "                  10       200      1000        -1ENERGY    ala_ma_psa0",
            "",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_heavy_ion_continuation() {
        let cards = vec![card(
            "MSH",
            vec![
                Float(-5.0),
                Float(-5.0),
                Float(0.0),
                Float(5.0),
                Float(5.0),
                Float(30.0),
                Int(1),
                Int(1),
                Int(300),
                Int(25),
                text("COUNTER"),
                text("raz_raz_raz2"),
                Int(20),
                Int(10),
                text(""),
                text(""),
                text(""),
                text(""),
            ],
        )];
        let mut out = String::new();
        write_detectors(&mut out, &cards).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], RULER);
        assert_eq!(
            lines[1],
            "MSH              -5.       -5.        0.        5.        5.       30."
        );
        assert_eq!(
            lines[2],
            "                   1         1       300        25COUNTER   raz_raz_raz2"
        );
        assert_eq!(
            lines[3],
            "                  20        10                                        "
        );
    }

    #[test]
    fn test_no_detectors() {
        let mut out = String::new();
        write_detectors(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
