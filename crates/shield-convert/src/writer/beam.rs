//! `beam.dat` writer.
//!
//! Every card the engine knows is listed in file order; cards with nothing
//! to say are skipped.

use std::fmt::Write;

use shield_ir::{Beam, EnergyStraggling, Particle, ScatteringType, SimulationOptions};
use tracing::debug;

use crate::error::{EntityKind, Result, SerializeError};
use crate::tables;
use crate::writer::format::float_to_fixed_width;

const NAME_WIDTH: usize = 16;
const VALUE_WIDTH: usize = 8;

type CardPayload = fn(&Beam, &SimulationOptions) -> Option<String>;

fn ints(values: &[i64]) -> Option<String> {
    Some(values.iter().map(|v| format!("{:>8}", v)).collect())
}

fn floats(values: &[f64]) -> Option<String> {
    Some(
        values
            .iter()
            .map(|&v| float_to_fixed_width(v, VALUE_WIDTH))
            .collect(),
    )
}

fn flag(on: bool) -> Option<String> {
    ints(&[i64::from(on)])
}

fn unused(_: &Beam, _: &SimulationOptions) -> Option<String> {
    None
}

const CARDS: &[(&str, CardPayload)] = &[
    ("APCORR", |_, o| flag(o.antiparticle_correction_on)),
    ("BEAMDIR", |b, _| floats(&[b.direction.theta, b.direction.phi])),
    ("BEAMDIV", unused),
    ("BEAMPOS", |b, _| {
        let p = b.direction.position;
        floats(&[p.x, p.y, p.z])
    }),
    ("BEAMSIGMA", |b, _| {
        floats(&[b.divergence.sigma_x, b.divergence.sigma_y])
    }),
    ("BMODMC", unused),
    ("BMODTRANS", unused),
    ("DELTAE", |_, o| floats(&[o.mean_energy_loss])),
    ("DEMIN", |_, o| floats(&[o.min_energy_loss])),
    ("EMTRANS", unused),
    ("EXTSPEC", unused),
    ("HIPROJ", |b, _| match b.particle_type {
        Particle::HeavyIon {
            charge,
            nucleons_count,
        } => ints(&[nucleons_count, charge]),
        Particle::Predefined { .. } => None,
    }),
    ("JPART0", |b, _| {
        ints(&[tables::particle_code(&b.particle_type).unwrap_or_default()])
    }),
    ("MAKELN", unused),
    ("MSCAT", |_, o| {
        ints(&[if o.scattering_type == ScatteringType::Moliere { 2 } else { 1 }])
    }),
    ("NEUTRFAST", |_, o| flag(o.fast_neutron_transport_on)),
    ("NEUTRLCUT", |_, o| floats(&[o.low_energy_neutron_cutoff])),
    ("NSTAT", |_, o| {
        ints(&[o.number_of_generated_particles, o.number_of_recorded_particles])
    }),
    ("NUCRE", |_, o| flag(o.nuclear_reactions_on)),
    ("RNDSEED", unused),
    ("STRAGG", |_, o| {
        ints(&[if o.energy_straggling == EnergyStraggling::Vavilov { 2 } else { 1 }])
    }),
    ("TMAX0", |b, _| {
        floats(&[b.initial_base_energy, b.initial_energy_sigma])
    }),
    ("USEBMOD", unused),
    ("USECBEAM", unused),
    ("USEPARLEV", unused),
];

/// Write the beam and transport cards.
pub fn write_beam<W: Write>(out: &mut W, beam: &Beam, options: &SimulationOptions) -> Result<()> {
    if tables::particle_code(&beam.particle_type).is_none() {
        return Err(SerializeError::entity(
            EntityKind::Beam,
            0,
            "beam.dat",
            format!("{:?} particle mapping to shield format not found", beam.particle_type),
        ));
    }
    for (name, payload) in CARDS {
        let Some(payload) = payload(beam, options) else {
            continue;
        };
        debug!(card = name, "beam card");
        writeln!(out, "{:<w$.w$}{}", name, payload, w = NAME_WIDTH)?;
    }
    Ok(())
}
