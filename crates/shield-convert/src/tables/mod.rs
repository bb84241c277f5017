//! Static lookup tables between engine-agnostic names and SHIELD-HIT12A codes.
//!
//! Every table is a slice of `(name, code)` pairs searched in both
//! directions. None of them is ever mutated.

mod isotopes;
mod materials;

use shield_ir::{Particle, StateOfMatter};

pub use isotopes::{MONOISOTOPIC, NATURAL_MIXTURES, NUCLIDES};
pub use materials::PREDEFINED_MATERIALS;

/// Medium code the engine uses for vacuum.
pub const VACUUM_CODE: i64 = 1000;
/// Medium code the engine uses for the black hole.
pub const BLACK_HOLE_CODE: i64 = 0;
/// Particle code of a heavy ion (A and Z come from `HIPROJ`).
pub const HEAVY_ION_CODE: i64 = 25;

/// Predefined particles and their `JPART` codes.
pub static PARTICLES: &[(&str, i64)] = &[
    ("all", -1),
    ("neutron", 1),
    ("proton", 2),
    ("pion_pi_minus", 3),
    ("pion_pi_plus", 4),
    ("pion_pi_zero", 5),
    ("anti_neutron", 6),
    ("anti_proton", 7),
    ("kaon_minus", 8),
    ("kaon_plus", 9),
    ("kaon_zero", 10),
    ("kaon_anti", 11),
    ("gamma", 12),
    ("electron", 13),
    ("positron", 14),
    ("muon_minus", 15),
    ("muon_plus", 16),
    ("e_neutrino", 17),
    ("e_anti_neutrino", 18),
    ("mi_neutrino", 19),
    ("mi_anti_neutrino", 20),
    ("deuteron", 21),
    ("triton", 22),
    ("he_3", 23),
    ("he_4", 24),
];

/// Scoring quantities and their `detect.dat` tags.
pub static SCORING_TYPES: &[(&str, &str)] = &[
    ("energy", "ENERGY"),
    ("fluence", "FLUENCE"),
    ("crossflu", "CROSSFLU"),
    ("dose", "DOSE"),
    ("letflu", "LETFLU"),
    ("dlet", "DLET"),
    ("tlet", "TLET"),
    ("avg_energy", "AVG-ENERGY"),
    ("avg_beta", "AVG-BETA"),
    ("ddd", "DDD"),
    ("spc", "SPC"),
    ("alanine", "ALANINE"),
    ("counter", "COUNTER"),
];

fn forward<V: Copy>(table: &[(&'static str, V)], name: &str) -> Option<V> {
    table.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
}

fn backward<V: PartialEq>(table: &[(&'static str, V)], value: &V) -> Option<&'static str> {
    table.iter().find(|(_, v)| v == value).map(|(n, _)| *n)
}

/// ICRU code of a predefined medium.
pub fn icru_code(name: &str) -> Option<i64> {
    forward(PREDEFINED_MATERIALS, name)
}

/// Name of the predefined medium with the given ICRU code.
pub fn predefined_material_name(icru: i64) -> Option<&'static str> {
    backward(PREDEFINED_MATERIALS, &icru)
}

/// NUCLID code of an isotope. Names are matched case-insensitively.
pub fn nuclid_code(isotope: &str) -> Option<i64> {
    let isotope = isotope.to_ascii_lowercase();
    forward(NATURAL_MIXTURES, &isotope)
        .or_else(|| forward(MONOISOTOPIC, &isotope))
        .or_else(|| forward(NUCLIDES, &isotope))
}

/// Canonical isotope name of a NUCLID code.
pub fn isotope_name(code: i64) -> Option<&'static str> {
    backward(NATURAL_MIXTURES, &code).or_else(|| backward(NUCLIDES, &code))
}

/// `JPART` code of a predefined particle name.
pub fn predefined_particle_code(name: &str) -> Option<i64> {
    forward(PARTICLES, name)
}

/// `JPART` code of any particle.
pub fn particle_code(particle: &Particle) -> Option<i64> {
    match particle {
        Particle::Predefined { name } => predefined_particle_code(name),
        Particle::HeavyIon { .. } => Some(HEAVY_ION_CODE),
    }
}

/// Particle name of a `JPART` code.
pub fn particle_name(code: i64) -> Option<&'static str> {
    if code == HEAVY_ION_CODE {
        return Some("heavy_ion");
    }
    backward(PARTICLES, &code)
}

/// `detect.dat` tag of a scoring quantity.
pub fn scoring_tag(name: &str) -> Option<&'static str> {
    forward(SCORING_TYPES, name)
}

/// Scoring quantity name of a `detect.dat` tag.
pub fn scoring_name(tag: &str) -> Option<&'static str> {
    SCORING_TYPES
        .iter()
        .find(|(_, t)| *t == tag)
        .map(|(name, _)| *name)
}

/// `STATE` code of a state of matter.
pub fn state_code(state: StateOfMatter) -> i64 {
    match state {
        StateOfMatter::Solid => 0,
        StateOfMatter::Gas => 1,
        StateOfMatter::Liquid => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_materials() {
        assert_eq!(icru_code("urea"), Some(273));
        assert_eq!(icru_code("methanol"), Some(198));
        assert_eq!(icru_code("water_vapor"), Some(277));
        assert_eq!(icru_code("water_liquid"), Some(276));
        assert_eq!(icru_code("vacuum"), Some(VACUUM_CODE));
        assert_eq!(icru_code("black_hole"), Some(BLACK_HOLE_CODE));
        assert_eq!(icru_code("unobtainium"), None);
        assert_eq!(predefined_material_name(273), Some("urea"));
    }

    #[test]
    fn test_isotopes() {
        assert_eq!(nuclid_code("gd-*"), Some(64));
        assert_eq!(nuclid_code("Gd-*"), Some(64));
        assert_eq!(nuclid_code("c-*"), Some(6));
        assert_eq!(nuclid_code("si-*"), Some(14));
        assert_eq!(nuclid_code("na-23"), Some(11));
        assert_eq!(nuclid_code("u-235"), Some(103));
        assert_eq!(nuclid_code("isotopeNameNotDefined"), None);
        assert_eq!(isotope_name(64), Some("gd-*"));
        assert_eq!(isotope_name(103), Some("u-235"));
    }

    #[test]
    fn test_isotope_codes_are_unique() {
        let mut codes: Vec<i64> = NATURAL_MIXTURES
            .iter()
            .chain(NUCLIDES.iter())
            .map(|(_, c)| *c)
            .collect();
        let len = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), len);
    }

    #[test]
    fn test_particles() {
        assert_eq!(predefined_particle_code("proton"), Some(2));
        assert_eq!(predefined_particle_code("all"), Some(-1));
        assert_eq!(predefined_particle_code("he_4"), Some(24));
        let ion = Particle::HeavyIon {
            charge: 6,
            nucleons_count: 12,
        };
        assert_eq!(particle_code(&ion), Some(HEAVY_ION_CODE));
        assert_eq!(particle_code(&Particle::predefined("graviton")), None);
        assert_eq!(particle_name(12), Some("gamma"));
        assert_eq!(particle_name(25), Some("heavy_ion"));
    }

    #[test]
    fn test_scoring() {
        assert_eq!(scoring_tag("avg_energy"), Some("AVG-ENERGY"));
        assert_eq!(scoring_tag("letflu"), Some("LETFLU"));
        assert_eq!(scoring_name("COUNTER"), Some("counter"));
    }

    #[test]
    fn test_state_codes() {
        assert_eq!(state_code(StateOfMatter::Solid), 0);
        assert_eq!(state_code(StateOfMatter::Gas), 1);
        assert_eq!(state_code(StateOfMatter::Liquid), 2);
    }
}
