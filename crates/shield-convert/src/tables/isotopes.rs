//! Isotope names accepted in compound definitions and their NUCLID codes.

/// Natural isotopic mixtures (`<symbol>-*`), one per element up to californium.
pub static NATURAL_MIXTURES: &[(&str, i64)] = &[
    ("h-*", 1),
    ("he-*", 2),
    ("li-*", 3),
    ("be-*", 4),
    ("b-*", 5),
    ("c-*", 6),
    ("n-*", 7),
    ("o-*", 8),
    ("f-*", 9),
    ("ne-*", 10),
    ("na-*", 11),
    ("mg-*", 12),
    ("al-*", 13),
    ("si-*", 14),
    ("p-*", 15),
    ("s-*", 16),
    ("cl-*", 17),
    ("ar-*", 18),
    ("k-*", 19),
    ("ca-*", 20),
    ("sc-*", 21),
    ("ti-*", 22),
    ("v-*", 23),
    ("cr-*", 24),
    ("mn-*", 25),
    ("fe-*", 26),
    ("co-*", 27),
    ("ni-*", 28),
    ("cu-*", 29),
    ("zn-*", 30),
    ("ga-*", 31),
    ("ge-*", 32),
    ("as-*", 33),
    ("se-*", 34),
    ("br-*", 35),
    ("kr-*", 36),
    ("rb-*", 37),
    ("sr-*", 38),
    ("y-*", 39),
    ("zr-*", 40),
    ("nb-*", 41),
    ("mo-*", 42),
    ("tc-*", 43),
    ("ru-*", 44),
    ("rh-*", 45),
    ("pd-*", 46),
    ("ag-*", 47),
    ("cd-*", 48),
    ("in-*", 49),
    ("sn-*", 50),
    ("sb-*", 51),
    ("te-*", 52),
    ("i-*", 53),
    ("xe-*", 54),
    ("cs-*", 55),
    ("ba-*", 56),
    ("la-*", 57),
    ("ce-*", 58),
    ("pr-*", 59),
    ("nd-*", 60),
    ("pm-*", 61),
    ("sm-*", 62),
    ("eu-*", 63),
    ("gd-*", 64),
    ("tb-*", 65),
    ("dy-*", 66),
    ("ho-*", 67),
    ("er-*", 68),
    ("tm-*", 69),
    ("yb-*", 70),
    ("lu-*", 71),
    ("hf-*", 72),
    ("ta-*", 73),
    ("w-*", 74),
    ("re-*", 75),
    ("os-*", 76),
    ("ir-*", 77),
    ("pt-*", 78),
    ("au-*", 79),
    ("hg-*", 80),
    ("tl-*", 81),
    ("pb-*", 82),
    ("bi-*", 83),
    ("po-*", 84),
    ("at-*", 85),
    ("rn-*", 86),
    ("fr-*", 87),
    ("ra-*", 88),
    ("ac-*", 89),
    ("th-*", 90),
    ("pa-*", 91),
    ("u-*", 92),
    ("np-*", 93),
    ("pu-*", 94),
    ("am-*", 95),
    ("cm-*", 96),
    ("bk-*", 97),
    ("cf-*", 98),
];

/// Monoisotopic elements, which share the code of their natural mixture.
pub static MONOISOTOPIC: &[(&str, i64)] = &[
    ("be-9", 4),
    ("f-19", 9),
    ("na-23", 11),
    ("al-27", 13),
    ("p-31", 15),
    ("sc-45", 21),
    ("mn-55", 25),
    ("co-59", 27),
    ("as-75", 33),
    ("y-89", 39),
    ("nb-93", 41),
    ("rh-103", 45),
    ("i-127", 53),
    ("cs-133", 55),
    ("pr-141", 59),
    ("tb-159", 65),
    ("ho-165", 67),
    ("tm-169", 69),
    ("au-197", 79),
    ("bi-209", 83),
];

/// Individually tracked nuclides, numbered after the natural mixtures.
pub static NUCLIDES: &[(&str, i64)] = &[
    ("h-1", 99),
    ("h-2", 100),
    ("h-3", 101),
    ("he-3", 102),
    ("u-235", 103),
    ("u-238", 104),
    ("li-6", 105),
    ("li-7", 106),
    ("b-10", 107),
    ("b-11", 108),
    ("c-12", 109),
    ("c-13", 110),
    ("n-14", 111),
    ("n-15", 112),
    ("o-16", 113),
    ("o-17", 114),
    ("o-18", 115),
];
