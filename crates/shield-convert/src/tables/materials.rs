//! Predefined media known to the engine, keyed by sanitized name.

/// `(sanitized name, ICRU code)` pairs, ordered by ICRU code.
pub static PREDEFINED_MATERIALS: &[(&str, i64)] = &[
    ("black_hole", 0),
    ("H", 1),
    ("He", 2),
    ("Li", 3),
    ("Be", 4),
    ("B", 5),
    ("C", 6),
    ("N", 7),
    ("O", 8),
    ("F", 9),
    ("Ne", 10),
    ("Na", 11),
    ("Mg", 12),
    ("Al", 13),
    ("Si", 14),
    ("P", 15),
    ("S", 16),
    ("Cl", 17),
    ("Ar", 18),
    ("K", 19),
    ("Ca", 20),
    ("Sc", 21),
    ("Ti", 22),
    ("V", 23),
    ("Cr", 24),
    ("Mn", 25),
    ("Fe", 26),
    ("Co", 27),
    ("Ni", 28),
    ("Cu", 29),
    ("Zn", 30),
    ("Ga", 31),
    ("Ge", 32),
    ("As", 33),
    ("Se", 34),
    ("Br", 35),
    ("Kr", 36),
    ("Rb", 37),
    ("Sr", 38),
    ("Y", 39),
    ("Zr", 40),
    ("Nb", 41),
    ("Mo", 42),
    ("Tc", 43),
    ("Ru", 44),
    ("Rh", 45),
    ("Pd", 46),
    ("Ag", 47),
    ("Cd", 48),
    ("In", 49),
    ("Sn", 50),
    ("Sb", 51),
    ("Te", 52),
    ("I", 53),
    ("Xe", 54),
    ("Cs", 55),
    ("Ba", 56),
    ("La", 57),
    ("Ce", 58),
    ("Pr", 59),
    ("Nd", 60),
    ("Pm", 61),
    ("Sm", 62),
    ("Eu", 63),
    ("Gd", 64),
    ("Tb", 65),
    ("Dy", 66),
    ("Ho", 67),
    ("Er", 68),
    ("Tm", 69),
    ("Yb", 70),
    ("Lu", 71),
    ("Hf", 72),
    ("Ta", 73),
    ("W", 74),
    ("Re", 75),
    ("Os", 76),
    ("Ir", 77),
    ("Pt", 78),
    ("Au", 79),
    ("Hg", 80),
    ("Tl", 81),
    ("Pb", 82),
    ("Bi", 83),
    ("Po", 84),
    ("At", 85),
    ("Rn", 86),
    ("Fr", 87),
    ("Ra", 88),
    ("Ac", 89),
    ("Th", 90),
    ("Pa", 91),
    ("U", 92),
    ("Np", 93),
    ("Pu", 94),
    ("Am", 95),
    ("Cm", 96),
    ("Bk", 97),
    ("Cf", 98),
    ("a-150_tissue-equivalent_plastic", 99),
    ("acetone", 100),
    ("acetylene", 101),
    ("adenine", 102),
    ("adipose_tissue_icrp", 103),
    ("air_dry_near_sea_level", 104),
    ("alanine", 105),
    ("aluminum_oxide", 106),
    ("amber", 107),
    ("ammonia", 108),
    ("aniline", 109),
    ("anthracene", 110),
    ("b100", 111),
    ("bakelite", 112),
    ("barium_fluoride", 113),
    ("barium_sulfate", 114),
    ("benzene", 115),
    ("beryllium_oxide", 116),
    ("bismuth_germanium_oxide", 117),
    ("blood_icrp", 118),
    ("bone_compact_icru", 119),
    ("bone_cortical_icrp", 120),
    ("boron_carbide", 121),
    ("boron_oxide", 122),
    ("brain_icrp", 123),
    ("butane", 124),
    ("n-butylalcohol", 125),
    ("c-552_air-equivalent_plastic", 126),
    ("cadmium_telluride", 127),
    ("cadmium_tungstate", 128),
    ("calcium_carbonate", 129),
    ("calcium_fluoride", 130),
    ("calcium_oxide", 131),
    ("calcium_sulfate", 132),
    ("calcium_tungstate", 133),
    ("carbon_dioxide", 134),
    ("carbon_tetrachloride", 135),
    ("cellulose_acetate_cellophane", 136),
    ("cellulose_acetate_butyrate", 137),
    ("cellulose_nitrate", 138),
    ("ceric_sulfate_dosimeter_solution", 139),
    ("cesium_fluoride", 140),
    ("cesium_iodide", 141),
    ("chlorobenzene", 142),
    ("chloroform", 143),
    ("concrete_portland", 144),
    ("cyclohexane", 145),
    ("12-dichlorobenzene", 146),
    ("dichlorodiethyl_ether", 147),
    ("dichloroethane", 148),
    ("diethylether", 149),
    ("nn-dimethyl_formamide", 150),
    ("dimethylsulfoxide", 151),
    ("ethane", 152),
    ("ethyl_alcohol", 153),
    ("ethyl_cellulose", 154),
    ("ethylene", 155),
    ("eyelens_icrp", 156),
    ("ferric_oxide", 157),
    ("ferro_boride", 158),
    ("ferrous_oxide", 159),
    ("ferrous_sulfate_dosimeter_solution", 160),
    ("freon-12", 161),
    ("freon-12b2", 162),
    ("freon-13", 163),
    ("freon-13b1", 164),
    ("freon-13i1", 165),
    ("gadolinium_oxysulfide", 166),
    ("gallium_arsenide", 167),
    ("gel_in_photographic_emulsion", 168),
    ("glass_pyrex", 169),
    ("glass_lead", 170),
    ("glass_plate", 171),
    ("glucose", 172),
    ("glutamine", 173),
    ("glycerol", 174),
    ("guanine", 175),
    ("gypsum_plaster_of_paris", 176),
    ("n-heptane", 177),
    ("n-hexane", 178),
    ("kapton_polyimide_film", 179),
    ("lanthanum_oxybromide", 180),
    ("lanthanum_oxysulfide", 181),
    ("leadoxide", 182),
    ("lithium_amide", 183),
    ("lithium_carbonate", 184),
    ("lithium_fluoride", 185),
    ("lithium_hydride", 186),
    ("lithium_iodide", 187),
    ("lithium_oxide", 188),
    ("lithium_tetraborate", 189),
    ("lung_icrp", 190),
    ("m3_wax", 191),
    ("magnesium_carbonate", 192),
    ("magnesium_fluoride", 193),
    ("magnesium_oxide", 194),
    ("magnesium_tetraborate", 195),
    ("mercuric_iodide", 196),
    ("methane", 197),
    ("methanol", 198),
    ("mix_d_wax", 199),
    ("ms20_tissue_substitute", 200),
    ("muscle_skeletal_icrp", 201),
    ("muscle_striated_icru", 202),
    ("muscle_equivalent_liquid_with_sucrose", 203),
    ("muscle_equivalent_liquid_no_sucrose", 204),
    ("naphthalene", 205),
    ("nitrobenzene", 206),
    ("nitrous_oxide", 207),
    ("nylon_du_pont_elvamide_8062", 208),
    ("nylon_type_6_and_6by6", 209),
    ("nylon_type_6by10", 210),
    ("nylon_type_11_rilsan", 211),
    ("octane_liquid", 212),
    ("paraffinwax", 213),
    ("n-pentane", 214),
    ("photographic_emulsion", 215),
    ("plastic_scintillator_vinyltoluene_based", 216),
    ("plutonium_dioxide", 217),
    ("polyacrylonitrile", 218),
    ("polycarbonate_makrolon_lexan", 219),
    ("polychlorostyrene", 220),
    ("polyethylene", 221),
    ("polyethylene_terephthalate_mylar", 222),
    ("polymethyl_methacralate_lucite_perspex_pmma", 223),
    ("polyoxymethylene", 224),
    ("polypropylene", 225),
    ("polystyrene", 226),
    ("polytetrafluoroethylene_teflon", 227),
    ("polytrifluorochloroethylene", 228),
    ("polyvinyl_acetate", 229),
    ("polyvinyl_alcohol", 230),
    ("polyvinyl_butyral", 231),
    ("polyvinyl_chloride", 232),
    ("saran", 233),
    ("polyvinylidene_fluoride", 234),
    ("polyvinylpyrrolidone", 235),
    ("potassium_iodide", 236),
    ("potassium_oxide", 237),
    ("propane", 238),
    ("propane_liquid", 239),
    ("n-propyl_alcohol", 240),
    ("pyridine", 241),
    ("rubber_butyl", 242),
    ("rubber_natural", 243),
    ("rubber_neoprene", 244),
    ("silicon_dioxide", 245),
    ("silver_bromide", 246),
    ("silver_chloride", 247),
    ("silver_halides_in_photographic_emulsion", 248),
    ("silver_iodide", 249),
    ("skin_icrp", 250),
    ("sodium_carbonate", 251),
    ("sodium_iodide", 252),
    ("sodium_monoxide", 253),
    ("sodium_nitrate", 254),
    ("stilbene", 255),
    ("sucrose", 256),
    ("terphenyl", 257),
    ("testes_icrp", 258),
    ("tetrachloroethylene", 259),
    ("thallium_chloride", 260),
    ("tissue_soft_icrp", 261),
    ("tissue_soft_icru_four_component", 262),
    ("tissue-equivalent_gas_methane_based", 263),
    ("tissue-equivalent_gas_propane_based", 264),
    ("titanium_dioxide", 265),
    ("toluene", 266),
    ("trichloroethylene", 267),
    ("triethyl_phosphate", 268),
    ("tungsten_hexafluoride", 269),
    ("uranium_dicarbide", 270),
    ("uranium_monocarbide", 271),
    ("uranium_oxide", 272),
    ("urea", 273),
    ("valine", 274),
    ("viton_fluoroelastomer", 275),
    ("water_liquid", 276),
    ("water_vapor", 277),
    ("G4_XYLENE", 278),
    ("vacuum", 1000),
];
