//! Static metadata for the species covered by the bundled table.

use phf::phf_map;

/// Display metadata for one chemical species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesInfo {
    /// Formula token used as the species key throughout the table.
    pub formula: &'static str,
    /// Common English name.
    pub name: &'static str,
}

/// Formula token → species metadata for every species in the bundled table.
pub static SPECIES: phf::Map<&'static str, SpeciesInfo> = phf_map! {
    "CH4" => SpeciesInfo { formula: "CH4", name: "methane" },
    "O2" => SpeciesInfo { formula: "O2", name: "oxygen" },
    "N2" => SpeciesInfo { formula: "N2", name: "nitrogen" },
    "H2" => SpeciesInfo { formula: "H2", name: "hydrogen" },
    "CO" => SpeciesInfo { formula: "CO", name: "carbon monoxide" },
    "Ar" => SpeciesInfo { formula: "Ar", name: "argon" },
    "HCN" => SpeciesInfo { formula: "HCN", name: "hydrogen cyanide" },
    "CH3OH" => SpeciesInfo { formula: "CH3OH", name: "methanol" },
    "CO2" => SpeciesInfo { formula: "CO2", name: "carbon dioxide" },
    "H2O" => SpeciesInfo { formula: "H2O", name: "water" },
    "C2H6" => SpeciesInfo { formula: "C2H6", name: "ethane" },
    "C2H2" => SpeciesInfo { formula: "C2H2", name: "acetylene" },
    "C2H5OH" => SpeciesInfo { formula: "C2H5OH", name: "ethanol" },
    "C2H4" => SpeciesInfo { formula: "C2H4", name: "ethylene" },
};

/// Looks up a species by its formula token.
pub fn lookup(formula: &str) -> Option<&'static SpeciesInfo> {
    SPECIES.get(formula)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_covers_all_fourteen_species() {
        assert_eq!(SPECIES.len(), 14);
    }

    #[test]
    fn lookup_finds_known_formulas() {
        assert_eq!(lookup("CH4").unwrap().name, "methane");
        assert_eq!(lookup("C2H5OH").unwrap().name, "ethanol");
    }

    #[test]
    fn lookup_is_none_for_unknown_formulas() {
        assert!(lookup("Xe").is_none());
        assert!(lookup("ch4").is_none());
    }

    #[test]
    fn keys_match_their_formula_field() {
        for (key, info) in SPECIES.entries() {
            assert_eq!(*key, info.formula);
        }
    }
}
