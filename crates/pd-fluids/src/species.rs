//! Feed-system working fluids.

use rfluids::substance::Pure;

/// Propellants and pressurants a flow path can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// N₂O, self-pressurising oxidiser.
    NitrousOxide,
    /// N₂, pressurant and cold-flow stand-in.
    Nitrogen,
    /// O₂, cryogenic oxidiser.
    Oxygen,
    /// C₂H₅OH, fuel.
    Ethanol,
    /// H₂O, water for hydrostatic and cold-flow tests.
    Water,
}

impl Species {
    pub const ALL: [Species; 5] = [
        Species::NitrousOxide,
        Species::Nitrogen,
        Species::Oxygen,
        Species::Ethanol,
        Species::Water,
    ];

    /// Short key used in project files.
    pub fn key(self) -> &'static str {
        self.names().0
    }

    /// Fluid name as CoolProp spells it.
    pub fn coolprop_name(self) -> &'static str {
        self.names().1
    }

    fn names(self) -> (&'static str, &'static str) {
        match self {
            Species::NitrousOxide => ("N2O", "NitrousOxide"),
            Species::Nitrogen => ("N2", "Nitrogen"),
            Species::Oxygen => ("O2", "Oxygen"),
            Species::Ethanol => ("EtOH", "Ethanol"),
            Species::Water => ("H2O", "Water"),
        }
    }

    pub(crate) fn rfluids_pure(self) -> Pure {
        match self {
            Species::NitrousOxide => Pure::NitrousOxide,
            Species::Nitrogen => Pure::Nitrogen,
            Species::Oxygen => Pure::Oxygen,
            Species::Ethanol => Pure::Ethanol,
            Species::Water => Pure::Water,
        }
    }

    /// Saturation viscosity comes from the built-in correlations
    /// instead of the property backend.
    pub fn has_viscosity_correlation(self) -> bool {
        self == Species::NitrousOxide
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    /// Accepts the short key or the CoolProp name, ignoring case and spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        Species::ALL
            .into_iter()
            .find(|sp| {
                let (key, name) = sp.names();
                wanted == key.to_ascii_lowercase() || wanted == name.to_ascii_lowercase()
            })
            .ok_or("unknown species")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_names() {
        assert_eq!("N2O".parse::<Species>().unwrap(), Species::NitrousOxide);
        assert_eq!(
            "Nitrous Oxide".parse::<Species>().unwrap(),
            Species::NitrousOxide
        );
        assert_eq!("nitrogen".parse::<Species>().unwrap(), Species::Nitrogen);
        assert_eq!("etoh".parse::<Species>().unwrap(), Species::Ethanol);
        assert!("kerosene".parse::<Species>().is_err());
    }

    #[test]
    fn display_is_the_key() {
        for species in Species::ALL {
            assert_eq!(species.to_string().parse::<Species>(), Ok(species));
        }
        assert_eq!(Species::NitrousOxide.coolprop_name(), "NitrousOxide");
    }

    #[test]
    fn only_nitrous_has_builtin_viscosity() {
        let with: Vec<_> = Species::ALL
            .into_iter()
            .filter(|s| s.has_viscosity_correlation())
            .collect();
        assert_eq!(with, vec![Species::NitrousOxide]);
    }
}
