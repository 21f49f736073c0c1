use std::fmt;

/// The fluid surfaces a property provider can be asked about.
///
/// Orthohydrogen and parahydrogen are the two nuclear-spin isomers of
/// molecular hydrogen. `NormalHydrogen` is the fixed 3:1 room-temperature
/// blend, shipped by CoolProp and REFPROP as a surface of its own. Nitrogen
/// is carried for precooler calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Parahydrogen,
    Orthohydrogen,
    NormalHydrogen,
    Nitrogen,
}

impl Species {
    /// The fluid name understood by CoolProp-compatible backends.
    #[must_use]
    pub fn provider_name(self) -> &'static str {
        match self {
            Self::Parahydrogen => "parahydrogen",
            Self::Orthohydrogen => "orthohydrogen",
            Self::NormalHydrogen => "hydrogen",
            Self::Nitrogen => "nitrogen",
        }
    }

    /// All surfaces this crate knows about.
    pub const ALL: [Self; 4] = [
        Self::Parahydrogen,
        Self::Orthohydrogen,
        Self::NormalHydrogen,
        Self::Nitrogen,
    ];
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.provider_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_names_match_coolprop_conventions() {
        assert_eq!(Species::Parahydrogen.provider_name(), "parahydrogen");
        assert_eq!(Species::Orthohydrogen.provider_name(), "orthohydrogen");
        assert_eq!(Species::NormalHydrogen.provider_name(), "hydrogen");
        assert_eq!(Species::Nitrogen.provider_name(), "nitrogen");
    }

    #[test]
    fn display_uses_provider_name() {
        assert_eq!(Species::NormalHydrogen.to_string(), "hydrogen");
    }
}
