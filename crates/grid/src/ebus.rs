//! The four eastern boundary upwelling systems and their latitude bounds.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// One of the four major eastern boundary upwelling systems.
///
/// Latitude bounds come from the Chavez (2009) EBUS comparison and span
/// 10 degrees per system so the regions are directly comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ebus {
    /// California Current System (`CalCS`).
    California,
    /// Canary Current System (`CanCS`).
    Canary,
    /// Benguela Current System (`BenCS`).
    Benguela,
    /// Humboldt Current System (`HumCS`).
    Humboldt,
}

impl Ebus {
    /// All four systems, in canonical order.
    pub const ALL: [Ebus; 4] = [
        Ebus::California,
        Ebus::Canary,
        Ebus::Benguela,
        Ebus::Humboldt,
    ];

    /// Returns the short region code used in file names and CLI arguments.
    pub fn code(&self) -> &'static str {
        match self {
            Ebus::California => "CalCS",
            Ebus::Canary => "CanCS",
            Ebus::Benguela => "BenCS",
            Ebus::Humboldt => "HumCS",
        }
    }

    /// Returns the `(south, north)` latitude bounds in degrees.
    ///
    /// Extending this table is the only step needed to support a new region.
    pub fn lat_bounds(&self) -> (f64, f64) {
        match self {
            Ebus::California => (34.0, 44.0),
            Ebus::Canary => (12.0, 22.0),
            Ebus::Benguela => (-28.0, -18.0),
            Ebus::Humboldt => (-16.0, -6.0),
        }
    }
}

impl fmt::Display for Ebus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Ebus {
    type Err = GridError;

    /// Parses a region code. There is no default: an unrecognized code is an
    /// error so a typo can never silently select the wrong region.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ebus::ALL
            .iter()
            .copied()
            .find(|e| e.code() == s)
            .ok_or_else(|| GridError::UnknownRegion {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for ebus in Ebus::ALL {
            let parsed: Ebus = ebus.code().parse().expect("code parses");
            assert_eq!(parsed, ebus);
        }
    }

    #[test]
    fn bounds_span_ten_degrees() {
        for ebus in Ebus::ALL {
            let (lat1, lat2) = ebus.lat_bounds();
            assert!(
                (lat2 - lat1 - 10.0).abs() < f64::EPSILON,
                "{ebus} bounds {lat1}..{lat2} do not span 10 degrees"
            );
        }
    }

    #[test]
    fn known_bounds() {
        assert_eq!(Ebus::California.lat_bounds(), (34.0, 44.0));
        assert_eq!(Ebus::Canary.lat_bounds(), (12.0, 22.0));
        assert_eq!(Ebus::Benguela.lat_bounds(), (-28.0, -18.0));
        assert_eq!(Ebus::Humboldt.lat_bounds(), (-16.0, -6.0));
    }

    #[test]
    fn unknown_region_is_an_error() {
        let err = "PacCS".parse::<Ebus>().unwrap_err();
        assert!(matches!(err, GridError::UnknownRegion { ref name } if name == "PacCS"));
        let msg = err.to_string();
        assert!(msg.contains("CalCS"));
        assert!(msg.contains("HumCS"));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("calcs".parse::<Ebus>().is_err());
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(Ebus::Humboldt.to_string(), "HumCS");
    }
}
