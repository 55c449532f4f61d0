//! The fixed set of stations trains can call at.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A station on the network.
///
/// Stations form a fixed, finite set; equality is by identity of the
/// variant. Each station carries a 3-letter CRS-style short code used for
/// display and snapshot encoding; serde representations use the code.
///
/// # Examples
///
/// ```
/// use train_ledger::domain::Station;
///
/// assert_eq!(Station::KingsCross.code(), "KGX");
/// assert_eq!(Station::from_code("KGX"), Some(Station::KingsCross));
/// assert_eq!(Station::from_code("???"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Station {
    Euston,
    KingsCross,
    StPancras,
    Paddington,
    Victoria,
    Waterloo,
    LiverpoolStreet,
    Marylebone,
    Reading,
    Cambridge,
    Peterborough,
    York,
    Leeds,
    Doncaster,
    Newcastle,
    Edinburgh,
}

impl Station {
    /// Every station, in declaration order.
    pub const ALL: [Station; 16] = [
        Station::Euston,
        Station::KingsCross,
        Station::StPancras,
        Station::Paddington,
        Station::Victoria,
        Station::Waterloo,
        Station::LiverpoolStreet,
        Station::Marylebone,
        Station::Reading,
        Station::Cambridge,
        Station::Peterborough,
        Station::York,
        Station::Leeds,
        Station::Doncaster,
        Station::Newcastle,
        Station::Edinburgh,
    ];

    /// Returns the station's 3-letter short code.
    pub fn code(&self) -> &'static str {
        match self {
            Station::Euston => "EUS",
            Station::KingsCross => "KGX",
            Station::StPancras => "STP",
            Station::Paddington => "PAD",
            Station::Victoria => "VIC",
            Station::Waterloo => "WAT",
            Station::LiverpoolStreet => "LST",
            Station::Marylebone => "MYB",
            Station::Reading => "RDG",
            Station::Cambridge => "CBG",
            Station::Peterborough => "PBO",
            Station::York => "YRK",
            Station::Leeds => "LDS",
            Station::Doncaster => "DON",
            Station::Newcastle => "NCL",
            Station::Edinburgh => "EDB",
        }
    }

    /// Looks up a station by its short code.
    ///
    /// Returns `None` for codes that don't name a station.
    pub fn from_code(code: &str) -> Option<Station> {
        Station::ALL.iter().copied().find(|s| s.code() == code)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Station {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Station {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Station::from_code(&code)
            .ok_or_else(|| D::Error::custom(format!("unknown station code: {code}")))
    }
}
