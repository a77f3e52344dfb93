//! Planet material classification from string table contents.

use std::fmt;

/// The planet material family a template file shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PlanetKind {
    GasGiant,
    Terrestrial,
    Lava,
    Plasma,
    Ice,
    Ocean,
    Thunderstorm,
    Sandstorm,
    Unknown,
}

impl PlanetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanetKind::GasGiant => "gasgiant",
            PlanetKind::Terrestrial => "terrestrial",
            PlanetKind::Lava => "lava",
            PlanetKind::Plasma => "plasma",
            PlanetKind::Ice => "ice",
            PlanetKind::Ocean => "ocean",
            PlanetKind::Thunderstorm => "thunderstorm",
            PlanetKind::Sandstorm => "sandstorm",
            PlanetKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PlanetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path-segment markers checked against each lower-cased string, in priority
/// order. Priority only matters when one string contains several markers.
const KIND_MARKERS: [(&str, PlanetKind); 8] = [
    ("/gasgiant", PlanetKind::GasGiant),
    ("/earthlike", PlanetKind::Terrestrial),
    ("/lava", PlanetKind::Lava),
    ("/plasma", PlanetKind::Plasma),
    ("/ice", PlanetKind::Ice),
    ("/ocean", PlanetKind::Ocean),
    ("/thunderstorm", PlanetKind::Thunderstorm),
    ("/sandstorm", PlanetKind::Sandstorm),
];

/// Classify a template by the first string containing a known marker.
///
/// Pure classification: scans the table in order and never fails; a table with
/// no markers is [`PlanetKind::Unknown`].
pub fn classify(strings: &[String]) -> PlanetKind {
    for entry in strings {
        let lower = entry.to_lowercase();
        for (marker, kind) in KIND_MARKERS {
            if lower.contains(marker) {
                return kind;
            }
        }
    }
    PlanetKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn classifies_each_marker() {
        let cases = [
            ("res:/model/worldobject/planet/gasgiant/a.red", PlanetKind::GasGiant),
            ("res:/model/worldobject/planet/earthlike/a.red", PlanetKind::Terrestrial),
            ("res:/model/worldobject/planet/lava/a.red", PlanetKind::Lava),
            ("res:/model/worldobject/planet/plasma/a.red", PlanetKind::Plasma),
            ("res:/model/worldobject/planet/ice/a.red", PlanetKind::Ice),
            ("res:/model/worldobject/planet/ocean/a.red", PlanetKind::Ocean),
            ("res:/model/worldobject/planet/thunderstorm/a.red", PlanetKind::Thunderstorm),
            ("res:/model/worldobject/planet/sandstorm/a.red", PlanetKind::Sandstorm),
        ];
        for (path, expected) in cases {
            assert_eq!(classify(&strings(&[path])), expected, "{path}");
        }
    }

    #[test]
    fn first_matching_string_wins_over_marker_order() {
        // "/lava" appears in an earlier string than "/ice"; file order decides
        // even though "/ice" comes later in the marker list anyway.
        let table = strings(&[
            "Tr2Vector4Parameter",
            "res:/texture/lava/x.dds",
            "res:/texture/ice/y.dds",
        ]);
        assert_eq!(classify(&table), PlanetKind::Lava);
    }

    #[test]
    fn marker_order_breaks_ties_within_one_string() {
        let table = strings(&["res:/ice/gasgiant/mixed.dds"]);
        assert_eq!(classify(&table), PlanetKind::GasGiant);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let table = strings(&["res:/Model/WorldObject/Planet/GasGiant/A.red"]);
        assert_eq!(classify(&table), PlanetKind::GasGiant);
    }

    #[test]
    fn marker_requires_leading_slash() {
        let table = strings(&["lava without a path segment"]);
        assert_eq!(classify(&table), PlanetKind::Unknown);
    }

    #[test]
    fn empty_table_is_unknown() {
        assert_eq!(classify(&[]), PlanetKind::Unknown);
    }
}
