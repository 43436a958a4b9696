//! Static climate data for the five Brazilian regions shown in the simulator.
//!
//! The numbers are illustrative, not measurements. Everything lives in a
//! `'static` table; there is no way to add or change entries at runtime.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    Sul,
    Sudeste,
    CentroOeste,
    Nordeste,
    Norte,
}

impl RegionId {
    /// Display order of the region cards.
    pub const ALL: [RegionId; 5] = [
        RegionId::Sul,
        RegionId::Sudeste,
        RegionId::CentroOeste,
        RegionId::Nordeste,
        RegionId::Norte,
    ];

    pub fn key(self) -> &'static str {
        match self {
            RegionId::Sul => "sul",
            RegionId::Sudeste => "sudeste",
            RegionId::CentroOeste => "centroOeste",
            RegionId::Nordeste => "nordeste",
            RegionId::Norte => "norte",
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region key: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for RegionId {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Temperate,
    Subtropical,
    Tropical,
    Semiarid,
    Equatorial,
}

impl Condition {
    pub fn label(self) -> &'static str {
        match self {
            Condition::Temperate => "Temperado",
            Condition::Subtropical => "Subtropical",
            Condition::Tropical => "Tropical",
            Condition::Semiarid => "Semiárido",
            Condition::Equatorial => "Equatorial",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateRecord {
    pub name: &'static str,
    /// °C
    pub temperature: f64,
    /// Relative humidity, 0-100.
    pub humidity: f64,
    /// mm per month
    pub precipitation: f64,
    /// km/h
    pub wind_speed: f64,
    pub condition: Condition,
    /// Material Symbols glyph name.
    pub icon: &'static str,
    pub color: &'static str,
}

static CATALOG: [(RegionId, ClimateRecord); 5] = [
    (
        RegionId::Sul,
        ClimateRecord {
            name: "Região Sul",
            temperature: 18.0,
            humidity: 75.0,
            precipitation: 120.0,
            wind_speed: 12.0,
            condition: Condition::Temperate,
            icon: "ac_unit",
            color: "#4A90E2",
        },
    ),
    (
        RegionId::Sudeste,
        ClimateRecord {
            name: "Região Sudeste",
            temperature: 24.0,
            humidity: 68.0,
            precipitation: 90.0,
            wind_speed: 15.0,
            condition: Condition::Subtropical,
            icon: "wb_sunny",
            color: "#F5A623",
        },
    ),
    (
        RegionId::CentroOeste,
        ClimateRecord {
            name: "Região Centro-Oeste",
            temperature: 28.0,
            humidity: 55.0,
            precipitation: 60.0,
            wind_speed: 18.0,
            condition: Condition::Tropical,
            icon: "wb_twilight",
            color: "#E67E22",
        },
    ),
    (
        RegionId::Nordeste,
        ClimateRecord {
            name: "Região Nordeste",
            temperature: 32.0,
            humidity: 45.0,
            precipitation: 30.0,
            wind_speed: 20.0,
            condition: Condition::Semiarid,
            icon: "local_fire_department",
            color: "#E74C3C",
        },
    ),
    (
        RegionId::Norte,
        ClimateRecord {
            name: "Região Norte",
            temperature: 30.0,
            humidity: 85.0,
            precipitation: 200.0,
            wind_speed: 10.0,
            condition: Condition::Equatorial,
            icon: "water_drop",
            color: "#27AE60",
        },
    ),
];

// Rows are stored in `RegionId::ALL` order, so the discriminant is the row index.
pub fn record(id: RegionId) -> &'static ClimateRecord {
    &CATALOG[id as usize].1
}

/// Lookup by raw key. Unknown keys mean "nothing selected".
pub fn lookup(key: &str) -> Option<(RegionId, &'static ClimateRecord)> {
    let id = key.parse::<RegionId>().ok()?;
    Some((id, record(id)))
}

/// All regions in display order.
pub fn entries() -> impl Iterator<Item = (RegionId, &'static ClimateRecord)> {
    CATALOG.iter().map(|(id, record)| (*id, record))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_indexed_by_region() {
        for (index, id) in RegionId::ALL.into_iter().enumerate() {
            assert_eq!(CATALOG[index].0, id);
        }
        assert_eq!(record(RegionId::Nordeste).name, "Região Nordeste");
        assert_eq!(record(RegionId::Norte).precipitation, 200.0);
    }

    #[test]
    fn lookup_by_key() {
        let (id, centro) = lookup("centroOeste").expect("centroOeste is a catalog key");
        assert_eq!(id, RegionId::CentroOeste);
        assert_eq!(centro.wind_speed, 18.0);
        assert_eq!(centro.condition, Condition::Tropical);

        assert!(lookup("leste").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("Sul").is_none());
    }

    #[test]
    fn parse_unknown_region_reports_key() {
        let err = "pampa".parse::<RegionId>().unwrap_err();
        assert_eq!(err, UnknownRegion("pampa".to_string()));
        assert_eq!(err.to_string(), "unknown region key: pampa");
    }

    #[test]
    fn entries_follow_display_order() {
        let keys: Vec<&str> = entries().map(|(id, _)| id.key()).collect();
        assert_eq!(keys, ["sul", "sudeste", "centroOeste", "nordeste", "norte"]);
    }

    #[test]
    fn record_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(record(RegionId::Sul)).unwrap();
        assert_eq!(json["windSpeed"], 12.0);
        assert_eq!(json["condition"], "temperate");
        assert_eq!(json["color"], "#4A90E2");
    }
}
