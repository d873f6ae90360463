//! Core data models used throughout the facility catalog.
//!
//! A [`Catalog`] maps entity keys (`"<authority>:<title>"`) to normalized
//! [`Record`]s. Every field except `alternateName` is optional and is left
//! out of the JSON output when empty.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate mapping from entity key to record, ordered by key.
pub type Catalog = BTreeMap<String, Record>;

/// Build the canonical entity key for a record published by `authority`.
pub fn entity_key(authority: &str, title: &str) -> String {
    format!("{}:{}", authority, title)
}

/// Kind of facility a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityType {
    Spacecraft,
    Observatory,
}

/// One name under which an authority knows the entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateName {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub naming_authority: String,
}

impl AlternateName {
    pub fn new(name: impl Into<String>, authority: &str) -> Self {
        Self {
            name: name.into(),
            id: None,
            naming_authority: authority.to_string(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Position of a facility. Units are decimal degrees, except for the MPC list
/// whose parallax constants (`cos`, `sin`) are kept as published.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cos: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sin: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceUrl {
    pub url: String,
    pub title: String,
}

/// Parent mission(s) of a facility.
///
/// PDS-PPI publishes a list; the ADS list only ever carries one bare name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacilityGroup {
    List(Vec<String>),
    Name(String),
}

impl FacilityGroup {
    pub fn is_empty(&self) -> bool {
        match self {
            FacilityGroup::List(names) => names.is_empty(),
            FacilityGroup::Name(name) => name.is_empty(),
        }
    }
}

fn group_is_absent(group: &Option<FacilityGroup>) -> bool {
    group.as_ref().map_or(true, FacilityGroup::is_empty)
}

/// Normalized entity record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default)]
    pub alternate_name: Vec<AlternateName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_type: Option<FacilityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub measurement_type: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_list: Vec<String>,
    #[serde(default, skip_serializing_if = "group_is_absent")]
    pub facility_group: Option<FacilityGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instrument_list: Vec<Instrument>,
    #[serde(
        rename = "referenceURL",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub reference_url: Vec<ReferenceUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<String>,
}

impl Record {
    /// A record known under a single alternate name.
    pub fn named(alternate_name: AlternateName) -> Self {
        Self {
            alternate_name: vec![alternate_name],
            ..Default::default()
        }
    }

    pub fn with_facility_type(mut self, facility_type: FacilityType) -> Self {
        self.facility_type = Some(facility_type);
        self
    }

    /// Primary display name: the first alternate name.
    pub fn display_name(&self) -> &str {
        self.alternate_name
            .first()
            .map(|a| a.name.as_str())
            .unwrap_or_default()
    }
}
