//! PDS Planetary Plasma Interactions spacecraft dump
//! (`pds-ppi-spacecraft.json`).
//!
//! The archive's search API emits one document per (spacecraft, mission,
//! instrument, target) combination, so a spacecraft appears in many raw
//! documents. They are folded into one record keyed by the first
//! `SPACECRAFT_NAME`.

use serde::Deserialize;

use crate::accumulate::{add_unique, ensure};
use crate::error::AdapterError;
use crate::models::{
    entity_key, AlternateName, Catalog, FacilityGroup, FacilityType, Instrument, Record,
};
use crate::traits::Adapter;
use crate::vocabulary::Vocabulary;

const AUTHORITY: &str = "pds-ppi";

#[derive(Debug, Deserialize)]
struct SearchDump {
    response: SearchResponse,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    docs: Vec<SpacecraftDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct SpacecraftDoc {
    #[serde(default)]
    spacecraft_name: Vec<String>,
    #[serde(default)]
    mission_name: Option<String>,
    #[serde(default)]
    instrument_name: Vec<String>,
    #[serde(default)]
    instrument_id: Vec<String>,
    #[serde(default)]
    target_name: Vec<String>,
}

pub struct PpiAdapter;

impl Adapter for PpiAdapter {
    fn authority(&self) -> &str {
        AUTHORITY
    }

    fn description(&self) -> &str {
        "PDS-PPI spacecraft (JSON search dump)"
    }

    fn file_name(&self) -> &str {
        "pds-ppi-spacecraft.json"
    }

    fn parse(&self, input: &str, _vocabulary: &Vocabulary) -> Result<Catalog, AdapterError> {
        let dump: SearchDump =
            serde_json::from_str(input).map_err(|e| AdapterError::json(AUTHORITY, e))?;

        let template = Record {
            facility_type: Some(FacilityType::Spacecraft),
            facility_group: Some(FacilityGroup::List(Vec::new())),
            ..Default::default()
        };

        let mut catalog = Catalog::new();
        for (index, doc) in dump.response.docs.into_iter().enumerate() {
            let primary = doc.spacecraft_name.first().ok_or_else(|| {
                AdapterError::malformed(AUTHORITY, index + 1, "document has no SPACECRAFT_NAME")
            })?;
            let record = ensure(&mut catalog, entity_key(AUTHORITY, primary), &template);

            for name in &doc.spacecraft_name {
                add_unique(
                    &mut record.alternate_name,
                    AlternateName::new(name.as_str(), AUTHORITY),
                    |a| a.name.clone(),
                );
            }

            if let (Some(mission), Some(FacilityGroup::List(groups))) =
                (doc.mission_name, record.facility_group.as_mut())
            {
                add_unique(groups, mission, String::clone);
            }

            // Each instrument name pairs with the id at the same position.
            for (i, name) in doc.instrument_name.iter().enumerate() {
                if record.instrument_list.iter().any(|inst| &inst.name == name) {
                    continue;
                }
                let id = doc.instrument_id.get(i).ok_or_else(|| {
                    AdapterError::malformed(
                        AUTHORITY,
                        index + 1,
                        format!("instrument '{}' has no INSTRUMENT_ID at position {}", name, i),
                    )
                })?;
                record.instrument_list.push(Instrument {
                    name: name.clone(),
                    id: id.clone(),
                });
            }

            for target in &doc.target_name {
                add_unique(&mut record.target_list, target.trim().to_string(), String::clone);
            }
        }

        Ok(catalog)
    }
}
