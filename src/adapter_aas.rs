//! American Astronomical Society facility keywords (`AAS.xml`, VOTable).
//!
//! One row per facility. A `Location` of `Space` marks a spacecraft; any other
//! value is the continent of a ground observatory. Each observational-range
//! column holds a non-breaking space when the facility does not cover that
//! band.

use crate::accumulate::{add_unique, insert_or_merge};
use crate::error::AdapterError;
use crate::models::{entity_key, AlternateName, Catalog, FacilityType, Location, Record};
use crate::text::trim_ascii;
use crate::traits::Adapter;
use crate::vocabulary::Vocabulary;
use crate::votable::{is_present, VoTable};

const AUTHORITY: &str = "aas";

/// Band columns, in the order their measurement types are emitted.
pub const OBSERVATIONAL_RANGES: [&str; 8] = [
    "Gamma-Ray",
    "X-Ray",
    "Ultraviolet",
    "Optical",
    "Infrared",
    "Millimeter",
    "Radio",
    "Particles",
];

const SPACE_LOCATION: &str = "Space";

pub struct AasAdapter;

impl Adapter for AasAdapter {
    fn authority(&self) -> &str {
        AUTHORITY
    }

    fn description(&self) -> &str {
        "AAS facility keywords (VOTable)"
    }

    fn file_name(&self) -> &str {
        "AAS.xml"
    }

    fn parse(&self, input: &str, vocabulary: &Vocabulary) -> Result<Catalog, AdapterError> {
        let table = VoTable::parse(input, AUTHORITY)?;
        let id_col = table.column("ID", AUTHORITY)?;
        let name_col = table.column("Name", AUTHORITY)?;
        let location_col = table.column("Location", AUTHORITY)?;
        let solar_col = table.column("Solar", AUTHORITY)?;
        let range_cols = OBSERVATIONAL_RANGES
            .iter()
            .map(|band| Ok((*band, table.column(band, AUTHORITY)?)))
            .collect::<Result<Vec<_>, AdapterError>>()?;

        let mut catalog = Catalog::new();
        for row in table.rows() {
            let title = trim_ascii(&row[id_col]);
            let mut record = Record::named(
                AlternateName::new(trim_ascii(&row[name_col]), AUTHORITY).with_id(title),
            );

            let location = &row[location_col];
            if location == SPACE_LOCATION {
                record.facility_type = Some(FacilityType::Spacecraft);
            } else {
                record.facility_type = Some(FacilityType::Observatory);
                record.location = Some(Location {
                    continent: Some(trim_ascii(location).to_string()),
                    ..Default::default()
                });
            }

            for (band, col) in &range_cols {
                if is_present(&row[*col]) {
                    add_unique(
                        &mut record.measurement_type,
                        vocabulary.translate(band),
                        String::clone,
                    );
                }
            }

            if is_present(&row[solar_col]) {
                record.target_list.push("Sun".to_string());
            }

            insert_or_merge(&mut catalog, entity_key(AUTHORITY, title), record);
        }

        Ok(catalog)
    }
}
