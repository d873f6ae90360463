//! NASA Space Science Data Coordinated Archive spacecraft list
//! (`NSSDC.xml`, VOTable).

use crate::accumulate::insert_or_merge;
use crate::error::AdapterError;
use crate::models::{
    entity_key, AlternateName, Catalog, FacilityType, Record, ReferenceUrl,
};
use crate::text::trim_ascii;
use crate::traits::Adapter;
use crate::vocabulary::Vocabulary;
use crate::votable::VoTable;

const AUTHORITY: &str = "nssdc";
const REFERENCE_TITLE: &str = "NSSDC catalog entry";

pub struct NssdcAdapter;

impl Adapter for NssdcAdapter {
    fn authority(&self) -> &str {
        AUTHORITY
    }

    fn description(&self) -> &str {
        "NSSDC master catalog spacecraft (VOTable)"
    }

    fn file_name(&self) -> &str {
        "NSSDC.xml"
    }

    fn parse(&self, input: &str, _vocabulary: &Vocabulary) -> Result<Catalog, AdapterError> {
        let table = VoTable::parse(input, AUTHORITY)?;
        let id_col = table.column("NSSDC id", AUTHORITY)?;
        let name_col = table.column("name", AUTHORITY)?;
        let url_col = table.column("URL", AUTHORITY)?;
        let launch_col = table.column("Launch date", AUTHORITY)?;

        let mut catalog = Catalog::new();
        for row in table.rows() {
            let title = trim_ascii(&row[id_col]);
            let mut record =
                Record::named(AlternateName::new(row[name_col].as_str(), AUTHORITY).with_id(title))
                    .with_facility_type(FacilityType::Spacecraft);
            record.reference_url.push(ReferenceUrl {
                url: row[url_col].clone(),
                title: REFERENCE_TITLE.to_string(),
            });
            if !row[launch_col].is_empty() {
                record.launch_date = Some(row[launch_col].clone());
            }

            insert_or_merge(&mut catalog, entity_key(AUTHORITY, title), record);
        }
        Ok(catalog)
    }
}
