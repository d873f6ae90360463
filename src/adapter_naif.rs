//! NAIF SPICE integer ID codes (`NAIF.xml`, VOTable).
//!
//! NAIF lists the same ID code once per name it answers to, so rows sharing
//! an ID fold into one record with several alternate names.

use crate::accumulate::{add_unique, ensure};
use crate::error::AdapterError;
use crate::models::{entity_key, AlternateName, Catalog, Record};
use crate::text::trim_ascii;
use crate::traits::Adapter;
use crate::vocabulary::Vocabulary;
use crate::votable::VoTable;

const AUTHORITY: &str = "naif";

pub struct NaifAdapter;

impl Adapter for NaifAdapter {
    fn authority(&self) -> &str {
        AUTHORITY
    }

    fn description(&self) -> &str {
        "NAIF SPICE ID codes (VOTable)"
    }

    fn file_name(&self) -> &str {
        "NAIF.xml"
    }

    fn parse(&self, input: &str, _vocabulary: &Vocabulary) -> Result<Catalog, AdapterError> {
        let table = VoTable::parse(input, AUTHORITY)?;
        let id_col = table.column("NAIF ID", AUTHORITY)?;
        let name_col = table.column("NAIF name", AUTHORITY)?;

        let empty = Record::default();
        let mut catalog = Catalog::new();
        for row in table.rows() {
            let title = trim_ascii(&row[id_col]);
            let name = AlternateName::new(trim_ascii(&row[name_col]), AUTHORITY).with_id(title);
            let record = ensure(&mut catalog, entity_key(AUTHORITY, title), &empty);
            add_unique(&mut record.alternate_name, name, |a| a.name.clone());
        }
        Ok(catalog)
    }
}
