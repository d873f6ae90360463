//! NASA ADS facility list (`ADS_facilities.txt`, fixed width).
//!
//! ```text
//! 0               16
//! Sa.HST          HST/Hubble Space Telescope
//! Ground.VLA      Very Large Array
//! ```
//!
//! Identifiers prefixed `Sa.` are spacecraft. A name containing `/` is
//! qualified by its parent facility group.

use crate::accumulate::insert_or_merge;
use crate::error::AdapterError;
use crate::models::{entity_key, AlternateName, Catalog, FacilityGroup, FacilityType, Record};
use crate::text::{slice, slice_from, trim_ascii};
use crate::traits::Adapter;
use crate::vocabulary::Vocabulary;

const AUTHORITY: &str = "ads";

const ID_COLUMNS: (usize, usize) = (0, 16);
const NAME_START: usize = 16;
const SPACECRAFT_PREFIX: &str = "Sa.";

pub struct AdsAdapter;

impl Adapter for AdsAdapter {
    fn authority(&self) -> &str {
        AUTHORITY
    }

    fn description(&self) -> &str {
        "ADS facilities (fixed-width text)"
    }

    fn file_name(&self) -> &str {
        "ADS_facilities.txt"
    }

    fn parse(&self, input: &str, _vocabulary: &Vocabulary) -> Result<Catalog, AdapterError> {
        let mut catalog = Catalog::new();
        for line in input.lines() {
            if trim_ascii(line).is_empty() {
                continue;
            }

            let id = slice(line, ID_COLUMNS.0, ID_COLUMNS.1);
            let title = trim_ascii(&id);
            let rest = slice_from(line, NAME_START);

            let facility_type = if title.starts_with(SPACECRAFT_PREFIX) {
                FacilityType::Spacecraft
            } else {
                FacilityType::Observatory
            };
            let mut record =
                Record::named(AlternateName::new(trim_ascii(&rest), AUTHORITY).with_id(title))
                    .with_facility_type(facility_type);

            if let Some((group, _)) = rest.split_once('/') {
                record.facility_group = Some(FacilityGroup::Name(group.to_string()));
            }

            insert_or_merge(&mut catalog, entity_key(AUTHORITY, title), record);
        }
        Ok(catalog)
    }
}
