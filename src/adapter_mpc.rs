//! IAU Minor Planet Center observatory codes (`IAU-MPC.txt`, fixed width).
//!
//! ```text
//! Code  Long.   cos      sin    Name
//! 000   0.0000 0.62411 +0.77873 Greenwich
//! 250                           Hubble Space Telescope
//! ```
//!
//! The first line is a header. Sites without a longitude are spacecraft.
//! Ground sites keep the MPC parallax constants (ρ·cosφ′, ρ·sinφ′) as
//! published rather than converting them to a latitude.

use crate::accumulate::insert_or_merge;
use crate::coords::parse_number;
use crate::error::AdapterError;
use crate::models::{
    entity_key, AlternateName, Catalog, Coordinates, FacilityType, Location, Record,
};
use crate::text::{slice, slice_from, trim_ascii};
use crate::traits::Adapter;
use crate::vocabulary::Vocabulary;

const AUTHORITY: &str = "iau-mpc";

const CODE: (usize, usize) = (0, 3);
const LONGITUDE: (usize, usize) = (4, 13);
const COS: (usize, usize) = (13, 21);
const SIN: (usize, usize) = (21, 30);
const NAME_START: usize = 30;

pub struct MpcAdapter;

impl Adapter for MpcAdapter {
    fn authority(&self) -> &str {
        AUTHORITY
    }

    fn description(&self) -> &str {
        "IAU MPC observatory codes (fixed-width text)"
    }

    fn file_name(&self) -> &str {
        "IAU-MPC.txt"
    }

    fn parse(&self, input: &str, _vocabulary: &Vocabulary) -> Result<Catalog, AdapterError> {
        let mut catalog = Catalog::new();
        for (index, line) in input.lines().enumerate().skip(1) {
            let line_no = index + 1;
            if trim_ascii(line).is_empty() {
                continue;
            }

            let code = slice(line, CODE.0, CODE.1);
            let title = trim_ascii(&code);
            let lon_text = slice(line, LONGITUDE.0, LONGITUDE.1);
            let name = slice_from(line, NAME_START);

            let mut record =
                Record::named(AlternateName::new(trim_ascii(&name), AUTHORITY).with_id(title));

            if trim_ascii(&lon_text).is_empty() {
                record.facility_type = Some(FacilityType::Spacecraft);
            } else {
                let field = |range: (usize, usize)| {
                    parse_number(&slice(line, range.0, range.1))
                        .map_err(|e| AdapterError::coordinate(AUTHORITY, line_no, e))
                };
                record.facility_type = Some(FacilityType::Observatory);
                record.location = Some(Location {
                    coordinates: Some(Coordinates {
                        lon: field(LONGITUDE)?,
                        cos: Some(field(COS)?),
                        sin: Some(field(SIN)?),
                        ..Default::default()
                    }),
                    ..Default::default()
                });
            }

            insert_or_merge(&mut catalog, entity_key(AUTHORITY, title), record);
        }
        Ok(catalog)
    }
}
