//! XEphem observing sites (`xephem_sites.txt`, semicolon delimited).
//!
//! ```text
//! # name[, location] ; lat D M S N|S ; lon D M S E|W ; elevation (m, -1 unknown)
//! Cerro Tololo, Chile ; 30 09 55 S ; 70 48 54 W ; 2215
//! ```
//!
//! Longitudes are counted positive westward in this list, so an `E`
//! hemisphere yields a negative value.

use crate::accumulate::insert_or_merge;
use crate::coords::{parse_dms, parse_number, SignConvention};
use crate::error::AdapterError;
use crate::models::{
    entity_key, AlternateName, Catalog, Coordinates, FacilityType, Location, Record,
};
use crate::traits::Adapter;
use crate::vocabulary::Vocabulary;

const AUTHORITY: &str = "xephem";
const UNKNOWN_ALTITUDE: f64 = -1.0;

pub struct XephemAdapter;

impl Adapter for XephemAdapter {
    fn authority(&self) -> &str {
        AUTHORITY
    }

    fn description(&self) -> &str {
        "XEphem observing sites (semicolon-delimited text)"
    }

    fn file_name(&self) -> &str {
        "xephem_sites.txt"
    }

    fn parse(&self, input: &str, _vocabulary: &Vocabulary) -> Result<Catalog, AdapterError> {
        let mut catalog = Catalog::new();
        for (index, raw) in input.lines().enumerate() {
            let line_no = index + 1;
            if raw.starts_with('#') {
                continue;
            }
            let line = raw.split_whitespace().collect::<Vec<_>>().join(" ");
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(';').collect();
            let [head, lat_text, lon_text, alt_text, ..] = fields.as_slice() else {
                return Err(AdapterError::malformed(
                    AUTHORITY,
                    line_no,
                    format!("expected 4 ';'-separated fields, got {}", fields.len()),
                ));
            };

            let (name, country) = match head.split_once(',') {
                Some((name, rest)) => {
                    // Parts are normalized to a single ", " separator.
                    let parts: Vec<&str> = rest.split(',').map(str::trim).collect();
                    (name.trim(), parts.join(", "))
                }
                None => (head.trim(), String::new()),
            };

            let coord_err = |e| AdapterError::coordinate(AUTHORITY, line_no, e);
            let lat = parse_dms(lat_text, SignConvention::SouthNegative).map_err(coord_err)?;
            let lon = parse_dms(lon_text, SignConvention::EastNegative).map_err(coord_err)?;
            let alt = parse_number(alt_text).map_err(coord_err)?;

            let location = Location {
                country: (!country.is_empty()).then_some(country),
                coordinates: Some(Coordinates {
                    lat: Some(lat),
                    lon,
                    alt: (alt != UNKNOWN_ALTITUDE).then_some(alt),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let mut record = Record::named(AlternateName::new(name, AUTHORITY))
                .with_facility_type(FacilityType::Observatory);
            record.location = Some(location);

            insert_or_merge(&mut catalog, entity_key(AUTHORITY, name), record);
        }
        Ok(catalog)
    }
}
