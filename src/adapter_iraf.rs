//! IRAF observatory database (`IRAF.txt`, block structured).
//!
//! ```text
//! observatory = "kpno"
//!     name = "Kitt Peak National Observatory"
//!     longitude = 111:36.0
//!     latitude = 31:57.8
//!     altitude = 2120.
//!     timezone = 7
//! ```
//!
//! Keys are recognised by the three characters after the indentation
//! character, within the five lines following the `observatory` line.

use crate::accumulate::insert_or_merge;
use crate::coords::{parse_angle, parse_number};
use crate::error::AdapterError;
use crate::models::{
    entity_key, AlternateName, Catalog, Coordinates, FacilityType, Location, Record,
};
use crate::text::slice;
use crate::traits::Adapter;
use crate::vocabulary::Vocabulary;

const AUTHORITY: &str = "iraf";

const BLOCK_MARKER: &str = "obs";
const LOOKAHEAD: usize = 5;
const ASSIGN: &str = " = ";

pub struct IrafAdapter;

/// Raw values collected from one block, before conversion.
struct Block<'a> {
    name: &'a str,
    lon: &'a str,
    lat: &'a str,
    alt: &'a str,
    tz: &'a str,
}

impl Default for Block<'_> {
    fn default() -> Self {
        Self {
            name: "",
            lon: "0",
            lat: "0",
            alt: "0",
            tz: "0",
        }
    }
}

/// Right-hand side of a `key = value` line.
fn value_of(line: &str, line_no: usize) -> Result<&str, AdapterError> {
    line.split(ASSIGN)
        .nth(1)
        .map(str::trim)
        .ok_or_else(|| {
            AdapterError::malformed(
                AUTHORITY,
                line_no,
                format!("expected 'key = value', got '{}'", line.trim()),
            )
        })
}

impl Adapter for IrafAdapter {
    fn authority(&self) -> &str {
        AUTHORITY
    }

    fn description(&self) -> &str {
        "IRAF observatory database (block-structured text)"
    }

    fn file_name(&self) -> &str {
        "IRAF.txt"
    }

    fn parse(&self, input: &str, _vocabulary: &Vocabulary) -> Result<Catalog, AdapterError> {
        let lines: Vec<&str> = input.lines().collect();
        let mut catalog = Catalog::new();

        for (index, line) in lines.iter().enumerate() {
            if !line.starts_with(BLOCK_MARKER) {
                continue;
            }
            let title = value_of(line, index + 1)?.trim_matches('"');

            let mut block = Block::default();
            let window_end = (index + 1 + LOOKAHEAD).min(lines.len());
            for (offset, key_line) in lines[index + 1..window_end].iter().enumerate() {
                let line_no = index + 2 + offset;
                match &*slice(key_line, 1, 4) {
                    "nam" => block.name = value_of(key_line, line_no)?.trim_matches('"'),
                    "lon" => block.lon = value_of(key_line, line_no)?,
                    "lat" => block.lat = value_of(key_line, line_no)?,
                    "alt" => block.alt = value_of(key_line, line_no)?,
                    "tim" => block.tz = value_of(key_line, line_no)?,
                    _ => {}
                }
            }

            let coord_err = |e| AdapterError::coordinate(AUTHORITY, index + 1, e);
            let coordinates = Coordinates {
                lon: parse_angle(block.lon).map_err(coord_err)?,
                lat: Some(parse_angle(block.lat).map_err(coord_err)?),
                alt: Some(parse_number(block.alt).map_err(coord_err)?),
                tz: Some(parse_number(block.tz).map_err(coord_err)?),
                ..Default::default()
            };

            let mut record = Record::named(AlternateName::new(block.name, AUTHORITY).with_id(title))
                .with_facility_type(FacilityType::Observatory);
            record.location = Some(Location {
                coordinates: Some(coordinates),
                ..Default::default()
            });

            insert_or_merge(&mut catalog, entity_key(AUTHORITY, title), record);
        }
        Ok(catalog)
    }
}
