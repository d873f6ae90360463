//! Deep Space Network spacecraft IDs (`DSN.txt`, two columns).
//!
//! Each line is a numeric spacecraft ID followed by its (possibly quoted)
//! name.

use crate::accumulate::insert_or_merge;
use crate::error::AdapterError;
use crate::models::{entity_key, AlternateName, Catalog, Record};
use crate::traits::Adapter;
use crate::vocabulary::Vocabulary;

const AUTHORITY: &str = "dsn";

pub struct DsnAdapter;

impl Adapter for DsnAdapter {
    fn authority(&self) -> &str {
        AUTHORITY
    }

    fn description(&self) -> &str {
        "DSN spacecraft IDs (two-column text)"
    }

    fn file_name(&self) -> &str {
        "DSN.txt"
    }

    fn parse(&self, input: &str, _vocabulary: &Vocabulary) -> Result<Catalog, AdapterError> {
        let mut catalog = Catalog::new();
        for line in input.lines() {
            let mut tokens = line.split_whitespace();
            let Some(id) = tokens.next() else {
                continue;
            };
            let name = tokens.collect::<Vec<_>>().join(" ");
            let name = name.trim_matches('\'');

            let record = Record::named(AlternateName::new(name, AUTHORITY).with_id(id));
            insert_or_merge(&mut catalog, entity_key(AUTHORITY, id), record);
        }
        Ok(catalog)
    }
}
