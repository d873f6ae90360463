//! Minimal VOTable reader.
//!
//! Reads the first `<TABLE>` of a VOTable document into column names and
//! string cells. Cell text is kept verbatim apart from entity unescaping, so
//! the non-breaking space some publishers use as an "empty" marker survives.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::AdapterError;
use crate::text::trim_ascii;

/// Cell value some publishers use to mark an empty observational-range cell.
pub const EMPTY_CELL: &str = "\u{a0}";

/// The first table of a VOTable document.
#[derive(Debug, Clone, Default)]
pub struct VoTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl VoTable {
    /// Parse `xml`. `authority` only labels errors.
    pub fn parse(xml: &str, authority: &str) -> Result<Self, AdapterError> {
        let xml_err = |reason: String| AdapterError::Xml {
            authority: authority.to_string(),
            reason,
        };

        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut table = VoTable::default();
        let mut in_table = false;
        let mut row: Option<Vec<String>> = None;
        let mut cell: Option<String> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"TABLE" => in_table = true,
                    b"FIELD" if in_table => table.columns.push(field_name(&e).map_err(xml_err)?),
                    b"TR" if in_table => row = Some(Vec::new()),
                    b"TD" if row.is_some() => cell = Some(String::new()),
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"FIELD" if in_table => table.columns.push(field_name(&e).map_err(xml_err)?),
                    b"TD" => {
                        if let Some(row) = row.as_mut() {
                            row.push(String::new());
                        }
                    }
                    _ => {}
                },
                Ok(Event::Text(t)) => {
                    if let Some(cell) = cell.as_mut() {
                        let text = t.unescape().map_err(|e| xml_err(e.to_string()))?;
                        cell.push_str(&text);
                    }
                }
                Ok(Event::CData(t)) => {
                    if let Some(cell) = cell.as_mut() {
                        cell.push_str(&String::from_utf8_lossy(&t.into_inner()));
                    }
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"TD" => {
                        if let (Some(row), Some(text)) = (row.as_mut(), cell.take()) {
                            row.push(text);
                        }
                    }
                    b"TR" => {
                        if let Some(done) = row.take() {
                            table.rows.push(done);
                        }
                    }
                    b"TABLE" if in_table => break,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(xml_err(e.to_string())),
                _ => {}
            }
        }

        let width = table.columns.len();
        for row in table.rows.iter_mut() {
            if row.len() < width {
                row.resize(width, String::new());
            }
        }

        Ok(table)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column called `name`.
    pub fn column(&self, name: &str, authority: &str) -> Result<usize, AdapterError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| AdapterError::MissingColumn {
                authority: authority.to_string(),
                column: name.to_string(),
            })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// `FIELD@name`, falling back to `FIELD@ID`.
fn field_name(e: &BytesStart<'_>) -> Result<String, String> {
    let mut id = None;
    for attr in e.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let value = attr.unescape_value().map_err(|e| e.to_string())?;
        match attr.key.as_ref() {
            b"name" => return Ok(value.into_owned()),
            b"ID" => id = Some(value.into_owned()),
            _ => {}
        }
    }
    id.ok_or_else(|| "FIELD without name or ID".to_string())
}

/// Whether a cell carries a value, i.e. is not the [`EMPTY_CELL`] marker.
pub fn is_present(cell: &str) -> bool {
    trim_ascii(cell) != EMPTY_CELL
}
