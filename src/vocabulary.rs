//! Measurement-type vocabulary translation.
//!
//! Maps free-text spectral labels ("Radio", "X-Ray", ...) onto Unified
//! Content Descriptor codes. Lookup is case-insensitive; unknown labels pass
//! through unchanged.

use std::collections::HashMap;

use crate::models::Catalog;

/// Built-in label → code table. Keys are lower-case.
pub const DEFAULT_TRANSLATIONS: &[(&str, &str)] = &[
    ("radiowave", "em.radio"),
    ("radio", "em.radio"),
    ("optical", "em.opt"),
    ("gamma-ray", "em.gamma"),
    ("microwaves", "em.mm.200-400GHz"),
    ("microwave", "em.mm.200-400GHz"),
    ("infrared", "em.IR"),
    ("submillimeter", "submillimeter"),
    ("ultraviolet", "em.UV"),
    ("radiowaves", "em.radio"),
    ("x-ray", "em.X-ray"),
    ("particles", "particles"),
    ("millimeter", "em.mm"),
];

/// Lookup table used to translate `measurementType` labels.
///
/// Built once (defaults plus any configured extensions) and then only read.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    table: HashMap<String, String>,
}

impl Vocabulary {
    /// Extend the table with extra `label → code` pairs. Later entries
    /// override earlier ones, including built-ins.
    pub fn extended<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (label, code) in entries {
            self.table.insert(label.as_ref().to_lowercase(), code.into());
        }
        self
    }

    /// Translate one label. Unknown labels are returned unchanged.
    pub fn translate(&self, label: &str) -> String {
        match self.table.get(&label.to_lowercase()) {
            Some(code) => code.clone(),
            None => label.to_string(),
        }
    }

    /// Rewrite every record's `measurementType` entries in place.
    pub fn apply(&self, catalog: &mut Catalog) {
        for record in catalog.values_mut() {
            for label in record.measurement_type.iter_mut() {
                *label = self.translate(label);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            table: DEFAULT_TRANSLATIONS
                .iter()
                .map(|(label, code)| (label.to_string(), code.to_string()))
                .collect(),
        }
    }
}
