//! Idempotent accumulation of records across raw rows.
//!
//! Some authorities publish one raw row per instrument per target per
//! mission; others simply repeat an identifier. Adapters fold such rows into
//! one record per entity key with these helpers, so repeating a row never
//! duplicates a name, instrument or target.

use std::collections::BTreeMap;

use crate::models::{Catalog, Record};

/// Return the value under `key`, inserting a clone of `template` first if the
/// key is absent.
pub fn ensure<'a, K, V>(mapping: &'a mut BTreeMap<K, V>, key: K, template: &V) -> &'a mut V
where
    K: Ord,
    V: Clone,
{
    mapping.entry(key).or_insert_with(|| template.clone())
}

/// Append `item` unless an element with the same identity is already present.
///
/// Returns `true` when the item was appended.
pub fn add_unique<T, I, F>(list: &mut Vec<T>, item: T, identity: F) -> bool
where
    I: PartialEq,
    F: Fn(&T) -> I,
{
    let id = identity(&item);
    if list.iter().any(|existing| identity(existing) == id) {
        return false;
    }
    list.push(item);
    true
}

/// Append every element of `items` with [`add_unique`].
pub fn extend_unique<T, I, F>(list: &mut Vec<T>, items: impl IntoIterator<Item = T>, identity: F)
where
    I: PartialEq,
    F: Fn(&T) -> I,
{
    for item in items {
        add_unique(list, item, &identity);
    }
}

/// Insert `record` under `key`, folding it into an existing record instead of
/// overwriting it.
///
/// List fields are merged with [`add_unique`]; scalar fields keep their first
/// value and are only filled in when still absent.
pub fn insert_or_merge(catalog: &mut Catalog, key: String, record: Record) {
    match catalog.get_mut(&key) {
        None => {
            catalog.insert(key, record);
        }
        Some(existing) => merge_record(existing, record),
    }
}

fn merge_record(into: &mut Record, from: Record) {
    extend_unique(&mut into.alternate_name, from.alternate_name, |a| a.name.clone());
    extend_unique(&mut into.measurement_type, from.measurement_type, String::clone);
    extend_unique(&mut into.target_list, from.target_list, String::clone);
    extend_unique(&mut into.instrument_list, from.instrument_list, |i| i.name.clone());
    extend_unique(&mut into.reference_url, from.reference_url, |r| r.url.clone());
    if into.facility_type.is_none() {
        into.facility_type = from.facility_type;
    }
    if into.location.is_none() {
        into.location = from.location;
    }
    if into.facility_group.is_none() {
        into.facility_group = from.facility_group;
    }
    if into.launch_date.is_none() {
        into.launch_date = from.launch_date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlternateName, FacilityType, Instrument};

    #[test]
    fn add_unique_is_idempotent() {
        let mut list = Vec::new();
        assert!(add_unique(&mut list, "Saturn".to_string(), String::clone));
        assert!(!add_unique(&mut list, "Saturn".to_string(), String::clone));
        assert_eq!(list, vec!["Saturn"]);
    }

    #[test]
    fn add_unique_keeps_insertion_order() {
        let mut list = Vec::new();
        for target in ["Jupiter", "Io", "Jupiter", "Europa", "Io"] {
            add_unique(&mut list, target.to_string(), String::clone);
        }
        assert_eq!(list, vec!["Jupiter", "Io", "Europa"]);
    }

    #[test]
    fn add_unique_uses_identity_not_equality() {
        let mut list = vec![Instrument {
            name: "MAG".to_string(),
            id: "MAG-1".to_string(),
        }];
        let added = add_unique(
            &mut list,
            Instrument {
                name: "MAG".to_string(),
                id: "MAG-2".to_string(),
            },
            |i| i.name.clone(),
        );
        assert!(!added);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "MAG-1");
    }

    #[test]
    fn add_unique_names_are_case_sensitive() {
        let mut list = Vec::new();
        add_unique(&mut list, AlternateName::new("Voyager 1", "x"), |a| a.name.clone());
        add_unique(&mut list, AlternateName::new("VOYAGER 1", "x"), |a| a.name.clone());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn ensure_inserts_template_once() {
        let mut mapping: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        ensure(&mut mapping, "a".to_string(), &vec![]).push(1);
        ensure(&mut mapping, "a".to_string(), &vec![]).push(2);
        ensure(&mut mapping, "b".to_string(), &vec![9]).push(3);
        assert_eq!(mapping["a"], vec![1, 2]);
        assert_eq!(mapping["b"], vec![9, 3]);
    }

    #[test]
    fn ensure_copies_template() {
        let template = vec![0u32];
        let mut mapping = BTreeMap::new();
        ensure(&mut mapping, 1, &template).push(5);
        assert_eq!(template, vec![0]);
        assert_eq!(mapping[&1], vec![0, 5]);
    }

    #[test]
    fn insert_or_merge_folds_names_and_keeps_first_scalars() {
        let mut catalog = Catalog::new();
        let first = Record::named(AlternateName::new("-82", "naif").with_id("-82"))
            .with_facility_type(FacilityType::Spacecraft);
        let second = Record::named(AlternateName::new("CASSINI", "naif").with_id("-82"))
            .with_facility_type(FacilityType::Observatory);
        insert_or_merge(&mut catalog, "naif:-82".to_string(), first.clone());
        insert_or_merge(&mut catalog, "naif:-82".to_string(), second);
        insert_or_merge(&mut catalog, "naif:-82".to_string(), first);

        let record = &catalog["naif:-82"];
        let names: Vec<&str> = record.alternate_name.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["-82", "CASSINI"]);
        assert_eq!(record.facility_type, Some(FacilityType::Spacecraft));
    }
}
