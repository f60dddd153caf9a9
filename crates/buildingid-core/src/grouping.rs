//! Grouping — collects registrations that belong to the same building
//!
//! Records are grouped by exact equality of their building identifier.
//! Nothing fuzzy happens here: near-misses ("Rd" vs "Road") land in separate
//! groups and are left for review.
//!
//! # Determinism
//!
//! Groups are ordered by identifier (`BTreeMap`), and indices inside a group
//! keep input order, so the same input always yields the same output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::identifier::BuildingIdentifier;
use crate::Result;

/// The building fields of a registration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildingAddress {
    /// Street address of the building, without the flat number
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub postcode: String,
}

impl BuildingAddress {
    pub fn new(address: impl Into<String>, postcode: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            postcode: postcode.into(),
        }
    }

    /// The canonical identifier, or `None` if nothing survives normalization
    pub fn identifier(&self) -> Option<BuildingIdentifier> {
        BuildingIdentifier::from_address(&self.address, &self.postcode)
    }
}

/// A set of records sharing one identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildingGroup {
    pub identifier: BuildingIdentifier,
    /// Indices into the input slice, in input order
    pub records: Vec<usize>,
}

/// Outcome of grouping a batch of records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildingGroups {
    pub groups: Vec<BuildingGroup>,
    /// Records whose identifier came out empty
    pub unmatched: Vec<usize>,
}

impl BuildingGroups {
    /// Groups containing more than one record
    pub fn duplicates(&self) -> impl Iterator<Item = &BuildingGroup> {
        self.groups.iter().filter(|g| g.records.len() > 1)
    }

    /// Find the group for an identifier
    pub fn get(&self, identifier: &BuildingIdentifier) -> Option<&BuildingGroup> {
        self.groups
            .binary_search_by(|g| g.identifier.cmp(identifier))
            .ok()
            .map(|i| &self.groups[i])
    }
}

// ── Public API ────────────────────────────────────────────

/// True iff both records normalize to the same non-empty identifier.
pub fn same_building(a: &BuildingAddress, b: &BuildingAddress) -> bool {
    match (a.identifier(), b.identifier()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Group records by building identifier.
pub fn group_by_building(records: &[BuildingAddress]) -> BuildingGroups {
    let mut by_id: BTreeMap<BuildingIdentifier, Vec<usize>> = BTreeMap::new();
    let mut unmatched = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match record.identifier() {
            Some(id) => by_id.entry(id).or_default().push(index),
            None => unmatched.push(index),
        }
    }

    BuildingGroups {
        groups: by_id
            .into_iter()
            .map(|(identifier, records)| BuildingGroup {
                identifier,
                records,
            })
            .collect(),
        unmatched,
    }
}

/// Decode a JSON array of records.
///
/// Extra fields on each record are ignored; missing `address` or `postcode`
/// default to the empty string.
///
/// # Errors
/// Returns `ParseError` if the input is not a JSON array of objects.
pub fn parse_records(json: &str) -> Result<Vec<BuildingAddress>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn sample() -> Vec<BuildingAddress> {
        vec![
            BuildingAddress::new("Wymering Mansions", "NW6 6HE"),
            BuildingAddress::new("St. Mary's Court", "E1 4AA"),
            BuildingAddress::new("WYMERING  MANSIONS", "nw66he"),
            BuildingAddress::new("...", ""),
            BuildingAddress::new("Wymering Mansion", "NW6 6HE"),
            BuildingAddress::new("st marys court", "E1 4AA"),
        ]
    }

    #[test]
    fn test_same_building() {
        let records = sample();
        assert!(same_building(&records[0], &records[2]));
        assert!(same_building(&records[1], &records[5]));
        assert!(!same_building(&records[0], &records[4]));
    }

    #[test]
    fn test_empty_identifiers_never_match() {
        let empty = BuildingAddress::new("", "");
        assert!(!same_building(&empty, &empty));
        assert!(!same_building(&empty, &BuildingAddress::new("---", "...")));
    }

    #[test]
    fn test_group_by_building() {
        let groups = group_by_building(&sample());
        let summary: Vec<(&str, &[usize])> = groups
            .groups
            .iter()
            .map(|g| (g.identifier.as_str(), g.records.as_slice()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("stmaryscourte14aa", &[1, 5][..]),
                ("wymeringmansionnw66he", &[4][..]),
                ("wymeringmansionsnw66he", &[0, 2][..]),
            ]
        );
        assert_eq!(groups.unmatched, vec![3]);
    }

    #[test]
    fn test_duplicates() {
        let groups = group_by_building(&sample());
        let dupes: Vec<&str> = groups.duplicates().map(|g| g.identifier.as_str()).collect();
        assert_eq!(dupes, vec!["stmaryscourte14aa", "wymeringmansionsnw66he"]);
    }

    #[test]
    fn test_get_group() {
        let groups = group_by_building(&sample());
        let id = BuildingIdentifier::parse("wymeringmansionsnw66he").unwrap();
        assert_eq!(groups.get(&id).map(|g| g.records.clone()), Some(vec![0, 2]));
        let missing = BuildingIdentifier::parse("nowhere").unwrap();
        assert!(groups.get(&missing).is_none());
    }

    #[test]
    fn test_group_empty_input() {
        let groups = group_by_building(&[]);
        assert!(groups.groups.is_empty());
        assert!(groups.unmatched.is_empty());
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let records = sample();
        let first = group_by_building(&records);
        for _ in 0..100 {
            assert_eq!(first, group_by_building(&records));
        }
    }

    #[test]
    fn test_parse_records() {
        let json = r#"[
            {"address": "Wymering Mansions", "postcode": "NW6 6HE", "flat": "12"},
            {"postcode": "E1 4AA"},
            {}
        ]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], BuildingAddress::new("Wymering Mansions", "NW6 6HE"));
        assert_eq!(records[1], BuildingAddress::new("", "E1 4AA"));
        assert_eq!(records[2], BuildingAddress::default());
    }

    #[test]
    fn test_parse_records_rejects_non_array() {
        assert!(matches!(
            parse_records(r#"{"address": "x"}"#),
            Err(Error::ParseError(_))
        ));
        assert!(matches!(parse_records("not json"), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_groups_serialize() {
        let records = vec![
            BuildingAddress::new("A House", "N1 1AA"),
            BuildingAddress::new("a-house", "n11aa"),
            BuildingAddress::new("", ""),
        ];
        let json = serde_json::to_value(group_by_building(&records)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "groups": [{"identifier": "ahousen11aa", "records": [0, 1]}],
                "unmatched": [2],
            })
        );
    }
}
