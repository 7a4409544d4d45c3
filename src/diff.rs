//! Field-level diff between the two project datasets.
//!
//! The comparison is one-directional: it walks project X's records in
//! document order, so a record present only in project Y is never
//! reported. Intentional; `keys_only_in_y_are_not_reported` pins it.

use crate::dataset::{EMPTY_GROUP, ProjectDataset, Slot, flatten};
use serde::Serialize;

/// Which attribute group a highlight query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Consumed,
    Received,
}

/// One reported discrepancy, with both sides already flattened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffEntry {
    pub key: String,
    pub x_consumed: String,
    pub x_received: String,
    pub y_consumed: String,
    pub y_received: String,
}

impl DiffEntry {
    fn value(&self, slot: Slot, field: Field) -> &str {
        match (slot, field) {
            (Slot::X, Field::Consumed) => &self.x_consumed,
            (Slot::X, Field::Received) => &self.x_received,
            (Slot::Y, Field::Consumed) => &self.y_consumed,
            (Slot::Y, Field::Received) => &self.y_received,
        }
    }
}

/// The most recent comparison result. Recomputed and replaced wholesale on
/// every comparison request; there is no incremental diff state.
#[derive(Debug, Clone, Default)]
pub struct DiffReport {
    entries: Vec<DiffEntry>,
}

impl DiffReport {
    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    /// Per-cell highlight predicate: false when the key has no diff entry
    /// (the record was identical, or it exists only in project Y),
    /// otherwise true iff that field's flattened values differ. The slot
    /// argument cannot change the answer because string inequality is
    /// symmetric; it is accepted so callers can ask per cell.
    pub fn highlight(&self, key: &str, slot: Slot, field: Field) -> bool {
        let Some(entry) = self.entries.iter().find(|e| e.key == key) else {
            return false;
        };

        let other = match slot {
            Slot::X => Slot::Y,
            Slot::Y => Slot::X,
        };
        entry.value(slot, field) != entry.value(other, field)
    }
}

/// Walk X's records in document order and report every record whose
/// flattened consumed or received string differs from Y's. A record absent
/// from Y compares against the literal "N/A" on both fields. Comparison is
/// exact and case-sensitive, "N/A" included.
pub fn compare(x: &ProjectDataset, y: &ProjectDataset) -> DiffReport {
    let mut entries = Vec::new();

    for (key, record) in x {
        let x_consumed = flatten(&record.consumed);
        let x_received = flatten(&record.received);

        let (y_consumed, y_received) = match y.get(key) {
            Some(other) => (flatten(&other.consumed), flatten(&other.received)),
            None => (EMPTY_GROUP.to_string(), EMPTY_GROUP.to_string()),
        };

        if x_consumed != y_consumed || x_received != y_received {
            entries.push(DiffEntry {
                key: key.clone(),
                x_consumed,
                x_received,
                y_consumed,
                y_received,
            });
        }
    }

    DiffReport { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{AttributeGroup, Record};
    use pretty_assertions::assert_eq;

    fn record(consumed: &[&str], received: &[&str]) -> Record {
        fn group(stem: &str, values: &[&str]) -> AttributeGroup {
            values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("{} {}", stem, i + 1), v.to_string()))
                .collect()
        }
        Record {
            consumed: group("dataConsumed", consumed),
            received: group("dataReceived", received),
        }
    }

    fn dataset(records: &[(&str, Record)]) -> ProjectDataset {
        records
            .iter()
            .map(|(k, r)| (k.to_string(), r.clone()))
            .collect()
    }

    #[test]
    fn identical_datasets_produce_no_entries() {
        let x = dataset(&[
            ("svc1", record(&["in"], &["out"])),
            ("svc2", record(&[], &["log"])),
        ]);
        let y = x.clone();
        assert!(compare(&x, &y).entries().is_empty());
    }

    #[test]
    fn record_missing_from_y_compares_against_placeholder() {
        let x = dataset(&[("svc1", record(&["in"], &["out"]))]);
        let y = ProjectDataset::new();

        assert_eq!(
            compare(&x, &y).entries(),
            &[DiffEntry {
                key: "svc1".to_string(),
                x_consumed: "in".to_string(),
                x_received: "out".to_string(),
                y_consumed: "N/A".to_string(),
                y_received: "N/A".to_string(),
            }]
        );
    }

    #[test]
    fn keys_only_in_y_are_not_reported() {
        let x = dataset(&[("svc1", record(&["in"], &["out"]))]);
        let y = dataset(&[
            ("svc1", record(&["in"], &["out"])),
            ("svc2", record(&["extra"], &[])),
        ]);
        assert!(compare(&x, &y).entries().is_empty());
    }

    #[test]
    fn entries_follow_x_key_order() {
        let x = dataset(&[
            ("zeta", record(&["1"], &[])),
            ("alpha", record(&["2"], &[])),
        ]);
        let y = ProjectDataset::new();

        let result = compare(&x, &y);
        let keys: Vec<&str> = result
            .entries()
            .iter()
            .map(|e| e.key.as_str())
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn empty_group_matches_missing_record() {
        // X's empty groups flatten to "N/A", the same placeholder used for
        // records absent from Y, so such a record is not a difference.
        let x = dataset(&[("svc1", record(&[], &[]))]);
        let y = ProjectDataset::new();
        assert!(compare(&x, &y).entries().is_empty());
    }

    #[test]
    fn highlight_is_per_field() {
        let x = dataset(&[("svc1", record(&["in"], &["out"]))]);
        let y = dataset(&[("svc1", record(&["in"], &["changed"]))]);
        let report = compare(&x, &y);

        assert!(!report.highlight("svc1", Slot::X, Field::Consumed));
        assert!(report.highlight("svc1", Slot::X, Field::Received));
    }

    #[test]
    fn highlight_is_slot_symmetric() {
        let x = dataset(&[("svc1", record(&["in"], &["out"]))]);
        let y = dataset(&[("svc1", record(&["other"], &["out"]))]);
        let report = compare(&x, &y);

        for field in [Field::Consumed, Field::Received] {
            assert_eq!(
                report.highlight("svc1", Slot::X, field),
                report.highlight("svc1", Slot::Y, field)
            );
        }
    }

    #[test]
    fn highlight_is_false_for_unknown_keys() {
        let report = DiffReport::default();
        assert!(!report.highlight("svc1", Slot::X, Field::Consumed));
    }
}
