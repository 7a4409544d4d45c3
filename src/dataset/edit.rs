//! Wholesale replacement of a record's attribute groups.
//!
//! Edits never merge: a replaced group drops all of its previous labels
//! and values, and an element removed from the replacement list disappears
//! from the stored group.

use crate::dataset::AttributeGroup;

/// Replacement instruction for a single group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupEdit {
    /// Leave the stored group untouched.
    Keep,
    /// Discard the stored group and rebuild it from these values.
    Replace(Vec<String>),
}

impl GroupEdit {
    /// Split a comma-separated list into a replacement. An empty string
    /// clears the group; elements are trimmed when the group is rebuilt.
    pub fn from_comma_list(text: &str) -> Self {
        if text.is_empty() {
            return GroupEdit::Replace(Vec::new());
        }
        GroupEdit::Replace(text.split(',').map(str::to_string).collect())
    }
}

/// Rebuild a group from a replacement list: each value is trimmed and
/// stored under a fresh `"<group_name> <n>"` label, 1-based, in list order.
pub fn rebuild_group(group_name: &str, items: &[String]) -> AttributeGroup {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (format!("{} {}", group_name, i + 1), item.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{CONSUMED_GROUP, flatten};
    use pretty_assertions::assert_eq;

    #[test]
    fn rebuild_trims_and_relabels() {
        let items = vec![" p ".to_string(), "q".to_string()];
        let group = rebuild_group(CONSUMED_GROUP, &items);

        let entries: Vec<(&str, &str)> = group
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            entries,
            vec![("dataConsumed 1", "p"), ("dataConsumed 2", "q")]
        );
        assert_eq!(flatten(&group), "p, q");
    }

    #[test]
    fn rebuild_from_empty_list_clears_the_group() {
        let group = rebuild_group(CONSUMED_GROUP, &[]);
        assert!(group.is_empty());
        assert_eq!(flatten(&group), "N/A");
    }

    #[test]
    fn comma_list_splits_into_replacement() {
        assert_eq!(
            GroupEdit::from_comma_list("a, b,c"),
            GroupEdit::Replace(vec!["a".to_string(), " b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn empty_comma_list_is_an_empty_replacement() {
        assert_eq!(GroupEdit::from_comma_list(""), GroupEdit::Replace(Vec::new()));
    }
}
