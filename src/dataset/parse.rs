//! Decoding raw JSON text into a validated `ProjectDataset`.

use crate::dataset::{ProjectDataset, Slot};
use crate::errors::DatasetError;

/// Decode one project document.
///
/// Validation is eager: every record must carry `dataConsumed` and
/// `dataReceived` as string-to-string objects. A structural mismatch
/// fails here, tagged with the slot, instead of faulting at first access.
/// Callers keep whatever dataset they already held for that slot.
pub fn parse_dataset(slot: Slot, text: &str) -> Result<ProjectDataset, DatasetError> {
    serde_json::from_str(text).map_err(|source| DatasetError::Parse { slot, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::flatten;
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"{
        "svc1": {
            "dataConsumed": { "dataConsumed 1": "orders", "dataConsumed 2": "" },
            "dataReceived": { "dataReceived 1": "invoices" }
        },
        "svc2": {
            "dataConsumed": {},
            "dataReceived": {}
        }
    }"#;

    #[test]
    fn parses_document_preserving_order() {
        let dataset = parse_dataset(Slot::X, DOC).expect("parse");

        let keys: Vec<&str> = dataset.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["svc1", "svc2"]);

        let svc1 = &dataset["svc1"];
        assert_eq!(flatten(&svc1.consumed), "orders");
        assert_eq!(flatten(&svc1.received), "invoices");
        assert_eq!(flatten(&dataset["svc2"].consumed), "N/A");
    }

    #[test]
    fn malformed_json_is_a_parse_error_naming_the_slot() {
        let err = parse_dataset(Slot::Y, "{ not json").expect_err("must fail");
        assert!(matches!(err, DatasetError::Parse { slot: Slot::Y, .. }));
        assert!(err.to_string().contains("project Y"));
    }

    #[test]
    fn missing_group_field_fails_eagerly() {
        let text = r#"{ "svc1": { "dataConsumed": {} } }"#;
        let err = parse_dataset(Slot::X, text).expect_err("must fail");
        assert!(err.to_string().contains("dataReceived"));
    }

    #[test]
    fn non_string_group_value_fails_eagerly() {
        let text = r#"{ "svc1": {
            "dataConsumed": { "dataConsumed 1": 7 },
            "dataReceived": {}
        } }"#;
        parse_dataset(Slot::X, text).expect_err("must fail");
    }

    #[test]
    fn top_level_array_is_rejected() {
        parse_dataset(Slot::X, "[]").expect_err("must fail");
    }
}
