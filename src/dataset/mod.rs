//! Data model for the two project datasets.
//!
//! Input JSON shape (one document per project slot):
//! {
//!   "svc1": {
//!     "dataConsumed": { "dataConsumed 1": "orders", ... },
//!     "dataReceived": { "dataReceived 1": "invoices", ... }
//!   },
//!   ...
//! }
//!
//! Both maps preserve document order: record order drives diff emission
//! order, and label order within a group drives flattening order.

pub mod edit;
pub mod parse;

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Flattened stand-in for a group with no non-empty values. Also the
/// comparison value for records absent from project Y.
pub const EMPTY_GROUP: &str = "N/A";

/// JSON field names for the two attribute groups, reused as the stem of
/// regenerated ordinal labels ("dataConsumed 1", "dataConsumed 2", ...).
pub const CONSUMED_GROUP: &str = "dataConsumed";
pub const RECEIVED_GROUP: &str = "dataReceived";

/// One of the two independent dataset instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Slot {
    X,
    Y,
}

impl Slot {
    /// File name used when exporting this slot's dataset.
    pub fn export_file_name(self) -> &'static str {
        match self {
            Slot::X => "project-x.json",
            Slot::Y => "project-y.json",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::X => write!(f, "X"),
            Slot::Y => write!(f, "Y"),
        }
    }
}

/// Ordinal label -> value, in insertion order.
pub type AttributeGroup = IndexMap<String, String>;

/// One entity's attribute groups. Both groups are required in the input
/// document and always present in memory, though either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "dataConsumed")]
    pub consumed: AttributeGroup,

    #[serde(rename = "dataReceived")]
    pub received: AttributeGroup,
}

/// Record key -> record, in document order.
pub type ProjectDataset = IndexMap<String, Record>;

/// Join a group's non-empty values, in insertion order, with ", ".
/// An empty or all-empty group flattens to "N/A".
pub fn flatten(group: &AttributeGroup) -> String {
    let joined = group
        .values()
        .filter(|v| !v.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() {
        EMPTY_GROUP.to_string()
    } else {
        joined
    }
}

/// Flattened per-record row for tables and the HTML report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub key: String,
    pub consumed: String,
    pub received: String,
}

/// Flatten every record, in dataset order.
pub fn display_rows(dataset: &ProjectDataset) -> Vec<DisplayRow> {
    dataset
        .iter()
        .map(|(key, record)| DisplayRow {
            key: key.clone(),
            consumed: flatten(&record.consumed),
            received: flatten(&record.received),
        })
        .collect()
}
