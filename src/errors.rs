//! Typed failures for dataset operations.
//!
//! Every failure is terminal for the triggering action only: a parse error
//! leaves the slot's previous dataset in place, and a missing-key edit
//! leaves the dataset untouched. Neither corrupts unrelated state.

use crate::dataset::Slot;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    /// The input text for a project slot did not decode as a dataset
    /// document (bad JSON, or a record missing its attribute groups).
    #[error("project {slot}: cannot parse dataset: {source}")]
    Parse {
        slot: Slot,
        #[source]
        source: serde_json::Error,
    },

    /// An edit or preview named a record the target dataset does not have.
    #[error("project {slot}: no record named '{key}'")]
    KeyNotFound { slot: Slot, key: String },
}
