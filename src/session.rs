//! Session state: the two project datasets plus the last computed diff.
//!
//! All mutable state is owned by one object and every mutation goes
//! through a method, so each user action stays independently recoverable.

use crate::dataset::edit::{GroupEdit, rebuild_group};
use crate::dataset::parse::parse_dataset;
use crate::dataset::{CONSUMED_GROUP, ProjectDataset, RECEIVED_GROUP, Slot, flatten};
use crate::diff::{DiffReport, compare};
use crate::errors::DatasetError;

use anyhow::Context;
use std::path::{Path, PathBuf};

/// Current flattened strings for one record, offered to whoever is about to
/// source replacement lists.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplacementPreview {
    pub consumed: String,
    pub received: String,
}

#[derive(Debug, Default)]
pub struct Session {
    x: ProjectDataset,
    y: ProjectDataset,
    last_diff: DiffReport,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self, slot: Slot) -> &ProjectDataset {
        match slot {
            Slot::X => &self.x,
            Slot::Y => &self.y,
        }
    }

    fn dataset_mut(&mut self, slot: Slot) -> &mut ProjectDataset {
        match slot {
            Slot::X => &mut self.x,
            Slot::Y => &mut self.y,
        }
    }

    /// Replace the slot's dataset with the parse of `text`. On a parse
    /// failure the slot keeps its previous dataset, with no partial
    /// overwrite.
    pub fn load_slot(&mut self, slot: Slot, text: &str) -> Result<(), DatasetError> {
        let dataset = parse_dataset(slot, text)?;
        *self.dataset_mut(slot) = dataset;
        Ok(())
    }

    /// Read a document from disk and load it into the slot.
    pub fn load_file(&mut self, slot: Slot, path: &str) -> crate::Result<()> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read project {} dataset {}", slot, path))?;
        self.load_slot(slot, &text)?;
        Ok(())
    }

    /// Current flattened values for a record, for edit previews.
    pub fn replacement_preview(
        &self,
        slot: Slot,
        key: &str,
    ) -> Result<ReplacementPreview, DatasetError> {
        let record = self
            .dataset(slot)
            .get(key)
            .ok_or_else(|| DatasetError::KeyNotFound {
                slot,
                key: key.to_string(),
            })?;

        Ok(ReplacementPreview {
            consumed: flatten(&record.consumed),
            received: flatten(&record.received),
        })
    }

    /// Apply replacement lists to one record. Each replaced group is
    /// rebuilt wholesale under fresh ordinal labels; `GroupEdit::Keep`
    /// leaves that group untouched.
    pub fn apply_edit(
        &mut self,
        slot: Slot,
        key: &str,
        consumed: GroupEdit,
        received: GroupEdit,
    ) -> Result<(), DatasetError> {
        let record = self
            .dataset_mut(slot)
            .get_mut(key)
            .ok_or_else(|| DatasetError::KeyNotFound {
                slot,
                key: key.to_string(),
            })?;

        if let GroupEdit::Replace(items) = consumed {
            record.consumed = rebuild_group(CONSUMED_GROUP, &items);
        }
        if let GroupEdit::Replace(items) = received {
            record.received = rebuild_group(RECEIVED_GROUP, &items);
        }
        Ok(())
    }

    /// Recompute the diff of X against Y, replacing the previous result
    /// wholesale.
    pub fn compare(&mut self) -> &DiffReport {
        self.last_diff = compare(&self.x, &self.y);
        &self.last_diff
    }

    pub fn last_diff(&self) -> &DiffReport {
        &self.last_diff
    }

    /// Write one slot's dataset as pretty-printed JSON (2-space indent),
    /// preserving record and label order.
    pub fn export_slot(&self, slot: Slot, path: &Path) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self.dataset(slot))?;
        std::fs::write(path, json)
            .with_context(|| format!("write project {} dataset {}", slot, path.display()))?;
        Ok(())
    }

    /// Export both datasets under `dir` as project-x.json / project-y.json.
    pub fn export(&self, dir: &Path) -> crate::Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for slot in [Slot::X, Slot::Y] {
            let path = dir.join(slot.export_file_name());
            self.export_slot(slot, &path)?;
            written.push(path);
        }
        Ok(written)
    }
}
