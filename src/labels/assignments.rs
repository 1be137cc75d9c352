use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::warn;

use super::LabelCatalog;
use crate::error::Result;
use crate::store::Store;
use crate::types::{Label, LabelFilter, LabelView, NewLabelItem};

/// Owns label assignments to pull requests and answers label queries by
/// joining them against the catalog.
pub struct AssignmentStore {
    store: Arc<dyn Store>,
    catalog: LabelCatalog,
}

impl AssignmentStore {
    pub fn new(store: Arc<dyn Store>) -> Result<Self> {
        let catalog = LabelCatalog::new(store.clone())?;
        Ok(Self { store, catalog })
    }

    pub fn catalog(&self) -> &LabelCatalog {
        &self.catalog
    }

    /// Labels assigned under the filter, one entry per assignment.
    ///
    /// Ordering is whatever the store returns.
    pub fn find(&self, filter: &LabelFilter) -> Result<Vec<LabelView>> {
        let items = self.store.find_label_items(filter)?;

        let label_ids: BTreeSet<i64> = items.iter().map(|item| item.label_id).collect();
        if label_ids.is_empty() {
            return Ok(Vec::new());
        }

        let label_ids: Vec<i64> = label_ids.into_iter().collect();
        let labels: HashMap<i64, Label> = self
            .store
            .list_labels_by_ids(&label_ids)?
            .into_iter()
            .map(|label| (label.id, label))
            .collect();

        Ok(items
            .iter()
            .filter_map(|item| match labels.get(&item.label_id) {
                Some(label) => Some(LabelView::new(item, label)),
                None => {
                    warn!(
                        item_id = item.id,
                        label_id = item.label_id,
                        "label item references a missing label"
                    );
                    None
                }
            })
            .collect())
    }

    /// Attaches a label to a pull request, creating the label on first use.
    /// Returns the id of the new assignment.
    ///
    /// The label and the assignment are written separately. If the second
    /// write fails the label stays in the catalog; calling again with the
    /// same arguments reuses it.
    pub fn create(
        &self,
        project_id: i32,
        repository_id: i32,
        pull_request_id: i64,
        name: &str,
        color: &str,
    ) -> Result<i64> {
        let label = self
            .catalog
            .create_or_get_label(project_id, repository_id, name, color)?;

        let item = self.store.insert_label_item(&NewLabelItem {
            label_id: label.id,
            project_id,
            repository_id,
            pull_request_id,
        })?;

        Ok(item.id)
    }

    pub fn update(
        &self,
        project_id: i32,
        repository_id: i32,
        label_id: i64,
        name: &str,
        color: &str,
    ) -> Result<()> {
        self.catalog
            .update_label(project_id, repository_id, label_id, name, color)
    }

    /// Removes the assignments behind the given views in one statement.
    /// Labels are kept.
    pub fn delete_items(&self, labels: &[LabelView]) -> Result<()> {
        let item_ids: Vec<i64> = labels.iter().map(|view| view.item_id).collect();
        if item_ids.is_empty() {
            return Ok(());
        }

        self.store.delete_label_items(&item_ids)?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.store.flush()
    }
}
