mod query;
mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
///
/// Uniqueness of `Label::hash` is enforced by the implementation; an insert
/// or save that would duplicate a hash fails with `Error::DuplicateLabel`.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Label operations
    fn insert_label(&self, label: &NewLabel) -> Result<Label>;
    fn get_label(&self, project_id: i32, repository_id: i32, id: i64) -> Result<Option<Label>>;
    fn get_label_by_name(
        &self,
        project_id: i32,
        repository_id: i32,
        name: &str,
    ) -> Result<Option<Label>>;
    fn list_labels_by_ids(&self, ids: &[i64]) -> Result<Vec<Label>>;
    fn save_label(&self, label: &Label) -> Result<()>;

    // Label item operations
    fn insert_label_item(&self, item: &NewLabelItem) -> Result<LabelItem>;
    fn find_label_items(&self, filter: &LabelFilter) -> Result<Vec<LabelItem>>;
    fn delete_label_items(&self, ids: &[i64]) -> Result<usize>;

    /// Forces pending writes down to durable storage.
    fn flush(&self) -> Result<()>;
}
