use std::sync::Arc;

use tracing::{debug, warn};

use super::identity;
use crate::error::Result;
use crate::store::Store;
use crate::types::{Label, NewLabel};

/// Owns label rows and the one-label-per-scoped-name invariant.
pub struct LabelCatalog {
    store: Arc<dyn Store>,
}

impl LabelCatalog {
    /// Fails with `Error::HashingUnavailable` if the digest self test fails.
    pub fn new(store: Arc<dyn Store>) -> Result<Self> {
        identity::verify_digest()?;
        Ok(Self { store })
    }

    /// Inserts the label, or returns the row already stored under the same
    /// scoped name. An existing row is returned as stored; `color` is not
    /// applied to it.
    ///
    /// When the insert fails and no row with the same name exists in the
    /// scope, the insert error is returned.
    pub fn create_or_get_label(
        &self,
        project_id: i32,
        repository_id: i32,
        name: &str,
        color: &str,
    ) -> Result<Label> {
        let new_label = NewLabel {
            project_id,
            repository_id,
            name: name.to_string(),
            color: color.to_string(),
            hash: identity::hash(project_id, repository_id, name),
        };

        match self.store.insert_label(&new_label) {
            Ok(label) => Ok(label),
            Err(insert_err) => {
                match self
                    .store
                    .get_label_by_name(project_id, repository_id, name)?
                {
                    Some(existing) => {
                        debug!(
                            label_id = existing.id,
                            project_id,
                            repository_id,
                            "label already exists, reusing ({insert_err})"
                        );
                        Ok(existing)
                    }
                    None => Err(insert_err),
                }
            }
        }
    }

    /// Rewrites name, color and identity of a label in the given scope.
    ///
    /// A label that does not exist in the scope is skipped with a warning.
    /// Renaming onto a name already used in the scope fails with
    /// `Error::DuplicateLabel`.
    pub fn update_label(
        &self,
        project_id: i32,
        repository_id: i32,
        label_id: i64,
        name: &str,
        color: &str,
    ) -> Result<()> {
        let Some(mut label) = self.store.get_label(project_id, repository_id, label_id)? else {
            warn!(
                project_id,
                repository_id, label_id, "no label found to update in scope"
            );
            return Ok(());
        };

        label.name = name.to_string();
        label.color = color.to_string();
        label.hash = identity::hash(project_id, repository_id, name);

        self.store.save_label(&label)
    }

    pub fn get_label(
        &self,
        project_id: i32,
        repository_id: i32,
        label_id: i64,
    ) -> Result<Option<Label>> {
        self.store.get_label(project_id, repository_id, label_id)
    }

    /// Identity of the label's current scope and name.
    #[must_use]
    pub fn hash(&self, label: &Label) -> String {
        identity::hash(label.project_id, label.repository_id, &label.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::store::SqliteStore;

    fn catalog() -> (Arc<SqliteStore>, LabelCatalog) {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        store.initialize().unwrap();
        let catalog = LabelCatalog::new(store.clone()).unwrap();
        (store, catalog)
    }

    fn label_count(store: &SqliteStore) -> i64 {
        store
            .connection()
            .query_row("SELECT COUNT(*) FROM labels", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_create_or_get_reuses_existing() {
        let (store, catalog) = catalog();

        let first = catalog.create_or_get_label(1, 10, "bug", "#ff0000").unwrap();
        let second = catalog.create_or_get_label(1, 10, "bug", "#00ff00").unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.color, "#ff0000");
        assert_eq!(label_count(&store), 1);
    }

    #[test]
    fn test_same_name_in_other_scope_is_new_label() {
        let (store, catalog) = catalog();

        let a = catalog.create_or_get_label(1, 10, "bug", "#ff0000").unwrap();
        let b = catalog.create_or_get_label(1, 11, "bug", "#ff0000").unwrap();
        let c = catalog.create_or_get_label(1, 10, "Bug", "#ff0000").unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(a.id, c.id);
        assert_eq!(label_count(&store), 3);
    }

    #[test]
    fn test_insert_error_surfaces_without_existing_row() {
        let (store, catalog) = catalog();
        store
            .connection()
            .execute_batch(
                "CREATE TRIGGER reject_labels BEFORE INSERT ON labels
                 BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
            )
            .unwrap();

        let result = catalog.create_or_get_label(1, 10, "bug", "#ff0000");
        assert!(matches!(result, Err(Error::Database(_))));
        assert_eq!(label_count(&store), 0);
    }

    #[test]
    fn test_failed_fallback_read_surfaces() {
        let (store, catalog) = catalog();
        store
            .connection()
            .execute_batch("DROP TABLE label_items; DROP TABLE labels;")
            .unwrap();

        let result = catalog.create_or_get_label(1, 10, "bug", "#ff0000");
        assert!(matches!(result, Err(Error::Database(_))));
    }

    #[test]
    fn test_update_rewrites_identity() {
        let (_store, catalog) = catalog();

        let label = catalog.create_or_get_label(1, 10, "bug", "#ff0000").unwrap();
        catalog
            .update_label(1, 10, label.id, "defect", "#0000ff")
            .unwrap();

        let updated = catalog.get_label(1, 10, label.id).unwrap().unwrap();
        assert_eq!(updated.name, "defect");
        assert_eq!(updated.color, "#0000ff");
        assert_eq!(updated.hash, identity::hash(1, 10, "defect"));
        assert_eq!(catalog.hash(&updated), updated.hash);

        let again = catalog.create_or_get_label(1, 10, "defect", "#ffffff").unwrap();
        assert_eq!(again.id, label.id);
    }

    #[test]
    fn test_update_missing_label_is_noop() {
        let (store, catalog) = catalog();

        catalog.update_label(1, 10, 42, "bug", "#ff0000").unwrap();
        assert_eq!(label_count(&store), 0);

        let label = catalog.create_or_get_label(1, 10, "bug", "#ff0000").unwrap();
        catalog
            .update_label(2, 10, label.id, "moved", "#ff0000")
            .unwrap();
        assert_eq!(
            catalog.get_label(1, 10, label.id).unwrap().unwrap().name,
            "bug"
        );
    }

    #[test]
    fn test_update_onto_taken_name_rejected() {
        let (_store, catalog) = catalog();

        catalog.create_or_get_label(1, 10, "bug", "#ff0000").unwrap();
        let feature = catalog
            .create_or_get_label(1, 10, "feature", "#00ff00")
            .unwrap();

        let result = catalog.update_label(1, 10, feature.id, "bug", "#00ff00");
        assert!(matches!(result, Err(Error::DuplicateLabel)));
        assert_eq!(
            catalog.get_label(1, 10, feature.id).unwrap().unwrap().name,
            "feature"
        );
    }
}
