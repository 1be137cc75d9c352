use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: i64,
    pub project_id: i32,
    pub repository_id: i32,
    pub name: String,
    pub color: String,
    pub hash: String,
}

/// Insert payload for a label; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewLabel {
    pub project_id: i32,
    pub repository_id: i32,
    pub name: String,
    pub color: String,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelItem {
    pub id: i64,
    pub label_id: i64,
    pub project_id: i32,
    pub repository_id: i32,
    pub pull_request_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewLabelItem {
    pub label_id: i64,
    pub project_id: i32,
    pub repository_id: i32,
    pub pull_request_id: i64,
}

/// A label as seen through one of its assignments: the item's context plus
/// the catalog row it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelView {
    pub item_id: i64,
    pub label_id: i64,
    pub project_id: i32,
    pub repository_id: i32,
    pub pull_request_id: i64,
    pub name: String,
    pub color: String,
    pub hash: String,
}

impl LabelView {
    #[must_use]
    pub fn new(item: &LabelItem, label: &Label) -> Self {
        Self {
            item_id: item.id,
            label_id: label.id,
            project_id: item.project_id,
            repository_id: item.repository_id,
            pull_request_id: item.pull_request_id,
            name: label.name.clone(),
            color: label.color.clone(),
            hash: label.hash.clone(),
        }
    }
}
