pub const SCHEMA: &str = r#"
-- Reusable labels, deduplicated per (project, repository, name) through hash
CREATE TABLE IF NOT EXISTS labels (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id INTEGER NOT NULL,
    repository_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    color TEXT NOT NULL,
    hash TEXT NOT NULL UNIQUE  -- sha-256 hex of "project@repository@name"
);

-- Assignments of labels to pull requests; labels outlive their items
CREATE TABLE IF NOT EXISTS label_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    label_id INTEGER NOT NULL REFERENCES labels(id),
    project_id INTEGER NOT NULL,
    repository_id INTEGER NOT NULL,
    pull_request_id INTEGER NOT NULL
);

-- Create indexes
CREATE INDEX IF NOT EXISTS idx_labels_scope ON labels(project_id, repository_id);
CREATE INDEX IF NOT EXISTS idx_label_items_pull_request
    ON label_items(project_id, repository_id, pull_request_id);
CREATE INDEX IF NOT EXISTS idx_label_items_repository ON label_items(repository_id);
CREATE INDEX IF NOT EXISTS idx_label_items_label ON label_items(label_id);
"#;
