//! # prlabels
//!
//! Label storage for pull requests: reusable labels scoped to a
//! project/repository pair, and per-pull-request assignments of those labels.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! prlabels = { version = "0.0", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use prlabels::labels::AssignmentStore;
//! use prlabels::store::{SqliteStore, Store};
//! use prlabels::types::LabelFilter;
//!
//! let store = SqliteStore::new("./data/prlabels.db").unwrap();
//! store.initialize().unwrap();
//!
//! let labels = AssignmentStore::new(Arc::new(store)).unwrap();
//! labels.create(1, 10, 42, "bug", "#ff0000").unwrap();
//! let found = labels
//!     .find(&LabelFilter::ByPullRequest { project_id: 1, repository_id: 10, pull_request_id: 42 })
//!     .unwrap();
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes the `prlabels` admin binary. Disable with `default-features = false`.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod labels;
pub mod store;
pub mod types;
