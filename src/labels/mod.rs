//! Label catalog and pull request assignments.

mod assignments;
mod catalog;
pub mod identity;

pub use assignments::AssignmentStore;
pub use catalog::LabelCatalog;
