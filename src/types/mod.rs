mod filter;
mod models;

pub use filter::LabelFilter;
pub use models::{Label, LabelItem, LabelView, NewLabel, NewLabelItem};
