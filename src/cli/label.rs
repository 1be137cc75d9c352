use std::sync::Arc;

use serde::Serialize;

use super::{FilterArgs, StoreArgs, init_store};
use crate::labels::{AssignmentStore, identity};
use crate::types::LabelView;

#[derive(Serialize)]
struct CreatedOutput {
    item_id: i64,
}

#[derive(Serialize)]
struct UnassignedOutput {
    removed: usize,
}

fn open_assignments(args: &StoreArgs) -> anyhow::Result<AssignmentStore> {
    let store = init_store(args)?;
    Ok(AssignmentStore::new(Arc::new(store))?)
}

pub fn run_label_create(
    store: &StoreArgs,
    project_id: i32,
    repository_id: i32,
    pull_request_id: i64,
    name: &str,
    color: &str,
    json: bool,
) -> anyhow::Result<()> {
    let assignments = open_assignments(store)?;
    let item_id = assignments.create(project_id, repository_id, pull_request_id, name, color)?;
    assignments.flush()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&CreatedOutput { item_id })?
        );
    } else {
        println!("Assigned '{name}' to pull request {pull_request_id} (item {item_id})");
    }

    Ok(())
}

pub fn run_label_list(store: &StoreArgs, filter: &FilterArgs, json: bool) -> anyhow::Result<()> {
    let assignments = open_assignments(store)?;
    let labels = assignments.find(&filter.to_filter()?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&labels)?);
        return Ok(());
    }

    print_labels(&labels);
    Ok(())
}

fn print_labels(labels: &[LabelView]) {
    if labels.is_empty() {
        println!("No labels found");
        return;
    }

    println!(
        "{:<8} {:<8} {:<8} {:<8} {:<8} {:<24} COLOR",
        "ITEM", "LABEL", "PROJECT", "REPO", "PR", "NAME"
    );
    for label in labels {
        println!(
            "{:<8} {:<8} {:<8} {:<8} {:<8} {:<24} {}",
            label.item_id,
            label.label_id,
            label.project_id,
            label.repository_id,
            label.pull_request_id,
            label.name,
            label.color
        );
    }
}

pub fn run_label_update(
    store: &StoreArgs,
    project_id: i32,
    repository_id: i32,
    label_id: i64,
    name: &str,
    color: &str,
) -> anyhow::Result<()> {
    let assignments = open_assignments(store)?;
    assignments.update(project_id, repository_id, label_id, name, color)?;
    assignments.flush()?;

    println!("Updated label {label_id}");
    Ok(())
}

pub fn run_label_unassign(
    store: &StoreArgs,
    filter: &FilterArgs,
    json: bool,
) -> anyhow::Result<()> {
    let assignments = open_assignments(store)?;
    let labels = assignments.find(&filter.to_filter()?)?;
    assignments.delete_items(&labels)?;
    assignments.flush()?;

    let removed = labels.len();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&UnassignedOutput { removed })?
        );
    } else {
        println!("Removed {removed} label assignment(s)");
    }

    Ok(())
}

pub fn run_label_hash(project_id: i32, repository_id: i32, name: &str) {
    println!("{}", identity::hash(project_id, repository_id, name));
}
