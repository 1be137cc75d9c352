use std::rc::Rc;

use rusqlite::ToSql;
use rusqlite::types::{ToSqlOutput, Value};
use rusqlite::vtab::array::Array;

use crate::types::LabelFilter;

/// A bound parameter: one scalar, or a whole set read through the `rarray`
/// table-valued function so a set costs one placeholder regardless of size.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Param {
    Scalar(Value),
    Set(Array),
}

impl ToSql for Param {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::Scalar(value) => value.to_sql(),
            Self::Set(values) => values.to_sql(),
        }
    }
}

/// A conjunction of conditions with positional parameters, rendered as
/// `?N` placeholders in the order values were added.
///
/// Set conditions need the `rarray` module loaded on the connection.
#[derive(Debug, Default)]
pub(super) struct Predicate {
    clauses: Vec<String>,
    params: Vec<Param>,
}

impl Predicate {
    fn bind(&mut self, param: Param) -> String {
        self.params.push(param);
        format!("?{}", self.params.len())
    }

    pub(super) fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        let placeholder = self.bind(Param::Scalar(value.into()));
        self.clauses.push(format!("{column} = {placeholder}"));
        self
    }

    pub(super) fn like(mut self, column: &str, pattern: &str) -> Self {
        let placeholder = self.bind(Param::Scalar(Value::Text(pattern.to_string())));
        self.clauses.push(format!("{column} LIKE {placeholder}"));
        self
    }

    pub(super) fn in_set<T>(mut self, column: &str, values: &[T]) -> Self
    where
        T: Copy + Into<Value>,
    {
        let set: Vec<Value> = values.iter().map(|v| (*v).into()).collect();
        let placeholder = self.bind(Param::Set(Rc::new(set)));
        self.clauses
            .push(format!("{column} IN rarray({placeholder})"));
        self
    }

    pub(super) fn sql(&self) -> String {
        self.clauses.join(" AND ")
    }

    pub(super) fn params(&self) -> &[Param] {
        &self.params
    }
}

/// Translates a filter into a predicate over the `item` and `label` aliases
/// of the item/label join.
pub(super) fn join_predicate(filter: &LabelFilter) -> Predicate {
    match filter {
        LabelFilter::ByPullRequest {
            project_id,
            repository_id,
            pull_request_id,
        } => Predicate::default()
            .eq("item.project_id", *project_id)
            .eq("item.repository_id", *repository_id)
            .eq("item.pull_request_id", *pull_request_id),
        LabelFilter::ByRepo {
            project_id,
            repository_id,
        } => Predicate::default()
            .eq("item.project_id", *project_id)
            .eq("item.repository_id", *repository_id),
        LabelFilter::ByRepoAndNamePattern {
            project_id,
            repository_id,
            pattern,
        } => Predicate::default()
            .eq("item.project_id", *project_id)
            .eq("item.repository_id", *repository_id)
            .like("label.name", pattern),
        LabelFilter::ByPullRequestAndNamePattern {
            project_id,
            repository_id,
            pull_request_id,
            pattern,
        } => Predicate::default()
            .eq("item.project_id", *project_id)
            .eq("item.repository_id", *repository_id)
            .eq("item.pull_request_id", *pull_request_id)
            .like("label.name", pattern),
        LabelFilter::ByRepositorySet { repository_ids } => {
            Predicate::default().in_set("item.repository_id", repository_ids)
        }
    }
}
