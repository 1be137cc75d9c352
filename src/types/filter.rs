use serde::{Deserialize, Serialize};

/// The query shapes supported when looking up assigned labels.
///
/// Name patterns use SQL `LIKE` syntax (`%` and `_` wildcards) and are
/// matched against the label name at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LabelFilter {
    ByPullRequest {
        project_id: i32,
        repository_id: i32,
        pull_request_id: i64,
    },
    ByRepo {
        project_id: i32,
        repository_id: i32,
    },
    ByRepoAndNamePattern {
        project_id: i32,
        repository_id: i32,
        pattern: String,
    },
    ByPullRequestAndNamePattern {
        project_id: i32,
        repository_id: i32,
        pull_request_id: i64,
        pattern: String,
    },
    ByRepositorySet {
        repository_ids: Vec<i32>,
    },
}

impl LabelFilter {
    /// True when the filter cannot match any row.
    #[must_use]
    pub fn matches_nothing(&self) -> bool {
        matches!(self, Self::ByRepositorySet { repository_ids } if repository_ids.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_repository_set_matches_nothing() {
        let filter = LabelFilter::ByRepositorySet {
            repository_ids: vec![],
        };
        assert!(filter.matches_nothing());

        let filter = LabelFilter::ByRepositorySet {
            repository_ids: vec![5],
        };
        assert!(!filter.matches_nothing());

        let filter = LabelFilter::ByRepo {
            project_id: 1,
            repository_id: 2,
        };
        assert!(!filter.matches_nothing());
    }

    #[test]
    fn test_filter_serializes_with_kind_tag() {
        let filter = LabelFilter::ByPullRequest {
            project_id: 1,
            repository_id: 10,
            pull_request_id: 42,
        };
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value["kind"], "by_pull_request");
        assert_eq!(value["pull_request_id"], 42);
    }
}
