use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::types::LabelFilter;

#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Data directory holding the label database
    #[arg(long)]
    pub data_dir: Option<String>,

    /// TOML config file (data_dir, busy_timeout_ms)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Project ID
    #[arg(long)]
    pub project: Option<i32>,

    /// Repository ID
    #[arg(long)]
    pub repo: Option<i32>,

    /// Pull request ID
    #[arg(long)]
    pub pull_request: Option<i64>,

    /// Label name pattern (SQL LIKE syntax, e.g. "bug%")
    #[arg(long)]
    pub pattern: Option<String>,

    /// Comma separated repository IDs, across all projects
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["project", "repo", "pull_request", "pattern"])]
    pub repos: Vec<i32>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> anyhow::Result<LabelFilter> {
        if !self.repos.is_empty() {
            return Ok(LabelFilter::ByRepositorySet {
                repository_ids: self.repos.clone(),
            });
        }

        let (Some(project_id), Some(repository_id)) = (self.project, self.repo) else {
            anyhow::bail!("either --repos or both --project and --repo are required");
        };

        let filter = match (self.pull_request, self.pattern.clone()) {
            (Some(pull_request_id), Some(pattern)) => LabelFilter::ByPullRequestAndNamePattern {
                project_id,
                repository_id,
                pull_request_id,
                pattern,
            },
            (Some(pull_request_id), None) => LabelFilter::ByPullRequest {
                project_id,
                repository_id,
                pull_request_id,
            },
            (None, Some(pattern)) => LabelFilter::ByRepoAndNamePattern {
                project_id,
                repository_id,
                pattern,
            },
            (None, None) => LabelFilter::ByRepo {
                project_id,
                repository_id,
            },
        };

        Ok(filter)
    }
}

#[derive(Subcommand)]
pub enum LabelCommands {
    /// Attach a label to a pull request, creating the label if needed
    Create {
        #[command(flatten)]
        store: StoreArgs,

        /// Project ID
        #[arg(long)]
        project: i32,

        /// Repository ID
        #[arg(long)]
        repo: i32,

        /// Pull request ID
        #[arg(long)]
        pull_request: i64,

        /// Label name
        #[arg(long)]
        name: String,

        /// Label color (e.g. "#ff0000")
        #[arg(long)]
        color: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List assigned labels
    List {
        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rename or recolor a label
    Update {
        #[command(flatten)]
        store: StoreArgs,

        /// Project ID
        #[arg(long)]
        project: i32,

        /// Repository ID
        #[arg(long)]
        repo: i32,

        /// Label ID
        #[arg(long)]
        label_id: i64,

        /// New label name
        #[arg(long)]
        name: String,

        /// New label color
        #[arg(long)]
        color: String,
    },

    /// Remove every assignment matching the filter (labels are kept)
    Unassign {
        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the identity hash of a label name in a scope
    Hash {
        /// Project ID
        #[arg(long)]
        project: i32,

        /// Repository ID
        #[arg(long)]
        repo: i32,

        /// Label name
        #[arg(long)]
        name: String,
    },
}
