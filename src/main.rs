use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use prlabels::cli::{
    LabelCommands, StoreArgs, run_init, run_label_create, run_label_hash, run_label_list,
    run_label_unassign, run_label_update,
};

#[derive(Parser)]
#[command(name = "prlabels")]
#[command(about = "Pull request label storage", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and label database
    Init {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Manage labels and their pull request assignments
    Label {
        #[command(subcommand)]
        command: LabelCommands,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("prlabels=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { store } => run_init(&store)?,
        Commands::Label { command } => match command {
            LabelCommands::Create {
                store,
                project,
                repo,
                pull_request,
                name,
                color,
                json,
            } => run_label_create(&store, project, repo, pull_request, &name, &color, json)?,
            LabelCommands::List {
                store,
                filter,
                json,
            } => run_label_list(&store, &filter, json)?,
            LabelCommands::Update {
                store,
                project,
                repo,
                label_id,
                name,
                color,
            } => run_label_update(&store, project, repo, label_id, &name, &color)?,
            LabelCommands::Unassign {
                store,
                filter,
                json,
            } => run_label_unassign(&store, &filter, json)?,
            LabelCommands::Hash {
                project,
                repo,
                name,
            } => run_label_hash(project, repo, &name),
        },
    }

    Ok(())
}
