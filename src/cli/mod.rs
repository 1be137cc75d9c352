mod commands;
mod init;
mod label;

pub use commands::{FilterArgs, LabelCommands, StoreArgs};
pub use init::run_init;
pub use label::{
    run_label_create, run_label_hash, run_label_list, run_label_unassign, run_label_update,
};

use crate::config::StoreConfig;
use crate::store::SqliteStore;

/// Resolve the store config: the config file if given, with `--data-dir`
/// taking precedence over the file's value.
pub fn resolve_config(args: &StoreArgs) -> anyhow::Result<StoreConfig> {
    let mut config = match &args.config {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::default(),
    };

    if let Some(data_dir) = &args.data_dir {
        config.data_dir = data_dir.into();
    }

    Ok(config)
}

/// Initialize store from data directory, checking it exists
pub fn init_store(args: &StoreArgs) -> anyhow::Result<SqliteStore> {
    let config = resolve_config(args)?;
    let db_path = config.db_path();

    if !db_path.exists() {
        anyhow::bail!(
            "Database not found at {}. Run 'prlabels init' first.",
            db_path.display()
        );
    }

    SqliteStore::open(&config).map_err(Into::into)
}
