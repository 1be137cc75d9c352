use tracing::info;

use super::{StoreArgs, resolve_config};
use crate::store::{SqliteStore, Store};

pub fn run_init(args: &StoreArgs) -> anyhow::Result<()> {
    let config = resolve_config(args)?;
    let store = SqliteStore::open(&config)?;
    store.initialize()?;

    info!("Label database ready at {}", config.db_path().display());

    println!("Initialized label database at {}", config.db_path().display());

    Ok(())
}
