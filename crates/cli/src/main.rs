use anyhow::Context;

use stockkeep_cli::{CliConfig, Prompter, Session};
use stockkeep_inventory::InventoryManager;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    stockkeep_observability::init(&config.log);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let mut inventory = InventoryManager::new();

    let stdin = std::io::stdin();
    let prompter = Prompter::new(stdin.lock(), std::io::stdout());
    Session::new(&mut inventory, prompter, config.currency)
        .run()
        .context("console session failed")?;

    tracing::info!(products = inventory.len(), "inventory discarded on exit");
    Ok(())
}
