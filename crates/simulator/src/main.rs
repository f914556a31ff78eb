use anyhow::Context;

use gildedrose_inventory::Item;
use gildedrose_inventory::fixture;

mod config;

use config::SimulatorConfig;

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let config = SimulatorConfig::from_env()?;
    tracing::info!(
        days = config.days,
        fixture = ?config.fixture,
        "starting simulation"
    );

    let items = load_inventory(&config)?;
    print!("{}", fixture::simulate(items, config.days));

    tracing::info!("simulation finished");
    Ok(())
}

fn load_inventory(config: &SimulatorConfig) -> anyhow::Result<Vec<Item>> {
    let Some(path) = &config.fixture else {
        return Ok(fixture::default_items());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture {}", path.display()))?;
    let items = fixture::load_items(&json)
        .with_context(|| format!("failed to load fixture {}", path.display()))?;
    Ok(items)
}
