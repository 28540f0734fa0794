use std::io;

use stockroom_app::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::default();
    stockroom_observability::init(&config.default_log_filter);

    let stdout = io::stdout();
    let inventory = stockroom_app::run(&config, &mut stdout.lock())?;

    tracing::info!(
        products = inventory.len(),
        total = %inventory.total_value(),
        "run complete"
    );
    Ok(())
}
