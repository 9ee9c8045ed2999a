use anyhow::Result;

use fear_greed_archive::models::config::CONFIG_FILE;
use fear_greed_archive::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration, defaults apply when no config file is present
    let config = Config::load(CONFIG_FILE)?;

    App::new(config).run_logged().await?;

    Ok(())
}
