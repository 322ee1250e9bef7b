//! miab - Mail-in-a-Box admin CLI

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    mailinabox_cli::run().await
}
