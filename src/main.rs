/*
 * Responsibility
 * - tokio runtime entry; logic lives in app::run()
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    marketplace_api::app::run().await
}
