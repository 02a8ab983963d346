use std::error::Error;
use std::sync::Arc;

use dotenv::dotenv;
use invoice_insight::{serve, AppConfig, AppState, GeminiClient, InvoiceAnalyst};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()?;

    let client = GeminiClient::new(config.api_key.clone()).with_model(config.model.clone());
    let analyst = InvoiceAnalyst::new(Arc::new(client));

    log::info!("Serving invoice Q&A with model {}", config.model);
    serve(&config.bind_addr(), AppState::new(analyst)).await?;

    Ok(())
}
