use std::io::Write;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use wallet_events::adapters::in_memory::recording_handler::InMemoryRecordingHandler;
use wallet_events::application::warmup::requests::{
    wallet_created_request, wallet_deleted_request, warmup_logging_request,
};
use wallet_events::application::warmup::runner::warm_up;
use wallet_events::core::wallet::event::WalletEvent;
use wallet_events::core::wallet::logging_event::LoggingEvent;
use wallet_events::shell::config::{Settings, WarmupKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    fmt()
        .with_env_filter(EnvFilter::try_new(&settings.log_filter)?)
        .with_writer(std::io::stderr)
        .init();

    // In-memory consumers for now
    let expiration_consumer = InMemoryRecordingHandler::<WalletEvent>::new();
    let cdc_consumer = InMemoryRecordingHandler::<LoggingEvent>::new();

    for kind in &settings.warmup_events {
        let payload = match kind {
            WarmupKind::WalletCreated => {
                let payload = wallet_created_request()?;
                warm_up(&expiration_consumer, &payload).await?;
                payload
            }
            WarmupKind::WalletDeleted => {
                let payload = wallet_deleted_request()?;
                warm_up(&cdc_consumer, &payload).await?;
                payload
            }
            WarmupKind::WarmupLogging => {
                let payload = warmup_logging_request()?;
                warm_up(&cdc_consumer, &payload).await?;
                payload
            }
        };
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&payload)?;
        stdout.write_all(b"\n")?;
        info!(kind = kind.as_str(), bytes = payload.len(), "warmup payload emitted");
    }

    info!(
        expiration = expiration_consumer.len().await,
        cdc = cdc_consumer.len().await,
        "warmup completed"
    );
    Ok(())
}
