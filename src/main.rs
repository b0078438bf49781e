use std::error::Error;

use api;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file if there is one.
    // A missing file is fine: every setting has a default.
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,api=info,query_view=info,catalog=info"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()?;

    if let Err(err) = dotenv {
        if !err.not_found() {
            warn!(error = %err, ".env present but unreadable; using process environment");
        }
    }

    api::start().await?;

    Ok(())
}
