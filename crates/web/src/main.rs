use std::sync::Arc;

use anyhow::Context;

use shoefront_core::{Clock, SystemClock};
use shoefront_infra::{demo_catalog, CatalogSource, InMemoryCatalogSource, JsonFileCatalogSource};
use shoefront_web::{app::AppState, config::WebConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = WebConfig::from_env().context("invalid configuration")?;
    shoefront_observability::init(config.log_format);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileCatalogSource::new(path)),
        None => {
            tracing::warn!("SHOEFRONT_CATALOG_PATH not set; serving the demo catalog");
            let items = demo_catalog(clock.now()).context("failed to build demo catalog")?;
            Box::new(InMemoryCatalogSource::new(items))
        }
    };

    let items = source
        .load()
        .with_context(|| format!("failed to load catalog from {}", source.describe()))?;
    tracing::info!(
        source = %source.describe(),
        items = items.len(),
        recency_window_days = config.recency_window.in_days(),
        "catalog loaded"
    );

    let state = AppState::new(items, config.recency_window, clock)
        .context("failed to initialise application state")?;
    let app = shoefront_web::app::build_app(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
