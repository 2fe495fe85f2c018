use std::sync::Arc;

use anyhow::Context;

use biblio_app::modules::books::store::MemoryBookStore;
use biblio_app::AppState;
use biblio_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load biblio settings")?;
    biblio_telemetry::init(&settings.telemetry)?;

    tracing::info!(env = ?settings.environment, "biblio-app bootstrap starting");

    let state = AppState::new(Arc::new(MemoryBookStore::new()));
    let app = biblio_app::app(state, &settings);

    biblio_http::start_server(app, &settings).await
}
