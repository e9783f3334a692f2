use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;

use susu_engine::api::{AppState, create_router};
use susu_engine::config::{DatasetLoader, ServiceSettings};
use susu_engine::logging::init_logging;
use susu_engine::store::InMemoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let settings = ServiceSettings::from_env();
    let dataset = DatasetLoader::load(&settings.data_dir)?;
    let router = create_router(AppState::new(InMemoryStore::new(dataset)));

    let listener = TcpListener::bind(settings.bind_addr.as_str()).await?;
    info!(bind_addr = %settings.bind_addr, data_dir = %settings.data_dir, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
