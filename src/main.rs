use vin_registry::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    if config.api_key.is_none() {
        tracing::warn!("API_KEY is not set, mutating routes are unprotected");
    }

    let state = AppState {
        db: db.clone(),
        api_key: config.api_key.clone(),
    };
    let app = router::routes(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Database connections closed");

    Ok(())
}
