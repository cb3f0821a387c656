use orgchart_server::api;
use orgchart_server::config::Config;
use orgchart_server::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orgchart_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Connect the pool and run migrations
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("orgchart-server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
