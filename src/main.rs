//! Service entry point: env config, tracing, pool, schema, serve.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use rolodex::{app, connect, init_schema, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("rolodex=info".parse()?))
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:database.db".into());
    let pool = connect(&database_url).await?;
    init_schema(&pool).await?;
    tracing::info!(%database_url, "database ready");

    let app = app(AppState { pool });

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".into());
    let listener = TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
