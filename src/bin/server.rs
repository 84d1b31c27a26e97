//! REST API server for card validation.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! card-validation-server
//!
//! # With custom address
//! card-validation-server --host 127.0.0.1 --port 8080
//! CARD_VALIDATION_PORT=8080 card-validation-server
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use card_validation::{api, StandardRules};

#[derive(Parser)]
#[command(name = "card-validation-server")]
#[command(version, about = "Credit card validation REST API")]
struct Config {
    /// Address to listen on
    #[arg(long, env = "CARD_VALIDATION_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "CARD_VALIDATION_PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    let app = api::router(Arc::new(StandardRules::new()));

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}:{}/swagger-ui/", "localhost", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
