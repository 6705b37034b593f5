//! Service entry-point: configuration, tracing, and the HTTP server.

use std::sync::Arc;

use actix_web::{HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use asset_manager::domain::ports::PaymentGateway;
use asset_manager::inbound::http::HttpState;
use asset_manager::outbound::gateway::{FixturePaymentGateway, HttpPaymentGateway};
use asset_manager::server::{self, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;

    let gateway: Arc<dyn PaymentGateway> = match &config.payment {
        Some(payment) => Arc::new(
            HttpPaymentGateway::new(payment.endpoint.clone(), payment.secret_key.clone())
                .map_err(|e| std::io::Error::other(format!("payment gateway setup: {e}")))?,
        ),
        None => Arc::new(FixturePaymentGateway),
    };

    let state = web::Data::new(HttpState::with_memory_stores(&config.token_secret, gateway));

    info!(port = config.port, "starting asset manager server");
    HttpServer::new(move || server::app(state.clone()))
        .bind(("0.0.0.0", config.port))?
        .run()
        .await
}
