//! Server configuration loaded from the environment.

use std::env;

use tracing::warn;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default payment processor endpoint.
pub const DEFAULT_PAYMENT_ENDPOINT: &str = "https://api.stripe.com/v1/payment_intents";

/// Outbound payment processor credentials.
#[derive(Debug, Clone)]
pub struct PaymentGatewayConfig {
    pub endpoint: String,
    pub secret_key: String,
}

/// Process configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub token_secret: Vec<u8>,
    /// Absent when no processor key is configured; the fixture gateway is
    /// used instead.
    pub payment: Option<PaymentGatewayConfig>,
}

impl ServerConfig {
    /// Resolve configuration from environment variables.
    ///
    /// The token secret comes from `ACCESS_TOKEN_SECRET`, or from the file
    /// named by `ACCESS_TOKEN_SECRET_FILE`. Release builds refuse to start
    /// without one unless `TOKEN_ALLOW_EPHEMERAL=1`; debug builds fall back
    /// to a random per-process secret.
    pub fn from_env() -> std::io::Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| std::io::Error::other(format!("invalid PORT value {raw:?}: {e}")))?,
            Err(_) => DEFAULT_PORT,
        };

        let token_secret = match env::var("ACCESS_TOKEN_SECRET") {
            Ok(secret) => secret.into_bytes(),
            Err(_) => match env::var("ACCESS_TOKEN_SECRET_FILE") {
                Ok(path) => std::fs::read(&path).map_err(|e| {
                    std::io::Error::other(format!("failed to read token secret at {path}: {e}"))
                })?,
                Err(_) => {
                    let allow_dev =
                        env::var("TOKEN_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
                    if cfg!(debug_assertions) || allow_dev {
                        warn!("using temporary token secret (dev only)");
                        uuid::Uuid::new_v4().as_bytes().to_vec()
                    } else {
                        return Err(std::io::Error::other(
                            "ACCESS_TOKEN_SECRET is not configured",
                        ));
                    }
                }
            },
        };

        let payment = env::var("PAYMENT_SECRET_KEY")
            .ok()
            .map(|secret_key| PaymentGatewayConfig {
                endpoint: env::var("PAYMENT_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_PAYMENT_ENDPOINT.into()),
                secret_key,
            });
        if payment.is_none() {
            warn!("no payment processor configured; payment intents use the fixture gateway");
        }

        Ok(Self {
            port,
            token_secret,
            payment,
        })
    }
}
