use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use axum::{routing::get, Extension, Router, Server};
use primitives::config::Environment;
use serde::Deserialize;
use slog::{error, info, Logger};

/// an error used when deserializing a [`EnvConfig`] instance from environment variables
/// see [`EnvConfig::from_env()`]
pub use envy::Error as EnvError;

use crate::{
    db::AdStore,
    routes::{create_ad, list_ads, ROUTE_AD},
    Application,
};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_IP_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0));

/// The server settings, read from the environment variables `ENV`, `PORT` & `IP_ADDR`.
#[derive(Debug, Deserialize, Clone)]
pub struct EnvConfig {
    /// Defaults to `Development`: [`Environment::default()`]
    #[serde(default)]
    pub env: Environment,
    /// The port on which the REST API will be accessible.
    /// Defaults to `8080`: [`DEFAULT_PORT`]
    #[serde(default = "default_port")]
    pub port: u16,
    /// The address on which the REST API will be accessible.
    /// `0.0.0.0` can be used for Docker.
    /// `127.0.0.1` can be used for locally running servers.
    /// Defaults to `0.0.0.0`: [`DEFAULT_IP_ADDR`]
    #[serde(default = "default_ip_addr")]
    pub ip_addr: IpAddr,
}

impl EnvConfig {
    /// Deserialize the [`EnvConfig`] from Environment variables.
    pub fn from_env() -> Result<Self, EnvError> {
        envy::from_env()
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip_addr, self.port)
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_ip_addr() -> IpAddr {
    DEFAULT_IP_ADDR
}

impl<S: AdStore + 'static> Application<S> {
    /// All the routes with the [`Application`] as an `Extension`.
    pub fn router(self: Arc<Self>) -> Router {
        Router::new()
            .route(ROUTE_AD, get(list_ads::<S>).post(create_ad::<S>))
            .layer(Extension(self))
    }

    /// Starts the `axum` `Server` and serves until Ctrl+C is received.
    pub async fn run(self, socket_addr: SocketAddr) {
        let logger = self.logger.clone();
        info!(&logger, "Listening on socket address: {}!", socket_addr);

        let router = Arc::new(self).router();

        let server = Server::bind(&socket_addr)
            .serve(router.into_make_service_with_connect_info::<SocketAddr>())
            .with_graceful_shutdown(shutdown_signal(logger.clone()));

        if let Err(e) = server.await {
            error!(&logger, "server error: {}", e; "main" => "run");
        }
    }
}

async fn shutdown_signal(logger: Logger) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(&logger, "Shutting down the server"),
        Err(err) => error!(&logger, "Unable to listen for the shutdown signal: {}", err),
    }
}
