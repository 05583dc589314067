#![deny(clippy::all)]
#![deny(rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use primitives::Config;
use slog::Logger;

use crate::db::AdStore;

pub use self::application::EnvConfig;

pub mod ads;
pub mod application;
pub mod db;
pub mod response;
pub mod routes;

#[cfg(any(test, feature = "test-util"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-util")))]
pub mod test_util;

/// The shared state of the Ad server.
///
/// It's created once at startup and every request gets it through an `Arc`.
pub struct Application<S: AdStore> {
    pub store: S,
    pub logger: Logger,
    pub config: Config,
}

impl<S: AdStore + 'static> Application<S> {
    pub fn new(store: S, config: Config, logger: Logger) -> Self {
        Self {
            store,
            logger,
            config,
        }
    }
}
