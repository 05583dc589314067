//! Testing utilities for the Ad server Application

use std::sync::Arc;

use primitives::{config::DEVELOPMENT_CONFIG, test_util::discard_logger, Ad};

use crate::{db::MemoryAdStore, Application};

/// Uses the development configuration with a [`MemoryAdStore`] holding the `initial_ads`.
pub fn setup_memory_app(initial_ads: &[Ad]) -> Arc<Application<MemoryAdStore>> {
    let app = Application::new(
        MemoryAdStore::new(initial_ads),
        DEVELOPMENT_CONFIG.clone(),
        discard_logger(),
    );

    Arc::new(app)
}
