use std::sync::Arc;

use nebulance_core::{Config, Nebulance, SanitizedConfig};

use crate::transport::HttpTransport;

/// Shared application state
pub struct AppState {
    config: Config,
    indexer: Nebulance,
    transport: Arc<dyn HttpTransport>,
}

impl AppState {
    pub fn new(config: Config, transport: Arc<dyn HttpTransport>) -> Self {
        let indexer = Nebulance::new(&config.indexer);
        Self {
            config,
            indexer,
            transport,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn indexer(&self) -> &Nebulance {
        &self.indexer
    }

    pub fn transport(&self) -> &dyn HttpTransport {
        self.transport.as_ref()
    }
}
