//! Unified service container for postseed
//!
//! Provides shared access to configuration and the text converter.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::extract::{CommandConverter, TextConverter};
use crate::core::ingest::IngestPipeline;
use std::sync::Arc;

/// Unified services container
///
/// CLI commands and tests use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Document-to-text converter
    pub converter: Arc<dyn TextConverter>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services using the configured external converter
    pub fn new(config: Config) -> Self {
        let converter = CommandConverter::from_config(&config.conversion);
        tracing::debug!("Using text converter '{}'", converter.program());
        let converter = Arc::new(converter);
        Self::with_converter(config, converter)
    }

    /// Create services with an explicit converter
    pub fn with_converter(config: Config, converter: Arc<dyn TextConverter>) -> Self {
        Self {
            converter,
            config: Arc::new(config),
        }
    }

    /// Create an IngestPipeline
    ///
    /// `max_concurrent` overrides the configured limit when given.
    pub fn create_pipeline(&self, max_concurrent: Option<usize>) -> Result<IngestPipeline> {
        let mut config = (*self.config).clone();
        if let Some(max) = max_concurrent {
            config.limits.max_concurrent_extractions = max;
        }
        IngestPipeline::from_config(&config, Arc::clone(&self.converter))
    }
}
