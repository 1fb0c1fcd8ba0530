// src/state.rs
// Shared handler state: config, agent pipeline, user store and the proxy client

use reqwest::Client;
use std::sync::Arc;

use crate::agents::AdPipeline;
use crate::auth::UserStore;
use crate::config::AdConfig;
use crate::llm::ProviderResult;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AdConfig>,
    pub pipeline: AdPipeline,
    pub users: Arc<UserStore>,
    pub http_client: Client,
}

impl AppState {
    /// Wire state from config; live mode gets an OpenAI-backed pipeline
    pub fn from_config(config: AdConfig) -> ProviderResult<Self> {
        let pipeline = AdPipeline::from_config(&config)?;
        Self::with_pipeline(config, pipeline)
    }

    pub fn with_pipeline(config: AdConfig, pipeline: AdPipeline) -> ProviderResult<Self> {
        let http_client = Client::builder()
            .timeout(config.image_proxy_timeout())
            .build()?;

        Ok(Self {
            users: Arc::new(UserStore::new(config.auth_max_users)),
            config: Arc::new(config),
            pipeline,
            http_client,
        })
    }
}
