use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        analysis_service::AnalysisService,
        model_service::{GeminiModelService, GenerationModel},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let model: Option<Arc<dyn GenerationModel>> = match config.gemini_api_key.clone() {
            Some(api_key) => Some(Arc::new(GeminiModelService::new(&config, api_key)?)),
            None => {
                log::warn!("GEMINI_API_KEY is not set; analysis requests will be refused");
                None
            }
        };

        Ok(Self::with_model(config, model))
    }

    /// Builds state around an explicit backend, or none at all.
    pub fn with_model(config: Config, model: Option<Arc<dyn GenerationModel>>) -> Self {
        let analysis_service = Arc::new(AnalysisService::new(
            model,
            config.unknown_question_policy,
            config.generation_max_retries,
        ));

        Self {
            analysis_service,
            config: Arc::new(config),
        }
    }
}
