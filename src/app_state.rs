use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{CompletionClient, EvaluationService, HttpCompletionClient, QuizService, StudyService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub evaluation_service: Arc<EvaluationService>,
    pub study_service: Arc<StudyService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let client = Arc::new(HttpCompletionClient::new(&config)?);
        Ok(Self::with_client(config, client))
    }

    /// Wires every service around the given completion client.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let quiz_service = Arc::new(QuizService::new(client.clone()));
        let evaluation_service = Arc::new(EvaluationService::new(
            client.clone(),
            config.evaluation_timeout(),
            config.max_evaluations,
        ));
        let study_service = Arc::new(StudyService::new(client));

        Self {
            quiz_service,
            evaluation_service,
            study_service,
            config: Arc::new(config),
        }
    }
}
