use std::sync::Arc;
use std::time::Duration;

use backoff::ExponentialBackoffBuilder;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{AnalysisResult, Answer, AnswerSheet, UnknownQuestionPolicy},
    services::{
        model_service::{GenerationModel, GenerationRequest, ModelError},
        prompt_service::compose_prompt,
        response_schema::analysis_response_schema,
    },
};

pub const GENERATION_TEMPERATURE: f64 = 0.7;

const RETRY_INITIAL_INTERVAL: Duration = Duration::from_millis(250);
const RETRY_MAX_INTERVAL: Duration = Duration::from_secs(4);

pub struct AnalysisService {
    model: Option<Arc<dyn GenerationModel>>,
    policy: UnknownQuestionPolicy,
    max_retries: u32,
}

impl AnalysisService {
    pub fn new(
        model: Option<Arc<dyn GenerationModel>>,
        policy: UnknownQuestionPolicy,
        max_retries: u32,
    ) -> Self {
        Self {
            model,
            policy,
            max_retries,
        }
    }

    pub async fn analyze(&self, answers: Vec<Answer>) -> AppResult<AnalysisResult> {
        let sheet = AnswerSheet::new(answers)?;
        let prompt = compose_prompt(&sheet, self.policy)?;

        let model = self.model.as_ref().ok_or_else(|| {
            AppError::ConfigurationError("GEMINI_API_KEY not configured".to_string())
        })?;

        let request = GenerationRequest {
            prompt,
            response_schema: analysis_response_schema().clone(),
            temperature: GENERATION_TEMPERATURE,
        };

        let text = self
            .generate_with_retry(model.as_ref(), request)
            .await
            .map_err(|e| AppError::GenerationFailure(e.to_string()))?
            .ok_or_else(|| AppError::GenerationFailure("no response text generated".to_string()))?;

        let result = AnalysisResult::from_model_output(&text)?;
        log::info!(
            "analysis complete for {} answers: {}",
            sheet.len(),
            result.personality_type
        );
        Ok(result)
    }

    /// One attempt plus up to `max_retries` more for transient failures,
    /// spaced by jittered exponential backoff.
    async fn generate_with_retry(
        &self,
        model: &dyn GenerationModel,
        request: GenerationRequest,
    ) -> Result<Option<String>, ModelError> {
        let backoff = ExponentialBackoffBuilder::new()
            .with_initial_interval(RETRY_INITIAL_INTERVAL)
            .with_max_interval(RETRY_MAX_INTERVAL)
            .with_max_elapsed_time(None)
            .build();

        let max_retries = self.max_retries;
        let mut attempt: u32 = 0;

        backoff::future::retry(backoff, || {
            attempt += 1;
            let current = attempt;
            let request = request.clone();

            async move {
                model.generate(request).await.map_err(|err| {
                    if err.is_transient() && current <= max_retries {
                        log::warn!("generation attempt {} failed, retrying: {}", current, err);
                        backoff::Error::transient(err)
                    } else {
                        backoff::Error::permanent(err)
                    }
                })
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ANSWERS_REQUIRED, ANSWER_OUT_OF_RANGE};
    use crate::services::model_service::MockGenerationModel;
    use crate::test_utils::fixtures::{twelve_answers, valid_analysis_json};

    fn service(model: MockGenerationModel, max_retries: u32) -> AnalysisService {
        AnalysisService::new(
            Some(Arc::new(model)),
            UnknownQuestionPolicy::Degrade,
            max_retries,
        )
    }

    #[tokio::test]
    async fn test_analyze_returns_model_output() {
        let mut model = MockGenerationModel::new();
        model
            .expect_generate()
            .withf(|request| {
                request.prompt.contains("Answer: 5/5")
                    && request.temperature == GENERATION_TEMPERATURE
                    && request.response_schema == *analysis_response_schema()
            })
            .times(1)
            .returning(|_| Ok(Some(valid_analysis_json().to_string())));

        let result = service(model, 0).analyze(twelve_answers()).await.unwrap();
        assert_eq!(serde_json::to_value(&result).unwrap(), valid_analysis_json());
    }

    #[tokio::test]
    async fn test_empty_answers_never_reach_the_model() {
        let mut model = MockGenerationModel::new();
        model.expect_generate().never();

        let err = service(model, 0).analyze(vec![]).await.unwrap_err();
        assert_eq!(err, AppError::invalid_request(ANSWERS_REQUIRED));
    }

    #[tokio::test]
    async fn test_out_of_range_answer_is_invalid() {
        let mut model = MockGenerationModel::new();
        model.expect_generate().never();

        let err = service(model, 0)
            .analyze(vec![Answer::new(1, 7)])
            .await
            .unwrap_err();
        assert_eq!(err, AppError::invalid_request(ANSWER_OUT_OF_RANGE));
    }

    #[tokio::test]
    async fn test_missing_model_is_a_configuration_error() {
        let service = AnalysisService::new(None, UnknownQuestionPolicy::Degrade, 0);

        let err = service.analyze(twelve_answers()).await.unwrap_err();
        assert!(matches!(err, AppError::ConfigurationError(_)));
    }

    #[tokio::test]
    async fn test_no_text_is_a_generation_failure() {
        let mut model = MockGenerationModel::new();
        model.expect_generate().times(1).returning(|_| Ok(None));

        let err = service(model, 0).analyze(twelve_answers()).await.unwrap_err();
        assert_eq!(
            err,
            AppError::GenerationFailure("no response text generated".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_output_is_a_generation_failure() {
        let mut model = MockGenerationModel::new();
        model
            .expect_generate()
            .times(1)
            .returning(|_| Ok(Some("Sure! Here is your analysis:".to_string())));

        let err = service(model, 0).analyze(twelve_answers()).await.unwrap_err();
        assert!(matches!(err, AppError::GenerationFailure(_)));
    }

    #[tokio::test]
    async fn test_transient_failure_without_retries_fails_once() {
        let mut model = MockGenerationModel::new();
        model
            .expect_generate()
            .times(1)
            .returning(|_| Err(ModelError::Transport("connection reset".to_string())));

        let err = service(model, 0).analyze(twelve_answers()).await.unwrap_err();
        assert!(matches!(err, AppError::GenerationFailure(_)));
    }

    #[tokio::test]
    async fn test_transient_failures_are_retried() {
        let mut model = MockGenerationModel::new();
        let mut seq = mockall::Sequence::new();
        model
            .expect_generate()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(ModelError::Upstream {
                    status: 503,
                    body: "overloaded".to_string(),
                })
            });
        model
            .expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(valid_analysis_json().to_string())));

        let result = service(model, 2).analyze(twelve_answers()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_retries_are_bounded() {
        let mut model = MockGenerationModel::new();
        model
            .expect_generate()
            .times(2)
            .returning(|_| Err(ModelError::Transport("timed out".to_string())));

        let err = service(model, 1).analyze(twelve_answers()).await.unwrap_err();
        assert!(matches!(err, AppError::GenerationFailure(_)));
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let mut model = MockGenerationModel::new();
        model.expect_generate().times(1).returning(|_| {
            Err(ModelError::Upstream {
                status: 400,
                body: "invalid schema".to_string(),
            })
        });

        let err = service(model, 3).analyze(twelve_answers()).await.unwrap_err();
        assert!(matches!(err, AppError::GenerationFailure(_)));
    }
}
