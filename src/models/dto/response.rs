use serde::Serialize;

use crate::models::domain::Question;

#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: u32,
    pub text: String,
}

impl From<&Question> for QuestionDto {
    fn from(question: &Question) -> Self {
        QuestionDto {
            id: question.id,
            text: question.text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
