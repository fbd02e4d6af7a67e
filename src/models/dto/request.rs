use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult, ANSWER_OUT_OF_RANGE};
use crate::models::domain::Answer;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequestDto {
    pub question_id: u32,

    #[validate(range(min = 1, max = 5))]
    pub value: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnalyzeRequestDto {
    #[serde(default)]
    #[validate(nested)]
    pub answers: Vec<AnswerRequestDto>,
}

impl TryFrom<AnswerRequestDto> for Answer {
    type Error = AppError;

    fn try_from(dto: AnswerRequestDto) -> AppResult<Self> {
        let value = u8::try_from(dto.value)
            .map_err(|_| AppError::invalid_request(ANSWER_OUT_OF_RANGE))?;
        Ok(Answer::new(dto.question_id, value))
    }
}

impl AnalyzeRequestDto {
    pub fn into_answers(self) -> AppResult<Vec<Answer>> {
        self.answers.into_iter().map(Answer::try_from).collect()
    }
}
