use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult, ANSWERS_REQUIRED, ANSWER_OUT_OF_RANGE, DUPLICATE_ANSWER};

pub const MIN_ANSWER_VALUE: u8 = 1;
pub const MAX_ANSWER_VALUE: u8 = 5;

/// One Likert response: `value` 1 (disagree) through 5 (agree).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u32,
    pub value: u8,
}

impl Answer {
    pub fn new(question_id: u32, value: u8) -> Self {
        Self { question_id, value }
    }

    pub fn in_range(&self) -> bool {
        (MIN_ANSWER_VALUE..=MAX_ANSWER_VALUE).contains(&self.value)
    }
}

/// A non-empty answer set with in-range values and at most one answer per
/// question, kept in submission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: Vec<Answer>,
}

impl AnswerSheet {
    pub fn new(answers: Vec<Answer>) -> AppResult<Self> {
        if answers.is_empty() {
            return Err(AppError::invalid_request(ANSWERS_REQUIRED));
        }

        if let Some(answer) = answers.iter().find(|a| !a.in_range()) {
            log::debug!(
                "answer for question {} out of range: {}",
                answer.question_id,
                answer.value
            );
            return Err(AppError::invalid_request(ANSWER_OUT_OF_RANGE));
        }

        let mut seen = HashSet::with_capacity(answers.len());
        if !answers.iter().all(|a| seen.insert(a.question_id)) {
            return Err(AppError::invalid_request(DUPLICATE_ANSWER));
        }

        Ok(Self { answers })
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
