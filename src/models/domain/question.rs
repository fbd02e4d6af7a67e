use std::str::FromStr;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
}

/// What to do with an answer whose `questionId` is not in the question bank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownQuestionPolicy {
    /// Keep the answer value in the prompt without question text.
    #[default]
    Degrade,
    /// Fail the request as invalid.
    Reject,
}

impl FromStr for UnknownQuestionPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "degrade" => Ok(UnknownQuestionPolicy::Degrade),
            "reject" => Ok(UnknownQuestionPolicy::Reject),
            other => Err(format!("unknown question policy '{}'", other)),
        }
    }
}
