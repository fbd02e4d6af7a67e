use crate::{
    constants::{
        analysis_prompt::{ANALYSIS_PROMPT, ANSWER_SCALE_HINT},
        questions::find_question,
    },
    errors::{AppError, AppResult, UNKNOWN_QUESTION},
    models::domain::{Answer, AnswerSheet, UnknownQuestionPolicy},
};

/// Builds the full prompt: fixed instructions followed by one line per answer
/// in submission order.
pub fn compose_prompt(sheet: &AnswerSheet, policy: UnknownQuestionPolicy) -> AppResult<String> {
    let lines = sheet
        .answers()
        .iter()
        .map(|answer| format_answer(answer, policy))
        .collect::<AppResult<Vec<String>>>()?;

    Ok(format!("{}{}\n", ANALYSIS_PROMPT, lines.join("\n")))
}

fn format_answer(answer: &Answer, policy: UnknownQuestionPolicy) -> AppResult<String> {
    match (find_question(answer.question_id), policy) {
        (Some(question), _) => Ok(format!(
            "Question: \"{}\" - Answer: {}/5 {}",
            question.text, answer.value, ANSWER_SCALE_HINT
        )),
        (None, UnknownQuestionPolicy::Degrade) => {
            log::warn!(
                "answer references unknown question {}; sending value without text",
                answer.question_id
            );
            Ok(format!(
                "Question #{} (text unavailable) - Answer: {}/5 {}",
                answer.question_id, answer.value, ANSWER_SCALE_HINT
            ))
        }
        (None, UnknownQuestionPolicy::Reject) => {
            log::warn!("rejecting answer for unknown question {}", answer.question_id);
            Err(AppError::invalid_request(UNKNOWN_QUESTION))
        }
    }
}
