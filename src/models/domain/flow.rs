//! Screen sequencing for the quiz client as a plain value.
//!
//! `transition` is pure: it never mutates the state it is given, so a view
//! layer can hold one `FlowState` and swap it for whatever comes back.

use thiserror::Error;

use crate::constants::questions::QUESTIONS;
use crate::models::domain::{AnalysisResult, Answer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Consent,
    Questionnaire,
    Analyzing,
    Summary,
    Details,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FlowEvent {
    Start,
    GiveConsent,
    Answer(Answer),
    Back,
    AnalysisSucceeded(AnalysisResult),
    AnalysisFailed,
    ViewDetails,
    BackToSummary,
    Retake,
}

impl FlowEvent {
    fn name(&self) -> &'static str {
        match self {
            FlowEvent::Start => "start",
            FlowEvent::GiveConsent => "give_consent",
            FlowEvent::Answer(_) => "answer",
            FlowEvent::Back => "back",
            FlowEvent::AnalysisSucceeded(_) => "analysis_succeeded",
            FlowEvent::AnalysisFailed => "analysis_failed",
            FlowEvent::ViewDetails => "view_details",
            FlowEvent::BackToSummary => "back_to_summary",
            FlowEvent::Retake => "retake",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("event '{event}' is not valid on the {screen:?} screen")]
    InvalidTransition { screen: Screen, event: &'static str },

    #[error("answer value {0} is outside 1..=5")]
    InvalidAnswer(u8),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlowState {
    screen: Screen,
    answers: Vec<Answer>,
    result: Option<AnalysisResult>,
    question_count: usize,
}

impl Default for FlowState {
    fn default() -> Self {
        Self::new(QUESTIONS.len())
    }
}

impl FlowState {
    pub fn new(question_count: usize) -> Self {
        Self {
            screen: Screen::Landing,
            answers: Vec::new(),
            result: None,
            question_count,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Zero-based index of the question currently on screen.
    pub fn current_question(&self) -> usize {
        self.answers.len()
    }

    fn at(&self, screen: Screen) -> Self {
        Self {
            screen,
            ..self.clone()
        }
    }

    fn reset(&self) -> Self {
        Self::new(self.question_count)
    }
}

pub fn transition(state: &FlowState, event: FlowEvent) -> Result<FlowState, FlowError> {
    let invalid = |event: &FlowEvent| FlowError::InvalidTransition {
        screen: state.screen,
        event: event.name(),
    };

    match (state.screen, event) {
        (Screen::Landing, FlowEvent::Start) => Ok(state.at(Screen::Consent)),
        (Screen::Consent, FlowEvent::GiveConsent) => Ok(state.at(Screen::Questionnaire)),

        (Screen::Questionnaire, FlowEvent::Answer(answer)) => {
            if !answer.in_range() {
                return Err(FlowError::InvalidAnswer(answer.value));
            }
            let mut next = state.clone();
            next.answers.push(answer);
            if next.answers.len() >= next.question_count {
                next.screen = Screen::Analyzing;
            }
            Ok(next)
        }
        (Screen::Questionnaire, FlowEvent::Back) => {
            let mut next = state.clone();
            next.answers.pop();
            Ok(next)
        }

        (Screen::Analyzing, FlowEvent::AnalysisSucceeded(result)) => {
            let mut next = state.at(Screen::Summary);
            next.result = Some(result);
            Ok(next)
        }
        (Screen::Analyzing, FlowEvent::AnalysisFailed) => Ok(state.reset()),

        (Screen::Summary, FlowEvent::ViewDetails) => Ok(state.at(Screen::Details)),
        (Screen::Summary, FlowEvent::Retake) => Ok(state.reset()),
        (Screen::Details, FlowEvent::BackToSummary) => Ok(state.at(Screen::Summary)),

        (_, event) => Err(invalid(&event)),
    }
}
