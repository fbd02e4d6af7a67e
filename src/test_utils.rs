#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::models::domain::{AnalysisResult, Answer};

    /// One answer per question in presentation order, values cycling 1..=5.
    pub fn twelve_answers() -> Vec<Answer> {
        (1..=12u32)
            .map(|id| Answer::new(id, ((id - 1) % 5 + 1) as u8))
            .collect()
    }

    /// Model output that satisfies the full response contract.
    pub fn valid_analysis_json() -> Value {
        json!({
            "personalityType": "The Grounded Innovator",
            "shortDescription": "A practical thinker who enjoys testing new ideas with people they trust.",
            "keyTraits": ["Curious", "Steady", "Candid", "Resourceful", "Warm"],
            "dimensions": [
                { "name": "Energy Direction", "score": 38 },
                { "name": "Information Processing", "score": 71 },
                { "name": "Decision Making", "score": 55 },
                { "name": "Lifestyle Orientation", "score": 42 },
                { "name": "Conflict Style", "score": 64 }
            ],
            "detailedBreakdown": [
                {
                    "name": "Openness",
                    "score": 78,
                    "level": "High",
                    "description": "How readily you take up unfamiliar ideas and experiences.",
                    "meanings": [
                        "You look for new angles on old problems",
                        "Routine work drains you faster than most",
                        "You enjoy people who challenge your views"
                    ],
                    "actionableAdvice": [
                        "Pick one experiment a week and note what you learned",
                        "Pair novel ideas with a concrete first step"
                    ],
                    "icon": "lightbulb"
                },
                {
                    "name": "Reflection",
                    "score": 62,
                    "level": "Moderate",
                    "description": "How much you process internally before acting.",
                    "meanings": [
                        "You prefer to think before speaking up",
                        "Quiet time restores your focus",
                        "You notice details others skip"
                    ],
                    "actionableAdvice": [
                        "Ask for agendas ahead of meetings",
                        "Share a first thought early, then refine it"
                    ],
                    "icon": "psychology"
                },
                {
                    "name": "Harmony Seeking",
                    "score": 58,
                    "level": "Moderate",
                    "description": "How strongly you steer conversations toward agreement.",
                    "meanings": [
                        "You sense tension quickly",
                        "You reframe disagreements as shared problems",
                        "You may hold back criticism to keep the peace"
                    ],
                    "actionableAdvice": [
                        "Name one concern directly in your next disagreement",
                        "Separate the person from the problem when giving feedback"
                    ],
                    "icon": "group"
                }
            ]
        })
    }

    pub fn valid_analysis_result() -> AnalysisResult {
        serde_json::from_value(valid_analysis_json()).expect("fixture matches AnalysisResult")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::assert_error_status;
    use actix_web::http::StatusCode;

    #[test]
    fn test_fixtures_twelve_answers() {
        let answers = twelve_answers();
        assert_eq!(answers.len(), 12);
        assert!(answers.iter().all(|a| a.in_range()));
        assert!(answers.iter().any(|a| a.value == 5));
    }

    #[test]
    fn test_fixtures_valid_analysis_passes_contract() {
        assert!(valid_analysis_result().check_contract().is_ok());
    }

    #[test]
    fn test_assert_error_status() {
        assert_error_status(StatusCode::BAD_REQUEST);
        assert_error_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
