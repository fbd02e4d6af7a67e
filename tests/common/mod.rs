#![allow(dead_code)]

use interaction_style_server::{config::Config, models::domain::UnknownQuestionPolicy};
use secrecy::SecretString;
use serde_json::{json, Value};

pub fn config_for(base_url: &str, api_key: Option<&str>) -> Config {
    Config {
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 0,
        gemini_api_key: api_key.map(|key| SecretString::from(key.to_string())),
        gemini_model: "gemini-3-flash".to_string(),
        gemini_base_url: base_url.to_string(),
        generation_timeout_secs: 5,
        generation_max_retries: 0,
        unknown_question_policy: UnknownQuestionPolicy::Degrade,
        allowed_origins: vec!["http://localhost:5173".to_string()],
    }
}

pub fn twelve_answer_body() -> Value {
    let answers: Vec<Value> = (1..=12)
        .map(|id| {
            let value = id % 5 + 1;
            json!({ "questionId": id, "value": value })
        })
        .collect();
    json!({ "answers": answers })
}

fn breakdown_entry(name: &str, score: i64, icon: &str) -> Value {
    json!({
        "name": name,
        "score": score,
        "level": "High",
        "description": format!("How strongly {} shows up day to day.", name.to_lowercase()),
        "meanings": ["First sign", "Second sign", "Third sign"],
        "actionableAdvice": ["Try this", "Then this"],
        "icon": icon
    })
}

pub fn analysis_json(breakdown_len: usize) -> Value {
    let breakdown: Vec<Value> = [
        ("Empathy", 81, "favorite"),
        ("Planning", 67, "event_note"),
        ("Curiosity", 74, "lightbulb"),
        ("Composure", 59, "self_improvement"),
    ]
    .iter()
    .take(breakdown_len)
    .map(|(name, score, icon)| breakdown_entry(name, *score, icon))
    .collect();

    json!({
        "personalityType": "The Adaptive Strategist",
        "shortDescription": "Plans carefully, then adjusts without fuss when plans meet people.",
        "keyTraits": ["Measured", "Perceptive", "Flexible", "Direct", "Patient"],
        "dimensions": [
            { "name": "Energy Direction", "score": 45 },
            { "name": "Information Processing", "score": 60 },
            { "name": "Decision Making", "score": 52 },
            { "name": "Lifestyle Orientation", "score": 33 },
            { "name": "Conflict Style", "score": 70 }
        ],
        "detailedBreakdown": breakdown
    })
}
