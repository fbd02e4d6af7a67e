use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

/// The five interaction-style axes every analysis scores: energy direction
/// (introvert to extrovert), information processing (practical to
/// imaginative), decision making (analytical to empathetic), lifestyle
/// orientation (structured to spontaneous) and conflict style (assertive to
/// accommodating).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum DimensionName {
    #[serde(rename = "Energy Direction")]
    EnergyDirection,
    #[serde(rename = "Information Processing")]
    InformationProcessing,
    #[serde(rename = "Decision Making")]
    DecisionMaking,
    #[serde(rename = "Lifestyle Orientation")]
    LifestyleOrientation,
    #[serde(rename = "Conflict Style")]
    ConflictStyle,
}

impl DimensionName {
    pub const ALL: [DimensionName; 5] = [
        DimensionName::EnergyDirection,
        DimensionName::InformationProcessing,
        DimensionName::DecisionMaking,
        DimensionName::LifestyleOrientation,
        DimensionName::ConflictStyle,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub name: DimensionName,
    /// Score from 0 to 100.
    #[validate(range(min = 0, max = 100))]
    pub score: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetailedTrait {
    /// Trait name (e.g. Introversion, Sensing).
    #[validate(length(min = 1))]
    pub name: String,
    /// Score from 0 to 100.
    #[validate(range(min = 0, max = 100))]
    pub score: i64,
    /// Level label such as High, Moderate or Low.
    #[validate(length(min = 1))]
    pub level: String,
    /// What this trait measures.
    #[validate(length(min = 1))]
    pub description: String,
    /// Three bullet points completing "This often means:".
    #[validate(length(equal = 3))]
    pub meanings: Vec<String>,
    /// Two specific, practical tips.
    #[validate(length(equal = 2))]
    pub actionable_advice: Vec<String>,
    /// Material Symbol icon name relevant to the trait (e.g. psychology, group, lightbulb).
    #[validate(length(min = 1))]
    pub icon: String,
}

/// Structured personality profile returned by the generation backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// A memorable 2-3 word name for the personality type (e.g. "The Grounded Innovator").
    #[validate(length(min = 1))]
    pub personality_type: String,
    /// One-sentence summary of the personality type.
    #[validate(length(min = 1))]
    pub short_description: String,
    /// Five specific adjectives describing the user.
    #[validate(length(equal = 5))]
    pub key_traits: Vec<String>,
    /// One score for each of the five interaction-style dimensions.
    #[validate(length(equal = 5), nested)]
    pub dimensions: Vec<DimensionScore>,
    /// Three or four standout traits explained in depth.
    #[validate(length(min = 3, max = 4), nested)]
    pub detailed_breakdown: Vec<DetailedTrait>,
}

impl AnalysisResult {
    /// Parses raw model output and enforces the response contract. Scores
    /// outside 0..=100 are clamped; any other violation rejects the output.
    pub fn from_model_output(text: &str) -> AppResult<Self> {
        let mut result: AnalysisResult = serde_json::from_str(text).map_err(|e| {
            AppError::GenerationFailure(format!("model output is not a valid analysis: {}", e))
        })?;

        let clamped = result.clamp_scores();
        if clamped > 0 {
            log::warn!("clamped {} out-of-range score(s) in model output", clamped);
        }

        result
            .check_contract()
            .map_err(|reason| AppError::GenerationFailure(format!("model output rejected: {}", reason)))?;

        Ok(result)
    }

    /// Returns how many scores had to be moved into range.
    pub fn clamp_scores(&mut self) -> usize {
        let dimension_scores = self.dimensions.iter_mut().map(|d| &mut d.score);
        let trait_scores = self.detailed_breakdown.iter_mut().map(|t| &mut t.score);

        let mut clamped = 0;
        for score in dimension_scores.chain(trait_scores) {
            let bounded = (*score).clamp(MIN_SCORE, MAX_SCORE);
            if bounded != *score {
                *score = bounded;
                clamped += 1;
            }
        }
        clamped
    }

    pub fn check_contract(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())?;

        let names: HashSet<DimensionName> = self.dimensions.iter().map(|d| d.name).collect();
        if names.len() != DimensionName::ALL.len() {
            return Err("dimensions must cover each axis exactly once".to_string());
        }

        let blank_text = [&self.personality_type, &self.short_description]
            .into_iter()
            .chain(self.detailed_breakdown.iter().flat_map(|t| {
                [&t.name, &t.level, &t.description, &t.icon]
            }))
            .any(|text| text.trim().is_empty());
        if blank_text {
            return Err("text fields must not be blank".to_string());
        }

        let blank_list_item = self
            .key_traits
            .iter()
            .chain(self.detailed_breakdown.iter().flat_map(|t| &t.meanings))
            .chain(self.detailed_breakdown.iter().flat_map(|t| &t.actionable_advice))
            .any(|item| item.trim().is_empty());
        if blank_list_item {
            return Err("list entries must not be blank".to_string());
        }

        Ok(())
    }
}
