pub mod analysis_prompt;
pub mod questions;
