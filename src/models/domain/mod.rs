pub mod analysis;
pub mod answer;
pub mod flow;
pub mod question;
pub use analysis::{AnalysisResult, DetailedTrait, DimensionName, DimensionScore};
pub use answer::{Answer, AnswerSheet};
pub use flow::{transition, FlowEvent, FlowState, Screen};
pub use question::{Question, UnknownQuestionPolicy};
