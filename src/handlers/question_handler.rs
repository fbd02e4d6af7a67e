use actix_web::{get, HttpResponse};

use crate::{constants::questions::QUESTIONS, models::dto::response::QuestionDto};

#[get("/api/questions")]
pub async fn list_questions() -> HttpResponse {
    let questions: Vec<QuestionDto> = QUESTIONS.iter().map(QuestionDto::from).collect();
    HttpResponse::Ok().json(questions)
}
