use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::AnalyzeRequestDto,
};

pub async fn analyze(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<AnalyzeRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    let answers = request.into_answers()?;

    let request_id = get_request_id(&req).unwrap_or_default();
    log::info!(
        "[{}] analysis requested for {} answers",
        request_id,
        answers.len()
    );

    let result = state.analysis_service.analyze(answers).await?;

    Ok(HttpResponse::Ok().json(result))
}

pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    log::debug!("{} not allowed on {}", req.method(), req.path());
    Err(AppError::MethodNotAllowed)
}
