use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::EvaluateAnswersRequest,
};

#[post("/evaluate-answers")]
pub async fn evaluate_answers(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<EvaluateAnswersRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    log::info!(
        "[{}] Evaluating {} answers",
        get_request_id(&req).unwrap_or_default(),
        request.answers.len()
    );

    let result = state
        .evaluation_service
        .evaluate_batch(
            &request.questions,
            &request.answers,
            request.topic.as_deref(),
            request.difficulty.as_deref(),
        )
        .await?;
    Ok(HttpResponse::Ok().json(result))
}
