use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{GenerateMcqRequest, GenerateWrittenRequest},
        response::QuestionsResponse,
    },
};

#[post("/generate-mcq")]
pub async fn generate_mcq(
    state: web::Data<AppState>,
    request: web::Json<GenerateMcqRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let question_count = request.question_count()?;

    let questions = state
        .quiz_service
        .generate_mcq(&request.topic, question_count)
        .await?;
    Ok(HttpResponse::Ok().json(QuestionsResponse { questions }))
}

#[post("/generate-written")]
pub async fn generate_written(
    state: web::Data<AppState>,
    request: web::Json<GenerateWrittenRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let question_count = request.question_count()?;

    let questions = state
        .quiz_service
        .generate_written(
            &request.topic,
            question_count,
            request.difficulty.as_deref(),
            request.categories.as_deref(),
        )
        .await?;
    Ok(HttpResponse::Ok().json(QuestionsResponse { questions }))
}
