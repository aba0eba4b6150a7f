use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{GenerateNotesRequest, GenerateRoadmapRequest, GenerateSuggestionsRequest},
        response::{NotesResponse, RoadmapResponse, SuggestionsResponse},
    },
};

#[post("/notes")]
pub async fn generate_notes(
    state: web::Data<AppState>,
    request: web::Json<GenerateNotesRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let (level, format) = (request.level(), request.format());
    let notes = state
        .study_service
        .generate_notes(&request.subject, level, format)
        .await?;

    Ok(HttpResponse::Ok().json(NotesResponse {
        success: true,
        subject: request.subject.clone(),
        level: level.to_string(),
        format: format.to_string(),
        notes,
    }))
}

#[post("/generate-roadmap")]
pub async fn generate_roadmap(
    state: web::Data<AppState>,
    request: web::Json<GenerateRoadmapRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let roadmap = state
        .study_service
        .generate_roadmap(&request.topic, &request.timeframe, request.level())
        .await?;
    Ok(HttpResponse::Ok().json(RoadmapResponse::from(roadmap)))
}

#[post("/generate-suggestions")]
pub async fn generate_suggestions(
    state: web::Data<AppState>,
    request: web::Json<GenerateSuggestionsRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let raw_suggestions = state.study_service.suggest_paths(&request.responses).await?;
    Ok(HttpResponse::Ok().json(SuggestionsResponse { raw_suggestions }))
}
