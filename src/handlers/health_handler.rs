use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState, constants::response_format::RESPONSE_FORMAT_VERSION, errors::AppError,
    models::dto::response::ConnectionTestResponse,
};

pub const WELCOME_MESSAGE: &str = "Welcome to the ThinkCheck API. Use the /generate-mcq, /generate-written, \
     /evaluate-answers, /notes, /generate-roadmap or /generate-suggestions endpoints to interact with the service.";

#[get("/")]
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME_MESSAGE)
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "response_format_version": RESPONSE_FORMAT_VERSION
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let configured = state.config.has_credentials();

    let response = serde_json::json!({
        "status": if configured { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "completion_api": if configured { "configured" } else { "missing_credentials" }
        }
    });

    if configured {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[get("/health/live")]
pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Sends a short greeting prompt upstream to check credentials and reachability.
#[get("/test-connection")]
pub async fn test_connection(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let response = state.study_service.test_connection().await?;

    Ok(HttpResponse::Ok().json(ConnectionTestResponse {
        success: true,
        message: "Completion service connection test successful".to_string(),
        response,
    }))
}
