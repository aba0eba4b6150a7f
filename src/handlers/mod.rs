pub mod evaluation_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod study_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use evaluation_handler::evaluate_answers;
pub use health_handler::{
    health_check, health_check_live, health_check_ready, test_connection, welcome,
};
pub use quiz_handler::{generate_mcq, generate_written};
pub use study_handler::{generate_notes, generate_roadmap, generate_suggestions};

/// Registers every route on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(welcome)
        .service(health_check)
        .service(health_check_live)
        .service(health_check_ready)
        .service(test_connection)
        .service(generate_mcq)
        .service(generate_written)
        .service(evaluate_answers)
        .service(generate_notes)
        .service(generate_roadmap)
        .service(generate_suggestions);
}

/// JSON extractor settings: body size limit, and malformed bodies reported as 400 `{error, details}`.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            log::debug!("Rejected request body: {}", err);
            AppError::InvalidInput {
                message: "Invalid request body".to_string(),
                details: Some(err.to_string()),
            }
            .into()
        })
}
