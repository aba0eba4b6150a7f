pub mod completion_client;
pub mod evaluation_service;
pub mod parsers;
pub mod quiz_service;
pub mod study_service;

pub use completion_client::{CompletionClient, CompletionError, HttpCompletionClient};
pub use evaluation_service::EvaluationService;
pub use quiz_service::QuizService;
pub use study_service::StudyService;
