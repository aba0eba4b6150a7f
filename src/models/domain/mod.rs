pub mod completion;
pub mod evaluation;
pub mod quiz_question;
pub mod study_notes;
pub mod written_question;
pub use completion::{CompletionRequest, GenerationOptions};
pub use evaluation::{EvaluationBatchResult, EvaluationItem, EvaluationMetrics};
pub use quiz_question::{ChoiceLabel, CodeSnippet, McqItem};
pub use study_notes::{LearningRoadmap, NoteSection, NotesDocument};
pub use written_question::WrittenQuestionItem;
