use serde::Serialize;

use crate::models::domain::{LearningRoadmap, McqItem, NotesDocument, WrittenQuestionItem};

#[derive(Debug, Serialize)]
pub struct QuestionsResponse<T: Serialize> {
    pub questions: Vec<T>,
}

pub type McqResponse = QuestionsResponse<McqItem>;
pub type WrittenResponse = QuestionsResponse<WrittenQuestionItem>;

#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub success: bool,
    pub subject: String,
    pub level: String,
    pub format: String,
    pub notes: NotesDocument,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub success: bool,
    #[serde(flatten)]
    pub roadmap: LearningRoadmap,
}

impl From<LearningRoadmap> for RoadmapResponse {
    fn from(roadmap: LearningRoadmap) -> Self {
        RoadmapResponse {
            success: true,
            roadmap,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsResponse {
    pub raw_suggestions: String,
}

#[derive(Debug, Serialize)]
pub struct ConnectionTestResponse {
    pub success: bool,
    pub message: String,
    pub response: String,
}
