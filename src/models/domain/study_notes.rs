use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NoteSection {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesDocument {
    pub title: String,
    pub level: String,
    pub sections: Vec<NoteSection>, // never empty, at most MAX_NOTE_SECTIONS
    pub full_text: String,          // untruncated source text
}

/// A generated learning plan and its phases split out at the headings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LearningRoadmap {
    pub topic: String,
    pub timeframe: String,
    pub level: String,
    pub roadmap: String,
    pub sections: Vec<NoteSection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_document_uses_full_text_wire_name() {
        let doc = NotesDocument {
            title: "Graphs".to_string(),
            level: "intermediate".to_string(),
            sections: vec![NoteSection {
                title: "Graphs".to_string(),
                content: "Nodes and edges.".to_string(),
            }],
            full_text: "Nodes and edges.".to_string(),
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["fullText"], "Nodes and edges.");
        assert_eq!(json["sections"][0]["title"], "Graphs");
    }
}
