use serde::{Deserialize, Serialize};

/// Sampling options for one call to the completion service.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationOptions {
    pub const fn new(temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            max_output_tokens,
        }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new(0.2, 2048)
    }
}

pub const MCQ_OPTIONS: GenerationOptions = GenerationOptions::new(0.2, 2048);
pub const WRITTEN_OPTIONS: GenerationOptions = GenerationOptions::new(0.2, 1024);
pub const EVALUATION_OPTIONS: GenerationOptions = GenerationOptions::new(0.1, 512);
pub const NOTES_OPTIONS: GenerationOptions = GenerationOptions::new(0.2, 4096);
pub const ROADMAP_OPTIONS: GenerationOptions = GenerationOptions::new(0.2, 2048);
pub const SUGGESTIONS_OPTIONS: GenerationOptions = GenerationOptions::new(0.2, 2048);
pub const CONNECTION_TEST_OPTIONS: GenerationOptions = GenerationOptions::new(0.7, 50);

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CompletionRequest {
    pub prompt_text: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl CompletionRequest {
    pub fn new(prompt_text: impl Into<String>, options: GenerationOptions) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            temperature: options.temperature,
            max_output_tokens: options.max_output_tokens,
        }
    }

    /// First characters of the prompt, for log lines.
    pub fn preview(&self) -> String {
        self.prompt_text.chars().take(50).collect()
    }
}
