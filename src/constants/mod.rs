pub mod prompts;
pub mod response_format;
