use std::{env, str::FromStr, time::Duration};

use secrecy::SecretString;

/// Wire format spoken by the upstream text-completion service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionProvider {
    /// `POST {base}/chat/completions` with a bearer token.
    Chat,
    /// `POST {base}/models/{model}:generateContent?key=...`
    Gemini,
}

impl FromStr for CompletionProvider {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "chat" | "openai" | "grok" => Ok(CompletionProvider::Chat),
            "gemini" | "google" => Ok(CompletionProvider::Gemini),
            other => Err(format!("unknown completion provider '{}'", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub completion_api_url: String,
    pub completion_api_key: Option<SecretString>,
    pub completion_model: String,
    pub completion_provider: CompletionProvider,
    pub completion_timeout_secs: u64,
    pub evaluation_timeout_secs: u64,
    pub max_evaluations: usize,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub json_payload_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            completion_api_url: var_with_fallback("COMPLETION_API_URL", "GROK_API_URL")
                .unwrap_or_else(|| "https://api.x.ai/v1".to_string())
                .trim_end_matches('/')
                .to_string(),
            completion_api_key: var_with_fallback("COMPLETION_API_KEY", "GROK_API_KEY")
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            completion_model: var_with_fallback("COMPLETION_MODEL", "GROK_MODEL")
                .unwrap_or_else(|| "grok-1".to_string()),
            completion_provider: env::var("COMPLETION_PROVIDER")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(CompletionProvider::Chat),
            completion_timeout_secs: parsed_var("COMPLETION_TIMEOUT_SECS").unwrap_or(30),
            evaluation_timeout_secs: parsed_var("EVALUATION_TIMEOUT_SECS").unwrap_or(15),
            max_evaluations: parsed_var("MAX_EVALUATIONS").unwrap_or(5),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: parsed_var("PORT")
                .or_else(|| parsed_var("WEB_SERVER_PORT"))
                .unwrap_or(5000),
            json_payload_limit: 1024 * 1024,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.completion_api_key.is_some()
    }

    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    pub fn evaluation_timeout(&self) -> Duration {
        Duration::from_secs(self.evaluation_timeout_secs)
    }

    /// Reports configuration that will make requests fail at runtime.
    pub fn log_warnings(&self) {
        if !self.has_credentials() {
            log::warn!(
                "COMPLETION_API_KEY is not set; every generation request will fail with missing credentials"
            );
        }

        if self.evaluation_timeout_secs > self.completion_timeout_secs {
            log::warn!(
                "EVALUATION_TIMEOUT_SECS ({}) exceeds COMPLETION_TIMEOUT_SECS ({}); the transport timeout governs",
                self.evaluation_timeout_secs,
                self.completion_timeout_secs
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            completion_api_url: "http://127.0.0.1:9".to_string(),
            completion_api_key: Some(SecretString::from("test_api_key".to_string())),
            completion_model: "test-model".to_string(),
            completion_provider: CompletionProvider::Chat,
            completion_timeout_secs: 30,
            evaluation_timeout_secs: 15,
            max_evaluations: 5,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            json_payload_limit: 1024 * 1024,
        }
    }
}

fn var_with_fallback(primary: &str, legacy: &str) -> Option<String> {
    env::var(primary).or_else(|_| env::var(legacy)).ok()
}

fn parsed_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
