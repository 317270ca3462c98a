use secrecy::SecretString;
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_key: Option<SecretString>,
    pub openai_model: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub provider_timeout_secs: u64,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .map(SecretString::from),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
            provider_timeout_secs: env::var("PROVIDER_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
        }
    }

    pub fn hosted_provider_configured(&self) -> bool {
        self.openai_api_key.is_some()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "llama3.2".to_string(),
            provider_timeout_secs: 5,
            data_dir: std::env::temp_dir().join("wrestlewell-test"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.web_server_host.is_empty());
        assert!(!config.ollama_url.is_empty());
        assert_eq!(config.ollama_model, "llama3.2");
        assert!(config.provider_timeout_secs > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert!(!config.hosted_provider_configured());
        assert_eq!(config.ollama_url, "http://localhost:11434");
        assert_eq!(config.provider_timeout_secs, 5);
    }
}
