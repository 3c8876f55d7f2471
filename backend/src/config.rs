use std::env;

/// Default model, matching what the chat UI advertises.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| "GEMINI_API_KEY must be set in environment")?;

        let gemini_model = env::var("GEMINI_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let bind_address = env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| "127.0.0.1:3001".to_string());

        Ok(Self {
            gemini_api_key,
            gemini_model,
            bind_address,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.gemini_api_key.trim().is_empty() {
            return Err("GEMINI_API_KEY must not be empty".to_string());
        }

        if self.gemini_model.trim().is_empty() {
            return Err("GEMINI_MODEL must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            gemini_api_key: "test-key".to_string(),
            gemini_model: DEFAULT_MODEL.to_string(),
            bind_address: "127.0.0.1:3001".to_string(),
        }
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn blank_api_key_fails_validation() {
        let config = Config {
            gemini_api_key: "   ".to_string(),
            ..test_config()
        };

        assert!(config.validate().is_err());
    }
}
