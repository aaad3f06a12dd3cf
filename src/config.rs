use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub system_config: SystemConfig,
    pub translate_config: TranslateConfig,
    pub speech_config: SpeechConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    /// Full URL of the external translation endpoint.
    pub endpoint: String,
    /// Budget for a single outbound call. A hung upstream must not hang the
    /// relay indefinitely.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub service_url: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: "static".to_string(),
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://libretranslate.com/translate".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:8000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section() {
        let config = Config::default();
        assert_eq!(config.system_config.port, 8080);
        assert_eq!(
            config.translate_config.endpoint,
            "https://libretranslate.com/translate"
        );
        assert_eq!(config.translate_config.timeout_secs, 10);
        assert_eq!(config.speech_config.service_url, "http://localhost:8000");
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config: Config = serde_yaml::from_str(
            "system_config:\n  port: 9000\ntranslate_config:\n  timeout_secs: 3\n",
        )
        .unwrap();
        assert_eq!(config.system_config.port, 9000);
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(config.translate_config.timeout_secs, 3);
        assert_eq!(
            config.translate_config.endpoint,
            "https://libretranslate.com/translate"
        );
    }

    #[test]
    fn json_config_is_accepted() {
        let config: Config = serde_json::from_str(
            r#"{"translate_config": {"endpoint": "http://localhost:5000/translate"}}"#,
        )
        .unwrap();
        assert_eq!(
            config.translate_config.endpoint,
            "http://localhost:5000/translate"
        );
    }
}
