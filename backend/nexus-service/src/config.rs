use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub media: MediaConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_env")]
    pub env: String,

    #[serde(default = "default_app_host")]
    pub host: String,

    #[serde(default = "default_app_port")]
    pub port: u16,
}

/// Generative-media service settings. The API key is optional: text-to-bio
/// falls back to a static string without it, text-to-image refuses.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_genai_base_url")]
    pub base_url: String,

    #[serde(default = "default_bio_model")]
    pub bio_model: String,

    #[serde(default = "default_image_model")]
    pub image_model: String,

    #[serde(default = "default_genai_timeout_secs")]
    pub timeout_secs: u64,
}

// Default value functions
fn default_app_env() -> String {
    "development".to_string()
}

fn default_app_host() -> String {
    "0.0.0.0".to_string()
}

fn default_app_port() -> u16 {
    8080
}

fn default_genai_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_bio_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "imagen-4.0-generate-001".to_string()
}

fn default_genai_timeout_secs() -> u64 {
    30
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let app = AppConfig {
            env: env::var("APP_ENV").unwrap_or_else(|_| default_app_env()),
            host: env::var("APP_HOST").unwrap_or_else(|_| default_app_host()),
            port: env::var("APP_PORT")
                .unwrap_or_else(|_| default_app_port().to_string())
                .parse()
                .unwrap_or(default_app_port()),
        };

        let media = MediaConfig {
            api_key: env::var("GENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            base_url: env::var("GENAI_BASE_URL").unwrap_or_else(|_| default_genai_base_url()),
            bio_model: env::var("GENAI_BIO_MODEL").unwrap_or_else(|_| default_bio_model()),
            image_model: env::var("GENAI_IMAGE_MODEL").unwrap_or_else(|_| default_image_model()),
            timeout_secs: env::var("GENAI_TIMEOUT_SECS")
                .unwrap_or_else(|_| default_genai_timeout_secs().to_string())
                .parse()
                .unwrap_or(default_genai_timeout_secs()),
        };

        Config { app, media }
    }

    pub fn is_production(&self) -> bool {
        self.app.env == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_app_env(), "development");
        assert_eq!(default_app_host(), "0.0.0.0");
        assert_eq!(default_app_port(), 8080);
        assert_eq!(default_bio_model(), "gemini-2.5-flash");
        assert_eq!(default_image_model(), "imagen-4.0-generate-001");
    }
}
