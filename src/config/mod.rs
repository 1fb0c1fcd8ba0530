// src/config/mod.rs
// Environment-driven configuration; .env is honoured, defaults cover demo mode

use once_cell::sync::Lazy;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_ALLOWED_IMAGE_DOMAINS: &[&str] = &[
    "images.unsplash.com",
    "oaidalleapiprodscus.blob.core.windows.net",
];

#[derive(Debug, Clone)]
pub struct AdConfig {
    // ── Generation mode
    pub demo_mode: bool,

    // ── OpenAI Configuration
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub copy_model: String,
    pub image_model: String,
    pub image_size: String,
    pub image_quality: String,
    pub openai_timeout: u64,

    // ── Image proxy
    pub image_proxy_timeout: u64,
    pub allowed_image_domains: Vec<String>,

    // ── Auth store
    pub auth_max_users: usize,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Logging Configuration
    pub log_level: String,
}

// Values may carry trailing `# comments` from .env files; parse failures fall back
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    tracing::warn!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

/// Same comment handling as `env_var_or`; only "true" (any case) keeps the flag on
fn env_flag_or(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => parse_flag(&val),
        Err(_) => default,
    }
}

fn parse_flag(raw: &str) -> bool {
    raw.split('#')
        .next()
        .unwrap_or("")
        .trim()
        .eq_ignore_ascii_case("true")
}

fn parse_domain_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|d| d.trim().trim_start_matches('.').to_lowercase())
        .filter(|d| !d.is_empty())
        .collect()
}

impl Default for AdConfig {
    fn default() -> Self {
        Self {
            demo_mode: true,
            openai_api_key: String::new(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            copy_model: "gpt-4".to_string(),
            image_model: "dall-e-3".to_string(),
            image_size: "1024x1024".to_string(),
            image_quality: "standard".to_string(),
            openai_timeout: 60,
            image_proxy_timeout: 15,
            allowed_image_domains: DEFAULT_ALLOWED_IMAGE_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            auth_max_users: 10_000,
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_level: "info".to_string(),
        }
    }
}

impl AdConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            tracing::debug!(".env file not found, using environment variables and defaults");
        }

        let defaults = Self::default();
        let domains = env_var_or(
            "IMAGE_ALLOWED_DOMAINS",
            defaults.allowed_image_domains.join(","),
        );

        Self {
            demo_mode: env_flag_or("DEMO_MODE", defaults.demo_mode),
            openai_api_key: env_var_or("OPENAI_API_KEY", defaults.openai_api_key),
            openai_base_url: env_var_or("OPENAI_BASE_URL", defaults.openai_base_url),
            copy_model: env_var_or("ADGENIUS_COPY_MODEL", defaults.copy_model),
            image_model: env_var_or("ADGENIUS_IMAGE_MODEL", defaults.image_model),
            image_size: env_var_or("ADGENIUS_IMAGE_SIZE", defaults.image_size),
            image_quality: env_var_or("ADGENIUS_IMAGE_QUALITY", defaults.image_quality),
            openai_timeout: env_var_or("OPENAI_TIMEOUT", defaults.openai_timeout),
            image_proxy_timeout: env_var_or("IMAGE_PROXY_TIMEOUT", defaults.image_proxy_timeout),
            allowed_image_domains: parse_domain_list(&domains),
            auth_max_users: env_var_or("AUTH_MAX_USERS", defaults.auth_max_users),
            host: env_var_or("HOST", defaults.host),
            port: env_var_or("PORT", defaults.port),
            log_level: env_var_or("LOG_LEVEL", defaults.log_level),
        }
    }

    // --- Convenience Methods ---

    /// Live generation needs both demo mode off and a key to talk to the provider.
    pub fn live_mode(&self) -> bool {
        !self.demo_mode && !self.openai_api_key.trim().is_empty()
    }

    pub fn mode_label(&self) -> &'static str {
        if self.live_mode() { "live" } else { "demo" }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn openai_timeout(&self) -> Duration {
        Duration::from_secs(self.openai_timeout)
    }

    pub fn image_proxy_timeout(&self) -> Duration {
        Duration::from_secs(self.image_proxy_timeout)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<AdConfig> = Lazy::new(AdConfig::from_env);
