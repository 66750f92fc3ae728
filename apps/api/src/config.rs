use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// `GOOGLE_API_KEY` is read here but not required: without it the service
/// still starts, and every analysis fails at the first LLM call.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub session_ttl_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_upload_mb: usize = parse_env("MAX_UPLOAD_MB", 200)?;

        Ok(Config {
            google_api_key: optional_env("GOOGLE_API_KEY"),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            session_ttl_minutes: parse_env("SESSION_TTL_MINUTES", 60)?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            google_api_key: None,
            port: 0,
            rust_log: "debug".to_string(),
            max_upload_bytes: 1024 * 1024,
            session_ttl_minutes: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u16 = parse_env("NEXTSTEP_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("NEXTSTEP_TEST_BAD_PORT", "eighty");
        let result: Result<u16> = parse_env("NEXTSTEP_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
        std::env::remove_var("NEXTSTEP_TEST_BAD_PORT");
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        std::env::set_var("NEXTSTEP_TEST_BLANK_KEY", "   ");
        assert_eq!(optional_env("NEXTSTEP_TEST_BLANK_KEY"), None);
        std::env::remove_var("NEXTSTEP_TEST_BLANK_KEY");
    }
}
