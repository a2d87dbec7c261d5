use anyhow::{bail, Context, Result};

pub const DEFAULT_SCORE_THRESHOLD: u32 = 70;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Minimum score at which HR is notified about a candidate.
    pub resume_score_threshold: u32,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            resume_score_threshold: DEFAULT_SCORE_THRESHOLD,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: optional_env("PORT")
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(defaults.port),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            resume_score_threshold: optional_env("RESUME_SCORE_THRESHOLD")
                .map(|v| parse_threshold(&v))
                .transpose()?
                .unwrap_or(defaults.resume_score_threshold),
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a positive integer")?
                .unwrap_or(defaults.max_upload_bytes),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_threshold(raw: &str) -> Result<u32> {
    let threshold = raw
        .trim()
        .parse::<u32>()
        .with_context(|| format!("RESUME_SCORE_THRESHOLD '{raw}' is not a whole number"))?;
    if threshold > 100 {
        bail!("RESUME_SCORE_THRESHOLD must be between 0 and 100, got {threshold}");
    }
    Ok(threshold)
}
