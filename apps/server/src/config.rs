//! Runtime configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingEnv(&'static str),
    #[error("{0} is not a valid chat id: {1:?}")]
    InvalidChatId(&'static str, String),
}

/// Telegram credentials, sourced from the environment only.
/// Never read from source text or a config file.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token.
    pub bot_token: String,
    /// Destination chat id.
    pub chat_id: i64,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramConfig {
    /// Load credentials from TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = read_env("TELEGRAM_BOT_TOKEN")?;
        let raw_chat_id = read_env("TELEGRAM_CHAT_ID")?;
        let chat_id = raw_chat_id
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidChatId("TELEGRAM_CHAT_ID", raw_chat_id))?;

        Ok(Self { bot_token, chat_id })
    }
}

fn read_env(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv(name)),
    }
}
