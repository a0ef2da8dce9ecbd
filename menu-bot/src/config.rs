//! Menu bot config: Telegram connection + menu definition path + logging + send timeout.
//! Loaded from env (after `.env`): BOT_TOKEN, TELEGRAM_API_URL, MENU_FILE, LOG_FILE, SEND_TIMEOUT_SECS.

use anyhow::Result;
use dbot_telegram::TelegramConfig;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MENU_FILE: &str = "menu/menus.json";
pub const DEFAULT_LOG_FILE: &str = "logs/menu-bot.log";
pub const DEFAULT_SEND_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct MenuBotConfig {
    pub telegram: TelegramConfig,
    /// MENU_FILE
    pub menu_file: PathBuf,
    /// LOG_FILE
    pub log_file: String,
    /// SEND_TIMEOUT_SECS: upper bound for delivering one reply
    pub send_timeout_secs: u64,
}

impl MenuBotConfig {
    /// Loads from env. `token` overrides BOT_TOKEN and `menu_file` overrides MENU_FILE.
    pub fn load(token: Option<String>, menu_file: Option<PathBuf>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            telegram,
            menu_file: resolve_menu_file(menu_file),
            log_file,
            send_timeout_secs: send_timeout_secs_from_env(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        send_timeout_from_secs(self.send_timeout_secs)?;
        Ok(())
    }

    pub fn send_timeout(&self) -> Duration {
        Duration::from_secs(self.send_timeout_secs)
    }
}

/// CLI value, else MENU_FILE, else [`DEFAULT_MENU_FILE`].
pub fn resolve_menu_file(cli_value: Option<PathBuf>) -> PathBuf {
    cli_value
        .or_else(|| env::var_os("MENU_FILE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MENU_FILE))
}

/// Send timeout for `secs`; zero is rejected.
pub fn send_timeout_from_secs(secs: u64) -> Result<Duration> {
    if secs == 0 {
        anyhow::bail!("SEND_TIMEOUT_SECS must be greater than 0");
    }
    Ok(Duration::from_secs(secs))
}

/// SEND_TIMEOUT_SECS if set and numeric, else [`DEFAULT_SEND_TIMEOUT_SECS`].
pub fn send_timeout_secs_from_env() -> u64 {
    env::var("SEND_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEND_TIMEOUT_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "BOT_TOKEN",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
            "MENU_FILE",
            "LOG_FILE",
            "SEND_TIMEOUT_SECS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");

        let config = MenuBotConfig::load(None, None).unwrap();

        assert_eq!(config.telegram.bot_token, "test_token");
        assert!(config.telegram.telegram_api_url.is_none());
        assert_eq!(config.menu_file, PathBuf::from("menu/menus.json"));
        assert_eq!(config.log_file, "logs/menu-bot.log");
        assert_eq!(config.send_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("MENU_FILE", "/etc/bot/menus.json");
        env::set_var("LOG_FILE", "/var/log/menu.log");
        env::set_var("SEND_TIMEOUT_SECS", "3");
        env::set_var("TELOXIDE_API_URL", "http://localhost:8081");

        let config = MenuBotConfig::load(None, None).unwrap();

        assert_eq!(config.menu_file, PathBuf::from("/etc/bot/menus.json"));
        assert_eq!(config.log_file, "/var/log/menu.log");
        assert_eq!(config.send_timeout_secs, 3);
        assert_eq!(
            config.telegram.telegram_api_url.as_deref(),
            Some("http://localhost:8081")
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_cli_values_override_env() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("MENU_FILE", "env.json");

        let config =
            MenuBotConfig::load(Some("cli_token".to_string()), Some("cli.json".into())).unwrap();

        assert_eq!(config.telegram.bot_token, "cli_token");
        assert_eq!(config.menu_file, PathBuf::from("cli.json"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_falls_back_and_zero_fails_validation() {
        clear_env();
        env::set_var("BOT_TOKEN", "t");

        env::set_var("SEND_TIMEOUT_SECS", "soon");
        assert_eq!(MenuBotConfig::load(None, None).unwrap().send_timeout_secs, 10);

        env::set_var("SEND_TIMEOUT_SECS", "0");
        assert!(MenuBotConfig::load(None, None).unwrap().validate().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_zero_timeout_rejected_without_telegram_config() {
        clear_env();
        env::set_var("SEND_TIMEOUT_SECS", "0");

        let err = send_timeout_from_secs(send_timeout_secs_from_env()).unwrap_err();
        assert!(err.to_string().contains("SEND_TIMEOUT_SECS"));

        env::set_var("SEND_TIMEOUT_SECS", "4");
        assert_eq!(
            send_timeout_from_secs(send_timeout_secs_from_env()).unwrap(),
            Duration::from_secs(4)
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_telegram_api_url_invalid() {
        clear_env();
        env::set_var("BOT_TOKEN", "t");
        env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

        let config = MenuBotConfig::load(None, None).unwrap();
        assert!(config.validate().is_err());

        clear_env();
    }
}
