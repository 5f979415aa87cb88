use anyhow::{Result, bail};
use std::env;
use tgcal_core::FormatterSettings;

pub const LOCALE_ENV: &str = "CALENDAR_LOCALE";
pub const DAYS_AHEAD_ENV: &str = "CALENDAR_DAYS_AHEAD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarLocale {
    #[default]
    English,
    EnglishSundayFirst,
    Russian,
}

impl CalendarLocale {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "en" => Ok(Self::English),
            "en-sunday" | "en_sunday" => Ok(Self::EnglishSundayFirst),
            "ru" => Ok(Self::Russian),
            other => bail!("unsupported {}: {}", LOCALE_ENV, other),
        }
    }

    pub fn settings(&self) -> FormatterSettings {
        match self {
            Self::English => FormatterSettings::english(),
            Self::EnglishSundayFirst => FormatterSettings::english_sunday_first(),
            Self::Russian => FormatterSettings::russian(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BotConfig {
    pub locale: CalendarLocale,
    /// How far past today dates stay selectable. `None` leaves the future open.
    pub days_ahead: Option<u64>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        let locale = match env::var(LOCALE_ENV) {
            Ok(value) => CalendarLocale::parse(&value)?,
            Err(_) => CalendarLocale::default(),
        };
        let days_ahead = match env::var(DAYS_AHEAD_ENV) {
            Ok(value) => Some(
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| anyhow::anyhow!("invalid {}: {}", DAYS_AHEAD_ENV, e))?,
            ),
            Err(_) => None,
        };
        Ok(Self { locale, days_ahead })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!(CalendarLocale::parse("en").unwrap(), CalendarLocale::English);
        assert_eq!(CalendarLocale::parse(" RU ").unwrap(), CalendarLocale::Russian);
        assert_eq!(
            CalendarLocale::parse("en-sunday").unwrap(),
            CalendarLocale::EnglishSundayFirst
        );
        assert!(CalendarLocale::parse("fr").is_err());
    }

    #[test]
    fn test_locale_settings_are_valid() {
        for locale in [
            CalendarLocale::English,
            CalendarLocale::EnglishSundayFirst,
            CalendarLocale::Russian,
        ] {
            assert!(locale.settings().build().is_ok());
        }
    }
}
