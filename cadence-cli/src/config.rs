use anyhow::{Context, Result};
use cadence_core::{local_date, Locale};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_cadence_home;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplaySection,
    #[serde(default)]
    pub calendar: CalendarSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DisplaySection {
    /// Label language for details and period labels ("ko" or "en").
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSection {
    /// IANA zone whose calendar day counts as "today".
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for CalendarSection {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "Asia/Seoul".to_string()
}

impl Config {
    /// The user's local calendar day right now.
    pub fn today(&self) -> Result<NaiveDate> {
        local_date(Utc::now(), &self.calendar.timezone)
            .with_context(|| format!("[calendar] timezone = {:?}", self.calendar.timezone))
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_cadence_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let cfg = load_config()?;
    println!("# {}", config_path()?.display());
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.display.locale, Locale::Ko);
        assert_eq!(cfg.calendar.timezone, "Asia/Seoul");
    }

    #[test]
    fn test_parse_config() {
        let cfg = parse_config(
            r#"
[display]
locale = "en"

[calendar]
timezone = "America/Chicago"
"#,
        )
        .unwrap();
        assert_eq!(cfg.display.locale, Locale::En);
        assert_eq!(cfg.calendar.timezone, "America/Chicago");
    }

    #[test]
    fn test_config_roundtrip_through_toml() {
        let cfg = Config::default();
        let s = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(parse_config(&s).unwrap(), cfg);
    }

    #[test]
    fn test_bad_locale_is_error() {
        assert!(parse_config("[display]\nlocale = \"fr\"\n").is_err());
    }

    #[test]
    fn test_today_rejects_bad_timezone() {
        let mut cfg = Config::default();
        cfg.calendar.timezone = "Nowhere/Land".to_string();
        assert!(cfg.today().is_err());
    }
}
