use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use studyplan_core::{AllocatorConfig, ReminderPolicy};

use crate::state::{config_path, ensure_studyplan_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub allocator: AllocatorConfig,
    pub reminders: ReminderPolicy,
    pub profile: ProfileSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSection {
    /// IANA zone used to read "now" when `--now` is not given.
    pub timezone: String,
}

impl Default for ProfileSection {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(s).context("parse config.toml")?;
        cfg.allocator.validate().context("config.toml [allocator]")?;
        Ok(cfg)
    }
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        tracing::debug!(path = %p.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Config::from_toml(&s).with_context(|| format!("load {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<()> {
    ensure_studyplan_home()?;
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
