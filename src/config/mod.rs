use crate::core::slots::generate_slots;
use crate::errors::{AppError, AppResult};
use crate::models::recurrence_rule::DEFAULT_LABEL;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use crate::utils::time::require_time;
use crate::utils::zone::ShopZone;
use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Shop offset as `±HH:MM`; machine local zone when absent.
    #[serde(default)]
    pub utc_offset: Option<String>,
    #[serde(default = "default_slot_interval")]
    pub slot_interval: u32,
    #[serde(default = "default_grid_start")]
    pub admin_grid_start: String,
    #[serde(default = "default_grid_end")]
    pub admin_grid_end: String,
    #[serde(default = "default_true")]
    pub legacy_blocked_appointments: bool,
    #[serde(default)]
    pub allow_sunday_rules: bool,
    #[serde(default = "default_label")]
    pub default_label: String,
    #[serde(default)]
    pub admin_emails: Vec<String>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_slot_interval() -> u32 {
    30
}
fn default_grid_start() -> String {
    "08:00".to_string()
}
fn default_grid_end() -> String {
    "17:00".to_string()
}
fn default_true() -> bool {
    true
}
fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            utc_offset: None,
            slot_interval: default_slot_interval(),
            admin_grid_start: default_grid_start(),
            admin_grid_end: default_grid_end(),
            legacy_blocked_appointments: true,
            allow_sunday_rules: false,
            default_label: default_label(),
            admin_emails: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("groombook")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".groombook")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("groombook.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("groombook.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn shop_zone(&self) -> AppResult<ShopZone> {
        ShopZone::from_offset(self.utc_offset.as_deref())
    }

    /// Full admin grid, used to validate rule times and blocks.
    pub fn admin_grid(&self) -> AppResult<Vec<String>> {
        let start = require_time(&self.admin_grid_start)?;
        let end = require_time(&self.admin_grid_end)?;
        Ok(generate_slots(
            start.hour(),
            start.minute(),
            end.hour(),
            end.minute(),
            self.slot_interval,
        ))
    }

    /// Lowest weekday index accepted for new recurrence rules.
    pub fn first_rule_day(&self) -> u32 {
        if self.allow_sunday_rules { 0 } else { 1 }
    }

    /// Admin capability check done at the boundary, before touching the core.
    /// An empty allow-list means the shop runs without access control.
    pub fn is_admin(&self, email: Option<&str>) -> bool {
        if self.admin_emails.is_empty() {
            return true;
        }
        email.is_some_and(|e| {
            self.admin_emails
                .iter()
                .any(|a| a.eq_ignore_ascii_case(e.trim()))
        })
    }

    pub fn require_admin(&self, email: Option<&str>) -> AppResult<()> {
        if self.is_admin(email) {
            Ok(())
        } else {
            Err(AppError::AccessDenied(email.unwrap_or("anonymous").to_string()))
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
