use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

/// Environment variable that overrides `store.access_token`.
pub const TOKEN_ENV: &str = "FUELLOG_ACCESS_TOKEN";

/// Vehicle numbers of the bus fleet.
pub const DEFAULT_FLEET: [u32; 35] = [
    1, 2, 3, 4, 6, 7, 8, 9, 10, 11, 12, 15, 18, 52, 101, 102, 103, 104, 105, 106, 107, 108, 109,
    110, 111, 112, 113, 114, 115, 116, 117, 118, 119, 120, 121,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// S3-compatible HTTP endpoint
    Http,
    /// Local directory used as a bucket
    Fs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_kind")]
    pub kind: StoreKind,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default = "default_bucket")]
    pub bucket: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_store_root")]
    pub root: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: default_store_kind(),
            endpoint: String::new(),
            bucket: default_bucket(),
            region: String::new(),
            access_token: None,
            root: default_store_root(),
        }
    }
}

impl StoreConfig {
    /// Access token, with the environment taking precedence over the file.
    pub fn resolved_token(&self) -> Option<String> {
        env::var(TOKEN_ENV)
            .ok()
            .or_else(|| self.access_token.clone())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default = "default_mirror_dir")]
    pub mirror_dir: String,
    #[serde(default = "default_fill_up_dataset")]
    pub fill_up_dataset: String,
    #[serde(default = "default_deduction_dataset")]
    pub deduction_dataset: String,
    #[serde(default = "default_fleet")]
    pub fleet: Vec<u32>,
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default)]
    pub operator: Option<String>,
    /// File this configuration was loaded from.
    #[serde(skip)]
    pub path: PathBuf,
}

fn default_store_kind() -> StoreKind {
    StoreKind::Http
}
fn default_bucket() -> String {
    "fuellog".to_string()
}
fn default_store_root() -> String {
    Config::config_dir()
        .join("bucket")
        .to_string_lossy()
        .to_string()
}
fn default_mirror_dir() -> String {
    ".".to_string()
}
fn default_fill_up_dataset() -> String {
    "cargasCombustible.csv".to_string()
}
fn default_deduction_dataset() -> String {
    "stock_combustible_colectivos.csv".to_string()
}
fn default_fleet() -> Vec<u32> {
    DEFAULT_FLEET.to_vec()
}
fn default_utc_offset() -> i32 {
    -3
}
fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}
fn default_time_format() -> String {
    "%H:%M".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            mirror_dir: default_mirror_dir(),
            fill_up_dataset: default_fill_up_dataset(),
            deduction_dataset: default_deduction_dataset(),
            fleet: default_fleet(),
            utc_offset_hours: default_utc_offset(),
            date_format: default_date_format(),
            time_format: default_time_format(),
            operator: None,
            path: Self::config_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fuellog")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".fuellog")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fuellog.conf")
    }

    /// Activity log lives next to the config file it belongs to.
    pub fn log_file_for(config_path: &Path) -> PathBuf {
        config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_dir)
            .join("fuellog.log")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config {
                path: path.to_path_buf(),
                ..Config::default()
            });
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?
        };
        cfg.path = path.to_path_buf();
        Ok(cfg)
    }

    pub fn log_file(&self) -> PathBuf {
        Self::log_file_for(&self.path)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Write a default configuration file if none exists yet.
    /// Returns true when a new file was created.
    pub fn init_all(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        Config::default().save(path)?;
        Ok(true)
    }

    /// Apply command-line overrides on top of the loaded file.
    pub fn with_overrides(
        mut self,
        store_dir: Option<&str>,
        mirror_dir: Option<&str>,
        operator: Option<&str>,
    ) -> Self {
        if let Some(dir) = store_dir {
            self.store.kind = StoreKind::Fs;
            self.store.root = dir.to_string();
        }
        if let Some(dir) = mirror_dir {
            self.mirror_dir = dir.to_string();
        }
        if let Some(name) = operator {
            self.operator = Some(name.to_string());
        }
        self
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
