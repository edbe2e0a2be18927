use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the persisted buckets (JSON files).
    pub data_dir: String,
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,
    #[serde(default = "default_cpf_deduction")]
    pub cpf_deduction: f64,
    #[serde(default = "default_cpf_employer")]
    pub cpf_employer: f64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_hourly_rate() -> f64 {
    11.0
}
fn default_cpf_deduction() -> f64 {
    0.20
}
fn default_cpf_employer() -> f64 {
    0.37
}
fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            hourly_rate: default_hourly_rate(),
            cpf_deduction: default_cpf_deduction(),
            cpf_employer: default_cpf_employer(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftbook")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftbook")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftbook.conf")
    }

    /// Default location of the bucket directory
    pub fn data_dir_default() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Resolved bucket directory, with `~` expansion
    pub fn data_dir_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.data_dir)
    }

    /// Load configuration from file, or return defaults if not found.
    /// A file that exists but does not parse also falls back to defaults,
    /// so a broken config never blocks the tool.
    pub fn load() -> Self {
        let path = Self::config_file();

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Could not parse {} ({}); using default configuration.",
                        path.display(),
                        e
                    ));
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }

    /// Initialize configuration file and bucket directory
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // bucket dir: user provided or default
        let data_dir = if let Some(name) = custom_data_dir {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::data_dir_default()
        };

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&data_dir)?;
        println!("✅ Data dir:    {:?}", data_dir);

        Ok(data_dir)
    }
}
