use std::env::VarError;
use std::path::PathBuf;

use json::JsonValue;
use log::{info, warn};

pub const MIN_SCALE: f32 = 1.0;
pub const MAX_SCALE: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub dark: bool,
    pub scale: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark: true,
            scale: 2.0,
        }
    }
}

impl Config {
    /// Missing or mistyped keys keep their default values.
    pub fn from_json(value: &JsonValue) -> Config {
        let default = Config::default();

        let dark = value["dark"].as_bool().unwrap_or(default.dark);
        let scale = value["scale"]
            .as_f32()
            .unwrap_or(default.scale)
            .clamp(MIN_SCALE, MAX_SCALE);

        Config { dark, scale }
    }

    pub fn to_json(&self) -> JsonValue {
        json::object! {
            dark: self.dark,
            scale: self.scale
        }
    }

    pub fn load() -> Config {
        let file = match get_config_file() {
            Ok(file) => file,
            Err(error) => {
                warn!("failed to get config: {}", error.to_string());
                return Config::default();
            }
        };

        info!("reading from file \"{}\"", file.display());

        let contents = match std::fs::read_to_string(&file) {
            Ok(contents) => contents,
            Err(error) => {
                warn!("failed to read config: {}", error.to_string());
                return Config::default();
            }
        };

        match json::parse(contents.as_str()) {
            Ok(parsed) => Config::from_json(&parsed),
            Err(error) => {
                warn!("failed to parse config: {}", error.to_string());
                Config::default()
            }
        }
    }

    pub fn save(&self) {
        let file = match get_config_file() {
            Ok(file) => file,
            Err(error) => {
                warn!("failed to get config: {}", error.to_string());
                return;
            }
        };

        info!("writing to file \"{}\"", file.display());

        if let Err(error) = std::fs::write(file, self.to_json().pretty(2)) {
            warn!("failed to write config: {}", error.to_string());
        }
    }
}

fn get_config_dir() -> Result<PathBuf, VarError> {
    #[cfg(unix)]
    let app_data = std::env::var("HOME")? + "/.config";

    #[cfg(windows)]
    let app_data = std::env::var("APP_DATA")?;

    let mut path = PathBuf::from(app_data);
    path.push("passgen");

    if !path.exists() {
        match std::fs::create_dir_all(&path) {
            Ok(()) => (),
            Err(_error) => return Err(VarError::NotPresent),
        };
    }

    Ok(path)
}

fn get_config_file() -> Result<PathBuf, VarError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("config.json");

    Ok(config_dir)
}
