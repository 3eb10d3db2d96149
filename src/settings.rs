use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
pub const DEFAULT_BUFFER_SIZE: u32 = 64;

/// Audio configuration. Read once at startup and never written back.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub host_name: Option<String>,
    pub output_device: Option<String>,
    pub sample_rate: u32,
    pub buffer_size: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            host_name: None,
            output_device: None,
            sample_rate: DEFAULT_SAMPLE_RATE,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl AppSettings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// The `AppSettings` directory next to the executable.
pub fn get_config_dir() -> Option<PathBuf> {
    let exe_path = env::current_exe().ok()?;
    exe_path.parent().map(|dir| dir.join("AppSettings"))
}

pub fn load_settings() -> AppSettings {
    let Some(dir) = get_config_dir() else {
        log::warn!("Could not determine application directory, using default settings.");
        return AppSettings::default();
    };
    let path = dir.join("settings.json");
    if !path.exists() {
        log::info!("No settings file at {}, using defaults.", path.display());
        return AppSettings::default();
    }

    match fs::read_to_string(&path) {
        Ok(json_string) => match AppSettings::from_json(&json_string) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Failed to parse settings file, using defaults. Error: {}", e);
                AppSettings::default()
            }
        },
        Err(e) => {
            log::warn!("Failed to read settings file, using defaults. Error: {}", e);
            AppSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_stream() {
        let settings = AppSettings::default();
        assert_eq!(settings.sample_rate, 44100);
        assert_eq!(settings.buffer_size, 64);
        assert!(settings.host_name.is_none());
        assert!(settings.output_device.is_none());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = AppSettings::from_json(r#"{ "buffer_size": 256 }"#).unwrap();
        assert_eq!(settings.buffer_size, 256);
        assert_eq!(settings.sample_rate, DEFAULT_SAMPLE_RATE);

        let settings =
            AppSettings::from_json(r#"{ "host_name": "ALSA", "output_device": "pulse" }"#)
                .unwrap();
        assert_eq!(settings.host_name.as_deref(), Some("ALSA"));
        assert_eq!(settings.output_device.as_deref(), Some("pulse"));
        assert_eq!(settings.buffer_size, DEFAULT_BUFFER_SIZE);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AppSettings::from_json("{ sample_rate: }").is_err());
        assert!(AppSettings::from_json(r#"{ "sample_rate": "fast" }"#).is_err());
    }
}
