use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device profile used by `info` when none is given on the command line.
    pub profile: Option<String>,
    /// Maximum length in bytes of a formatted value.
    pub capacity: usize,
    /// Print JSON instead of tab-separated text.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: None,
            capacity: 1024,
            json: false,
        }
    }
}

impl Config {
    /// Read the config at `path`, or defaults when the file does not exist.
    pub fn load(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            let contents =
                fs::read_to_string(path).with_context(|| format!("reading config: {path}"))?;
            serde_json::from_str(&contents).with_context(|| format!("parsing config: {path}"))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing config: {path}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let cfg = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.capacity, 1024);
        assert!(cfg.profile.is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dq.json");
        let path = path.to_str().unwrap();
        let cfg = Config {
            profile: Some("configs/devices/mock-gpu.yaml".into()),
            capacity: 80,
            json: true,
        };
        cfg.save(path).unwrap();
        let back = Config::load(path).unwrap();
        assert_eq!(back.capacity, 80);
        assert!(back.json);
        assert_eq!(back.profile, cfg.profile);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dq.json");
        fs::write(&path, r#"{"json": true}"#).unwrap();
        let cfg = Config::load(path.to_str().unwrap()).unwrap();
        assert!(cfg.json);
        assert_eq!(cfg.capacity, 1024);
    }
}
