use std::{env, fs, path::PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct Config {
    pub url: String,
}

impl Config {
    pub fn path() -> PathBuf {
        let mut config_path = env::current_dir().unwrap();
        if cfg!(target_os = "linux") {
            config_path = match env::var("XDG_CONFIG_HOME") {
                Ok(s) => PathBuf::from(s),
                Err(_) => {
                    let mut p = PathBuf::from(env::var("HOME").unwrap());
                    p.push(".config");
                    p
                }
            }
        } else if cfg!(target_os = "macos") {
            config_path = {
                let mut p = PathBuf::from(env::var("HOME").unwrap());
                p.push("Library/Application Support");
                p
            }
        } else if cfg!(target_os = "windows") {
            config_path = PathBuf::from(env::var("APPDATA").unwrap());
        } else {
            eprintln!("Config path is not supported on this OS, using current directory.");
        }
        config_path.push("mineboard-cli");
        fs::create_dir_all(&config_path).unwrap();
        config_path.push("config.toml");
        config_path
    }

    pub fn load() -> Self {
        let config_path = Config::path();
        if config_path.is_file() {
            let s = fs::read_to_string(config_path).unwrap();
            toml::from_str(&s).unwrap()
        } else {
            let config = Self::default();
            config.save();
            config
        }
    }

    pub fn save(&self) {
        let s = toml::to_string(self).unwrap();
        fs::write(Config::path(), s).unwrap();
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: "http://localhost:8080".into(),
        }
    }
}
