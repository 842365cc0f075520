//! User configuration options.

use crate::{BASE_DIR, CLIOptions};
use dirs::config_dir;
use kartinfo::DEFAULT_STARTTRANSCOLOR;
use kartinfo::log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions, create_dir_all};
use std::io::{self, Read, Write};
use std::path::PathBuf;

const LOG_TAG: &str = "UserConfig";

fn get_cfg_file() -> Result<PathBuf, io::Error> {
    let mut dir = config_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{}: Couldn't find user config dir", LOG_TAG),
        )
    })?;
    dir.push(BASE_DIR);
    if !dir.exists() {
        create_dir_all(&dir)?;
    }
    dir.push("config.toml");
    Ok(dir)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Patches applied on every run before any given on the command line
    pub soc_files: Vec<String>,
    /// Snapshot the tables before patching so `--reset` can roll back
    pub backup_on_start: bool,
    pub start_trans_color: u8,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            soc_files: Vec::new(),
            backup_on_start: true,
            start_trans_color: DEFAULT_STARTTRANSCOLOR,
        }
    }
}

impl UserConfig {
    /// Read the config, creating a default one if it is missing or can't be
    /// parsed
    pub fn load() -> Result<Self, io::Error> {
        let path = get_cfg_file()?;

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        let mut buf = String::new();
        if file.read_to_string(&mut buf)? == 0 {
            return UserConfig::create_default(&path);
        }
        match toml::from_str(&buf) {
            Ok(data) => {
                info!(target: LOG_TAG, "Loaded user config file");
                Ok(data)
            }
            Err(e) => {
                warn!(target: LOG_TAG, "Could not deserialise {:?}: {}, recreating config", path, e);
                UserConfig::create_default(&path)
            }
        }
    }

    fn create_default(path: &PathBuf) -> Result<Self, io::Error> {
        let config = UserConfig::default();
        config.write_to(path)?;
        info!(target: LOG_TAG, "Created default user config file");
        Ok(config)
    }

    fn write_to(&self, path: &PathBuf) -> Result<(), io::Error> {
        let data = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let mut file = File::create(path)?;
        file.write_all(data.as_bytes())?;
        info!(target: LOG_TAG, "Saved user config to {:?}", path);
        Ok(())
    }

    pub fn write(&self) -> Result<(), io::Error> {
        self.write_to(&get_cfg_file()?)
    }

    /// Merge the CLI options with the config. Options given on the command
    /// line win, and are stored in the config for `--save-config`.
    pub fn sync_cli(&mut self, cli: &mut CLIOptions) {
        info!(target: LOG_TAG, "Checking CLI options");

        if !cli.soc.is_empty() && cli.soc != self.soc_files {
            for soc in cli.soc.iter() {
                if !self.soc_files.contains(soc) {
                    self.soc_files.push(soc.clone());
                }
            }
        }
        cli.soc.clone_from(&self.soc_files);

        if let Some(start) = cli.start_trans_color {
            self.start_trans_color = start;
        } else {
            cli.start_trans_color = Some(self.start_trans_color);
        }

        if cli.no_backup {
            self.backup_on_start = false;
        } else {
            cli.no_backup = !self.backup_on_start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UserConfig;
    use crate::CLIOptions;
    use argh::FromArgs;

    fn cli(args: &[&str]) -> CLIOptions {
        CLIOptions::from_args(&["kartinfo"], args).unwrap()
    }

    #[test]
    fn toml_round_trip_fills_defaults() {
        let config: UserConfig = toml::from_str("soc_files = [\"dud.soc\"]\n").unwrap();
        assert_eq!(config.soc_files, vec!["dud.soc".to_string()]);
        assert!(config.backup_on_start);
        assert_eq!(config.start_trans_color, 96);

        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(toml::from_str::<UserConfig>(&text).unwrap(), config);
    }

    #[test]
    fn cli_wins() {
        let mut config = UserConfig {
            soc_files: vec!["base.soc".to_string()],
            ..UserConfig::default()
        };
        let mut options = cli(&["--soc", "dud.soc", "--start-trans-color", "160"]);
        config.sync_cli(&mut options);
        assert_eq!(config.soc_files, vec!["base.soc", "dud.soc"]);
        assert_eq!(options.soc, config.soc_files);
        assert_eq!(config.start_trans_color, 160);
        assert!(!options.no_backup);

        let mut options = cli(&["--no-backup"]);
        config.sync_cli(&mut options);
        assert!(!config.backup_on_start);
        assert_eq!(options.start_trans_color, Some(160));
    }
}
