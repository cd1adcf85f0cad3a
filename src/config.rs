// Application configuration, loaded from an optional RON file, environment
// variables and CLI flags.

use crate::compatibility::IdThresholds;
use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedingConfig {
    /// Highest id treated as "old" by the selective heuristic.
    pub old_id_max: u64,
    /// Lowest id treated as "new" by the selective heuristic.
    pub new_id_min: u64,
    /// Upper bound on pairs per request. Requests may ask for fewer.
    pub max_pairs: usize,
    /// How long a paired creature stays ineligible, in seconds.
    pub cooldown_secs: u64,
    /// Longest breeding chain, in generations, the solver searches per move.
    pub max_chain_generations: usize,
    /// Directory of species RON files. When unset the bundled data is used.
    pub data_dir: Option<PathBuf>,
    /// Command the chat platform expects in front of paired ids.
    pub command_prefix: String,
}

impl Default for BreedingConfig {
    fn default() -> Self {
        let thresholds = IdThresholds::default();
        Self {
            old_id_max: thresholds.old_id_max,
            new_id_min: thresholds.new_id_min,
            max_pairs: 2,
            cooldown_secs: 12 * 60 * 60,
            max_chain_generations: 5,
            data_dir: None,
            command_prefix: "daycare add".to_string(),
        }
    }
}

impl BreedingConfig {
    /// Load configuration from the process environment and CLI arguments.
    ///
    /// Environment variables:
    /// - `BREEDING_CONFIG` - Path to a RON config file
    /// - `BREEDING_OLD_ID_MAX` / `BREEDING_NEW_ID_MIN` - Id category thresholds
    /// - `BREEDING_MAX_PAIRS` - Pair cap per request (default: 2)
    /// - `BREEDING_COOLDOWN_SECS` - Cooldown after pairing (default: 12h)
    /// - `BREEDING_MAX_GENERATIONS` - Chain search depth (default: 5)
    /// - `BREEDING_DATA_DIR` - Species data directory
    /// - `BREEDING_COMMAND_PREFIX` - Command prefix for paired ids
    ///
    /// CLI flags:
    /// - `--config <PATH>` - Config file (takes precedence over `BREEDING_CONFIG`)
    /// - `--data <DIR>` - Species data directory (takes precedence over everything)
    pub fn load() -> ConfigResult<Self> {
        let args: Vec<String> = std::env::args().collect();
        Self::load_from(&args, |key| std::env::var(key).ok())
    }

    /// Same as [`BreedingConfig::load`] with injectable arguments and environment.
    pub fn load_from<F>(args: &[String], env: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = Self::parse_cli_value(args, "--config")
            .or_else(|| env("BREEDING_CONFIG"))
            .map(PathBuf::from);

        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(value) = parse_env(&env, "BREEDING_OLD_ID_MAX")? {
            config.old_id_max = value;
        }
        if let Some(value) = parse_env(&env, "BREEDING_NEW_ID_MIN")? {
            config.new_id_min = value;
        }
        if let Some(value) = parse_env(&env, "BREEDING_MAX_PAIRS")? {
            config.max_pairs = value;
        }
        if let Some(value) = parse_env(&env, "BREEDING_COOLDOWN_SECS")? {
            config.cooldown_secs = value;
        }
        if let Some(value) = parse_env(&env, "BREEDING_MAX_GENERATIONS")? {
            config.max_chain_generations = value;
        }
        if let Some(dir) = env("BREEDING_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(prefix) = env("BREEDING_COMMAND_PREFIX") {
            config.command_prefix = prefix;
        }
        if let Some(dir) = Self::parse_cli_value(args, "--data") {
            config.data_dir = Some(PathBuf::from(dir));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    /// Parse a RON config. Missing fields keep their defaults.
    pub fn from_ron_str(content: &str) -> ConfigResult<Self> {
        let config: Self = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.old_id_max >= self.new_id_min {
            return Err(ConfigError::InvalidIdThresholds {
                old_id_max: self.old_id_max,
                new_id_min: self.new_id_min,
            });
        }
        if self.max_pairs == 0 {
            return Err(ConfigError::ZeroLimit("max_pairs"));
        }
        if self.max_chain_generations == 0 {
            return Err(ConfigError::ZeroLimit("max_chain_generations"));
        }
        Ok(())
    }

    pub fn id_thresholds(&self) -> IdThresholds {
        IdThresholds {
            old_id_max: self.old_id_max,
            new_id_min: self.new_id_min,
        }
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    /// Parse a CLI flag value like `--data ./species`.
    fn parse_cli_value(args: &[String], flag: &str) -> Option<String> {
        args.windows(2).find_map(|pair| {
            if pair[0] == flag {
                Some(pair[1].clone())
            } else {
                None
            }
        })
    }
}

fn parse_env<T, F>(env: &F, key: &str) -> ConfigResult<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match env(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
    }
}
