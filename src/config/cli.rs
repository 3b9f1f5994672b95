use crate::utils::error::Result;
use crate::utils::logger::{LogConfig, DEFAULT_LOG_FILE, DEFAULT_MAX_BYTES};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "byline")]
#[command(about = "Print the analytics byline and log the run")]
pub struct CliConfig {
    /// TOML profile to use instead of the built-in one
    #[arg(long)]
    pub profile: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Rotate the log file once it would exceed this many bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES)]
    pub log_max_bytes: u64,

    /// Read the byline aloud after printing it
    #[arg(long)]
    pub speak: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            path: self.log_file.clone(),
            max_bytes: self.log_max_bytes,
            verbose: self.verbose,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("log_file", &self.log_file.to_string_lossy())?;
        validate_positive_number("log_max_bytes", self.log_max_bytes, 1)?;
        if let Some(profile) = &self.profile {
            validate_path("profile", &profile.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::try_parse_from(["byline"]).unwrap();

        assert_eq!(config.profile, None);
        assert_eq!(config.log_file, PathBuf::from("project.log"));
        assert_eq!(config.log_max_bytes, 100_000);
        assert!(!config.speak);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::try_parse_from([
            "byline",
            "--profile",
            "me.toml",
            "--log-file",
            "logs/run.log",
            "--log-max-bytes",
            "512",
            "--speak",
            "-v",
        ])
        .unwrap();

        let log = config.log_config();
        assert_eq!(log.path, PathBuf::from("logs/run.log"));
        assert_eq!(log.max_bytes, 512);
        assert!(log.verbose);
        assert!(config.speak);
        assert_eq!(config.profile, Some(PathBuf::from("me.toml")));
    }

    #[test]
    fn test_zero_rotation_limit_is_invalid() {
        let config = CliConfig::try_parse_from(["byline", "--log-max-bytes", "0"]).unwrap();
        assert!(config.validate().is_err());
    }
}
