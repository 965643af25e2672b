pub mod config;
pub mod credentials;

use std::env;
use std::path::{Path, PathBuf};

/// Resolved locations of the two AWS files this tool touches.
///
/// Resolved once at startup from CLI arguments or the matching
/// environment variables, then passed by reference everywhere else.
#[derive(Debug, Clone)]
pub struct AwsFilePaths {
    pub config_file: PathBuf,
    pub credentials_file: PathBuf,
}

impl AwsFilePaths {
    pub fn resolve(config_file: Option<&Path>, credentials_file: Option<&Path>) -> Self {
        let aws_dir = home::home_dir().unwrap_or_else(env::temp_dir).join(".aws");
        Self {
            config_file: config_file.map_or_else(|| aws_dir.join("config"), PathBuf::from),
            credentials_file: credentials_file
                .map_or_else(|| aws_dir.join("credentials"), PathBuf::from),
        }
    }
}
