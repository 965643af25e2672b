use ini::Ini;
use std::path::Path;

#[derive(Debug)]
pub enum Error {
    Load(ini::Error),
    ProfileNotFound(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Load(err) => write!(f, "Failed to load the AWS config file: {}", err),
            Error::ProfileNotFound(profile) => {
                write!(f, "Profile {} does not exist in the AWS config file", profile)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Section name the AWS config file uses for a profile.
/// Every profile except the literal `default` is prefixed with `profile `.
fn config_section_name(profile: &str) -> String {
    if profile == "default" {
        profile.to_string()
    } else {
        format!("profile {}", profile)
    }
}

pub fn verify_profile_exists(config_file: &Path, profile: &str) -> Result<(), Error> {
    let config = Ini::load_from_file(config_file).map_err(Error::Load)?;
    if config.section(Some(config_section_name(profile))).is_none() {
        return Err(Error::ProfileNotFound(profile.to_string()));
    }
    Ok(())
}
