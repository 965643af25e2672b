use aws_credential_types::Credentials;
use ini::Ini;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub enum Error {
    Load(ini::Error),
    CreateDir(io::Error),
    Write(io::Error),
    SetPermissions(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Load(err) => {
                write!(f, "Failed to load the AWS credentials file: {}", err)
            }
            Error::CreateDir(err) => {
                write!(f, "Failed to create the AWS credentials directory: {}", err)
            }
            Error::Write(err) => {
                write!(f, "Failed to write the AWS credentials file: {}", err)
            }
            Error::SetPermissions(err) => {
                write!(f, "Failed to restrict AWS credentials file permissions: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Rewrites the credentials file with a fresh section for the profile.
///
/// Any existing section for the profile is dropped first so the section
/// holds exactly the three credential keys afterwards. Sections for other
/// profiles are carried over untouched. An existing but unparseable file is
/// an error rather than a silent overwrite.
pub fn persist_credentials(
    credentials_file: &Path,
    profile: &str,
    credentials: &Credentials,
) -> Result<(), Error> {
    let mut store = if credentials_file.exists() {
        Ini::load_from_file(credentials_file).map_err(Error::Load)?
    } else {
        Ini::new()
    };

    let _ = store.delete(Some(profile));
    store
        .with_section(Some(profile))
        .set("aws_access_key_id", credentials.access_key_id())
        .set("aws_secret_access_key", credentials.secret_access_key())
        .set("aws_session_token", credentials.session_token().unwrap_or(""));

    if let Some(parent) = credentials_file.parent() {
        fs::create_dir_all(parent).map_err(Error::CreateDir)?;
    }
    store.write_to_file(credentials_file).map_err(Error::Write)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(credentials_file, fs::Permissions::from_mode(0o600))
            .map_err(Error::SetPermissions)?;
    }

    Ok(())
}
