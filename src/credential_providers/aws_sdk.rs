use crate::credential_providers::ProvideCredentials;
use crate::store::AwsFilePaths;
use aws_config::profile::profile_file::{ProfileFileKind, ProfileFiles};
use aws_config::BehaviorVersion;
use aws_credential_types::provider::error::CredentialsError;
use aws_credential_types::provider::ProvideCredentials as SdkProvideCredentials;
use aws_credential_types::Credentials;

/// Message fragments the SDK surfaces when the cached SSO token can no
/// longer be used and an interactive login is required.
const EXPIRED_TOKEN_MARKERS: [&str; 2] = ["expired", "refresh failed"];

#[derive(Debug)]
pub enum Error {
    ExpiredToken(CredentialsError),
    ResolveCredentials(CredentialsError),
    MissingCredentialsProvider,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ExpiredToken(err) => {
                write!(f, "SSO token has expired: {}", err)
            }
            Error::ResolveCredentials(err) => {
                write!(f, "Failed to retrieve SSO credentials: {}", err)
            }
            Error::MissingCredentialsProvider => {
                write!(f, "No credentials provider is configured for the profile")
            }
        }
    }
}

impl std::error::Error for Error {}

fn indicates_expired_token(error: &(dyn std::error::Error + 'static)) -> bool {
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(error);
    while let Some(err) = current {
        let message = err.to_string().to_lowercase();
        if EXPIRED_TOKEN_MARKERS
            .iter()
            .any(|marker| message.contains(marker))
        {
            return true;
        }
        current = err.source();
    }
    false
}

/// Credential source backed by an SDK session over the shared AWS files.
///
/// The session resolves the profile's SSO configuration from the same
/// config file the profile check reads, so CLI overrides and SDK
/// resolution never disagree.
pub struct SdkSessionProvider {
    profile_files: ProfileFiles,
}

impl SdkSessionProvider {
    pub fn new(paths: &AwsFilePaths) -> Self {
        let profile_files = ProfileFiles::builder()
            .include_default_config_file(false)
            .include_default_credentials_file(false)
            .with_file(ProfileFileKind::Config, &paths.config_file)
            .with_file(ProfileFileKind::Credentials, &paths.credentials_file)
            .build();
        Self { profile_files }
    }
}

impl ProvideCredentials for SdkSessionProvider {
    type Error = Error;

    async fn provide_credentials(&self, profile: &str) -> Result<Credentials, Self::Error> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .profile_files(self.profile_files.clone())
            .load()
            .await;

        let provider = sdk_config
            .credentials_provider()
            .ok_or(Error::MissingCredentialsProvider)?;

        provider.provide_credentials().await.map_err(|err| {
            if indicates_expired_token(&err) {
                Error::ExpiredToken(err)
            } else {
                Error::ResolveCredentials(err)
            }
        })
    }

    fn is_expired_token(error: &Self::Error) -> bool {
        matches!(error, Error::ExpiredToken(_))
    }
}
