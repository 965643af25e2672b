pub mod aws_sdk;

use aws_credential_types::Credentials;

/// Source of resolved credential triplets for a named profile.
///
/// The retry loop in the refresher only knows this trait, so tests can
/// substitute scripted providers and the real SDK session stays swappable.
pub trait ProvideCredentials {
    type Error: 'static + std::error::Error;

    async fn provide_credentials(&self, profile: &str) -> Result<Credentials, Self::Error>;

    /// Whether the error indicates an expired SSO token, making the
    /// failure recoverable through an interactive re-login.
    fn is_expired_token(error: &Self::Error) -> bool;
}
