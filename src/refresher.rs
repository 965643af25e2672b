use crate::aws_cli::RunCommand;
use crate::credential_providers::ProvideCredentials;
use aws_credential_types::Credentials;
use chrono::Duration;
use std::io::Write;

const DEFAULT_LOGIN_MAX_RETRIES: usize = 3;
const LOGIN_BACKOFF_BASE: Duration = Duration::seconds(1);

#[derive(Debug)]
pub enum Error<PE, RE>
where
    PE: std::fmt::Debug + std::error::Error,
    RE: std::fmt::Debug + std::error::Error,
{
    FetchCredentials(PE),
    SsoLogin(RE),
}

impl<PE: std::error::Error, RE: std::error::Error> std::fmt::Display for Error<PE, RE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::FetchCredentials(err) => {
                write!(f, "Failed to retrieve credentials from the SSO session: {}", err)
            }
            Error::SsoLogin(err) => write!(f, "Failed to refresh the SSO token: {}", err),
        }
    }
}

impl<PE: std::error::Error, RE: std::error::Error> std::error::Error for Error<PE, RE> {}

type Result<T, PE, RE> = std::result::Result<T, Error<PE, RE>>;

/// Injected delay so backoff timing is assertable in tests without
/// actually sleeping.
pub type Sleeper = Box<dyn Fn(std::time::Duration)>;

/// Drives the credential fetch with bounded re-login retries.
///
/// An expired-token failure triggers an interactive `aws sso login` for
/// the profile followed by an exponentially growing wait, up to
/// `max_retries` times. Any other failure is terminal.
pub struct RefreshManager<P, R>
where
    P: ProvideCredentials,
    R: RunCommand,
{
    provider: P,
    runner: R,
    max_retries: usize,
    sleeper: Sleeper,
    message_writer: Box<dyn std::io::Write>,
}

impl<P, R> RefreshManager<P, R>
where
    P: ProvideCredentials,
    R: RunCommand,
{
    pub fn new(
        provider: P,
        runner: R,
        max_retries: Option<usize>,
        sleeper: Option<Sleeper>,
        message_writer: Option<Box<dyn std::io::Write>>,
    ) -> Self {
        Self {
            provider,
            runner,
            max_retries: max_retries.unwrap_or(DEFAULT_LOGIN_MAX_RETRIES),
            sleeper: sleeper.unwrap_or_else(|| Box::new(std::thread::sleep)),
            message_writer: match message_writer {
                Some(writer) => writer,
                None => Box::new(std::io::stderr()),
            },
        }
    }

    pub async fn fetch_credentials(
        &mut self,
        profile: &str,
    ) -> Result<Credentials, P::Error, R::Error> {
        let mut attempts = 0;
        loop {
            match self.provider.provide_credentials(profile).await {
                Ok(credentials) => break Ok(credentials),
                Err(err) if attempts < self.max_retries && P::is_expired_token(&err) => {
                    let _ = writeln!(
                        self.message_writer,
                        "INFO: SSO token has expired. Starting an interactive login for profile {}...",
                        profile
                    );
                    self.relogin(profile)?;
                    (self.sleeper)((LOGIN_BACKOFF_BASE * (1 << attempts)).to_std().unwrap());
                    attempts += 1;
                }
                Err(err) => break Err(Error::FetchCredentials(err)),
            }
        }
    }

    fn relogin(&self, profile: &str) -> Result<(), P::Error, R::Error> {
        self.runner
            .run(&["sso", "login", "--profile", profile])
            .map_err(Error::SsoLogin)
    }
}
