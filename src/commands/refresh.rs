use crate::aws_cli::RunCommand;
use crate::credential_providers::ProvideCredentials;
use crate::refresher::{self, RefreshManager};
use crate::store::{self, AwsFilePaths};

pub struct ExecRefreshInputs {
    pub profile: String,
    pub max_retries: Option<usize>,
    pub paths: AwsFilePaths,
}

#[derive(Debug)]
pub enum Error<PE, RE>
where
    PE: std::fmt::Debug + std::error::Error,
    RE: std::fmt::Debug + std::error::Error,
{
    Profile(store::config::Error),
    Refresh(refresher::Error<PE, RE>),
    Persist(store::credentials::Error),
}

impl<PE: std::error::Error, RE: std::error::Error> std::fmt::Display for Error<PE, RE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Profile(err) => write!(f, "{}", err),
            Error::Refresh(err) => write!(f, "{}", err),
            Error::Persist(err) => write!(f, "{}", err),
        }
    }
}

impl<PE: std::error::Error, RE: std::error::Error> std::error::Error for Error<PE, RE> {}

pub type Result<PE, RE> = std::result::Result<(), Error<PE, RE>>;

/// Refresh pipeline: verify the profile, fetch a fresh triplet through the
/// retry loop, persist it. The profile check runs before anything touches
/// the network, and the success message is only printed once the
/// credentials file write has succeeded.
pub async fn exec_refresh<P, R>(
    provider: P,
    runner: R,
    inputs: ExecRefreshInputs,
) -> Result<P::Error, R::Error>
where
    P: ProvideCredentials,
    R: RunCommand,
{
    store::config::verify_profile_exists(&inputs.paths.config_file, &inputs.profile)
        .map_err(Error::Profile)?;

    let mut manager = RefreshManager::new(provider, runner, inputs.max_retries, None, None);
    let credentials = manager
        .fetch_credentials(&inputs.profile)
        .await
        .map_err(Error::Refresh)?;

    store::credentials::persist_credentials(
        &inputs.paths.credentials_file,
        &inputs.profile,
        &credentials,
    )
    .map_err(Error::Persist)?;

    println!(
        "INFO: Successfully refreshed credentials for profile {}",
        inputs.profile
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_credential_types::Credentials;
    use ini::Ini;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug)]
    struct FakeProviderError;

    impl std::fmt::Display for FakeProviderError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "fake credential failure")
        }
    }

    impl std::error::Error for FakeProviderError {}

    struct FakeProvider {
        credentials: Credentials,
        calls: Rc<RefCell<usize>>,
    }

    impl ProvideCredentials for FakeProvider {
        type Error = FakeProviderError;

        async fn provide_credentials(
            &self,
            _profile: &str,
        ) -> std::result::Result<Credentials, Self::Error> {
            *self.calls.borrow_mut() += 1;
            Ok(self.credentials.clone())
        }

        fn is_expired_token(_error: &Self::Error) -> bool {
            false
        }
    }

    #[derive(Debug)]
    struct FakeRunnerError;

    impl std::fmt::Display for FakeRunnerError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "fake login failure")
        }
    }

    impl std::error::Error for FakeRunnerError {}

    struct NoopRunner;

    impl RunCommand for NoopRunner {
        type Error = FakeRunnerError;

        fn run(&self, _args: &[&str]) -> std::result::Result<(), Self::Error> {
            Ok(())
        }
    }

    fn fake_provider(calls: &Rc<RefCell<usize>>) -> FakeProvider {
        FakeProvider {
            credentials: Credentials::new(
                "AKID",
                "SECRET",
                Some("TOKEN".to_string()),
                None,
                "test",
            ),
            calls: Rc::clone(calls),
        }
    }

    fn temp_paths(config_contents: Option<&str>) -> (tempfile::TempDir, AwsFilePaths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = AwsFilePaths {
            config_file: dir.path().join("config"),
            credentials_file: dir.path().join("credentials"),
        };
        if let Some(contents) = config_contents {
            std::fs::write(&paths.config_file, contents).unwrap();
        }
        (dir, paths)
    }

    #[tokio::test]
    async fn test_refresh_writes_credentials_for_verified_profile() {
        let (_dir, paths) = temp_paths(Some("[profile dev]\nsso_region = eu-west-2\n"));
        let calls = Rc::new(RefCell::new(0));

        exec_refresh(
            fake_provider(&calls),
            NoopRunner,
            ExecRefreshInputs {
                profile: "dev".to_string(),
                max_retries: None,
                paths: paths.clone(),
            },
        )
        .await
        .unwrap();

        let store = Ini::load_from_file(&paths.credentials_file).unwrap();
        let section = store.section(Some("dev")).unwrap();
        assert_eq!(section.get("aws_access_key_id"), Some("AKID"));
        assert_eq!(*calls.borrow(), 1);
    }

    #[tokio::test]
    async fn test_missing_profile_fails_before_any_fetch() {
        let (_dir, paths) = temp_paths(Some("[profile prod]\nsso_region = eu-west-2\n"));
        let calls = Rc::new(RefCell::new(0));

        let err = exec_refresh(
            fake_provider(&calls),
            NoopRunner,
            ExecRefreshInputs {
                profile: "dev".to_string(),
                max_retries: None,
                paths: paths.clone(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            Error::Profile(store::config::Error::ProfileNotFound(_))
        ));
        assert_eq!(*calls.borrow(), 0);
        assert!(!paths.credentials_file.exists());
    }
}
