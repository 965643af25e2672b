use crate::aws_cli::RunCommand;

#[derive(Debug)]
pub enum Error<RE>
where
    RE: std::fmt::Debug + std::error::Error,
{
    ConfigureSso(RE),
}

impl<RE: std::error::Error> std::fmt::Display for Error<RE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ConfigureSso(err) => write!(f, "Failed to configure SSO: {}", err),
        }
    }
}

impl<RE: std::error::Error> std::error::Error for Error<RE> {}

/// Delegates to the AWS CLI's interactive SSO configuration wizard.
/// Touches neither the config nor the credentials file itself.
pub fn exec_configure<R: RunCommand>(runner: R) -> Result<(), Error<R::Error>> {
    runner
        .run(&["configure", "sso"])
        .map_err(Error::ConfigureSso)?;
    println!("INFO: Successfully completed the SSO configuration wizard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug)]
    struct FakeRunnerError;

    impl std::fmt::Display for FakeRunnerError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "fake configure failure")
        }
    }

    impl std::error::Error for FakeRunnerError {}

    struct FakeRunner {
        invocations: Rc<RefCell<Vec<Vec<String>>>>,
        fail: bool,
    }

    impl RunCommand for FakeRunner {
        type Error = FakeRunnerError;

        fn run(&self, args: &[&str]) -> Result<(), Self::Error> {
            self.invocations
                .borrow_mut()
                .push(args.iter().map(ToString::to_string).collect());
            if self.fail {
                Err(FakeRunnerError)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_configure_delegates_to_wizard_without_touching_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let credentials_file = dir.path().join("credentials");
        let invocations = Rc::new(RefCell::new(Vec::new()));

        exec_configure(FakeRunner {
            invocations: Rc::clone(&invocations),
            fail: false,
        })
        .unwrap();

        assert_eq!(*invocations.borrow(), vec![vec!["configure", "sso"]]);
        assert!(!credentials_file.exists());
    }

    #[test]
    fn test_configure_failure_is_fatal() {
        let err = exec_configure(FakeRunner {
            invocations: Rc::new(RefCell::new(Vec::new())),
            fail: true,
        })
        .unwrap_err();
        assert!(matches!(err, Error::ConfigureSso(_)));
    }
}
