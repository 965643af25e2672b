use std::io;
use std::process::{Command, ExitStatus, Stdio};

const AWS_CLI_PROGRAM: &str = "aws";

#[derive(Debug)]
pub enum Error {
    ProgramSpawnFailed(io::Error),
    ProgramExecFailed(io::Error),
    NonZeroExit(ExitStatus),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ProgramSpawnFailed(err) => write!(f, "Failed to start the AWS CLI: {}", err),
            Error::ProgramExecFailed(err) => {
                write!(f, "AWS CLI failed during execution: {}", err)
            }
            Error::NonZeroExit(status) => {
                write!(f, "AWS CLI exited with a non-zero status: {}", status)
            }
        }
    }
}

impl std::error::Error for Error {}

/// External process seam. The interactive SSO flows are delegated to the
/// AWS CLI through this trait so tests can substitute a recording fake.
pub trait RunCommand {
    type Error: 'static + std::error::Error;

    fn run(&self, args: &[&str]) -> Result<(), Self::Error>;
}

/// Runs the `aws` binary with inherited stdio, since both `sso login` and
/// `configure sso` prompt the user interactively.
pub struct AwsCli {
    program: String,
}

impl Default for AwsCli {
    fn default() -> Self {
        Self {
            program: AWS_CLI_PROGRAM.to_string(),
        }
    }
}

impl RunCommand for AwsCli {
    type Error = Error;

    fn run(&self, args: &[&str]) -> Result<(), Self::Error> {
        let status = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(io::stdout())
            .stderr(io::stderr())
            .spawn()
            .map_err(Error::ProgramSpawnFailed)?
            .wait()
            .map_err(Error::ProgramExecFailed)?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::NonZeroExit(status))
        }
    }
}
