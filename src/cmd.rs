use clap::Parser;
use std::path::PathBuf;

const ARG_SHORT_PROFILE: char = 'p';
const ARG_SHORT_CONFIGURE: char = 'c';

/// CLI tool for refreshing AWS SSO derived credentials
#[derive(Parser)]
#[command(about, version)]
pub struct Cli {
    /// AWS profile to refresh credentials for.
    /// The profile must already exist in the AWS config file.
    #[arg(short = ARG_SHORT_PROFILE, long)]
    pub profile: Option<String>,

    /// Run the interactive AWS SSO configuration wizard instead of
    /// refreshing credentials. Takes precedence over `--profile`.
    #[arg(short = ARG_SHORT_CONFIGURE, long, default_value_t = false)]
    pub configure: bool,

    /// Optional path to the AWS config file.
    /// If not provided, the default location `~/.aws/config` is used.
    #[arg(long, env = "AWS_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Optional path to the AWS shared credentials file.
    /// If not provided, the default location `~/.aws/credentials` is used.
    #[arg(long, env = "AWS_SHARED_CREDENTIALS_FILE")]
    pub credentials_file: Option<PathBuf>,

    /// Maximum number of SSO re-login attempts after an expired token.
    /// Defaults to `3`.
    #[arg(long)]
    pub max_retries: Option<usize>,
}
