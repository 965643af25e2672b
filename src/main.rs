#![warn(unused_extern_crates)]

mod aws_cli;
mod cmd;
mod commands;
mod credential_providers;
mod refresher;
mod store;

use aws_cli::AwsCli;
use clap::{CommandFactory, Parser};
use cmd::Cli;
use commands::configure::exec_configure;
use commands::refresh::{exec_refresh, ExecRefreshInputs};
use credential_providers::aws_sdk::SdkSessionProvider;
use std::error::Error;
use store::AwsFilePaths;

fn error_to_string(error: impl Error) -> String {
    error.to_string()
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();

    if cli.configure {
        return exec_configure(AwsCli::default()).map_err(error_to_string);
    }

    let Some(profile) = cli.profile else {
        Cli::command().print_help().map_err(error_to_string)?;
        return Ok(());
    };

    let paths = AwsFilePaths::resolve(cli.config_file.as_deref(), cli.credentials_file.as_deref());
    let provider = SdkSessionProvider::new(&paths);

    exec_refresh(
        provider,
        AwsCli::default(),
        ExecRefreshInputs {
            profile,
            max_retries: cli.max_retries,
            paths,
        },
    )
    .await
    .map_err(error_to_string)
}
