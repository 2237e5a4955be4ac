use clap::Parser;
use fx_cli::AppError;
use fx_cli::api::client::{DEFAULT_BASE_URL, FxClient};
use fx_cli::cli::dispatcher::Dispatcher;
use fx_cli::cli::main_types::Cli;
use fx_cli::core::auth::{CredentialResolver, TerminalPrompt};
use fx_cli::storage::credentials::CredentialStore;
use fx_cli::utils::logging::{log_error, log_unexpected};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match &e {
            AppError::Storage(_) => log_unexpected(&e.to_string()),
            _ => log_error(&e.to_string()),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> fx_cli::Result<()> {
    // Argument validation happens before credential resolution, so bad
    // parameters never trigger a prompt or a network call.
    let query = cli.to_query()?;

    let store = match &cli.config_dir {
        Some(dir) => CredentialStore::new(PathBuf::from(dir).join("credentials.env")),
        None => CredentialStore::default_location()?,
    };

    let mut prompt = TerminalPrompt;
    let mut resolver =
        CredentialResolver::new(cli.api_key.clone(), store, &mut prompt, cli.verbose);
    let app_id = resolver.resolve()?;

    let client = FxClient::new(DEFAULT_BASE_URL.to_string(), app_id)?;
    Dispatcher::new(client, cli.verbose).dispatch(query).await
}
