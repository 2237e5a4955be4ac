use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {message}")]
    Network { endpoint: String, message: String },
    #[error(
        "Authentication failed (HTTP {status}): check your App ID at \
         https://openexchangerates.org/account/app-ids"
    )]
    Unauthorized { status: u16, endpoint: String },
    #[error("API Error: {message}")]
    Api { message: String },
    #[error("Unexpected API response format: {message}")]
    Format { message: String },
    #[error("Currency '{currency}' not found in rates for {date}")]
    NotFound { currency: String, date: String },
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No API key provided. An Open Exchange Rates App ID is required")]
    Declined,
    #[error("Failed to read API key from terminal: {0}")]
    PromptFailed(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}
