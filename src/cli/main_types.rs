use crate::utils::validation::{resolve_date, validate_currency_code};
use clap::Parser;

#[derive(Parser)]
#[command(name = "fx-cli")]
#[command(about = "Get historical foreign exchange rates from Open Exchange Rates")]
#[command(version)]
pub struct Cli {
    /// Date in YYYY-MM-DD format, or 'today'
    pub date: String,

    /// 3-letter currency code (e.g. USD, BRL, EUR)
    pub currency: String,

    /// Optional target currency for conversion
    pub target_currency: Option<String>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// API key (App ID); also read from the environment
    #[arg(long, env = "FX_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the credential file directory
    #[arg(long)]
    pub config_dir: Option<String>,
}

/// A validated, normalized rate query: concrete date, upper-case codes.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuery {
    pub date: String,
    pub currency: String,
    pub target_currency: Option<String>,
}

impl Cli {
    /// Validate and normalize the positional arguments. Fails before any
    /// credential resolution or network access.
    pub fn to_query(&self) -> crate::Result<RateQuery> {
        let date = resolve_date(&self.date)?;
        let currency = validate_currency_code(&self.currency)?;
        let target_currency = self
            .target_currency
            .as_deref()
            .map(validate_currency_code)
            .transpose()?;

        Ok(RateQuery {
            date,
            currency,
            target_currency,
        })
    }
}
