use crate::api::client::FxClient;
use crate::cli::main_types::RateQuery;
use crate::error::AppError;
use crate::utils::logging::print_verbose;
use crate::utils::text::format_rate;

pub struct Dispatcher {
    client: FxClient,
    verbose: bool,
}

impl Dispatcher {
    pub fn new(client: FxClient, verbose: bool) -> Self {
        Self { client, verbose }
    }

    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    /// Execute one query and print the result line.
    pub async fn dispatch(&self, query: RateQuery) -> Result<(), AppError> {
        self.log_verbose(&format!("Fetching rates for {}...", query.date));
        println!("{}", self.render(&query).await?);
        Ok(())
    }

    async fn render(&self, query: &RateQuery) -> Result<String, AppError> {
        match &query.target_currency {
            Some(target) => {
                let rate = self
                    .client
                    .convert_currency(&query.date, &query.currency, target)
                    .await?;
                Ok(format!(
                    "FX rate for {} {} to {}: {}",
                    query.date,
                    query.currency,
                    target,
                    format_rate(rate)
                ))
            }
            None => {
                let rate = self.client.get_rate(&query.date, &query.currency).await?;
                Ok(format!(
                    "FX rate for {} USD to {}: {}",
                    query.date,
                    query.currency,
                    format_rate(rate)
                ))
            }
        }
    }
}
