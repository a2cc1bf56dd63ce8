//! Fetch command implementation

use crate::config::ProviderConfig;
use crate::intraday::{IntradayError, IntradayService};
use clap::Args;
use futures_util::future::join_all;
use std::error::Error;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Ticker symbols (e.g. AAPL TSLA)
    #[arg(required = true)]
    pub symbols: Vec<String>,

    /// Trading date in New York time (YYYY-MM-DD); defaults to the latest session
    #[arg(short, long)]
    pub date: Option<String>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl FetchArgs {
    pub async fn execute(&self, provider: &ProviderConfig) -> anyhow::Result<()> {
        let service = IntradayService::yahoo(provider.fetcher_config())?;

        // Symbols are independent; run them concurrently, report in argument order
        let results = join_all(
            self.symbols
                .iter()
                .map(|symbol| service.fetch_intraday(symbol, self.date.as_deref())),
        )
        .await;

        let mut failed = 0;
        for (symbol, result) in self.symbols.iter().zip(results) {
            match result {
                Ok(response) => {
                    let json = if self.compact {
                        serde_json::to_string(&response)?
                    } else {
                        serde_json::to_string_pretty(&response)?
                    };
                    println!("{json}");
                }
                Err(e) => {
                    failed += 1;
                    eprintln!("{symbol}: {}", describe(&e));
                }
            }
        }

        if failed > 0 {
            anyhow::bail!("{failed} of {} symbol(s) failed", self.symbols.len());
        }
        Ok(())
    }
}

/// `error (<status>): <message>: <cause>...`
fn describe(err: &IntradayError) -> String {
    let mut message = format!("error ({}): {err}", err.status_code());
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    message
}
