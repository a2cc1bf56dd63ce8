//! Window command implementation

use crate::session::{resolve_window, WindowSpec};
use clap::Args;

#[derive(Args, Debug)]
pub struct WindowArgs {
    /// Trading date in New York time (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
}

impl WindowArgs {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let window = resolve_window(self.date.as_deref())?;

        if let WindowSpec::Explicit { period1, period2 } = window {
            tracing::debug!(period1, period2, "Explicit window");
        }

        for (key, value) in window.query_params() {
            println!("{key}={value}");
        }
        Ok(())
    }
}
