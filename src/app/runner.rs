use anyhow::{Context, Result};

use crate::models::config::Config;
use crate::models::fear_greed::{FearGreedData, IndexRecord};
use crate::services::logger::Logger;
use crate::services::{api, normalizer, writer};
use crate::utils::formatters::format_record;

pub struct App {
    pub config: Config,
    pub logger: Logger,
    client: reqwest::Client,
}

impl App {
    pub fn new(config: Config) -> App {
        let logger = Logger::new(config.log_file.clone());
        App {
            config,
            logger,
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_fear_greed(&self) -> Result<Vec<FearGreedData>> {
        api::fetch_fear_greed(&self.client, &self.config.api_url, &self.logger).await
    }

    /// Runs fetch, normalize and save once, returning the records that were written.
    pub async fn run(&self) -> Result<Vec<IndexRecord>> {
        let raw = self.fetch_fear_greed().await?;

        let records = normalizer::normalize(&raw).context("Failed to normalize Fear & Greed data")?;

        if let Some(first) = records.first() {
            self.logger.log_info("Fear & Greed",
                &format!("Oldest data point: {}", format_record(first)));
        }
        if let Some(last) = records.last() {
            self.logger.log_info("Fear & Greed",
                &format!("Latest data point: {}", format_record(last)));
        }

        writer::save_records(&records, &self.config.output_path)?;

        self.logger.log_info("Save",
            &format!("Wrote {} records to {}", records.len(), self.config.output_path.display()));

        Ok(records)
    }

    /// Same as [`App::run`], but a failed run is also recorded in the run log
    /// before the error is handed back.
    pub async fn run_logged(&self) -> Result<Vec<IndexRecord>> {
        let result = self.run().await;
        if let Err(err) = &result {
            self.logger.log_error("Application Error", &format!("{:#}", err));
        }
        result
    }
}
