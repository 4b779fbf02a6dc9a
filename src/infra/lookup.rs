//! HTTP client for the public drug database.
//!
//! Thin adapter behind the `MedicationLookup` port. Timeout and base
//! URL come from configuration; retry and backoff, if ever wanted,
//! belong here and not in the validation layer.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::{Config, MEDICATION_SEARCH_LIMIT};
use crate::domain::{Medication, MedicationLookup};
use crate::errors::AppResult;

/// Client for the public drug database REST API.
pub struct DrugDatabaseClient {
    http: reqwest::Client,
    base_url: String,
}

impl DrugDatabaseClient {
    /// Build a client from application configuration.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.medication_api_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: config.medication_api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl MedicationLookup for DrugDatabaseClient {
    async fn search(&self, name: &str) -> AppResult<Vec<Medication>> {
        let url = format!("{}/medicaments", self.base_url);
        let limit = MEDICATION_SEARCH_LIMIT.to_string();

        let medications = self
            .http
            .get(&url)
            .query(&[("query", name), ("limit", limit.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(medications)
    }
}
