//! HTTP client for the upstream rental backend.

use log::debug;
use serde::de::DeserializeOwned;

use rentcar_core::CatalogItem;

use crate::error::FetchError;
use crate::normalize;
use crate::wire::{Envelope, RawCar, RawTourPackage};

/// Fetches the catalog from the rental-management backend.
///
/// Each fetch returns already-normalized [`CatalogItem`]s, ready to feed a
/// store via `Action::CatalogLoaded`. Retry policy is the caller's; the
/// error's [`FetchError::is_retryable`] says whether retrying makes sense.
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch all publicly visible cars.
    pub async fn fetch_cars(&self) -> Result<Vec<CatalogItem>, FetchError> {
        let envelope: Envelope<RawCar> = self.get_json("/cars").await?;
        Ok(envelope
            .data
            .into_iter()
            .filter_map(normalize::car_to_item)
            .collect())
    }

    /// Fetch all tour packages.
    pub async fn fetch_tour_packages(&self) -> Result<Vec<CatalogItem>, FetchError> {
        let envelope: Envelope<RawTourPackage> = self.get_json("/tour-packages").await?;
        Ok(envelope
            .data
            .into_iter()
            .map(normalize::tour_to_item)
            .collect())
    }

    /// Fetch the combined catalog, cars first.
    pub async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, FetchError> {
        let mut items = self.fetch_cars().await?;
        items.extend(self.fetch_tour_packages().await?);
        Ok(items)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
