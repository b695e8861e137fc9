//! Thin HTTP client over the panel's read-only API.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use pja_metrics::{AgeGroup, Location, MetricId};

use crate::models::{DashboardStats, FeatureCollection, Ranking};

/// What went wrong with a fetch. Call sites log these and keep the
/// previous render on screen; only the ranking card surfaces the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("falha de rede: {0}")]
    Network(String),
    #[error("resposta HTTP {0}")]
    Http(u16),
    #[error("resposta inválida: {0}")]
    Decode(String),
}

/// Client for the dashboard API. `base_url` is empty for same-origin
/// deployments and only set in development against a remote service.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient { base_url: base_url.into() }
    }

    pub fn municipios_url(&self) -> String {
        format!("{}/api/municipios", self.base_url)
    }

    pub fn stats_url(&self, location: &Location, age_group: AgeGroup) -> String {
        match location {
            Location::Geral => {
                format!("{}/api/geral?age_group={}", self.base_url, age_group.as_param())
            }
            Location::Municipio(id) => format!(
                "{}/api/municipio/{}?age_group={}",
                self.base_url,
                id,
                age_group.as_param()
            ),
        }
    }

    pub fn map_url(&self, age_group: AgeGroup) -> String {
        format!("{}/api/mapa?age_group={}", self.base_url, age_group.as_param())
    }

    pub fn ranking_url(&self, metric: MetricId, age_group: AgeGroup) -> String {
        format!(
            "{}/api/ranking/{}?age_group={}",
            self.base_url,
            metric.as_param(),
            age_group.as_param()
        )
    }

    /// Municipality identifiers for the location filter, server-sorted.
    pub async fn fetch_municipios(&self) -> Result<Vec<String>, FetchError> {
        self.get_json(&self.municipios_url()).await
    }

    /// KPI + chart data for the current location and age group.
    pub async fn fetch_stats(
        &self,
        location: &Location,
        age_group: AgeGroup,
    ) -> Result<DashboardStats, FetchError> {
        self.get_json(&self.stats_url(location, age_group)).await
    }

    /// Full map geometry. Metric-independent: every feature carries all
    /// metric fields, the active one is chosen at render time.
    pub async fn fetch_map(&self, age_group: AgeGroup) -> Result<FeatureCollection, FetchError> {
        self.get_json(&self.map_url(age_group)).await
    }

    /// Top/bottom five municipalities, pre-sorted by the server.
    pub async fn fetch_ranking(
        &self,
        metric: MetricId,
        age_group: AgeGroup,
    ) -> Result<Ranking, FetchError> {
        self.get_json(&self.ranking_url(metric, age_group)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(FetchError::Http(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_url_for_state_and_municipality() {
        let client = ApiClient::new("");
        assert_eq!(
            client.stats_url(&Location::Geral, AgeGroup::Geral),
            "/api/geral?age_group=geral"
        );
        assert_eq!(
            client.stats_url(&Location::Municipio("MANAUS".into()), AgeGroup::From20To24),
            "/api/municipio/MANAUS?age_group=20-24"
        );
    }

    #[test]
    fn test_map_and_ranking_urls() {
        let client = ApiClient::new("");
        assert_eq!(client.map_url(AgeGroup::From15To19), "/api/mapa?age_group=15-19");
        assert_eq!(
            client.ranking_url(MetricId::Alfabetizacao, AgeGroup::Geral),
            "/api/ranking/alfabetizacao?age_group=geral"
        );
    }

    #[test]
    fn test_base_url_prefix() {
        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(client.municipios_url(), "http://localhost:8000/api/municipios");
    }
}
