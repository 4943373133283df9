use serde_json::Value;

use crate::api::endpoints;
use crate::api::models::{AnalyticsQuery, EventsQuery, PlayerRow};
use crate::api::transport::{HttpResponse, HttpTransport, UreqTransport};
use crate::config::Config;
use crate::error::AppError;

/// Synchronous client for the rib.gg statistics API. One request per call,
/// no retries, no state shared between calls.
pub struct RibApiClient {
    config: Config,
    transport: Box<dyn HttpTransport>,
}

impl RibApiClient {
    pub fn new(config: Config) -> Self {
        let transport = Box::new(UreqTransport::new(config.timeout));
        RibApiClient { config, transport }
    }

    /// Swap the HTTP layer out, e.g. for a canned transport in tests.
    pub fn with_transport(config: Config, transport: Box<dyn HttpTransport>) -> Self {
        RibApiClient { config, transport }
    }

    /// GET an endpoint under the base URL and parse the body as JSON.
    pub fn fetch_raw(&self, endpoint: &str) -> Result<Value, AppError> {
        if endpoint.is_empty() {
            return Err(AppError::InvalidArgument(
                "must provide an endpoint".to_string(),
            ));
        }

        let url = format!("{}/{}", self.config.base_url, endpoint);
        let HttpResponse { status, body } = self.transport.get(&url)?;

        if !(200..300).contains(&status) {
            return Err(AppError::Transport(format!(
                "{} returned status {}",
                url, status
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| AppError::Transport(format!("invalid JSON from {}: {}", url, e)))
    }

    /// Like `fetch_raw`, but unwraps the `{"data": ...}` envelope the
    /// service puts around list payloads.
    pub fn fetch_data(&self, endpoint: &str) -> Result<Value, AppError> {
        let mut raw = self.fetch_raw(endpoint)?;
        match raw.get_mut("data") {
            Some(data) => Ok(data.take()),
            None => Err(AppError::MalformedResponse(format!(
                "response from {} has no 'data' field",
                endpoint
            ))),
        }
    }

    pub fn agent_analytics(&self, query: &AnalyticsQuery) -> Result<Value, AppError> {
        self.fetch_raw(&endpoints::agent_analytics(query))
    }

    pub fn composition_analytics(&self, query: &AnalyticsQuery) -> Result<Value, AppError> {
        self.fetch_raw(&endpoints::composition_analytics(query))
    }

    pub fn map_analytics(&self, query: &AnalyticsQuery) -> Result<Value, AppError> {
        self.fetch_raw(&endpoints::map_analytics(query))
    }

    pub fn weapon_analytics(&self, query: &AnalyticsQuery) -> Result<Value, AppError> {
        self.fetch_raw(&endpoints::weapon_analytics(query))
    }

    pub fn events(&self, query: &EventsQuery) -> Result<Value, AppError> {
        self.fetch_data(&endpoints::events(query)?)
    }

    pub fn series(&self, event_id: u64, completed: bool, take: u32) -> Result<Value, AppError> {
        self.fetch_data(&endpoints::series(event_id, completed, take))
    }

    /// The series payload carries the match listing for a series.
    pub fn matches(&self, series_id: u64) -> Result<Value, AppError> {
        self.fetch_raw(&endpoints::matches(series_id))
    }

    pub fn match_details(&self, match_id: u64) -> Result<Value, AppError> {
        self.fetch_raw(&endpoints::match_details(match_id))
    }

    pub fn team(&self, team_id: u64) -> Result<Value, AppError> {
        self.fetch_raw(&endpoints::team(team_id))
    }

    pub fn all_teams(&self) -> Result<Value, AppError> {
        self.fetch_raw(endpoints::ALL_TEAMS)
    }

    pub fn player(&self, player_id: u64) -> Result<PlayerRow, AppError> {
        let raw = self.fetch_raw(&endpoints::player(player_id))?;
        PlayerRow::from_json(raw)
    }
}
