// Builders for every path the client requests. Pure string work, so the
// exact request shapes are checkable without a network.

use url::form_urlencoded;

use crate::api::models::{AnalyticsQuery, EventsQuery};
use crate::error::AppError;

pub const ALL_TEAMS: &str = "teams/all";

pub fn agent_analytics(query: &AnalyticsQuery) -> String {
    let mut params = Vec::new();
    push_param(&mut params, "map_id", query.map_id);
    push_param(&mut params, "region_id", query.region_id);
    push_param(&mut params, "event_id", query.event_id);
    push_param(&mut params, "role_id", query.role_id);
    push_param(&mut params, "patch_id", query.patch_id);
    with_params("analytics/agents", params)
}

pub fn composition_analytics(query: &AnalyticsQuery) -> String {
    let mut params = Vec::new();
    push_param(&mut params, "map_id", query.map_id);
    push_param(&mut params, "region_id", query.region_id);
    push_param(&mut params, "event_id", query.event_id);
    push_param(&mut params, "role_id", query.role_id);
    push_param(&mut params, "patch_id", query.patch_id);
    with_params("analytics/compositions", params)
}

// Map analytics takes no map or role filter.
pub fn map_analytics(query: &AnalyticsQuery) -> String {
    let mut params = Vec::new();
    push_param(&mut params, "region_id", query.region_id);
    push_param(&mut params, "event_id", query.event_id);
    push_param(&mut params, "patch_id", query.patch_id);
    with_params("analytics/maps", params)
}

pub fn weapon_analytics(query: &AnalyticsQuery) -> String {
    let mut params = Vec::new();
    push_param(&mut params, "map_id", query.map_id);
    push_param(&mut params, "side", query.side);
    push_param(&mut params, "region_id", query.region_id);
    push_param(&mut params, "event_id", query.event_id);
    push_param(&mut params, "role_id", query.role_id);
    push_param(&mut params, "patch_id", query.patch_id);
    with_params("analytics/weapons", params)
}

/// The query term is mandatory and free text, so it gets form-encoded
/// (spaces become `+`) before going into the URL.
pub fn events(query: &EventsQuery) -> Result<String, AppError> {
    let text = query
        .query
        .as_deref()
        .ok_or_else(|| AppError::InvalidArgument("events requires a query term".to_string()))?;

    let encoded: String = form_urlencoded::byte_serialize(text.as_bytes()).collect();
    Ok(format!(
        "events?query={}&sort={}&sortAscending={}&hasSeries={}&take={}",
        encoded, query.sort_by, query.ascending, query.has_series, query.take
    ))
}

pub fn series(event_id: u64, completed: bool, take: u32) -> String {
    format!("series?take={}&eventIds[]={}&completed={}", take, event_id, completed)
}

pub fn matches(series_id: u64) -> String {
    format!("series/{}", series_id)
}

pub fn match_details(match_id: u64) -> String {
    format!("matches/{}/details", match_id)
}

pub fn team(team_id: u64) -> String {
    format!("teams/{}", team_id)
}

pub fn player(player_id: u64) -> String {
    format!("players/{}", player_id)
}

fn push_param(params: &mut Vec<String>, key: &str, value: Option<u64>) {
    if let Some(v) = value {
        params.push(format!("{}={}", key, v));
    }
}

fn with_params(endpoint: &str, params: Vec<String>) -> String {
    if params.is_empty() {
        endpoint.to_string()
    } else {
        format!("{}?{}", endpoint, params.join("&"))
    }
}
