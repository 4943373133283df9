//! Thin synchronous client for the rib.gg Valorant esports statistics API:
//! static reference catalogs (agents, weapons, maps, roles, regions, armors)
//! plus typed wrappers over the analytics, event, series, match, team and
//! player endpoints.

pub mod api;
pub mod catalog;
pub mod config;
pub mod display;
pub mod error;

pub use api::client::RibApiClient;
pub use api::models::{AnalyticsQuery, EventsQuery, PlayerRow};
pub use config::Config;
pub use error::AppError;
