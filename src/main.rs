use std::time::Duration;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use indicatif::ProgressBar;

use rib_stats::api::client::RibApiClient;
use rib_stats::api::models::{AnalyticsQuery, EventsQuery};
use rib_stats::catalog;
use rib_stats::config::Config;
use rib_stats::display::output::{
    display_agents, display_catalog, display_error, display_info, display_json, display_player,
    display_success, display_weapons,
};
use rib_stats::error::AppError;

#[derive(Parser, Debug)]
#[command(name = "rib_stats")]
#[command(about = "Query rib.gg Valorant esports statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one of the built-in reference tables
    Catalog {
        #[arg(value_enum)]
        table: CatalogTable,
    },

    /// Fetch a player and print it as a single-row table
    Player { id: u64 },

    /// Fetch one team
    Team { id: u64 },

    /// List all teams
    Teams,

    /// Search events by name
    Events {
        query: String,

        /// Field to sort on
        #[arg(long, default_value = "startDate")]
        sort_by: String,

        /// Sort oldest-first instead of newest-first
        #[arg(long)]
        ascending: bool,

        /// Include events that have no series attached
        #[arg(long)]
        no_series: bool,

        /// Maximum number of results
        #[arg(long, default_value = "50")]
        take: u32,
    },

    /// List series for an event
    Series {
        event_id: u64,

        /// Include series that have not finished yet
        #[arg(long)]
        incomplete: bool,

        /// Maximum number of results
        #[arg(long, default_value = "50")]
        take: u32,
    },

    /// Fetch the series payload (match listing) for a series id
    Matches { series_id: u64 },

    /// Fetch full round-by-round details for a match
    MatchDetails { match_id: u64 },

    /// Aggregated statistics endpoints
    Analytics {
        #[command(subcommand)]
        kind: AnalyticsCommand,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CatalogTable {
    Regions,
    Roles,
    Agents,
    Maps,
    Weapons,
    Armors,
}

#[derive(Subcommand, Debug)]
enum AnalyticsCommand {
    /// Agent pick and win rates
    Agents(AnalyticsArgs),
    /// Team composition statistics
    Compositions(AnalyticsArgs),
    /// Map play and win rates
    Maps(MapAnalyticsArgs),
    /// Weapon usage statistics
    Weapons(WeaponAnalyticsArgs),
}

#[derive(ClapArgs, Debug)]
struct AnalyticsArgs {
    /// Map id (see `catalog maps`)
    #[arg(long)]
    map: Option<u64>,

    /// Region id (see `catalog regions`)
    #[arg(long)]
    region: Option<u64>,

    /// Event id (see `events`)
    #[arg(long)]
    event: Option<u64>,

    /// Role id (see `catalog roles`)
    #[arg(long)]
    role: Option<u64>,

    /// Patch id
    #[arg(long)]
    patch: Option<u64>,
}

/// Map analytics takes no map, role or side filter.
#[derive(ClapArgs, Debug)]
struct MapAnalyticsArgs {
    /// Region id (see `catalog regions`)
    #[arg(long)]
    region: Option<u64>,

    /// Event id (see `events`)
    #[arg(long)]
    event: Option<u64>,

    /// Patch id
    #[arg(long)]
    patch: Option<u64>,
}

#[derive(ClapArgs, Debug)]
struct WeaponAnalyticsArgs {
    #[command(flatten)]
    common: AnalyticsArgs,

    /// Attacker/defender side id
    #[arg(long)]
    side: Option<u64>,
}

impl AnalyticsArgs {
    fn into_query(self) -> AnalyticsQuery {
        AnalyticsQuery {
            map_id: self.map,
            region_id: self.region,
            event_id: self.event,
            role_id: self.role,
            patch_id: self.patch,
            side: None,
        }
    }
}

impl MapAnalyticsArgs {
    fn into_query(self) -> AnalyticsQuery {
        AnalyticsQuery {
            region_id: self.region,
            event_id: self.event,
            patch_id: self.patch,
            ..AnalyticsQuery::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Command::Catalog { table } = cli.command {
        return print_catalog(table);
    }

    let config = Config::from_env()?;
    display_info(&format!("Querying {}", config.base_url));
    let client = RibApiClient::new(config);

    match cli.command {
        Command::Catalog { .. } => unreachable!("handled above"),

        Command::Player { id } => {
            let row = with_spinner("Fetching player...", || client.player(id))?;
            display_player(&row);
        }

        Command::Team { id } => {
            let team = with_spinner("Fetching team...", || client.team(id))?;
            display_json(&team);
        }

        Command::Teams => {
            let teams = with_spinner("Fetching teams...", || client.all_teams())?;
            display_json(&teams);
        }

        Command::Events {
            query,
            sort_by,
            ascending,
            no_series,
            take,
        } => {
            let events_query = EventsQuery {
                query: Some(query),
                sort_by,
                ascending,
                has_series: !no_series,
                take,
            };
            let events = with_spinner("Searching events...", || client.events(&events_query))?;
            if let Some(found) = events.as_array() {
                display_success(&format!("Found {} events", found.len()));
            }
            display_json(&events);
        }

        Command::Series {
            event_id,
            incomplete,
            take,
        } => {
            let series =
                with_spinner("Fetching series...", || client.series(event_id, !incomplete, take))?;
            if let Some(found) = series.as_array() {
                display_success(&format!("Found {} series", found.len()));
            }
            display_json(&series);
        }

        Command::Matches { series_id } => {
            let matches = with_spinner("Fetching matches...", || client.matches(series_id))?;
            display_json(&matches);
        }

        Command::MatchDetails { match_id } => {
            let details =
                with_spinner("Fetching match details...", || client.match_details(match_id))?;
            display_json(&details);
        }

        Command::Analytics { kind } => {
            let payload = match kind {
                AnalyticsCommand::Agents(args) => {
                    let query = args.into_query();
                    with_spinner("Fetching agent analytics...", || {
                        client.agent_analytics(&query)
                    })?
                }
                AnalyticsCommand::Compositions(args) => {
                    let query = args.into_query();
                    with_spinner("Fetching composition analytics...", || {
                        client.composition_analytics(&query)
                    })?
                }
                AnalyticsCommand::Maps(args) => {
                    let query = args.into_query();
                    with_spinner("Fetching map analytics...", || client.map_analytics(&query))?
                }
                AnalyticsCommand::Weapons(args) => {
                    let mut query = args.common.into_query();
                    query.side = args.side;
                    with_spinner("Fetching weapon analytics...", || {
                        client.weapon_analytics(&query)
                    })?
                }
            };
            display_json(&payload);
        }
    }

    Ok(())
}

fn print_catalog(table: CatalogTable) -> anyhow::Result<()> {
    match table {
        CatalogTable::Regions => display_catalog(&catalog::regions(), "region"),
        CatalogTable::Roles => display_catalog(&catalog::roles(), "role"),
        CatalogTable::Maps => display_catalog(&catalog::maps(), "map"),
        CatalogTable::Armors => display_catalog(&catalog::armors(), "armor"),
        CatalogTable::Agents => display_agents(&catalog::agents()?),
        CatalogTable::Weapons => display_weapons(&catalog::weapons()?),
    }
    Ok(())
}

fn with_spinner<T>(
    message: &str,
    f: impl FnOnce() -> Result<T, AppError>,
) -> Result<T, AppError> {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));

    let result = f();
    pb.finish_and_clear();
    result
}
