use colored::*;
use serde_json::Value;
use tabled::{builder::Builder, settings::Style, Table, Tabled};

use crate::api::models::PlayerRow;
use crate::catalog::{AgentEntry, CatalogEntry, WeaponEntry};

#[derive(Tabled)]
struct AgentRow {
    agent: String,
    id: String,
    #[tabled(rename = "role id")]
    role_id: String,
}

#[derive(Tabled)]
struct WeaponRow {
    weapon: String,
    id: String,
    category: String,
}

/// Render a plain name/id catalog with prefixed column headers, the way the
/// tables are joined against analytics results.
pub fn display_catalog(entries: &[CatalogEntry], prefix: &str) {
    let mut builder = Builder::default();
    builder.push_record([format!("{}_name", prefix), format!("{}_id", prefix)]);
    for entry in entries {
        builder.push_record([entry.name.to_string(), entry.id.to_string()]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_agents(agents: &[AgentEntry]) {
    let rows: Vec<AgentRow> = agents
        .iter()
        .map(|a| AgentRow {
            agent: a.name.to_string(),
            id: a.id.to_string(),
            role_id: a.role_id.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_weapons(weapons: &[WeaponEntry]) {
    let rows: Vec<WeaponRow> = weapons
        .iter()
        .map(|w| WeaponRow {
            weapon: w.name.to_string(),
            id: w.id.to_string(),
            category: w.category.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

/// One row per field; nested values are printed as compact JSON.
pub fn display_player(row: &PlayerRow) {
    let mut builder = Builder::default();
    builder.push_record(["field", "value"]);
    for (name, value) in row.columns() {
        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        builder.push_record([name.to_string(), rendered]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_json(value: &Value) {
    let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    println!("{}", rendered);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
