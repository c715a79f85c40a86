//! ROWGRID demo entry point.
//!
//! Builds a people table, prints it empty, fills it, prints it, renames
//! two people and prints it again. Dimensions come from a TOML file named by the
//! first argument or `ROWGRID_CONFIG`, else 3 columns by 5 rows.

mod render;

use rowgrid_core::{ConfigError, TableConfig};
use rowgrid_table::{Table, TableError};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_COLUMNS: usize = 3;
const DEMO_ROWS: usize = 5;

const PEOPLE: [[&str; 3]; 4] = [
    ["1", "Jake", "21"],
    ["2", "Seth", "21"],
    ["3", "Adam", "19"],
    ["4", "Daniel", "21"],
];

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Table error: {0}")]
    Table(#[from] TableError),
    #[error("Render error: {0}")]
    Render(#[from] render::RenderError),
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to init subscriber: {0}")]
    Tracing(String),
}

fn main() -> Result<(), DemoError> {
    init_tracing()?;

    let config = TableConfig::load()?.unwrap_or_else(|| TableConfig::new(DEMO_COLUMNS, DEMO_ROWS));
    info!(
        columns = config.columns,
        rows = config.rows,
        unlock_policy = %config.unlock_policy,
        "building demo table"
    );
    let mut handle = Some(Table::with_config(&config)?);

    if let Some(table) = handle.as_ref() {
        let stdout = io::stdout();
        run(&mut stdout.lock(), table)?;
    }

    Table::destroy(&mut handle);
    Ok(())
}

fn run<W: Write>(out: &mut W, table: &Table<Option<&'static str>>) -> Result<(), DemoError> {
    render::write_table(out, table)?;
    writeln!(out)?;

    for (y, person) in PEOPLE.iter().enumerate().take(table.rows()) {
        for (x, value) in person.iter().enumerate().take(table.columns()) {
            table.set_cell(x, y, Some(*value))?;
        }
    }

    render::write_table(out, table)?;
    writeln!(out)?;

    for (x, y, name) in [(1, 0, "Daniel"), (1, 3, "Jake")] {
        table.set_cell(x, y, Some(name))?;
    }

    render::write_table(out, table)?;
    out.flush()?;
    Ok(())
}

fn init_tracing() -> Result<(), DemoError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rowgrid_demo=info,rowgrid_table=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| DemoError::Tracing(e.to_string()))
}
