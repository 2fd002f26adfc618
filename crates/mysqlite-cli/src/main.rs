use anyhow::Result;
use clap::{Parser, Subcommand};
use mysqlite_core::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

#[derive(Parser, Debug)]
#[command(
    name = "mysqlite",
    version,
    about = "MySQL-style information_schema views for SQLite databases"
)]
struct Cli {
    /// Path to mysqlite.yaml (defaults to ./mysqlite.yaml when present)
    #[arg(long, short, global = true, env = "MYSQLITE_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set, e.g. "debug" or "mysqlite_schema=trace"
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a SQL statement with the information_schema views registered.
    Query {
        /// SQL to run, e.g. 'SELECT * FROM "information_schema.tables"'
        sql: String,

        /// SQLite database file (overrides `database` in the config)
        #[arg(long = "db", short = 'd')]
        database: Option<PathBuf>,

        /// Output format: table or json
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// List tables and views as information_schema.tables reports them.
    Tables {
        #[arg(long = "db", short = 'd')]
        database: Option<PathBuf>,

        /// Attached schema to describe (defaults to the configured schema)
        #[arg(long)]
        schema: Option<String>,

        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// List columns as information_schema.columns reports them.
    Columns {
        #[arg(long = "db", short = 'd')]
        database: Option<PathBuf>,

        /// Only show columns of this table or view
        #[arg(long)]
        table: Option<String>,

        /// Attached schema to describe (defaults to the configured schema)
        #[arg(long)]
        schema: Option<String>,

        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Print the extension version reported by mysqlite_info().
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.cmd {
        Command::Query {
            sql,
            database,
            format,
        } => commands::query::run(&config, database.as_deref(), &sql, format)?,

        Command::Tables {
            database,
            schema,
            format,
        } => commands::query::tables(&config, database.as_deref(), schema, format)?,

        Command::Columns {
            database,
            table,
            schema,
            format,
        } => commands::query::columns(
            &config,
            database.as_deref(),
            table.as_deref(),
            schema,
            format,
        )?,

        Command::Info => commands::info::run()?,
    }

    Ok(())
}
