mod config;
pub use config::Config;

mod schema_file;
pub use schema_file::{load_row, load_table, parse_table, Format};

use anyhow::Result;
use clap::Parser;
use sqlmarshal::{Flavor, Marshaller};
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

/// Command line front end crafting SQL statements from table definitions
#[derive(Parser, Debug)]
#[command(name = "sqlmarshal")]
#[command(about = "Craft CREATE, INSERT and UPDATE statements from table definitions")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQL dialect, overrides the configuration file
    #[arg(long, global = true)]
    dialect: Option<Flavor>,

    /// Log filter, overrides the configuration file
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Print the CREATE TABLE statement
    Create(SchemaArgs),

    /// Print the INSERT statement for a row
    Insert(RowArgs),

    /// Print the UPDATE statement matching a row by primary key
    Update(RowArgs),
}

#[derive(Parser, Debug)]
struct SchemaArgs {
    /// Table definition, a .json or .toml file mapping column names to
    /// column definitions
    #[arg(long)]
    schema: PathBuf,

    /// Table name, defaults to the schema file stem
    #[arg(long)]
    name: Option<String>,
}

#[derive(Parser, Debug)]
struct RowArgs {
    #[command(flatten)]
    schema: SchemaArgs,

    /// Row values, a JSON object
    #[arg(long)]
    row: PathBuf,
}

impl Cli {
    /// Configuration file contents with command line overrides applied
    pub fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(dialect) = self.dialect {
            config = config.dialect(dialect);
        }

        if let Some(log_level) = &self.log_level {
            config = config.log_level(log_level);
        }

        Ok(config)
    }

    /// Runs the command, returning the crafted statement.
    pub fn run(&self, config: &Config) -> Result<String> {
        match &self.command {
            Command::Create(args) => {
                let marshaller = args.marshaller()?;
                Ok(marshaller.create(config.dialect.driver())?)
            }
            Command::Insert(args) => {
                let marshaller = args.schema.marshaller()?;
                let row = load_row(&args.row)?;
                Ok(marshaller.insert(&row)?)
            }
            Command::Update(args) => {
                let marshaller = args.schema.marshaller()?;
                let row = load_row(&args.row)?;
                Ok(marshaller.update_primary_key(&row)?)
            }
        }
    }
}

impl SchemaArgs {
    fn marshaller(&self) -> Result<Marshaller> {
        let table = load_table(&self.schema, self.name.as_deref())?;
        tracing::debug!(table = %table.name, columns = table.columns.len(), "loaded table definition");
        Ok(Marshaller::from_table(&table)?)
    }
}

/// Installs the global tracing subscriber. `RUST_LOG` wins over the
/// configured level; without either, only warnings are shown.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_level.as_deref().unwrap_or("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
