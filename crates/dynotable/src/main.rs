//! dynotable CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use dynotable::cli::{Cli, Commands, OutputFormat};
use dynotable::output::{format_description, format_output, format_table_names};
use dynotable::{Dynotable, Schema, TableDescription};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dynotable=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config();
    if !cli.quiet {
        eprintln!("Target: {}", config.target_display());
    }

    let db = Dynotable::connect(&config).await?;

    match cli.command {
        Commands::Create {
            schema,
            name,
            raw,
            wait,
        } => {
            let json = std::fs::read_to_string(&schema)
                .with_context(|| format!("Failed to read schema {}", schema.display()))?;
            let mut schema = Schema::from_json_str(&json)?;
            if let Some(name) = name {
                schema = schema.with_table_name(name);
            }

            let query = if raw {
                db.create_raw_table(schema)?
            } else {
                db.create_table(schema)?
            };
            let table = query.table().clone();
            let query = if wait { query.wait() } else { query };

            match query.await? {
                Some(description) => print_description(&description, cli.format),
                None if !cli.quiet => println!("Creating table {}", table.name()),
                None => {}
            }
        }
        Commands::Describe { table, raw } => {
            let table = if raw {
                db.raw_table(&table)
            } else {
                db.table(&table)
            };
            let description = table.describe().await?;
            print_description(&description, cli.format);
        }
        Commands::Drop { table, raw, wait } => {
            let query = if raw {
                db.drop_raw_table(&table)
            } else {
                db.drop_table(&table)
            };
            let name = query.table().name().to_string();
            let query = if wait { query.wait() } else { query };
            query.await?;

            if !cli.quiet {
                println!("Deleted table {}", name);
            }
        }
        Commands::List => {
            let names = db.list_tables().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&names, cli.format)),
                OutputFormat::Pretty => println!("{}", format_table_names(&names)),
            }
        }
    }

    Ok(())
}

fn print_description(description: &TableDescription, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", format_output(description, format)),
        OutputFormat::Pretty => println!("{}", format_description(description)),
    }
}
