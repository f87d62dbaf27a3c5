//! Schema migration runner
//!
//! Run with: cargo run --bin migration -- <up|down|fresh|status>
//!
//! The database URL comes from the usual configuration layers
//! (`config/*.toml`, `APP__DATABASE_URL`).

use clap::{Parser, Subcommand};
use migrations::{Migrator, MigratorTrait};
use tracing::info;

use logistics_schema::config::{init_tracing, load_config};
use logistics_schema::db::{establish_connection_with_config, DbConfig};

#[derive(Parser)]
#[command(name = "migration", about = "Apply or roll back schema migrations", version)]
struct Cli {
    /// Override the configured database URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply pending migrations
    Up {
        #[arg(long, help = "Apply at most this many migrations")]
        steps: Option<u32>,
    },
    /// Roll back applied migrations (the last one by default)
    Down {
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// Drop every table and reapply all migrations
    Fresh,
    /// List applied and pending migrations
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let app_config = load_config()?;
    init_tracing(app_config.log_level(), app_config.log_json);

    let mut db_config = DbConfig::from(&app_config);
    if let Some(url) = cli.database_url {
        db_config.url = url;
    }
    info!("Connecting to database: {}", db_config.redacted_url());
    let db = establish_connection_with_config(&db_config).await?;

    match cli.command {
        Command::Up { steps } => {
            Migrator::up(&db, steps).await?;
            info!("Migration completed successfully");
        }
        Command::Down { steps } => {
            Migrator::down(&db, Some(steps)).await?;
            info!("Rolled back {} migration(s)", steps);
        }
        Command::Fresh => {
            Migrator::fresh(&db).await?;
            info!("Schema recreated");
        }
        Command::Status => {
            for migration in Migrator::get_applied_migrations(&db).await? {
                println!("applied  {}", migration.name());
            }
            for migration in Migrator::get_pending_migrations(&db).await? {
                println!("pending  {}", migration.name());
            }
        }
    }

    Ok(())
}
