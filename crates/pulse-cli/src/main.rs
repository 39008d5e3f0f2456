use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod load;

#[derive(Debug, Parser)]
#[command(name = "pulse-cli")]
#[command(about = "SocialPulse loader and sentiment utilities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Append one CSV export to a database table
    Load {
        /// Path to the cleaned CSV file
        file: PathBuf,

        /// Destination table; defaults to the file stem
        #[arg(long)]
        table: Option<String>,
    },
    /// Append every *.csv in a directory, in name order
    LoadAll {
        /// Directory containing cleaned CSV exports
        dir: PathBuf,
    },
    /// Score a text the way the analyze endpoint would
    Analyze {
        /// Text to score
        text: String,

        /// Threshold policy: 'normalized' or 'polarity'
        #[arg(long, default_value = "polarity")]
        policy: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Load { file, table } => {
            let pool = connect_pool().await?;
            let inserted = load::run_load(&pool, &file, table.as_deref()).await?;
            println!("{inserted} rows loaded from {}", file.display());
        }
        Commands::LoadAll { dir } => {
            let pool = connect_pool().await?;
            let total = load::run_load_all(&pool, &dir).await?;
            println!("{total} rows loaded from {}", dir.display());
        }
        Commands::Analyze { text, policy } => {
            let policy = policy
                .parse::<pulse_sentiment::ThresholdPolicy>()
                .map_err(|e| anyhow::anyhow!(e))?;
            let analysis = pulse_sentiment::analyze(&text)?;
            let payload = serde_json::json!({
                "sentiment": policy.classify(&analysis),
                "score": analysis.normalized_score(),
                "subjectivity": analysis.subjectivity,
                "polarity": analysis.polarity,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}

/// Connect to Postgres from the loaded configuration. The loader is the
/// only command that insists on `DATABASE_URL`.
async fn connect_pool() -> anyhow::Result<sqlx::PgPool> {
    let config = pulse_core::load_app_config_from_env()?;
    let database_url = config.require_database_url()?;
    let pool = pulse_db::connect_pool(database_url, pulse_db::PoolConfig::from_app_config(&config))
        .await?;
    Ok(pool)
}
