//! Rigforge CLI
//!
//! Commands:
//! - parts: List catalog parts, optionally of one category
//! - builds: List saved builds
//! - save: Save a build from part ids and show the backend's summary
//! - show: Load a saved build and show its derived summary
//! - health: Check that the backend is reachable

use anyhow::Result;
use clap::{Parser, Subcommand};
use rigforge_client::session::DEFAULT_BUILD_NAME;
use rigforge_client::{BackendClient, Config, Session};
use rigforge_common::{Error, PartCategory};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rigforge")]
#[command(about = "Pick PC parts, check compatibility and save builds")]
struct Cli {
    /// Backend base URL (overrides BACKEND_URL)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog parts
    Parts {
        /// Only parts of this category (cpu, motherboard, ram, gpu, storage, psu, case)
        #[arg(short, long)]
        category: Option<PartCategory>,
    },

    /// List saved builds
    Builds,

    /// Save a build and print the computed summary
    Save {
        /// Build name
        #[arg(short, long, default_value = DEFAULT_BUILD_NAME)]
        name: String,

        #[arg(long)]
        cpu: Option<String>,

        #[arg(long)]
        motherboard: Option<String>,

        #[arg(long)]
        ram: Option<String>,

        #[arg(long)]
        gpu: Option<String>,

        #[arg(long)]
        storage: Option<String>,

        #[arg(long)]
        psu: Option<String>,

        #[arg(long)]
        case: Option<String>,
    },

    /// Load a saved build into the selection and print its summary
    Show {
        /// Saved build id
        build_id: String,
    },

    /// Check that the backend answers its health endpoint
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rigforge=warn,rigforge_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().map_err(|e| Error::Config(format!("{:#}", e)))?;
    if let Some(url) = &cli.backend_url {
        config = config
            .with_backend_url(url)
            .map_err(|e| Error::Config(format!("{:#}", e)))?;
    }
    info!("Backend URL: {}", config.backend_url);

    let mut session = Session::from_config(&config)?;

    let needs_state = !matches!(cli.command, Commands::Health);
    if needs_state {
        if let Err(e) = session.start().await {
            eprintln!("Could not load components. Ensure backend is running.");
            return Err(e.into());
        }
    }

    match cli.command {
        Commands::Parts { category } => {
            let parts: Vec<_> = match category {
                Some(category) => session.catalog().by_category(category).collect(),
                None => session.catalog().parts().iter().collect(),
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&parts)?);
            } else if parts.is_empty() {
                println!("No items available. Try seeding demo data.");
            } else {
                for part in parts {
                    println!(
                        "{:<12} {:<20} {} \u{2014} ${}",
                        part.category.label(),
                        part.id,
                        part.name,
                        part.price
                    );
                }
            }
        }

        Commands::Builds => {
            if session.saved_builds().is_stale() {
                // One explicit retry before reporting the list as unavailable
                if let Err(e) = session.refresh_saved_builds().await {
                    info!("Saved builds still unavailable: {}", e);
                }
            }

            let builds = session.saved_builds().builds();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(builds)?);
            } else if session.saved_builds().is_stale() {
                println!("Saved builds are unavailable right now.");
            } else if builds.is_empty() {
                println!("No builds yet. Create one and save it.");
            } else {
                for build in builds {
                    println!(
                        "{:<38} {:<24} ${:.2} \u{2022} {}W",
                        build.id, build.name, build.total_price, build.total_power
                    );
                }
            }
        }

        Commands::Save {
            name,
            cpu,
            motherboard,
            ram,
            gpu,
            storage,
            psu,
            case,
        } => {
            let slots = [
                (PartCategory::Cpu, cpu),
                (PartCategory::Motherboard, motherboard),
                (PartCategory::Ram, ram),
                (PartCategory::Gpu, gpu),
                (PartCategory::Storage, storage),
                (PartCategory::Psu, psu),
                (PartCategory::Case, case),
            ];
            for (category, id) in slots {
                session.select(category, id);
            }

            if !session.can_save() {
                anyhow::bail!("Pick at least one part (e.g. --cpu <id>) before saving");
            }

            let response = session.save_build(&name).await?;
            if let Some(id) = &response.id {
                info!("Created build {}", id);
            }

            print_summary(&session, cli.json)?;
        }

        Commands::Show { build_id } => {
            session.load_saved_build(&build_id)?;
            print_summary(&session, cli.json)?;

            if !cli.json {
                if let Some(build) = session.saved_builds().find(&build_id) {
                    println!(
                        "Saved totals: ${:.2} \u{2022} {}W (snapshot, save again to recompute)",
                        build.total_price, build.total_power
                    );
                }
            }
        }

        Commands::Health => check_health(&config).await?,
    }

    Ok(())
}

async fn check_health(config: &Config) -> Result<()> {
    let client = BackendClient::from_config(config)?;
    let healthy = client.health_check().await.unwrap_or(false);

    println!(
        "{} is {}",
        client.base_url(),
        if healthy { "healthy" } else { "unreachable" }
    );
    if !healthy {
        anyhow::bail!("Backend health check failed");
    }
    Ok(())
}

fn print_summary(session: &Session, json: bool) -> Result<()> {
    let summary = session.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary);
    }
    Ok(())
}
