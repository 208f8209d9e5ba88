use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use mc_core::navigation::DashboardVariant;
use mc_shell::bootstrap::{self, tracing::init_tracing_subscriber};
use mc_shell::commands;

#[derive(Parser)]
#[command(name = "member-console")]
#[command(about = "Membership console: navigation and member wizard tools", long_about = None)]
struct Cli {
    /// Config file (defaults to <config dir>/member-console/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sidebar visible to the configured user
    Nav {
        /// Dashboard variant: admin or accounts
        #[arg(short, long)]
        variant: Option<DashboardVariant>,
    },
    /// Ask the backend for the next free member id
    NextId {
        #[arg(short, long)]
        membership_type: String,
        #[arg(short, long)]
        institute: String,
    },
    /// List the wizard steps and how each one submits
    Steps,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::resolve_config(cli.config.as_deref())?;
    if let Err(err) = init_tracing_subscriber(&config.logging) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    match cli.command {
        Commands::Nav { variant } => {
            let deps = bootstrap::wire_dependencies(&config)?;
            print_json(&commands::load_navigation(&deps, variant).await)?;
        }
        Commands::NextId {
            membership_type,
            institute,
        } => {
            let deps = bootstrap::wire_dependencies(&config)?;
            let member_id = commands::next_member_id(&deps, membership_type, institute).await?;
            print_json(&member_id)?;
        }
        Commands::Steps => {
            print_json(&commands::wizard_steps())?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
