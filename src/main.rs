//! FleetCore CLI - Run vehicle inspection checklists and track their status

use clap::Parser;
use fleetcore::cli::commands;
use fleetcore::cli::{Cli, Commands};
use fleetcore::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the verbosity flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error [{}]: {}", e.code(), e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> fleetcore::Result<()> {
    let cwd = cli.cwd.as_deref();
    match cli.command {
        Some(Commands::Init { force }) => commands::init::run(cwd, force).await,
        Some(Commands::Template { inspection_type, json }) => {
            commands::template::run(cwd, inspection_type.as_deref(), json).await
        }
        Some(Commands::Start {
            vehicle,
            technician,
            inspection_type,
            notes,
        }) => {
            commands::start::run(cwd, &vehicle, &technician, inspection_type.as_deref(), notes)
                .await
        }
        Some(Commands::Check {
            inspection,
            item,
            status,
            notes,
            json,
        }) => commands::check::run(cwd, &inspection, &item, &status, notes, json).await,
        Some(Commands::Resolve { inspection, by, notes }) => {
            commands::resolve::run(cwd, &inspection, &by, notes).await
        }
        Some(Commands::Refresh { inspection }) => commands::refresh::run(cwd, &inspection).await,
        Some(Commands::Show { id, json }) => commands::show::run(cwd, &id, json).await,
        Some(Commands::List {
            vehicle,
            status,
            json,
        }) => commands::list::run(cwd, vehicle.as_deref(), status.as_deref(), json).await,
        Some(Commands::Delete { id }) => commands::delete::run(cwd, &id).await,
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
