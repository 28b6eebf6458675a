use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::control;
use evclash::{Catalog, EventStatus};
use std::path::PathBuf;

mod check;
mod events;
mod status;
mod watch;

#[derive(Parser)]
#[command(name = "evclash")]
#[command(version)]
#[command(about = "Detect schedule clashes between the college events a student is registered for")]
struct Cli {
    /// Catalog file with events, registrations and teams
    #[arg(
        long,
        global = true,
        env = "EVCLASH_CATALOG",
        default_value = "events.json"
    )]
    catalog: PathBuf,

    /// Student to check
    #[arg(long, global = true, env = "EVCLASH_STUDENT")]
    student: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show schedule clashes between registered events (supports --json)
    Status {
        #[arg(long, help = "Output results as JSON")]
        json: bool,
    },
    /// Check whether an event would clash with the current schedule (JSON output)
    Check {
        /// Id of the event to check
        event_id: String,
    },
    /// List registered events
    Events {
        #[arg(long, help = "List completed instead of published events")]
        completed: bool,
        #[arg(long, help = "Output results as JSON")]
        json: bool,
    },
    /// List registered events with timeline entries in the next 7 days
    Reminders {
        #[arg(long, help = "Reference date (YYYY-MM-DD), defaults to today")]
        today: Option<NaiveDate>,
        #[arg(long, help = "Output results as JSON")]
        json: bool,
    },
    /// Watch the catalog and show clashes in real-time with interactive TUI
    Watch {},
}

fn main() {
    // Force colors to always be enabled
    control::set_override(true);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Evclash v{}", env!("CARGO_PKG_VERSION"));
        println!("Try 'evclash --help' for more information.");
        return;
    };

    let Some(student) = cli.student else {
        eprintln!("Error: no student given (use --student or EVCLASH_STUDENT)");
        std::process::exit(1);
    };

    match command {
        Commands::Status { json } => {
            let catalog = Catalog::load(&cli.catalog);
            if !status::run_status(catalog, &student, json) {
                std::process::exit(1);
            }
        }
        Commands::Check { event_id } => match Catalog::load(&cli.catalog) {
            Ok(catalog) => match check::run_check(&catalog, &student, &event_id) {
                Ok(true) => std::process::exit(2),
                Ok(false) => {}
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Events { completed, json } => {
            let status = if completed {
                EventStatus::Completed
            } else {
                EventStatus::Published
            };
            let catalog = Catalog::load(&cli.catalog);
            if !events::run_events(catalog, &student, status, json) {
                std::process::exit(1);
            }
        }
        Commands::Reminders { today, json } => {
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let catalog = Catalog::load(&cli.catalog);
            if !events::run_reminders(catalog, &student, today, json) {
                std::process::exit(1);
            }
        }
        Commands::Watch {} => {
            if let Err(e) = watch::run_watch_mode(cli.catalog, student) {
                eprintln!("Error running watch mode: {}", e);
                std::process::exit(1);
            }
        }
    }
}
