//! # Lodge Desk Application Entry Point
//!
//! Front-desk CLI for the Lodge booking system.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           lodge-desk                                    │
//! │                                                                         │
//! │  main.rs ────► parses the command line, loads config, connects db      │
//! │                                                                         │
//! │  commands/ ──► book, update, cancel, search, list, dashboard, receipt  │
//! │                (request/response functions; no rendering inside)        │
//! │                                                                         │
//! │  config.rs ──► lodge.toml + LODGE_* env overrides                      │
//! │                                                                         │
//! │  sink.rs ────► receipt documents + host viewer                         │
//! │                                                                         │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         SQLite Database                          │  │
//! │  │  lodge.db (local file, WAL mode)                                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Parse the command line
//! 3. Load configuration (file + env overrides)
//! 4. Connect to database & run migrations
//! 5. Dispatch the command and render its response

mod commands;
mod config;
mod error;
mod sink;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use lodge_core::{Booking, Money};
use lodge_db::{Database, DbConfig};

use commands::booking::BookingRequest;
use config::AppConfig;
use error::{AppError, ErrorCode};

// =============================================================================
// Command Line
// =============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "lodge-desk",
    version,
    about = "Hotel booking management from the front desk"
)]
struct Cli {
    /// Configuration file (defaults to ./lodge.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print command results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Book a room
    Book {
        /// Guest full name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// ID or passport number
        #[arg(long)]
        document: String,

        /// Room category (e.g. Single, Double, Suite)
        #[arg(long)]
        category: String,

        /// Number of nights
        #[arg(long)]
        nights: i64,
    },

    /// Edit a booking: every field is rewritten and the stored total
    /// is repriced under the current tax policy
    Update {
        /// Booking identifier
        id: String,

        /// Guest full name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// ID or passport number
        #[arg(long)]
        document: String,

        /// Room category (e.g. Single, Double, Suite)
        #[arg(long)]
        category: String,

        /// Number of nights
        #[arg(long)]
        nights: i64,
    },

    /// Cancel a booking
    Cancel {
        /// Booking identifier
        id: String,
    },

    /// Search bookings by guest name or document number
    Search {
        /// Keyword to match against guest names and document numbers
        keyword: String,
    },

    /// List all bookings
    List,

    /// Show the dashboard (cards + bookings-per-category chart)
    Dashboard,

    /// Generate the receipt document for a booking
    Receipt {
        /// Booking identifier
        id: String,

        /// Write the document but don't open the viewer
        #[arg(long)]
        no_open: bool,
    },
}

// =============================================================================
// Entry Point
// =============================================================================

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        if json {
            match serde_json::to_string_pretty(&err) {
                Ok(rendered) => eprintln!("{rendered}"),
                Err(_) => eprintln!("{err}"),
            }
        } else {
            eprintln!("error: {err}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let db = Database::new(DbConfig::new(&config.database_path)).await?;

    match cli.command {
        Command::Book {
            name,
            phone,
            email,
            document,
            category,
            nights,
        } => {
            let request = BookingRequest {
                guest_name: name,
                phone,
                email,
                document_number: document,
                room_category: category,
                nights,
            };
            let response = commands::book_room(&db, &config, request).await?;
            emit(cli.json, &response, || {
                format!(
                    "Room booked! Reference {}, total cost: {}",
                    response.reference, response.quote.grand_total
                )
            })
        }

        Command::Update {
            id,
            name,
            phone,
            email,
            document,
            category,
            nights,
        } => {
            let request = BookingRequest {
                guest_name: name,
                phone,
                email,
                document_number: document,
                room_category: category,
                nights,
            };
            let response = commands::update_booking(&db, &config, &id, request).await?;
            emit(cli.json, &response, || {
                format!(
                    "Booking {} updated. New total: {}",
                    response.reference, response.quote.grand_total
                )
            })
        }

        Command::Cancel { id } => {
            commands::cancel_booking(&db, &id).await?;
            let response = serde_json::json!({ "deleted": id.clone() });
            emit(cli.json, &response, || format!("Booking {id} deleted."))
        }

        Command::Search { keyword } => {
            let bookings = commands::search_bookings(&db, &keyword).await?;
            emit(cli.json, &bookings, || render_booking_table(&bookings))
        }

        Command::List => {
            let bookings = commands::list_bookings(&db).await?;
            emit(cli.json, &bookings, || render_booking_table(&bookings))
        }

        Command::Dashboard => {
            let metrics = commands::compute_dashboard(&db, &config).await?;
            emit(cli.json, &metrics, || commands::render_dashboard(&metrics))
        }

        Command::Receipt { id, no_open } => {
            let artifact = commands::generate_receipt(&db, &config, &id, !no_open).await?;
            emit(cli.json, &artifact, || {
                format!("Receipt saved as:\n{}", artifact.path.display())
            })
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Prints a command response: JSON for scripted callers, the
/// human-readable rendering otherwise.
fn emit<T: Serialize>(
    json: bool,
    value: &T,
    human: impl FnOnce() -> String,
) -> Result<(), AppError> {
    if json {
        let rendered = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::new(ErrorCode::Internal, e.to_string()))?;
        println!("{rendered}");
    } else {
        println!("{}", human());
    }
    Ok(())
}

/// Renders bookings as the familiar desk table.
fn render_booking_table(bookings: &[Booking]) -> String {
    if bookings.is_empty() {
        return "No bookings found.".to_string();
    }

    let mut out = format!(
        "{:<6} {:<22} {:<16} {:<26} {:<14} {:<10} {:>6} {:>12}\n",
        "ID", "Name", "Phone", "Email", "ID No", "Room", "Nights", "Cost"
    );

    for booking in bookings {
        out.push_str(&format!(
            "{:<6} {:<22} {:<16} {:<26} {:<14} {:<10} {:>6} {:>12}\n",
            booking.id,
            booking.guest_name,
            booking.phone,
            booking.email,
            booking.document_number,
            booking.room_category,
            booking.nights,
            Money::from_cents(booking.total_cents).to_string()
        ));
    }

    out
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so `--json` output on stdout stays parseable.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages
/// - `RUST_LOG=lodge_db=trace` - per-crate override
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lodge=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
