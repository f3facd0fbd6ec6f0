//! SkyBook CLI - command-line front end for the data access gateway
//!
//! Every command starts a gateway, runs discovery against the configured
//! candidates and then resolves its request live or through demo data.

mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skybook_core::{BookingStatus, FlightQuery, Mode, Passenger};
use skybook_gateway::Gateway;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;
use crate::output::{OutputContext, OutputFormat};

#[derive(Parser)]
#[command(name = "skybook")]
#[command(author, version, about = "SkyBook flight booking CLI")]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SKYBOOK_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Minimal output (for scripting)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show backend connectivity
    Status {
        /// Re-run backend discovery before reporting
        #[arg(long)]
        retry: bool,
    },

    /// Search flights
    Flights {
        /// Origin city
        #[arg(long)]
        from: Option<String>,

        /// Destination city
        #[arg(long)]
        to: Option<String>,

        /// Departure date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Cabin class
        #[arg(long)]
        class: Option<String>,
    },

    /// Show flight details
    Flight {
        /// Flight ID
        id: i64,
    },

    /// Book a seat on a flight
    Book {
        /// Flight ID
        flight_id: i64,

        /// Passenger first name
        #[arg(long)]
        first_name: String,

        /// Passenger last name
        #[arg(long, default_value = "")]
        last_name: String,

        /// Passenger email
        #[arg(long)]
        email: Option<String>,

        /// Passenger phone number
        #[arg(long)]
        phone: Option<String>,

        /// Seat number, e.g. 12A
        #[arg(long)]
        seat: String,
    },

    /// List bookings
    Bookings {
        /// Only bookings of this user
        #[arg(long)]
        user: Option<String>,

        /// Only bookings in this status: confirmed, pending, cancelled
        #[arg(long)]
        status: Option<BookingStatus>,
    },

    /// Log in
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "SKYBOOK_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Register a new account
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, env = "SKYBOOK_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Admin dashboard counts
    Summary,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Load config file
    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load().unwrap_or_default()
    };

    // Merge CLI args with config
    let output_name: Option<&str> = cli.output.map(Into::into);
    let merged = config.merge_with_args(output_name, cli.no_color);
    let format = cli
        .output
        .unwrap_or_else(|| OutputFormat::from_config(&merged.output));

    let ctx = OutputContext::new(format, merged.no_color, cli.quiet);

    debug!(candidates = ?merged.gateway.candidates, "Starting gateway");

    let gateway = Gateway::start(&merged.gateway)
        .await
        .context("Failed to create gateway")?;
    let state = gateway.status();
    ctx.notice(&state.to_string(), state.mode == Mode::Live);

    let outcome = run(&gateway, cli.command, &ctx).await;
    if let Err(e) = &outcome {
        ctx.error(&format!("Error: {:#}", e));
    }
    outcome
}

async fn run(gateway: &Gateway, command: Commands, ctx: &OutputContext) -> Result<()> {
    match command {
        Commands::Status { retry } => commands::status(gateway, retry, ctx).await,

        Commands::Flights {
            from,
            to,
            date,
            class,
        } => {
            let query = FlightQuery {
                departure: from,
                arrival: to,
                date,
                class,
            };
            commands::flights(gateway, query, ctx).await
        }

        Commands::Flight { id } => commands::flight(gateway, id, ctx).await,

        Commands::Book {
            flight_id,
            first_name,
            last_name,
            email,
            phone,
            seat,
        } => {
            let passenger = Passenger {
                first_name,
                last_name,
                email,
                phone,
            };
            commands::book(gateway, flight_id, passenger, &seat, ctx).await
        }

        Commands::Bookings { user, status } => {
            commands::bookings(gateway, user.as_deref(), status, ctx).await
        }

        Commands::Login { email, password } => {
            commands::login(gateway, &email, &password, ctx).await
        }

        Commands::Register {
            name,
            email,
            password,
        } => commands::register(gateway, &name, &email, &password, ctx).await,

        Commands::Summary => commands::summary(gateway, ctx).await,
    }
}

// Implement conversion for OutputFormat to string (for config merge)
impl From<OutputFormat> for &str {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}
