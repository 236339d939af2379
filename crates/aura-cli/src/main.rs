use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use aura_cli::commands::{self, ConfigUpdate, WELLNESS_CHECKIN};
use aura_cli::config;
use aura_cli::state::DashboardState;

#[derive(Parser)]
#[command(name = "aura", version, about = "Wellness check-ins from the terminal")]
struct Cli {
    /// Directory holding dashboard state (overrides config)
    #[arg(long, global = true, env = "AURA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Take a wellness check-in
    Checkin {
        /// Instrument to administer
        #[arg(long, default_value = WELLNESS_CHECKIN)]
        instrument: String,
    },
    /// Show the latest wellness score and recent activity
    Status,
    /// List available instruments
    Instruments,
    /// Show or change saved settings
    Config {
        /// Directory for dashboard state
        #[arg(long)]
        set_data_dir: Option<PathBuf>,
        /// Default log filter when RUST_LOG is unset
        #[arg(long)]
        log_level: Option<String>,
        /// Pause before saving a check-in, in milliseconds
        #[arg(long)]
        latency_ms: Option<u64>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = config::load_config()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Checkin { instrument } => {
            let state = DashboardState::open(&config, cli.data_dir)?;
            let mut stdin = std::io::stdin().lock();
            commands::checkin(&state, &instrument, &mut stdin, &mut stdout)?;
        }
        Command::Status => {
            let state = DashboardState::open(&config, cli.data_dir)?;
            commands::status(&state, &mut stdout, jiff::Timestamp::now())?;
        }
        Command::Instruments => commands::instruments(&mut stdout)?,
        Command::Config {
            set_data_dir,
            log_level,
            latency_ms,
        } => {
            let update = ConfigUpdate {
                data_dir: set_data_dir,
                log_level,
                simulated_latency_ms: latency_ms,
            };
            commands::configure(&config::config_dir()?, update, &mut stdout)?;
        }
    }

    Ok(())
}
