//! Command line surface: argument types, logging setup and dispatch.

mod generate;
mod profile;
mod schedule;
mod serve;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

use skyforge::adapters::schedule::ScheduleError;
use skyforge::adapters::{moon_engine_for, FsProfileRepository};
use skyforge::config::{AppConfig, ConfigError, LogFormat};
use skyforge::domain::daily::DailyEntryGenerator;
use skyforge::domain::foundation::DomainError;
use skyforge::ports::ProfileRepository;

/// Skyforge - daily sovereign alignment reports
#[derive(Parser)]
#[command(name = "skyforge")]
#[command(version)]
#[command(about = "Daily alignment reports from lunar, numerology and biorhythm cycles")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding profile files
    #[arg(long, global = true)]
    profiles_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a calendar for a year or a single month
    Generate(generate::GenerateArgs),
    /// Print one day's report
    Preview(generate::PreviewArgs),
    /// Today's report
    Daily(generate::DailyArgs),
    /// Schedule the daily report with the system scheduler
    InstallDaily(schedule::InstallArgs),
    /// Remove the scheduled daily report
    UninstallDaily,
    /// Manage profiles
    Profile {
        #[command(subcommand)]
        action: profile::ProfileCommands,
    },
    /// Run the REST API
    Serve(serve::ServeArgs),
}

/// Anything a command can fail with; printed as `Error: <message>`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", .0.message())]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Schedule(#[from] ScheduleError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),
}

/// Wiring shared by every command.
pub struct Context {
    pub config: AppConfig,
    pub repository: Arc<dyn ProfileRepository>,
    pub generator: DailyEntryGenerator,
}

impl Context {
    fn new(config: AppConfig) -> Self {
        let repository: Arc<dyn ProfileRepository> =
            Arc::new(FsProfileRepository::new(&config.storage.profiles_dir));
        let generator = DailyEntryGenerator::new(moon_engine_for(config.engine.moon));
        Self {
            config,
            repository,
            generator,
        }
    }
}

fn init_logging(verbose: u8, config: &AppConfig, serving: bool) {
    let default_directive = if serving {
        config.server.log_level.as_str()
    } else {
        "warn"
    };
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);
    match config.server.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

pub async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = AppConfig::load()?;
    if let Some(dir) = cli.profiles_dir {
        config.storage.profiles_dir = dir;
    }
    config.validate().map_err(ConfigError::from)?;

    init_logging(cli.verbose, &config, matches!(cli.command, Commands::Serve(_)));
    let ctx = Context::new(config);

    match cli.command {
        Commands::Generate(args) => generate::generate(&ctx, args).await,
        Commands::Preview(args) => generate::preview(&ctx, args).await,
        Commands::Daily(args) => generate::daily(&ctx, args).await,
        Commands::InstallDaily(args) => schedule::install(args),
        Commands::UninstallDaily => schedule::uninstall(),
        Commands::Profile { action } => profile::handle(&ctx, action).await,
        Commands::Serve(args) => serve::serve(ctx, args).await,
    }
}

/// Parses `YYYY-MM-DD` with the message users see on failure.
pub fn parse_cli_date(value: &str) -> Result<chrono::NaiveDate, CliError> {
    skyforge::domain::profile::parse_date("date", value)
        .map_err(|_| CliError::Usage("Invalid date format. Use YYYY-MM-DD".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_with_repeated_formats() {
        let cli = Cli::try_parse_from([
            "skyforge", "generate", "--year", "2026", "--month", "3", "--format", "csv",
            "--format", "pdf",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.year, 2026);
                assert_eq!(args.month, Some(3));
                assert_eq!(args.format.len(), 2);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn generate_accepts_short_flags() {
        let cli = Cli::try_parse_from([
            "skyforge", "generate", "-y", "2026", "-m", "3", "-f", "csv", "-f", "pdf", "-p",
            "kim", "-o", "/tmp/out",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.year, 2026);
                assert_eq!(args.month, Some(3));
                assert_eq!(args.format, [generate::CalendarFormat::Csv, generate::CalendarFormat::Pdf]);
                assert_eq!(args.profile, "kim");
                assert_eq!(args.output, Some(PathBuf::from("/tmp/out")));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn preview_daily_and_install_accept_short_flags() {
        match Cli::try_parse_from(["skyforge", "preview", "-d", "2026-03-14", "-p", "kim"])
            .unwrap()
            .command
        {
            Commands::Preview(args) => {
                assert_eq!(args.date, "2026-03-14");
                assert_eq!(args.profile, "kim");
            }
            _ => panic!("expected preview"),
        }

        match Cli::try_parse_from(["skyforge", "daily", "-p", "kim", "-f", "json", "-o", "file"])
            .unwrap()
            .command
        {
            Commands::Daily(args) => {
                assert_eq!(args.format, generate::DailyFormat::Json);
                assert_eq!(args.output, generate::DailyOutput::File);
            }
            _ => panic!("expected daily"),
        }

        match Cli::try_parse_from([
            "skyforge", "install-daily", "-t", "07:30", "-p", "kim", "-f", "text", "-o", "stdout",
        ])
        .unwrap()
        .command
        {
            Commands::InstallDaily(args) => {
                assert_eq!(args.time, "07:30");
                assert_eq!(args.format, "text");
                assert_eq!(args.output, "stdout");
            }
            _ => panic!("expected install-daily"),
        }

        assert!(Cli::try_parse_from(["skyforge", "install-daily", "-f", "pdf"]).is_err());
    }

    #[test]
    fn profile_create_accepts_short_flags() {
        let cli = Cli::try_parse_from([
            "skyforge", "profile", "create", "-n", "kim", "-d", "1990-05-15", "-t", "14:30",
            "-r", "afternoon", "-l", "Lisbon",
        ])
        .unwrap();
        match cli.command {
            Commands::Profile {
                action: profile::ProfileCommands::Create(args),
            } => {
                assert_eq!(args.name, "kim");
                assert_eq!(args.birth_date, "1990-05-15");
                assert_eq!(args.birth_time.as_deref(), Some("14:30"));
                assert_eq!(args.birth_time_range.as_deref(), Some("afternoon"));
                assert_eq!(args.birth_location.as_deref(), Some("Lisbon"));
            }
            _ => panic!("expected profile create"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["skyforge", "profile", "list", "-vv", "--profiles-dir", "/tmp/p"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.profiles_dir, Some(PathBuf::from("/tmp/p")));
    }

    #[test]
    fn date_errors_use_fixed_message() {
        let err = parse_cli_date("2026/01/01").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use YYYY-MM-DD");
    }

    #[test]
    fn domain_errors_print_message_only() {
        let err = CliError::from(DomainError::profile_not_found("zoe"));
        assert_eq!(err.to_string(), "Profile 'zoe' not found");
    }
}
