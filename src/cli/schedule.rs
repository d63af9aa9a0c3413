//! `install-daily` and `uninstall-daily`.

use clap::Args;

use skyforge::adapters::schedule::{self, DailyJob};

use super::CliError;

#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Time of day, HH:MM
    #[arg(short, long, default_value = "08:00")]
    pub time: String,

    #[arg(short, long, default_value = "default")]
    pub profile: String,

    /// text, json or markdown
    #[arg(short, long, default_value = "markdown", value_parser = ["text", "markdown", "json"])]
    pub format: String,

    /// stdout or file
    #[arg(short, long, default_value = "file", value_parser = ["stdout", "file"])]
    pub output: String,
}

pub fn install(args: InstallArgs) -> Result<(), CliError> {
    let executable = std::env::current_exe()?;
    let job = DailyJob::new(executable, args.profile, args.format, args.output, &args.time)?;
    let installed = schedule::install(&job)?;
    println!(
        "Daily report scheduled at {} via {}",
        job.time.format("%H:%M"),
        installed
    );
    Ok(())
}

pub fn uninstall() -> Result<(), CliError> {
    schedule::uninstall()?;
    println!("Daily report schedule removed");
    Ok(())
}
