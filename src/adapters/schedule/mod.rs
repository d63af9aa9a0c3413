//! Daily report scheduling through the host's job scheduler.
//!
//! Linux prefers a systemd user timer and falls back to crontab; Windows
//! uses Task Scheduler. Unit and crontab text is built by pure functions
//! so it can be checked without touching the host.

mod templates;

pub use templates::{cron_line, merge_crontab, strip_crontab, systemd_service, systemd_timer};

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::NaiveTime;
use thiserror::Error;
use tracing::{info, warn};

pub const UNIT_NAME: &str = "skyforge-daily";
pub const WINDOWS_TASK_NAME: &str = "SkyforgeDaily";
/// Trailing comment that identifies our crontab line.
pub const CRON_MARKER: &str = "# skyforge-daily";

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Invalid time format. Use HH:MM")]
    InvalidTime(String),

    #[error("Could not determine home directory")]
    NoHomeDirectory,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command '{command}' failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Scheduling is not supported on this platform")]
    Unsupported,
}

/// What the scheduled job runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyJob {
    pub executable: PathBuf,
    pub profile: String,
    pub format: String,
    pub output: String,
    pub time: NaiveTime,
}

impl DailyJob {
    /// Parses `time` as `HH:MM`.
    pub fn new(
        executable: PathBuf,
        profile: impl Into<String>,
        format: impl Into<String>,
        output: impl Into<String>,
        time: &str,
    ) -> Result<Self, ScheduleError> {
        let time = NaiveTime::parse_from_str(time, "%H:%M")
            .map_err(|_| ScheduleError::InvalidTime(time.to_string()))?;
        Ok(Self {
            executable,
            profile: profile.into(),
            format: format.into(),
            output: output.into(),
            time,
        })
    }

    /// Arguments after the executable.
    pub fn arguments(&self) -> Vec<String> {
        vec![
            "daily".to_string(),
            "--profile".to_string(),
            self.profile.clone(),
            "--format".to_string(),
            self.format.clone(),
            "--output".to_string(),
            self.output.clone(),
        ]
    }

    pub fn command_line(&self) -> String {
        format!("{} {}", self.executable.display(), self.arguments().join(" "))
    }
}

/// Which scheduler ended up holding the job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Installed {
    SystemdTimer { unit_dir: PathBuf },
    Crontab,
    TaskScheduler,
}

impl std::fmt::Display for Installed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Installed::SystemdTimer { unit_dir } => {
                write!(f, "systemd timer {}.timer in {}", UNIT_NAME, unit_dir.display())
            }
            Installed::Crontab => write!(f, "crontab entry"),
            Installed::TaskScheduler => write!(f, "scheduled task {}", WINDOWS_TASK_NAME),
        }
    }
}

fn run(program: &str, args: &[&str]) -> Result<String, ScheduleError> {
    let output = Command::new(program).args(args).output()?;
    if !output.status.success() {
        return Err(ScheduleError::CommandFailed {
            command: format!("{} {}", program, args.join(" ")),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn systemd_available() -> bool {
    Command::new("systemctl")
        .args(["--user", "--version"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn systemd_unit_dir() -> Result<PathBuf, ScheduleError> {
    let home = dirs::home_dir().ok_or(ScheduleError::NoHomeDirectory)?;
    Ok(home.join(".config").join("systemd").join("user"))
}

/// Writes the service and timer units into `unit_dir`.
pub fn write_systemd_units(job: &DailyJob, unit_dir: &Path, home: &Path) -> Result<(), ScheduleError> {
    std::fs::create_dir_all(unit_dir)?;
    std::fs::write(
        unit_dir.join(format!("{}.service", UNIT_NAME)),
        systemd_service(job, home),
    )?;
    std::fs::write(
        unit_dir.join(format!("{}.timer", UNIT_NAME)),
        systemd_timer(job),
    )?;
    Ok(())
}

fn current_crontab() -> String {
    // `crontab -l` fails when the user has no crontab yet.
    run("crontab", &["-l"]).unwrap_or_default()
}

fn replace_crontab(contents: &str) -> Result<(), ScheduleError> {
    use std::io::Write;

    let mut child = Command::new("crontab")
        .arg("-")
        .stdin(std::process::Stdio::piped())
        .spawn()?;
    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(contents.as_bytes())?;
    }
    let status = child.wait()?;
    if !status.success() {
        return Err(ScheduleError::CommandFailed {
            command: "crontab -".to_string(),
            stderr: status.to_string(),
        });
    }
    Ok(())
}

/// Registers `job` to run once a day.
pub fn install(job: &DailyJob) -> Result<Installed, ScheduleError> {
    if cfg!(windows) {
        let time = job.time.format("%H:%M").to_string();
        let command = job.command_line();
        run(
            "schtasks",
            &[
                "/Create", "/SC", "DAILY", "/TN", WINDOWS_TASK_NAME, "/TR", &command, "/ST", &time,
                "/F",
            ],
        )?;
        info!(task = WINDOWS_TASK_NAME, %time, "scheduled task created");
        return Ok(Installed::TaskScheduler);
    }

    if !cfg!(unix) {
        return Err(ScheduleError::Unsupported);
    }

    if systemd_available() {
        let home = dirs::home_dir().ok_or(ScheduleError::NoHomeDirectory)?;
        let unit_dir = systemd_unit_dir()?;
        write_systemd_units(job, &unit_dir, &home)?;
        run("systemctl", &["--user", "daemon-reload"])?;
        let timer = format!("{}.timer", UNIT_NAME);
        run("systemctl", &["--user", "enable", "--now", &timer])?;
        info!(unit_dir = %unit_dir.display(), "systemd timer enabled");
        return Ok(Installed::SystemdTimer { unit_dir });
    }

    warn!("systemd not available, falling back to crontab");
    let merged = merge_crontab(&current_crontab(), &cron_line(job));
    replace_crontab(&merged)?;
    info!("crontab entry installed");
    Ok(Installed::Crontab)
}

/// Removes whatever [`install`] registered. Missing entries are not errors.
pub fn uninstall() -> Result<(), ScheduleError> {
    if cfg!(windows) {
        run("schtasks", &["/Delete", "/TN", WINDOWS_TASK_NAME, "/F"])?;
        info!(task = WINDOWS_TASK_NAME, "scheduled task removed");
        return Ok(());
    }

    if !cfg!(unix) {
        return Err(ScheduleError::Unsupported);
    }

    if systemd_available() {
        let timer = format!("{}.timer", UNIT_NAME);
        if let Err(e) = run("systemctl", &["--user", "disable", "--now", &timer]) {
            warn!(error = %e, "timer was not enabled");
        }
        let unit_dir = systemd_unit_dir()?;
        for ext in ["service", "timer"] {
            let path = unit_dir.join(format!("{}.{}", UNIT_NAME, ext));
            if path.exists() {
                std::fs::remove_file(&path)?;
            }
        }
        run("systemctl", &["--user", "daemon-reload"])?;
    }

    let existing = current_crontab();
    if existing.contains(CRON_MARKER) {
        replace_crontab(&strip_crontab(&existing))?;
    }
    info!("daily schedule removed");
    Ok(())
}
