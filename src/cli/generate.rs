//! Report commands: `generate`, `preview` and `daily`.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use skyforge::adapters::export::{daily_markdown, exporter_for, render_text};
use skyforge::application::handlers::{
    GenerateDailyCommand, GenerateDailyHandler, GenerateRangeCommand, GenerateRangeHandler,
};
use skyforge::domain::daily::{period_name, CalendarDocument, DailyPreparation, DateSpan};
use skyforge::domain::foundation::DomainError;
use skyforge::ports::ExportFormat;

use super::{parse_cli_date, CliError, Context};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalendarFormat {
    Json,
    Pdf,
    Excel,
    Csv,
    Markdown,
}

impl From<CalendarFormat> for ExportFormat {
    fn from(format: CalendarFormat) -> Self {
        match format {
            CalendarFormat::Json => ExportFormat::Json,
            CalendarFormat::Pdf => ExportFormat::Pdf,
            CalendarFormat::Excel => ExportFormat::Excel,
            CalendarFormat::Csv => ExportFormat::Csv,
            CalendarFormat::Markdown => ExportFormat::Markdown,
        }
    }
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Calendar year (1900-2100)
    #[arg(short, long)]
    pub year: i32,

    /// Profile name
    #[arg(short, long, default_value = "default")]
    pub profile: String,

    /// Restrict to one month (1-12)
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Output format; repeat for several
    #[arg(short, long, value_enum, default_values_t = vec![CalendarFormat::Json])]
    pub format: Vec<CalendarFormat>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Day to preview (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,

    /// Profile name
    #[arg(short, long, default_value = "default")]
    pub profile: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DailyFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DailyOutput {
    Stdout,
    File,
}

#[derive(Debug, Args)]
pub struct DailyArgs {
    /// Profile name
    #[arg(short, long, default_value = "default")]
    pub profile: String,

    #[arg(short, long, value_enum, default_value_t = DailyFormat::Text)]
    pub format: DailyFormat,

    /// Print, or write into the output directory
    #[arg(short, long, value_enum, default_value_t = DailyOutput::Stdout)]
    pub output: DailyOutput,
}

/// `skyforge_{profile}_{period}.{ext}` with spaces in the period replaced.
pub fn calendar_filename(profile: &str, period: &str, format: ExportFormat) -> String {
    format!(
        "skskyforge_{}_{}.{}",
        profile,
        period.replace(' ', "_"),
        format.extension()
    )
}

/// `skyforge_daily_{date}.{json|md}`
pub fn daily_filename(entry: &DailyPreparation, format: DailyFormat) -> String {
    let ext = match format {
        DailyFormat::Json => "json",
        DailyFormat::Text | DailyFormat::Markdown => "md",
    };
    format!("skskyforge_daily_{}.{}", entry.date, ext)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::Usage(e.to_string()))
}

async fn save(dir: &Path, filename: &str, content: &[u8]) -> Result<PathBuf, CliError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(filename);
    tokio::fs::write(&path, content).await?;
    Ok(path)
}

pub async fn generate(ctx: &Context, args: GenerateArgs) -> Result<(), CliError> {
    let span = DateSpan::for_year(args.year, args.month)?;
    let period = period_name(args.year, args.month);
    let output_dir = args
        .output
        .unwrap_or_else(|| ctx.config.storage.output_dir.clone());

    println!(
        "Generating {} days for '{}' ({})...",
        span.day_count(),
        args.profile,
        period
    );
    let entries = GenerateRangeHandler::new(ctx.repository.clone(), ctx.generator.clone())
        .handle(GenerateRangeCommand {
            profile: args.profile.clone(),
            start: span.start(),
            end: span.end(),
        })
        .await?;

    for format in args.format {
        let format = ExportFormat::from(format);
        let content = match format {
            ExportFormat::Json => {
                let document = CalendarDocument::new(
                    args.profile.clone(),
                    args.year,
                    args.month,
                    entries.clone(),
                );
                to_json(&document)?.into_bytes()
            }
            other => {
                let title = format!("{} - {}", args.profile, period);
                exporter_for(other)
                    .export(&entries, &title)
                    .map_err(DomainError::from)?
            }
        };
        let path = save(
            &output_dir,
            &calendar_filename(&args.profile, &period, format),
            &content,
        )
        .await?;
        println!("Saved: {}", path.display());
    }
    Ok(())
}

pub async fn preview(ctx: &Context, args: PreviewArgs) -> Result<(), CliError> {
    let date = parse_cli_date(&args.date)?;
    let entry = GenerateDailyHandler::new(ctx.repository.clone(), ctx.generator.clone())
        .handle(GenerateDailyCommand {
            profile: args.profile,
            date,
        })
        .await?;
    print!("{}", render_text(&entry));
    Ok(())
}

pub async fn daily(ctx: &Context, args: DailyArgs) -> Result<(), CliError> {
    let today = chrono::Local::now().date_naive();
    let entry = GenerateDailyHandler::new(ctx.repository.clone(), ctx.generator.clone())
        .handle(GenerateDailyCommand {
            profile: args.profile,
            date: today,
        })
        .await?;

    match args.output {
        DailyOutput::Stdout => {
            let rendered = match args.format {
                DailyFormat::Text => render_text(&entry),
                DailyFormat::Json => to_json(&entry)?,
                DailyFormat::Markdown => daily_markdown(&entry),
            };
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
        DailyOutput::File => {
            let content = match args.format {
                DailyFormat::Json => to_json(&entry)?,
                DailyFormat::Text | DailyFormat::Markdown => daily_markdown(&entry),
            };
            let path = save(
                &ctx.config.storage.output_dir,
                &daily_filename(&entry, args.format),
                content.as_bytes(),
            )
            .await?;
            println!("Saved: {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_filenames() {
        assert_eq!(
            calendar_filename("alice", "January 2026", ExportFormat::Excel),
            "skskyforge_alice_January_2026.xlsx"
        );
        assert_eq!(
            calendar_filename("alice", "2026", ExportFormat::Json),
            "skskyforge_alice_2026.json"
        );
    }

    #[test]
    fn formats_map_onto_exporters() {
        assert_eq!(ExportFormat::from(CalendarFormat::Excel), ExportFormat::Excel);
        assert_eq!(ExportFormat::from(CalendarFormat::Csv), ExportFormat::Csv);
    }
}
