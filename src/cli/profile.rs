//! `profile` subcommands.

use std::io::{BufRead, Write};

use clap::{Args, Subcommand};

use skyforge::application::handlers::{
    CreateProfileCommand, CreateProfileHandler, DeleteProfileCommand, DeleteProfileHandler,
    GetProfileHandler, GetProfileQuery, ListProfilesHandler,
};
use skyforge::domain::foundation::DomainError;
use skyforge::domain::profile::{parse_time, BirthData, BirthTimeRange, Location, UserProfile};

use super::{parse_cli_date, CliError, Context};

#[derive(Debug, Subcommand)]
pub enum ProfileCommands {
    /// Create a profile
    Create(CreateArgs),
    /// List stored profiles
    List,
    /// Show one profile
    Show {
        name: String,
    },
    /// Delete a profile
    Delete {
        name: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(short, long)]
    pub name: String,

    /// YYYY-MM-DD
    #[arg(short = 'd', long)]
    pub birth_date: String,

    /// HH:MM, 24-hour
    #[arg(short = 't', long)]
    pub birth_time: Option<String>,

    /// exact, morning, afternoon, evening, night or unknown
    #[arg(short = 'r', long)]
    pub birth_time_range: Option<String>,

    /// City name
    #[arg(short = 'l', long)]
    pub birth_location: Option<String>,
}

fn build_profile(args: CreateArgs) -> Result<UserProfile, CliError> {
    let mut birth = BirthData::new(parse_cli_date(&args.birth_date)?);
    if let Some(range) = args.birth_time_range.as_deref() {
        let range: BirthTimeRange = range.parse().map_err(DomainError::from)?;
        birth = birth.with_time_range(range);
    }
    if let Some(time) = args.birth_time.as_deref() {
        let time = parse_time("birth_time", time)
            .map_err(|_| CliError::Usage("Invalid time format. Use HH:MM".to_string()))?;
        birth = birth.with_time(time);
    }
    if let Some(city) = args.birth_location {
        birth = birth.with_location(Location::from_city(city));
    }
    Ok(UserProfile::new(args.name, birth).map_err(DomainError::from)?)
}

fn print_profile(profile: &UserProfile) {
    let birth = &profile.birth_data;
    println!("Name:        {}", profile.name);
    println!("Birth date:  {}", birth.date);
    match birth.time {
        Some(time) => println!("Birth time:  {}", time.format("%H:%M")),
        None => println!("Birth time:  unknown ({})", birth.time_range),
    }
    if let Some(location) = &birth.location {
        println!("Location:    {}", location);
    }
    if let Some(life_path) = profile.life_path_number {
        println!("Life path:   {}", life_path);
    }
    if let Some(hd_type) = profile.human_design_type {
        println!("HD type:     {}", hd_type);
    }
}

fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

pub async fn handle(ctx: &Context, action: ProfileCommands) -> Result<(), CliError> {
    match action {
        ProfileCommands::Create(args) => {
            let profile = build_profile(args)?;
            let created = CreateProfileHandler::new(ctx.repository.clone())
                .handle(CreateProfileCommand { profile })
                .await?;
            println!("Created profile '{}'", created.name);
            print_profile(&created);
        }
        ProfileCommands::List => {
            let profiles = ListProfilesHandler::new(ctx.repository.clone()).handle().await?;
            if profiles.is_empty() {
                println!("No profiles found. Create one with `skyforge profile create`.");
            }
            for profile in profiles {
                println!("{}  (born {})", profile.name, profile.birth_date());
            }
        }
        ProfileCommands::Show { name } => {
            let profile = GetProfileHandler::new(ctx.repository.clone())
                .handle(GetProfileQuery { name })
                .await?;
            print_profile(&profile);
        }
        ProfileCommands::Delete { name, yes } => {
            if !yes && !confirm(&format!("Delete profile '{}'?", name))? {
                println!("Cancelled");
                return Ok(());
            }
            DeleteProfileHandler::new(ctx.repository.clone())
                .handle(DeleteProfileCommand { name: name.clone() })
                .await?;
            println!("Deleted profile '{}'", name);
        }
    }
    Ok(())
}
