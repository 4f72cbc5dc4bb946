mod display;

use analytics::{category_counts, skill_frequency, AnalysisReport, CategoryField, OverviewReport};
use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{export, scraped, ExportFormat, Listing, ListingIndex, Modality, Platform, Salary, SeniorityLevel};
use pipeline::{CriteriaUpdate, FileStorage, FilterCriteria, FilterStore, Preset, SalaryRange};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// JobScope - Antioquia job market explorer
#[derive(Parser)]
#[command(name = "jobscope")]
#[command(about = "Explore, filter and export job listings from Antioquia", long_about = None)]
struct Cli {
    /// Path to the listings dataset (JSON array)
    #[arg(short, long, env = "JOBSCOPE_DATA", default_value = "data/listings.json")]
    data: PathBuf,

    /// Directory holding saved filters [default: <data dir>/jobscope]
    #[arg(long, env = "JOBSCOPE_STATE_DIR")]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Headline indicators and the main distributions
    Overview,

    /// Salary, experience and distribution analysis
    Analysis {
        /// Only analyse listings matching the saved filters
        #[arg(long)]
        filtered: bool,
    },

    /// Count listings per value of a field
    Counts {
        /// Field to group by
        #[arg(long, value_enum)]
        by: GroupField,

        /// Only count listings matching the saved filters
        #[arg(long)]
        filtered: bool,
    },

    /// Most demanded technical skills
    Skills {
        /// How many skills to show
        #[arg(long, default_value = "10")]
        top: usize,

        /// Only count listings matching the saved filters
        #[arg(long)]
        filtered: bool,
    },

    /// List the listings matching the saved filters
    Listings {
        /// Print the listings as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show or change the saved filters
    Filters {
        #[command(subcommand)]
        command: FilterCommand,
    },

    /// Export listings as JSON or CSV
    Export {
        #[arg(long, value_enum)]
        format: FormatArg,

        /// Output file [default: empleos-antioquia-<date>.<ext>]
        #[arg(long)]
        output: Option<PathBuf>,

        /// Only export listings matching the saved filters
        #[arg(long)]
        filtered: bool,
    },

    /// Turn raw scraper output into a listings dataset
    ImportScraped {
        /// Scraper output (JSON array of raw jobs)
        #[arg(long)]
        input: PathBuf,

        /// Where to write the listings dataset
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Subcommand)]
enum FilterCommand {
    /// Print the saved filters
    Show,

    /// Set the free-text query (omit to clear it)
    Query { text: Option<String> },

    /// Add or remove a location
    ToggleLocation { location: String },

    /// Add or remove a modality (Presencial, Remoto, Híbrido)
    ToggleModality { modality: Modality },

    /// Add or remove a seniority level (Junior, Semi-senior, ...)
    ToggleLevel { level: SeniorityLevel },

    /// Replace one criterion
    Set {
        #[command(subcommand)]
        field: SetField,
    },

    /// Apply a named preset (primer-empleo, tech-senior, remoto)
    Preset { name: Preset },

    /// Clear every filter
    Reset,
}

#[derive(Subcommand)]
enum SetField {
    /// Locations to keep (none to clear)
    Locations { values: Vec<String> },
    /// Modalities to keep
    Modalities { values: Vec<Modality> },
    /// Seniority levels to keep
    Levels { values: Vec<SeniorityLevel> },
    /// Source platforms to keep
    Platforms { values: Vec<Platform> },
    /// Employer sectors to keep
    Sectors { values: Vec<String> },
    /// Position areas to keep
    Areas { values: Vec<String> },
    /// Salary band in COP (omit both bounds to clear)
    Salary(SalaryArgs),
    /// Maximum years of experience (omit to clear)
    MaxExperience { years: Option<u32> },
    /// Skills every listing must ask for
    Skills { values: Vec<String> },
    /// Posting date bounds, inclusive (YYYY-MM-DD)
    Dates(DateArgs),
    /// Only listings from verified employers
    VerifiedOnly {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Only listings with a published salary
    SalaryOnly {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
}

#[derive(Args)]
struct SalaryArgs {
    #[arg(long)]
    min: Option<Salary>,
    #[arg(long)]
    max: Option<Salary>,
}

#[derive(Args)]
struct DateArgs {
    #[arg(long)]
    from: Option<NaiveDate>,
    #[arg(long)]
    to: Option<NaiveDate>,
}

#[derive(Clone, Copy, ValueEnum)]
enum GroupField {
    Sector,
    Location,
    Modality,
    Level,
    Area,
    Platform,
}

impl From<GroupField> for CategoryField {
    fn from(field: GroupField) -> Self {
        match field {
            GroupField::Sector => CategoryField::Sector,
            GroupField::Location => CategoryField::Location,
            GroupField::Modality => CategoryField::Modality,
            GroupField::Level => CategoryField::Level,
            GroupField::Area => CategoryField::Area,
            GroupField::Platform => CategoryField::Platform,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Overview => handle_overview(&cli.data)?,
        Commands::Analysis { filtered } => {
            handle_analysis(&cli.data, cli.state_dir.as_deref(), filtered)?
        }
        Commands::Counts { by, filtered } => {
            handle_counts(&cli.data, cli.state_dir.as_deref(), by.into(), filtered)?
        }
        Commands::Skills { top, filtered } => {
            handle_skills(&cli.data, cli.state_dir.as_deref(), top, filtered)?
        }
        Commands::Listings { json } => handle_listings(&cli.data, cli.state_dir.as_deref(), json)?,
        Commands::Filters { command } => handle_filters(cli.state_dir.as_deref(), command)?,
        Commands::Export {
            format,
            output,
            filtered,
        } => handle_export(
            &cli.data,
            cli.state_dir.as_deref(),
            format.into(),
            output,
            filtered,
        )?,
        Commands::ImportScraped { input, output } => handle_import(&input, &output)?,
    }

    Ok(())
}

fn load_index(path: &Path) -> Result<ListingIndex> {
    let start = Instant::now();
    let index = ListingIndex::load_from_file(path)
        .with_context(|| format!("Failed to load listings from {}", path.display()))?;
    eprintln!(
        "{} Loaded {} listings in {:?}",
        "✓".green(),
        index.len(),
        start.elapsed()
    );
    Ok(index)
}

fn open_store(state_dir: Option<&Path>) -> Result<FilterStore<FileStorage>> {
    let dir = match state_dir {
        Some(dir) => dir.to_path_buf(),
        None => FileStorage::default_dir()
            .ok_or_else(|| anyhow!("Could not determine a data directory; pass --state-dir"))?,
    };
    Ok(FilterStore::open(FileStorage::new(dir)))
}

/// Saved criteria when `filtered` is set, otherwise no constraints
fn view_criteria(state_dir: Option<&Path>, filtered: bool) -> Result<FilterCriteria> {
    if filtered {
        Ok(open_store(state_dir)?.criteria().clone())
    } else {
        Ok(FilterCriteria::default())
    }
}

/// Handle the 'overview' command
fn handle_overview(data: &Path) -> Result<()> {
    let index = load_index(data)?;
    let view: Vec<&Listing> = index.listings().iter().collect();

    display::print_overview(&OverviewReport::build(&view));
    Ok(())
}

/// Handle the 'analysis' command
fn handle_analysis(data: &Path, state_dir: Option<&Path>, filtered: bool) -> Result<()> {
    let index = load_index(data)?;
    let criteria = view_criteria(state_dir, filtered)?;
    let view = criteria.filter(index.listings());

    if filtered {
        display::print_criteria(&criteria);
    }
    display::print_analysis(&AnalysisReport::build(&view));
    Ok(())
}

/// Handle the 'counts' command
fn handle_counts(
    data: &Path,
    state_dir: Option<&Path>,
    field: CategoryField,
    filtered: bool,
) -> Result<()> {
    let index = load_index(data)?;
    let criteria = view_criteria(state_dir, filtered)?;
    let view = criteria.filter(index.listings());

    let counts = category_counts(view, field);
    display::print_counts(&format!("Listings by {}", field.label()), &counts);
    Ok(())
}

/// Handle the 'skills' command
fn handle_skills(data: &Path, state_dir: Option<&Path>, top: usize, filtered: bool) -> Result<()> {
    let index = load_index(data)?;
    let criteria = view_criteria(state_dir, filtered)?;
    let view = criteria.filter(index.listings());

    let skills = skill_frequency(view, top);
    display::print_skills(&format!("Top {top} skills"), &skills);
    Ok(())
}

/// Handle the 'listings' command
fn handle_listings(data: &Path, state_dir: Option<&Path>, json: bool) -> Result<()> {
    let index = load_index(data)?;
    let criteria = open_store(state_dir)?.criteria().clone();
    let visible = criteria.filter(index.listings());

    if json {
        let stdout = io::stdout();
        export::write_json(visible, stdout.lock()).context("Failed to write listings")?;
    } else {
        display::print_criteria(&criteria);
        display::print_listings(&visible, index.len());
    }
    Ok(())
}

/// Handle the 'filters' command family
fn handle_filters(state_dir: Option<&Path>, command: FilterCommand) -> Result<()> {
    let mut store = open_store(state_dir)?;

    let update = match command {
        FilterCommand::Show => {
            display::print_criteria(store.criteria());
            return Ok(());
        }
        FilterCommand::Query { text } => CriteriaUpdate::SetQuery(text.unwrap_or_default()),
        FilterCommand::ToggleLocation { location } => CriteriaUpdate::ToggleLocation(location),
        FilterCommand::ToggleModality { modality } => CriteriaUpdate::ToggleModality(modality),
        FilterCommand::ToggleLevel { level } => CriteriaUpdate::ToggleLevel(level),
        FilterCommand::Set { field } => set_update(field)?,
        FilterCommand::Preset { name } => CriteriaUpdate::ApplyPreset(name),
        FilterCommand::Reset => CriteriaUpdate::Reset,
    };

    let criteria = store.dispatch(update).context("Failed to save filters")?;
    info!("filters updated");
    display::print_criteria(criteria);
    Ok(())
}

fn set_update(field: SetField) -> Result<CriteriaUpdate> {
    let update = match field {
        SetField::Locations { values } => CriteriaUpdate::SetLocations(values),
        SetField::Modalities { values } => CriteriaUpdate::SetModalities(values),
        SetField::Levels { values } => CriteriaUpdate::SetLevels(values),
        SetField::Platforms { values } => CriteriaUpdate::SetPlatforms(values),
        SetField::Sectors { values } => CriteriaUpdate::SetSectors(values),
        SetField::Areas { values } => CriteriaUpdate::SetAreas(values),
        SetField::Salary(SalaryArgs { min, max }) => {
            let range = match (min, max) {
                (None, None) => None,
                (min, max) => Some(SalaryRange {
                    min: min.unwrap_or(0),
                    max: max.unwrap_or(Salary::MAX),
                }),
            };
            if let Some(range) = range {
                if range.min > range.max {
                    return Err(anyhow!(
                        "Salary minimum {} is above maximum {}",
                        range.min,
                        range.max
                    ));
                }
            }
            CriteriaUpdate::SetSalaryRange(range)
        }
        SetField::MaxExperience { years } => CriteriaUpdate::SetMaxExperience(years),
        SetField::Skills { values } => CriteriaUpdate::SetRequiredSkills(values),
        SetField::Dates(DateArgs { from, to }) => {
            if let (Some(from), Some(to)) = (from, to) {
                if from > to {
                    return Err(anyhow!("Start date {from} is after end date {to}"));
                }
            }
            CriteriaUpdate::SetDateRange { from, to }
        }
        SetField::VerifiedOnly { enabled } => CriteriaUpdate::SetVerifiedOnly(enabled),
        SetField::SalaryOnly { enabled } => CriteriaUpdate::SetSalaryOnly(enabled),
    };
    Ok(update)
}

/// Handle the 'export' command
fn handle_export(
    data: &Path,
    state_dir: Option<&Path>,
    format: ExportFormat,
    output: Option<PathBuf>,
    filtered: bool,
) -> Result<()> {
    let index = load_index(data)?;
    let criteria = view_criteria(state_dir, filtered)?;
    let view = criteria.filter(index.listings());

    let output =
        output.unwrap_or_else(|| PathBuf::from(format.default_file_name(Local::now().date_naive())));
    let file = File::create(&output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    export::write_listings(format, view.iter().copied(), &mut writer)
        .with_context(|| format!("Failed to export to {}", output.display()))?;
    writer.flush()?;

    info!(path = %output.display(), listings = view.len(), mime = format.mime_type(), "export written");
    println!(
        "{} Exported {} listings to {}",
        "✓".green(),
        view.len(),
        output.display()
    );
    Ok(())
}

/// Handle the 'import-scraped' command
fn handle_import(input: &Path, output: &Path) -> Result<()> {
    let jobs = scraped::read_scraped_jobs(input)
        .with_context(|| format!("Failed to read scraped jobs from {}", input.display()))?;
    let listings = scraped::transform_scraped(&jobs, Local::now().date_naive());

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    export::write_json(&listings, &mut writer)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    writer.flush()?;

    println!(
        "{} Kept {} IT positions out of {} scraped jobs",
        "✓".green(),
        listings.len(),
        jobs.len()
    );
    Ok(())
}
