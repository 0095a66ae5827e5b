//! trainplan CLI - Training Plan Workbook Generator
//!
//! Run without arguments to write `Training_Plan_<YYYYMMDD>.xlsx` into the
//! current directory.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trainplan_core::{Renderer, TrainingPlan};
use trainplan_render::{ExerciseLibraryAppender, ScheduleSheetBuilder, TextRenderer};

#[derive(Parser)]
#[command(name = "trainplan")]
#[command(author, version, about = "4-week training plan workbook generator", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the training plan workbook (the default)
    Generate {
        /// Directory the workbook is written to
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output_dir: PathBuf,

        /// Run date used for the file name and start date (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },

    /// Print the plan without writing a workbook
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Text)]
        format: ShowFormat,

        /// Start date shown in the plan (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,

        /// Leave out the exercise library
        #[arg(long)]
        no_library: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShowFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the confirmation lines
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let command = cli.command.unwrap_or(Commands::Generate {
        output_dir: PathBuf::from("."),
        date: None,
    });

    match command {
        Commands::Generate { output_dir, date } => cmd_generate(&output_dir, date),
        Commands::Show {
            format,
            date,
            no_library,
        } => cmd_show(format, date, no_library),
    }
}

fn run_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

fn cmd_generate(output_dir: &Path, date: Option<NaiveDate>) -> Result<()> {
    let plan = TrainingPlan::standard(run_date(date));
    info!(date = %plan.start_date, dir = %output_dir.display(), "generating training plan");

    let path = ScheduleSheetBuilder::new()
        .save(&plan, output_dir)
        .with_context(|| format!("Failed to write training plan into {}", output_dir.display()))?;

    let shown = if output_dir == Path::new(".") {
        plan.file_name()
    } else {
        path.display().to_string()
    };
    println!("Training plan saved as: {shown}");

    ExerciseLibraryAppender::new()
        .append(&plan, &path)
        .with_context(|| format!("Failed to add exercise library to {}", path.display()))?;
    println!("Exercise library added to: {shown}");

    println!("Complete training plan with exercise library created successfully!");
    println!("File saved as: {shown}");
    Ok(())
}

fn cmd_show(format: ShowFormat, date: Option<NaiveDate>, no_library: bool) -> Result<()> {
    let mut plan = TrainingPlan::standard(run_date(date));
    if no_library {
        plan.library = &[];
    }

    match format {
        ShowFormat::Text => {
            let renderer = if no_library {
                TextRenderer::new().no_library()
            } else {
                TextRenderer::new()
            };
            print!("{}", renderer.render(&plan)?);
        }
        ShowFormat::Json => {
            let json = serde_json::to_string_pretty(&plan)?;
            println!("{json}");
        }
    }

    Ok(())
}
