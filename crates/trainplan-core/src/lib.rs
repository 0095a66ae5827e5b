//! # trainplan-core
//!
//! Domain model and static program data for the trainplan workbook generator.
//!
//! This crate provides:
//! - Domain types: `TrainingWeek`, `Session`, `ExerciseCategory`, `Exercise`, `TrainingPlan`
//! - The fixed 4-week program and exercise library as immutable tables
//! - Output naming (`Training_Plan_<YYYYMMDD>.xlsx`)
//! - The `Renderer` trait and `RenderError`
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use trainplan_core::TrainingPlan;
//!
//! let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
//! let plan = TrainingPlan::standard(start);
//!
//! assert_eq!(plan.weeks.len(), 4);
//! assert_eq!(plan.file_name(), "Training_Plan_20260302.xlsx");
//! ```

pub mod exercises;
pub mod schedule;

use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

pub use exercises::{EXERCISE_HEADERS, EXERCISE_LIBRARY};
pub use schedule::{IMPORTANT_NOTES, PROGRESS_HEADERS, SESSION_HEADERS, TRAINING_WEEKS};

// ============================================================================
// Names
// ============================================================================

/// Name of the first worksheet
pub const SCHEDULE_SHEET: &str = "Training Plan";

/// Name of the worksheet appended by the library stage
pub const LIBRARY_SHEET: &str = "Exercise Library";

/// Prefix of every generated file name
pub const FILE_PREFIX: &str = "Training_Plan_";

/// Banner text on the first row of the schedule sheet
pub const SCHEDULE_TITLE: &str = "4-WEEK TRAINING PLAN";

/// Banner text on the first row of the library sheet
pub const LIBRARY_TITLE: &str = "EXERCISE LIBRARY";

/// Banner above the progress-tracking grid
pub const PROGRESS_TITLE: &str = "PROGRESS TRACKING";

/// Banner above the advisory notes
pub const NOTES_TITLE: &str = "IMPORTANT NOTES";

/// Day names in the order every week lists them
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Sentinel used for duration and intensity on rest days
pub const REST_SENTINEL: &str = "-";

/// Output file name for a plan generated on `date`.
pub fn output_file_name(date: NaiveDate) -> String {
    format!("{FILE_PREFIX}{}.xlsx", date.format("%Y%m%d"))
}

/// Human-readable start date, e.g. "March 02, 2026".
pub fn start_date_label(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

// ============================================================================
// Training Schedule
// ============================================================================

/// Kind of training done in a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SessionKind {
    Strength,
    Cardio,
    Flexibility,
    Assessment,
    Rest,
}

impl SessionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Cardio => "Cardio",
            Self::Flexibility => "Flexibility",
            Self::Assessment => "Assessment",
            Self::Rest => "Rest",
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One day of a training week
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Session {
    pub day: &'static str,
    pub kind: SessionKind,
    /// Duration label ("45 min"), `"-"` on rest days
    pub duration: &'static str,
    /// Intensity label ("Low", "High"), `"-"` on rest days
    pub intensity: &'static str,
    pub notes: &'static str,
}

impl Session {
    pub const fn new(
        day: &'static str,
        kind: SessionKind,
        duration: &'static str,
        intensity: &'static str,
        notes: &'static str,
    ) -> Self {
        Self {
            day,
            kind,
            duration,
            intensity,
            notes,
        }
    }

    /// Rest day: no duration or intensity.
    pub const fn rest(day: &'static str, notes: &'static str) -> Self {
        Self::new(day, SessionKind::Rest, REST_SENTINEL, REST_SENTINEL, notes)
    }

    pub fn is_rest(&self) -> bool {
        self.kind == SessionKind::Rest
    }

    /// Cell values in column order: Day, Training Type, Duration, Intensity, Notes
    pub fn cells(&self) -> [&'static str; 5] {
        [
            self.day,
            self.kind.label(),
            self.duration,
            self.intensity,
            self.notes,
        ]
    }
}

/// A week of the program: always seven sessions, Monday to Sunday
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrainingWeek {
    pub number: u8,
    pub focus: &'static str,
    pub sessions: [Session; 7],
}

impl TrainingWeek {
    /// Banner text, e.g. "WEEK 1: FOUNDATION BUILDING"
    pub fn banner(&self) -> String {
        format!("WEEK {}: {}", self.number, self.focus.to_uppercase())
    }

    /// Label used in the progress-tracking grid
    pub fn progress_label(&self) -> String {
        format!("Week {}", self.number)
    }
}

// ============================================================================
// Exercise Library
// ============================================================================

/// A reference exercise. Every field is text because sets and rest carry units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub sets: &'static str,
    pub reps: &'static str,
    pub rest: &'static str,
    pub notes: &'static str,
}

impl Exercise {
    pub const fn new(
        name: &'static str,
        sets: &'static str,
        reps: &'static str,
        rest: &'static str,
        notes: &'static str,
    ) -> Self {
        Self {
            name,
            sets,
            reps,
            rest,
            notes,
        }
    }

    /// Cell values in column order: Exercise, Sets, Reps/Duration, Rest, Notes
    pub fn cells(&self) -> [&'static str; 5] {
        [self.name, self.sets, self.reps, self.rest, self.notes]
    }
}

/// Named group of exercises
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExerciseCategory {
    pub name: &'static str,
    pub exercises: &'static [Exercise],
}

impl ExerciseCategory {
    pub fn banner(&self) -> String {
        self.name.to_uppercase()
    }
}

// ============================================================================
// Plan
// ============================================================================

/// Label/value pair shown under the schedule title
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

/// Everything a renderer needs to produce the workbook
#[derive(Clone, Debug, Serialize)]
pub struct TrainingPlan {
    pub title: &'static str,
    pub start_date: NaiveDate,
    pub info: Vec<InfoRow>,
    pub weeks: &'static [TrainingWeek],
    pub progress_headers: &'static [&'static str],
    pub notes: &'static [&'static str],
    pub library_title: &'static str,
    pub library: &'static [ExerciseCategory],
}

impl TrainingPlan {
    /// The fixed 4-week program starting on `start_date`.
    pub fn standard(start_date: NaiveDate) -> Self {
        let info = vec![
            InfoRow {
                label: "Program Duration:",
                value: "4 Weeks".into(),
            },
            InfoRow {
                label: "Start Date:",
                value: start_date_label(start_date),
            },
            InfoRow {
                label: "Goal:",
                value: "General Fitness & Strength Building".into(),
            },
            InfoRow {
                label: "Level:",
                value: "Beginner to Intermediate".into(),
            },
        ];

        Self {
            title: SCHEDULE_TITLE,
            start_date,
            info,
            weeks: &TRAINING_WEEKS,
            progress_headers: &PROGRESS_HEADERS,
            notes: &IMPORTANT_NOTES,
            library_title: LIBRARY_TITLE,
            library: &EXERCISE_LIBRARY,
        }
    }

    /// File name the workbook is saved under
    pub fn file_name(&self) -> String {
        output_file_name(self.start_date)
    }

    pub fn exercise_count(&self) -> usize {
        self.library.iter().map(|c| c.exercises.len()).sum()
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Renders a plan to some output format
pub trait Renderer {
    type Output;

    /// Render a plan to the output format
    fn render(&self, plan: &TrainingPlan) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Cannot open workbook '{}': {}", .path.display(), .reason)]
    Open { path: PathBuf, reason: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================
