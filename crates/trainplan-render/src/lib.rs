//! # trainplan-render
//!
//! Rendering backends for trainplan.
//!
//! This crate provides:
//! - `ScheduleSheetBuilder`: writes the "Training Plan" sheet to a new XLSX file
//! - `ExerciseLibraryAppender`: reopens that file and appends the "Exercise Library" sheet
//! - `TextRenderer`: fixed-width text listing of the same content
//! - `layout`: the row cursor, column widths, palette and per-column style rules
//!
//! ## Example
//!
//! ```rust,ignore
//! use trainplan_core::TrainingPlan;
//! use trainplan_render::{ExerciseLibraryAppender, ScheduleSheetBuilder};
//!
//! let plan = TrainingPlan::standard(chrono::Local::now().date_naive());
//!
//! // Stage 1: new workbook with the schedule sheet
//! let path = ScheduleSheetBuilder::new().save(&plan, std::path::Path::new("."))?;
//!
//! // Stage 2: reopen it and add the library sheet
//! ExerciseLibraryAppender::new().append(&plan, &path)?;
//! ```

pub mod excel;
pub mod layout;
pub mod library;
pub mod text;

pub use excel::ScheduleSheetBuilder;
pub use layout::RowCursor;
pub use library::ExerciseLibraryAppender;
pub use text::TextRenderer;

use std::path::{Path, PathBuf};
use trainplan_core::{RenderError, TrainingPlan};

/// Run both stages: save the schedule sheet into `dir`, then append the
/// exercise library to the saved file. Returns the path of the workbook.
pub fn generate(plan: &TrainingPlan, dir: &Path) -> Result<PathBuf, RenderError> {
    let path = ScheduleSheetBuilder::new().save(plan, dir)?;
    ExerciseLibraryAppender::new().append(plan, &path)?;
    Ok(path)
}
