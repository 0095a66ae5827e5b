//! Plain-text plan renderer
//!
//! Prints the same content as the workbook in fixed-width columns, sized from
//! the sheet column widths.
//!
//! ## Example Output
//!
//! ```text
//! 4-WEEK TRAINING PLAN
//! ====================
//! Program Duration: 4 Weeks
//! ...
//!
//! WEEK 1: FOUNDATION BUILDING
//! Day         Training Type   Duration    Intensity   Notes
//! Monday      Strength        45 min      Low         Full body compound movements
//! ```

use trainplan_core::{
    RenderError, Renderer, TrainingPlan, EXERCISE_HEADERS, NOTES_TITLE, SESSION_HEADERS,
};

use crate::layout::{LIBRARY_COLUMN_WIDTHS, SCHEDULE_COLUMN_WIDTHS};

/// Plain-text renderer
#[derive(Clone, Debug)]
pub struct TextRenderer {
    /// Whether to list the exercise library after the schedule
    pub include_library: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            include_library: true,
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave out the exercise library
    pub fn no_library(mut self) -> Self {
        self.include_library = false;
        self
    }
}

fn underline(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
    out.push_str(&"=".repeat(text.chars().count()));
    out.push('\n');
}

/// One row padded to the given widths; the last cell is left unpadded.
fn table_row(out: &mut String, cells: &[&str], widths: &[f64]) {
    let last = cells.len().saturating_sub(1);
    for (i, cell) in cells.iter().enumerate() {
        if i == last {
            out.push_str(cell);
        } else {
            let width = widths.get(i).copied().unwrap_or(12.0) as usize;
            out.push_str(&format!("{cell:<width$}"));
        }
    }
    out.push('\n');
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, plan: &TrainingPlan) -> Result<String, RenderError> {
        let mut out = String::new();

        underline(&mut out, plan.title);
        for row in &plan.info {
            out.push_str(&format!("{} {}\n", row.label, row.value));
        }

        for week in plan.weeks {
            out.push('\n');
            out.push_str(&week.banner());
            out.push('\n');
            table_row(&mut out, &SESSION_HEADERS, &SCHEDULE_COLUMN_WIDTHS);
            for session in &week.sessions {
                table_row(&mut out, &session.cells(), &SCHEDULE_COLUMN_WIDTHS);
            }
        }

        out.push('\n');
        out.push_str(NOTES_TITLE);
        out.push('\n');
        for note in plan.notes {
            out.push_str(note);
            out.push('\n');
        }

        if self.include_library {
            out.push('\n');
            underline(&mut out, plan.library_title);
            for category in plan.library {
                out.push('\n');
                out.push_str(&category.banner());
                out.push('\n');
                table_row(&mut out, &EXERCISE_HEADERS, &LIBRARY_COLUMN_WIDTHS);
                for exercise in category.exercises {
                    table_row(&mut out, &exercise.cells(), &LIBRARY_COLUMN_WIDTHS);
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_all_but_last_cell() {
        let mut out = String::new();
        table_row(&mut out, &["Day", "Type", "Notes"], &[6.0, 8.0, 40.0]);
        assert_eq!(out, "Day   Type    Notes\n");
    }

    #[test]
    fn info_rows_follow_the_title() {
        let plan = TrainingPlan::standard(chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        let text = TextRenderer::new().render(&plan).unwrap();
        let lines: Vec<&str> = text.lines().take(4).collect();
        assert_eq!(
            lines,
            vec![
                "4-WEEK TRAINING PLAN",
                "====================",
                "Program Duration: 4 Weeks",
                "Start Date: March 02, 2026",
            ]
        );
    }

    #[test]
    fn no_library_stops_after_notes() {
        let plan = TrainingPlan::standard(chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        let text = TextRenderer::new().no_library().render(&plan).unwrap();
        assert!(text.trim_end().ends_with(plan.notes[plan.notes.len() - 1]));
    }

    #[test]
    fn underline_matches_title_length() {
        let mut out = String::new();
        underline(&mut out, "ABC");
        assert_eq!(out, "ABC\n===\n");
    }
}
