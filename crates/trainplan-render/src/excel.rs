//! Schedule sheet renderer
//!
//! Builds the first worksheet of the training plan workbook with
//! `rust_xlsxwriter` and saves it under `Training_Plan_<YYYYMMDD>.xlsx`.
//!
//! ## Sheet Layout (1-based rows)
//!
//! ```text
//! 1      | 4-WEEK TRAINING PLAN (merged A:G)
//! 3-6    | Program Duration / Start Date / Goal / Level
//! 8      | WEEK 1: FOUNDATION BUILDING (merged A:G)
//! 9      | Day | Training Type | Duration | Intensity | Notes
//! 10-16  | Monday .. Sunday
//! 18..47 | weeks 2-4, same shape
//! 48     | PROGRESS TRACKING (merged A:G)
//! 50     | Week | Weight (lbs) | Body Fat % | Cardio Time | Strength Level | Notes
//! 51-54  | Week 1 .. Week 4, entry cells blank
//! 57     | IMPORTANT NOTES (merged A:G)
//! 58-63  | one note per row
//! ```

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use trainplan_core::{
    RenderError, Renderer, TrainingPlan, NOTES_TITLE, PROGRESS_TITLE, SCHEDULE_SHEET,
    SESSION_HEADERS,
};

use crate::layout::{
    record_role, tracking_role, CellRole, RowCursor, BANNER_FILL, BANNER_FONT, BANNER_FONT_SIZE,
    HEADER_FILL, HEADER_FONT_SIZE, SCHEDULE_COLUMNS, SCHEDULE_COLUMN_WIDTHS, TITLE_FILL,
    TITLE_FONT_SIZE,
};

/// Writes the schedule sheet of a training plan
#[derive(Clone, Debug)]
pub struct ScheduleSheetBuilder {
    /// Name of the worksheet
    pub sheet_name: String,
}

impl Default for ScheduleSheetBuilder {
    fn default() -> Self {
        Self {
            sheet_name: SCHEDULE_SHEET.into(),
        }
    }
}

/// Reusable cell formats
struct PlanFormats {
    title: Format,
    banner: Format,
    header: Format,
    label: Format,
    cell_label: Format,
    cell_centered: Format,
    cell_text: Format,
}

impl PlanFormats {
    fn new() -> Self {
        let title = Format::new()
            .set_bold()
            .set_font_size(TITLE_FONT_SIZE)
            .set_font_color(BANNER_FONT)
            .set_background_color(TITLE_FILL)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        let banner = Format::new()
            .set_bold()
            .set_font_size(BANNER_FONT_SIZE)
            .set_font_color(BANNER_FONT)
            .set_background_color(BANNER_FILL)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        let header = Format::new()
            .set_bold()
            .set_font_size(HEADER_FONT_SIZE)
            .set_background_color(HEADER_FILL)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin);

        let label = Format::new().set_bold();

        let cell_label = Format::new().set_bold().set_border(FormatBorder::Thin);

        let cell_centered = Format::new()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin);

        let cell_text = Format::new().set_border(FormatBorder::Thin);

        Self {
            title,
            banner,
            header,
            label,
            cell_label,
            cell_centered,
            cell_text,
        }
    }

    fn for_role(&self, role: CellRole) -> &Format {
        match role {
            CellRole::Label => &self.cell_label,
            CellRole::Centered => &self.cell_centered,
            CellRole::Text => &self.cell_text,
        }
    }
}

fn format_err(e: XlsxError) -> RenderError {
    match e {
        XlsxError::IoError(io) => RenderError::Io(io),
        other => RenderError::Format(other.to_string()),
    }
}

impl ScheduleSheetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worksheet name
    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Build an in-memory workbook holding only the schedule sheet
    pub fn build(&self, plan: &TrainingPlan) -> Result<Workbook, RenderError> {
        let mut workbook = Workbook::new();
        let formats = PlanFormats::new();

        let sheet = workbook.add_worksheet();
        sheet.set_name(&self.sheet_name).map_err(format_err)?;
        self.write_sheet(sheet, plan, &formats)?;

        Ok(workbook)
    }

    /// Generate workbook bytes
    pub fn render_to_bytes(&self, plan: &TrainingPlan) -> Result<Vec<u8>, RenderError> {
        let mut workbook = self.build(plan)?;
        workbook
            .save_to_buffer()
            .map_err(|e| RenderError::Format(format!("Failed to create Excel: {e}")))
    }

    /// Save the workbook into `dir` under the plan's file name.
    ///
    /// An existing file with the same name is overwritten.
    pub fn save(&self, plan: &TrainingPlan, dir: &Path) -> Result<PathBuf, RenderError> {
        let path = dir.join(plan.file_name());
        let mut workbook = self.build(plan)?;
        workbook.save(&path).map_err(format_err)?;

        info!(path = %path.display(), sheet = %self.sheet_name, "saved schedule sheet");
        Ok(path)
    }

    fn write_sheet(
        &self,
        sheet: &mut Worksheet,
        plan: &TrainingPlan,
        formats: &PlanFormats,
    ) -> Result<(), RenderError> {
        let mut cursor = RowCursor::default();

        write_banner(sheet, cursor.next_row(), plan.title, &formats.title)?;
        cursor.skip(1);

        for row in &plan.info {
            let r = cursor.next_row();
            sheet
                .write_string_with_format(r, 0, row.label, &formats.label)
                .map_err(format_err)?;
            sheet.write_string(r, 1, &row.value).map_err(format_err)?;
        }
        cursor.skip(1);

        for week in plan.weeks {
            debug!(week = week.number, row = cursor.current(), "writing week block");
            write_banner(sheet, cursor.next_row(), &week.banner(), &formats.banner)?;
            write_headers(sheet, cursor.next_row(), &SESSION_HEADERS, formats)?;

            for session in &week.sessions {
                let r = cursor.next_row();
                for (col, value) in (0u16..).zip(session.cells()) {
                    sheet
                        .write_string_with_format(r, col, value, formats.for_role(record_role(col)))
                        .map_err(format_err)?;
                }
            }
            cursor.skip(1);
        }

        debug!(row = cursor.current(), "writing progress tracking");
        write_banner(sheet, cursor.next_row(), PROGRESS_TITLE, &formats.banner)?;
        cursor.skip(1);
        write_headers(sheet, cursor.next_row(), plan.progress_headers, formats)?;

        for week in plan.weeks {
            let r = cursor.next_row();
            sheet
                .write_string_with_format(r, 0, &week.progress_label(), &formats.cell_label)
                .map_err(format_err)?;
            for col in 1..plan.progress_headers.len() as u16 {
                sheet
                    .write_blank(r, col, formats.for_role(tracking_role(col)))
                    .map_err(format_err)?;
            }
        }

        for (col, width) in (0u16..).zip(SCHEDULE_COLUMN_WIDTHS) {
            sheet.set_column_width(col, width).map_err(format_err)?;
        }

        cursor.skip(2);
        write_banner(sheet, cursor.next_row(), NOTES_TITLE, &formats.banner)?;
        for note in plan.notes {
            sheet
                .write_string(cursor.next_row(), 0, *note)
                .map_err(format_err)?;
        }

        Ok(())
    }
}

fn write_banner(
    sheet: &mut Worksheet,
    row: u32,
    text: &str,
    format: &Format,
) -> Result<(), RenderError> {
    sheet
        .merge_range(row, 0, row, SCHEDULE_COLUMNS - 1, text, format)
        .map_err(format_err)?;
    Ok(())
}

fn write_headers(
    sheet: &mut Worksheet,
    row: u32,
    headers: &[&str],
    formats: &PlanFormats,
) -> Result<(), RenderError> {
    for (col, header) in (0u16..).zip(headers) {
        sheet
            .write_string_with_format(row, col, *header, &formats.header)
            .map_err(format_err)?;
    }
    Ok(())
}

impl Renderer for ScheduleSheetBuilder {
    type Output = Vec<u8>;

    fn render(&self, plan: &TrainingPlan) -> Result<Vec<u8>, RenderError> {
        self.render_to_bytes(plan)
    }
}
