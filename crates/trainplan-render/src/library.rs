//! Exercise library appender
//!
//! Reopens a workbook already saved by [`crate::ScheduleSheetBuilder`], adds
//! the "Exercise Library" sheet after the existing sheets and saves it back
//! over the same path. `rust_xlsxwriter` cannot edit existing files, so this
//! stage goes through `umya-spreadsheet`.

use std::path::Path;
use tracing::{debug, info};
use trainplan_core::{RenderError, TrainingPlan, EXERCISE_HEADERS, LIBRARY_SHEET};
use umya_spreadsheet::{
    Border, HorizontalAlignmentValues, Spreadsheet, Style, VerticalAlignmentValues, Worksheet,
};

use crate::layout::{
    argb, banner_range, cell_ref, column_letter, record_role, CellRole, RowCursor, BANNER_FILL,
    BANNER_FONT, BANNER_FONT_SIZE, HEADER_FILL, HEADER_FONT_SIZE, LIBRARY_COLUMNS,
    LIBRARY_COLUMN_WIDTHS, TITLE_FILL, TITLE_FONT_SIZE,
};

/// Appends the exercise library sheet to a saved plan workbook
#[derive(Clone, Debug)]
pub struct ExerciseLibraryAppender {
    /// Name of the appended worksheet
    pub sheet_name: String,
}

impl Default for ExerciseLibraryAppender {
    fn default() -> Self {
        Self {
            sheet_name: LIBRARY_SHEET.into(),
        }
    }
}

/// Cell styles used on the library sheet
#[derive(Clone, Copy, Debug)]
enum CellStyle {
    Title,
    Banner,
    Header,
    Record(CellRole),
}

impl ExerciseLibraryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worksheet name
    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Reopen `path`, add the library sheet and save in place.
    ///
    /// Fails with [`RenderError::Open`] when the file is missing or is not a
    /// readable workbook.
    pub fn append(&self, plan: &TrainingPlan, path: &Path) -> Result<(), RenderError> {
        let mut book =
            umya_spreadsheet::reader::xlsx::read(path).map_err(|e| RenderError::Open {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        self.add_sheet(&mut book, plan)?;

        umya_spreadsheet::writer::xlsx::write(&book, path)
            .map_err(|e| RenderError::Format(format!("Failed to save Excel: {e}")))?;

        info!(path = %path.display(), sheet = %self.sheet_name, "appended exercise library");
        Ok(())
    }

    /// Add the library sheet to an open workbook
    pub fn add_sheet(&self, book: &mut Spreadsheet, plan: &TrainingPlan) -> Result<(), RenderError> {
        let sheet = book.new_sheet(self.sheet_name.as_str()).map_err(|e| {
            RenderError::InvalidData(format!("cannot add sheet '{}': {e}", self.sheet_name))
        })?;

        let mut cursor = RowCursor::default();

        write_banner(sheet, cursor.next_row(), plan.library_title, CellStyle::Title);
        cursor.skip(1);

        for category in plan.library {
            debug!(category = category.name, row = cursor.current(), "writing category block");
            write_banner(sheet, cursor.next_row(), &category.banner(), CellStyle::Banner);

            let header_row = cursor.next_row();
            for (col, header) in (0u16..).zip(EXERCISE_HEADERS) {
                write_cell(sheet, header_row, col, header, CellStyle::Header);
            }

            for exercise in category.exercises {
                let r = cursor.next_row();
                for (col, value) in (0u16..).zip(exercise.cells()) {
                    write_cell(sheet, r, col, value, CellStyle::Record(record_role(col)));
                }
            }
            cursor.skip(1);
        }

        for (col, width) in (0u16..).zip(LIBRARY_COLUMN_WIDTHS) {
            sheet
                .get_column_dimension_mut(&column_letter(col))
                .set_width(width);
        }

        Ok(())
    }
}

fn write_banner(sheet: &mut Worksheet, row: u32, text: &str, style: CellStyle) {
    sheet.add_merge_cells(banner_range(row, LIBRARY_COLUMNS));
    write_cell(sheet, row, 0, text, style);
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, text: &str, style: CellStyle) {
    let coordinate = cell_ref(row, col);
    sheet
        .get_cell_mut(coordinate.as_str())
        .set_value_string(text);
    apply_style(sheet.get_style_mut(coordinate.as_str()), style);
}

fn apply_style(style: &mut Style, kind: CellStyle) {
    match kind {
        CellStyle::Title => {
            set_font(style, TITLE_FONT_SIZE, Some(BANNER_FONT));
            style.set_background_color(argb(TITLE_FILL));
            center(style);
        }
        CellStyle::Banner => {
            set_font(style, BANNER_FONT_SIZE, Some(BANNER_FONT));
            style.set_background_color(argb(BANNER_FILL));
            center(style);
        }
        CellStyle::Header => {
            set_font(style, HEADER_FONT_SIZE, None);
            style.set_background_color(argb(HEADER_FILL));
            center(style);
            thin_border(style);
        }
        CellStyle::Record(CellRole::Label) => {
            style.get_font_mut().set_bold(true);
            thin_border(style);
        }
        CellStyle::Record(CellRole::Centered) => {
            center(style);
            thin_border(style);
        }
        CellStyle::Record(CellRole::Text) => thin_border(style),
    }
}

fn set_font(style: &mut Style, size: f64, color: Option<u32>) {
    let font = style.get_font_mut();
    font.set_bold(true).set_size(size);
    if let Some(rgb) = color {
        font.get_color_mut().set_argb(argb(rgb));
    }
}

fn center(style: &mut Style) {
    let alignment = style.get_alignment_mut();
    alignment.set_horizontal(HorizontalAlignmentValues::Center);
    alignment.set_vertical(VerticalAlignmentValues::Center);
}

fn thin_border(style: &mut Style) {
    let borders = style.get_borders_mut();
    borders.get_left_mut().set_border_style(Border::BORDER_THIN);
    borders.get_right_mut().set_border_style(Border::BORDER_THIN);
    borders.get_top_mut().set_border_style(Border::BORDER_THIN);
    borders.get_bottom_mut().set_border_style(Border::BORDER_THIN);
}
