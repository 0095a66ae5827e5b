//! Sheet layout shared by the workbook backends
//!
//! Rows and columns are 0-based here, matching `rust_xlsxwriter`. A1-style
//! references (used by `umya-spreadsheet`) are produced by [`cell_ref`] and
//! [`banner_range`].

/// Columns spanned by banners on the schedule sheet (A–G)
pub const SCHEDULE_COLUMNS: u16 = 7;

/// Columns spanned by banners on the library sheet (A–F)
pub const LIBRARY_COLUMNS: u16 = 6;

/// Schedule sheet widths, columns A–G, in character units
pub const SCHEDULE_COLUMN_WIDTHS: [f64; 7] = [12.0, 15.0, 12.0, 12.0, 40.0, 12.0, 15.0];

/// Library sheet widths, columns A–E, in character units
pub const LIBRARY_COLUMN_WIDTHS: [f64; 5] = [25.0, 8.0, 15.0, 8.0, 35.0];

// Palette (RGB)
pub const TITLE_FILL: u32 = 0x1F4E79;
pub const BANNER_FILL: u32 = 0x366092;
pub const HEADER_FILL: u32 = 0xD9E2F3;
pub const BANNER_FONT: u32 = 0xFFFFFF;

pub const TITLE_FONT_SIZE: f64 = 16.0;
pub const BANNER_FONT_SIZE: f64 = 12.0;
pub const HEADER_FONT_SIZE: f64 = 11.0;

/// ARGB hex string for an RGB palette entry, e.g. `FF1F4E79`
pub fn argb(rgb: u32) -> String {
    format!("FF{:06X}", rgb & 0x00FF_FFFF)
}

/// Next unused row on a sheet.
///
/// Every block of a sheet is written through one cursor, so row arithmetic
/// lives here and nowhere else. The cursor only moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowCursor {
    row: u32,
}

impl RowCursor {
    pub const fn at(row: u32) -> Self {
        Self { row }
    }

    /// Row the next write will land on
    pub fn current(&self) -> u32 {
        self.row
    }

    /// Claim the current row and advance past it
    pub fn next_row(&mut self) -> u32 {
        let row = self.row;
        self.row += 1;
        row
    }

    /// Leave `rows` blank rows
    pub fn skip(&mut self, rows: u32) {
        self.row += rows;
    }
}

impl Default for RowCursor {
    fn default() -> Self {
        Self::at(0)
    }
}

/// How a cell in a data row is styled, decided by its column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRole {
    /// Bold, bordered
    Label,
    /// Centered, bordered
    Centered,
    /// Bordered only
    Text,
}

/// Session and exercise rows: name bold, the three short columns centered
pub fn record_role(col: u16) -> CellRole {
    match col {
        0 => CellRole::Label,
        1..=3 => CellRole::Centered,
        _ => CellRole::Text,
    }
}

/// Progress rows: week label bold, every entry cell centered
pub fn tracking_role(col: u16) -> CellRole {
    match col {
        0 => CellRole::Label,
        _ => CellRole::Centered,
    }
}

/// Column letters for a 0-based index: 0 → "A", 25 → "Z", 26 → "AA"
pub fn column_letter(col: u16) -> String {
    let mut n = u32::from(col) + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// A1-style reference for a 0-based cell
pub fn cell_ref(row: u32, col: u16) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

/// Range covering `columns` cells of `row`, e.g. `A8:G8`
pub fn banner_range(row: u32, columns: u16) -> String {
    format!("{}:{}", cell_ref(row, 0), cell_ref(row, columns - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_hands_out_rows_in_order() {
        let mut cursor = RowCursor::default();
        assert_eq!(cursor.next_row(), 0);
        cursor.skip(1);
        assert_eq!(cursor.next_row(), 2);
        assert_eq!(cursor.next_row(), 3);
        assert_eq!(cursor.current(), 4);
    }

    #[test]
    fn column_letters() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(6), "G");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
    }

    #[test]
    fn refs_are_one_based() {
        assert_eq!(cell_ref(0, 0), "A1");
        assert_eq!(cell_ref(7, 4), "E8");
        assert_eq!(banner_range(0, SCHEDULE_COLUMNS), "A1:G1");
        assert_eq!(banner_range(9, LIBRARY_COLUMNS), "A10:F10");
    }

    #[test]
    fn record_columns() {
        let roles: Vec<_> = (0..5).map(record_role).collect();
        assert_eq!(
            roles,
            vec![
                CellRole::Label,
                CellRole::Centered,
                CellRole::Centered,
                CellRole::Centered,
                CellRole::Text,
            ]
        );
    }

    #[test]
    fn tracking_columns() {
        assert_eq!(tracking_role(0), CellRole::Label);
        assert!((1..6).all(|col| tracking_role(col) == CellRole::Centered));
    }

    #[test]
    fn argb_pads_and_prefixes() {
        assert_eq!(argb(TITLE_FILL), "FF1F4E79");
        assert_eq!(argb(BANNER_FONT), "FFFFFFFF");
        assert_eq!(argb(0x00_00FF), "FF0000FF");
    }
}
