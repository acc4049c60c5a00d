//! Spreadsheet codec for bulk import and export
//!
//! Import reads the first worksheet of an `.xlsx` upload; export writes a
//! single-sheet workbook with human-readable headers.

mod reader;
mod writer;

pub use reader::{normalize_header, read_contacts, REQUIRED_COLUMNS};
pub use writer::{humanize_header, write_contacts, EXPORT_COLUMNS, SHEET_NAME, XLSX_CONTENT_TYPE};

/// Spreadsheet read/write error
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("could not read workbook: {0}")]
    Read(#[from] calamine::XlsxError),

    #[error("workbook has no worksheets")]
    NoWorksheet,

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("could not write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}
