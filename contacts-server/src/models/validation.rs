//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Login payload is missing username or password
    MissingFields,

    /// Request body could not be decoded
    Malformed { reason: String },

    /// Import request carried no file part
    MissingFile,

    /// Spreadsheet header row lacks required columns
    MissingColumns { columns: Vec<String> },

    /// Export requested with an empty contacts table
    NothingToExport,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Missing fields"),
            Self::Malformed { reason } => write!(f, "{}", reason),
            Self::MissingFile => write!(f, "No file uploaded"),
            Self::MissingColumns { columns } => {
                write!(f, "Missing required columns: {}", columns.join(", "))
            }
            Self::NothingToExport => write!(f, "No contacts to export"),
        }
    }
}

impl std::error::Error for ValidationError {}
