//! Error types for loading and output operations with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E005) for documentation lookup:
//!
//! - E001: `StructureRead` (Structure file could not be read)
//! - E002: `EmptyStructure` (Structure file contains no rows)
//! - E003: `NoOpenCells` (Structure has no fillable cells)
//! - E004: `WordListRead` (Word list file could not be read)
//! - E005: `OutputWrite` (Output file could not be written)
//!
//! The solver itself never produces these: an unsatisfiable puzzle is a normal
//! `None` result, not an error.
//!
//! # Examples
//!
//! ```
//! use crossfill::errors::CrossfillError;
//!
//! fn check_structure(rows: &[&str]) -> Result<(), CrossfillError> {
//!     if rows.is_empty() {
//!         return Err(CrossfillError::EmptyStructure);
//!     }
//!     Ok(())
//! }
//!
//! match check_structure(&[]) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

/// Unified error type for loading structure/word-list files and writing output.
#[derive(Debug, thiserror::Error)]
pub enum CrossfillError {
    #[error("failed to read structure file '{path}': {source}")]
    StructureRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("structure file contains no rows")]
    EmptyStructure,

    #[error("structure has no open cells to fill")]
    NoOpenCells,

    #[error("failed to read word list '{path}': {source}")]
    WordListRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output file '{path}': {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl CrossfillError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CrossfillError::StructureRead { .. } => "E001",
            CrossfillError::EmptyStructure => "E002",
            CrossfillError::NoOpenCells => "E003",
            CrossfillError::WordListRead { .. } => "E004",
            CrossfillError::OutputWrite { .. } => "E005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            CrossfillError::StructureRead { .. } => "Structure file could not be read",
            CrossfillError::EmptyStructure => "Structure file contains no rows",
            CrossfillError::NoOpenCells => "Structure has no fillable cells",
            CrossfillError::WordListRead { .. } => "Word list file could not be read",
            CrossfillError::OutputWrite { .. } => "Output file could not be written",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            CrossfillError::StructureRead { .. } => "The structure file path could not be opened or decoded as UTF-8 text. The underlying I/O error is included in the message.",
            CrossfillError::EmptyStructure => "The structure file had no lines at all, so there is no grid to fill.",
            CrossfillError::NoOpenCells => "The structure file parsed into a grid, but no cell was marked open ('_'), so there are no slots for words.",
            CrossfillError::WordListRead { .. } => "The word list file path could not be opened or decoded as UTF-8 text. The underlying I/O error is included in the message.",
            CrossfillError::OutputWrite { .. } => "The rendered grid could not be written to the requested output path. The underlying I/O error is included in the message.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            CrossfillError::EmptyStructure => Some("Provide a structure file with at least one row, using '_' for open cells"),
            CrossfillError::NoOpenCells => Some("Mark fillable cells with '_'; every other character is a blocked cell"),
            CrossfillError::OutputWrite { .. } => Some("Check that the output directory exists and is writable"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<CrossfillError> {
        vec![
            CrossfillError::StructureRead {
                path: "grid.txt".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            },
            CrossfillError::EmptyStructure,
            CrossfillError::NoOpenCells,
            CrossfillError::WordListRead {
                path: "words.txt".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            },
            CrossfillError::OutputWrite {
                path: "out.txt".to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            },
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = CrossfillError::NoOpenCells;
        assert_eq!(err.code(), "E003");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E003"));
        assert!(detailed.contains("blocked"));
    }

    /// Test that all `CrossfillError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        for err in all_variants() {
            let code = err.code();
            assert!(
                code.starts_with('E'),
                "Error code '{}' should start with 'E'",
                code
            );
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }

        assert_eq!(codes.len(), 5);
    }

    /// Test that all error codes follow the format E0XX
    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(
                code.starts_with("E0"),
                "Error code '{}' should start with 'E0'",
                code
            );
            let num_part = &code[1..];
            assert!(
                num_part.parse::<u16>().is_ok(),
                "Error code '{}' should end with a number",
                code
            );
        }
    }

    /// Test that display_detailed properly formats errors
    #[test]
    fn test_display_detailed_includes_code_and_help() {
        for err in all_variants() {
            let detailed = err.display_detailed();

            // should include code
            assert!(
                detailed.contains(err.code()),
                "Detailed display should include error code"
            );

            // should include base message
            let base_msg = err.to_string();
            assert!(
                detailed.contains(&base_msg),
                "Detailed display should include base error message"
            );

            // if there's help text, it should be included
            if let Some(help) = err.help() {
                assert!(
                    detailed.contains(help),
                    "Detailed display should include help text when available"
                );
            }
        }
    }

    /// Test that read errors carry the offending path
    #[test]
    fn test_read_errors_include_path() {
        let err = CrossfillError::StructureRead {
            path: "puzzles/grid7.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("puzzles/grid7.txt"));
        assert!(msg.contains("no such file"));
    }

    /// Test that descriptions and details are present for every variant
    #[test]
    fn test_descriptions_and_details_nonempty() {
        for err in all_variants() {
            assert!(!err.description().is_empty());
            assert!(err.details().len() > 20, "Details for {:?} should be substantial", err);
        }
    }
}
