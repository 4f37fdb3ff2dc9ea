//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `CrossfillError` implementation via its `code()`,
//! `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;
use std::io;

use crossfill::errors::CrossfillError;

/// One of each `CrossfillError` variant, in code order, for documentation.
fn all_error_variants() -> Vec<CrossfillError> {
    vec![
        CrossfillError::StructureRead {
            path: "puzzles/grid.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        CrossfillError::EmptyStructure,
        CrossfillError::NoOpenCells,
        CrossfillError::WordListRead {
            path: "words.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        CrossfillError::OutputWrite {
            path: "out/filled.txt".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        },
    ]
}

/// Render the documentation block for one error variant.
fn push_variant_docs(out: &mut String, error: &CrossfillError) {
    let _ = writeln!(out, "### {}: {}\n", error.code(), error.description());
    let _ = writeln!(out, "**Details:** {}\n", error.details());

    if let Some(help_text) = error.help() {
        let _ = writeln!(out, "**How to fix:**\n```\n{help_text}\n```\n");
    }

    let _ = writeln!(out, "**Example error message:**\n```\n{error}\n```\n");
    let _ = writeln!(
        out,
        "**Detailed format:**\n```\n{}\n```\n",
        error.display_detailed()
    );
    let _ = writeln!(out, "---\n");
}

/// Build the full error code reference document.
fn error_code_reference() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(
        out,
        "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n"
    );

    let _ = writeln!(out, "## Loader and Output Errors\n");
    let _ = writeln!(
        out,
        "Errors from reading the structure/word-list files and writing the rendered grid. \
         An unsatisfiable puzzle is not an error: the solver reports it as a normal \
         `No solution.` result.\n"
    );
    for error in all_error_variants() {
        push_variant_docs(&mut out, &error);
    }

    let _ = writeln!(out, "## How to Use Error Codes\n");
    let _ = writeln!(out, "When you see an error like:\n");
    let _ = writeln!(out, "```");
    let _ = writeln!(out, "Error: structure has no open cells to fill (E003)");
    let _ = writeln!(
        out,
        "Mark fillable cells with '_'; every other character is a blocked cell"
    );
    let _ = writeln!(out, "```\n");
    let _ = writeln!(out, "1. Note the error code (e.g., `E003`)");
    let _ = writeln!(out, "2. Look it up in this document for detailed explanation");
    let _ = writeln!(out, "3. Follow the suggested resolution steps\n");

    let _ = writeln!(out, "## Error Display Formats\n");
    let _ = writeln!(out, "Errors are displayed in two formats:\n");
    let _ = writeln!(out, "### Simple Format\n```\nError: <message>\n```\n");
    let _ = writeln!(
        out,
        "### Detailed Format (via `display_detailed()`)\n```\n<message> (<code>)\n<help text if available>\n```"
    );

    out
}

fn main() {
    print!("{}", error_code_reference());
}
