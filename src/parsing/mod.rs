//! parser for swim practice notation

use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, Set};

pub mod parser;

pub use parser::ParsingError;

/// Read a file and return an owned String. Errors are mapped into a
/// LoadingError carrying the filename so they can be reported to the user.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a list of Sets, or return the list of errors
/// encountered. Nothing is returned for use unless every line was valid.
pub fn parse(content: &str) -> Result<Vec<Set>, Vec<ParsingError>> {
    let result = parser::parse_with_recovery(content);

    match result {
        Ok(sets) => {
            let items: usize = sets
                .iter()
                .map(|set| {
                    set.items
                        .len()
                })
                .sum();
            debug!(
                "Found {} set{} containing {} item{}",
                sets.len(),
                if sets.len() == 1 { "" } else { "s" },
                items,
                if items == 1 { "" } else { "s" }
            );
            Ok(sets)
        }
        Err(errors) => {
            debug!("errors: {}", errors.len());
            Err(errors)
        }
    }
}
