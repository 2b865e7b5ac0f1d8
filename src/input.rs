//! Text input for simulations.
//!
//! Reference strings are whitespace-separated page numbers
//! (`"7 0 1 2 0 3"`). Newlines and tabs count as whitespace, so a reference
//! file may spread requests over several lines.

use std::fs;
use std::path::Path;

use crate::common::config::MAX_FRAMES;
use crate::common::{Error, PageId, Result};
use crate::engine::ReferenceString;

/// Parse a whitespace-separated reference string.
///
/// # Errors
/// `Error::InvalidInput` if the text holds no tokens, or a token is not a
/// non-negative integer.
///
/// # Example
/// ```
/// use pagesim::input::parse_reference_string;
///
/// let refs = parse_reference_string("7 0 1\n2").unwrap();
/// assert_eq!(refs.len(), 4);
/// assert!(parse_reference_string("7 x 1").is_err());
/// ```
pub fn parse_reference_string(text: &str) -> Result<ReferenceString> {
    let pages = text
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<u32>().map(PageId::new).map_err(|_| {
                Error::InvalidInput(format!(
                    "page {:?} at position {} is not a non-negative integer",
                    token, position
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    ReferenceString::new(pages)
}

/// Parse a frame count in `1..=MAX_FRAMES`.
pub fn parse_capacity(text: &str) -> Result<usize> {
    let text = text.trim();
    match text.parse::<usize>() {
        Ok(0) => Err(Error::InvalidInput(
            "frame capacity must be at least 1".into(),
        )),
        Ok(capacity) if capacity > MAX_FRAMES => Err(Error::InvalidInput(format!(
            "frame capacity {} exceeds the maximum of {}",
            capacity, MAX_FRAMES
        ))),
        Ok(capacity) => Ok(capacity),
        Err(_) => Err(Error::InvalidInput(format!(
            "frame capacity {:?} is not a positive integer",
            text
        ))),
    }
}

/// Read and parse a reference string from a file.
///
/// # Errors
/// - `Error::Io` if the file can't be read
/// - `Error::InvalidInput` as for [`parse_reference_string`]
pub fn read_reference_file(path: impl AsRef<Path>) -> Result<ReferenceString> {
    let text = fs::read_to_string(path)?;
    parse_reference_string(&text)
}
