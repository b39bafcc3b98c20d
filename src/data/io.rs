//! Plain-text sparse dataset reader.
//!
//! One example per line:
//!
//! ```text
//! label [weight] index:value index:value ...
//! ```
//!
//! The label and the optional weight are floats; the weight is
//! recognized by the absence of a colon in the second token. Feature
//! indices are zero-based and must be strictly increasing within a
//! line. Everything after a `#` is a comment, and blank lines are
//! skipped.

use std::io::BufRead;

use thiserror::Error;

use crate::data::dataset::{Dataset, DatasetError};
use crate::data::example::{Example, ExampleError};
use crate::data::vector::{SparseVector, VectorError};

/// Errors from reading the text format.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A non-comment line held no label token.
    #[error("line {line}: missing label")]
    MissingLabel { line: usize },
    /// The label token is not a float.
    #[error("line {line}: invalid label '{token}'")]
    InvalidLabel { line: usize, token: String },
    /// The weight token is not a float.
    #[error("line {line}: invalid weight '{token}'")]
    InvalidWeight { line: usize, token: String },
    /// A feature token is not of the form `index:value`.
    #[error("line {line}: invalid feature '{token}', expected index:value")]
    InvalidFeature { line: usize, token: String },
    /// The feature pairs do not form a valid sparse vector.
    #[error("line {line}: {source}")]
    Vector { line: usize, source: VectorError },
    /// The parsed weight is out of range.
    #[error("line {line}: {source}")]
    Example { line: usize, source: ExampleError },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Reads a sparse dataset with the given feature dimension.
///
/// Stops at the first malformed line and reports it with its 1-based
/// line number.
pub fn read_dataset<R: BufRead>(
    reader: R,
    dimension: usize,
) -> Result<Dataset<SparseVector>, ParseError> {
    let mut examples = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        examples.push(parse_line(content, number + 1, dimension)?);
    }
    Ok(Dataset::from_examples(dimension, examples)?)
}

fn parse_line(
    content: &str,
    number: usize,
    dimension: usize,
) -> Result<Example<SparseVector>, ParseError> {
    let mut tokens = content.split_whitespace();
    let label_token = tokens.next().ok_or(ParseError::MissingLabel { line: number })?;
    let label: f64 = label_token.parse().map_err(|_| ParseError::InvalidLabel {
        line: number,
        token: label_token.to_string(),
    })?;

    let mut weight = 1.0;
    let mut pairs = Vec::new();
    for (position, token) in tokens.enumerate() {
        if position == 0 && !token.contains(':') {
            weight = token.parse().map_err(|_| ParseError::InvalidWeight {
                line: number,
                token: token.to_string(),
            })?;
            continue;
        }
        let (index_token, value_token) =
            token.split_once(':').ok_or_else(|| ParseError::InvalidFeature {
                line: number,
                token: token.to_string(),
            })?;
        let index: u32 = index_token.parse().map_err(|_| ParseError::InvalidFeature {
            line: number,
            token: token.to_string(),
        })?;
        let value: f64 = value_token.parse().map_err(|_| ParseError::InvalidFeature {
            line: number,
            token: token.to_string(),
        })?;
        pairs.push((index, value));
    }

    let features = SparseVector::from_pairs(dimension, &pairs)
        .map_err(|source| ParseError::Vector {
            line: number,
            source,
        })?;
    Example::with_weight(features, label, weight).map_err(|source| ParseError::Example {
        line: number,
        source,
    })
}
