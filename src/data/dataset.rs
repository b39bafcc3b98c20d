//! In-memory example collections and streaming access.
//!
//! The optimizer never touches a [`Dataset`] directly. It consumes an
//! [`ExampleStream`], one forward pass over examples with a known
//! length, which keeps epoch drivers free to reorder or re-slice the
//! data between batches.

use std::slice;

use thiserror::Error;

use crate::data::example::Example;
use crate::data::vector::DataVector;

/// Errors from assembling a dataset.
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    /// An example's feature dimension differs from the dataset's.
    #[error("example dimension {got} does not match dataset dimension {expected}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// An in-memory collection of examples sharing one feature dimension.
#[derive(Debug, Clone)]
pub struct Dataset<V> {
    dimension: usize,
    examples: Vec<Example<V>>,
}

impl<V: DataVector> Dataset<V> {
    /// Creates an empty dataset for vectors of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            examples: Vec::new(),
        }
    }

    /// Creates a dataset from examples, checking every dimension.
    pub fn from_examples(
        dimension: usize,
        examples: Vec<Example<V>>,
    ) -> Result<Self, DatasetError> {
        for example in &examples {
            let got = example.features().dimension();
            if got != dimension {
                return Err(DatasetError::DimensionMismatch {
                    expected: dimension,
                    got,
                });
            }
        }
        Ok(Self {
            dimension,
            examples,
        })
    }

    /// Appends an example of matching dimension.
    pub fn push(&mut self, example: Example<V>) -> Result<(), DatasetError> {
        let got = example.features().dimension();
        if got != self.dimension {
            return Err(DatasetError::DimensionMismatch {
                expected: self.dimension,
                got,
            });
        }
        self.examples.push(example);
        Ok(())
    }

    /// The shared feature dimension.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of examples.
    #[inline]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Whether the dataset holds no examples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// The examples as a slice.
    #[inline]
    pub fn examples(&self) -> &[Example<V>] {
        &self.examples
    }

    /// Iterates the examples in storage order.
    pub fn iter(&self) -> slice::Iter<'_, Example<V>> {
        self.examples.iter()
    }

    /// A restartable stream over the examples in storage order.
    pub fn stream(&self) -> DatasetStream<'_, V> {
        DatasetStream::new(&self.examples)
    }
}

/// A forward pass over a known number of examples.
///
/// The optimizer drains exactly [`remaining`](ExampleStream::remaining)
/// examples per batch, so implementations must report the count they
/// will actually yield.
pub trait ExampleStream<V: DataVector> {
    /// Number of examples not yet yielded.
    fn remaining(&self) -> usize;

    /// Yields the next example, or `None` once the pass is exhausted.
    fn next_example(&mut self) -> Option<&Example<V>>;
}

/// Streams a slice of examples front to back.
#[derive(Debug)]
pub struct DatasetStream<'a, V> {
    examples: &'a [Example<V>],
    cursor: usize,
}

impl<'a, V: DataVector> DatasetStream<'a, V> {
    /// Creates a stream over `examples`.
    pub fn new(examples: &'a [Example<V>]) -> Self {
        Self {
            examples,
            cursor: 0,
        }
    }

    /// Rewinds the stream to the first example.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl<V: DataVector> ExampleStream<V> for DatasetStream<'_, V> {
    fn remaining(&self) -> usize {
        self.examples.len() - self.cursor
    }

    fn next_example(&mut self) -> Option<&Example<V>> {
        let example = self.examples.get(self.cursor)?;
        self.cursor += 1;
        Some(example)
    }
}

/// Streams a slice of examples in a caller-chosen order.
#[derive(Debug)]
pub struct PermutedStream<'a, V> {
    examples: &'a [Example<V>],
    order: &'a [usize],
    cursor: usize,
}

impl<'a, V: DataVector> PermutedStream<'a, V> {
    /// Creates a stream visiting `examples[order[0]]`, `examples[order[1]]`
    /// and so on. Every entry of `order` must index into `examples`.
    pub fn new(examples: &'a [Example<V>], order: &'a [usize]) -> Self {
        debug_assert!(
            order.iter().all(|&index| index < examples.len()),
            "visit order contains an index past the {} available examples",
            examples.len()
        );
        Self {
            examples,
            order,
            cursor: 0,
        }
    }
}

impl<V: DataVector> ExampleStream<V> for PermutedStream<'_, V> {
    fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    fn next_example(&mut self) -> Option<&Example<V>> {
        let &index = self.order.get(self.cursor)?;
        self.cursor += 1;
        Some(&self.examples[index])
    }
}
