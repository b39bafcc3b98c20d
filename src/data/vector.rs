//! Feature vector storage and access.
//!
//! Training examples carry their features either as a [`DenseVector`]
//! (contiguous values) or a [`SparseVector`] (sorted index/value pairs).
//! The [`DataVector`] trait is the access surface the optimizer and the
//! predictor are written against, so the inner training loop costs
//! O(nnz) per sparse example instead of O(dimension).

use std::iter::FusedIterator;
use std::slice;

use thiserror::Error;

/// Errors from constructing a feature vector.
#[derive(Debug, Error, PartialEq)]
pub enum VectorError {
    /// A feature index lies outside the declared dimension.
    #[error("feature index {index} is out of bounds for dimension {dimension}")]
    IndexOutOfBounds { index: u32, dimension: usize },
    /// A feature index is not strictly greater than its predecessor.
    #[error("feature index {index} at position {position} is not strictly increasing")]
    UnorderedIndex { position: usize, index: u32 },
}

/// Read-only access to a feature vector of fixed dimension.
///
/// Stored entries are visited in strictly increasing index order. Every
/// entry of a [`DenseVector`] is stored, zeros included; the zeros of a
/// [`SparseVector`] are structural and never visited.
pub trait DataVector {
    /// Iterator over `(index, value)` pairs of stored entries.
    type NonZeros<'a>: Iterator<Item = (usize, f64)> + FusedIterator
    where
        Self: 'a;

    /// Dimension of the vector.
    fn dimension(&self) -> usize;

    /// Number of stored entries.
    fn nnz(&self) -> usize;

    /// Inner product with a dense slice of at least `dimension()` values.
    fn dot(&self, dense: &[f64]) -> f64;

    /// Adds `coefficient * self` into `dense` in place.
    ///
    /// `dense` must hold at least `dimension()` values; its length does
    /// not change.
    fn add_to(&self, dense: &mut [f64], coefficient: f64);

    /// Euclidean norm of the stored entries.
    fn norm2(&self) -> f64;

    /// Iterates stored entries as `(index, value)` pairs.
    fn nonzeros(&self) -> Self::NonZeros<'_>;
}

// ============================================================================
// Dense storage
// ============================================================================

/// Dense feature vector backed by a contiguous buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector {
    values: Box<[f64]>,
}

impl DenseVector {
    /// Creates a vector owning `values`.
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self {
            values: values.into_boxed_slice(),
        }
    }

    /// Creates a zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            values: vec![0.0; dimension].into_boxed_slice(),
        }
    }

    /// The underlying values.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl From<Vec<f64>> for DenseVector {
    fn from(values: Vec<f64>) -> Self {
        Self::from_vec(values)
    }
}

impl DataVector for DenseVector {
    type NonZeros<'a> = std::iter::Enumerate<std::iter::Copied<slice::Iter<'a, f64>>>;

    #[inline]
    fn dimension(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn dot(&self, dense: &[f64]) -> f64 {
        debug_assert!(
            dense.len() >= self.values.len(),
            "dot target has {} values, vector dimension is {}",
            dense.len(),
            self.values.len()
        );
        self.values.iter().zip(dense).map(|(a, b)| a * b).sum()
    }

    fn add_to(&self, dense: &mut [f64], coefficient: f64) {
        debug_assert!(
            dense.len() >= self.values.len(),
            "add_to target has {} values, vector dimension is {}",
            dense.len(),
            self.values.len()
        );
        for (target, value) in dense.iter_mut().zip(self.values.iter()) {
            *target += coefficient * value;
        }
    }

    fn norm2(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    fn nonzeros(&self) -> Self::NonZeros<'_> {
        self.values.iter().copied().enumerate()
    }
}

// ============================================================================
// Sparse storage
// ============================================================================

/// Sparse feature vector as parallel index/value arrays.
///
/// Indices are strictly increasing and all below the declared dimension,
/// so a vector can never hold duplicate entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    dimension: usize,
    indices: Box<[u32]>,
    values: Box<[f64]>,
}

impl SparseVector {
    /// Creates an empty vector of the given dimension.
    pub fn empty(dimension: usize) -> Self {
        Self {
            dimension,
            indices: Box::new([]),
            values: Box::new([]),
        }
    }

    /// Creates a vector from `(index, value)` pairs.
    ///
    /// Pairs must arrive in strictly increasing index order with every
    /// index below `dimension`.
    pub fn from_pairs(dimension: usize, pairs: &[(u32, f64)]) -> Result<Self, VectorError> {
        let mut indices = Vec::with_capacity(pairs.len());
        let mut values = Vec::with_capacity(pairs.len());
        for (position, &(index, value)) in pairs.iter().enumerate() {
            if index as usize >= dimension {
                return Err(VectorError::IndexOutOfBounds { index, dimension });
            }
            if let Some(&previous) = indices.last() {
                if index <= previous {
                    return Err(VectorError::UnorderedIndex { position, index });
                }
            }
            indices.push(index);
            values.push(value);
        }
        Ok(Self {
            dimension,
            indices: indices.into_boxed_slice(),
            values: values.into_boxed_slice(),
        })
    }

    /// Stored indices in increasing order.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Stored values, parallel to [`indices`](Self::indices).
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl DataVector for SparseVector {
    type NonZeros<'a> = SparseNonZeros<'a>;

    #[inline]
    fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    fn nnz(&self) -> usize {
        self.indices.len()
    }

    fn dot(&self, dense: &[f64]) -> f64 {
        debug_assert!(
            dense.len() >= self.dimension,
            "dot target has {} values, vector dimension is {}",
            dense.len(),
            self.dimension
        );
        self.indices
            .iter()
            .zip(self.values.iter())
            .map(|(&index, &value)| value * dense[index as usize])
            .sum()
    }

    fn add_to(&self, dense: &mut [f64], coefficient: f64) {
        debug_assert!(
            dense.len() >= self.dimension,
            "add_to target has {} values, vector dimension is {}",
            dense.len(),
            self.dimension
        );
        for (&index, &value) in self.indices.iter().zip(self.values.iter()) {
            dense[index as usize] += coefficient * value;
        }
    }

    fn norm2(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    fn nonzeros(&self) -> SparseNonZeros<'_> {
        SparseNonZeros {
            indices: self.indices.iter(),
            values: self.values.iter(),
        }
    }
}

/// Iterator over the stored entries of a [`SparseVector`].
#[derive(Debug, Clone)]
pub struct SparseNonZeros<'a> {
    indices: slice::Iter<'a, u32>,
    values: slice::Iter<'a, f64>,
}

impl Iterator for SparseNonZeros<'_> {
    type Item = (usize, f64);

    #[inline]
    fn next(&mut self) -> Option<(usize, f64)> {
        let index = self.indices.next()?;
        let value = self.values.next()?;
        Some((*index as usize, *value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for SparseNonZeros<'_> {}
impl FusedIterator for SparseNonZeros<'_> {}
