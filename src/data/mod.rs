//! Datasets, examples, and feature vector storage.

pub mod dataset;
pub mod example;
pub mod io;
pub mod vector;

pub use dataset::{Dataset, DatasetError, DatasetStream, ExampleStream, PermutedStream};
pub use example::{Example, ExampleError};
pub use io::{read_dataset, ParseError};
pub use vector::{DataVector, DenseVector, SparseVector, VectorError};
