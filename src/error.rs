use thiserror::Error;

// ---------------------------------------------------------------------------
// SamplesError – everything the core data layer can fail with
// ---------------------------------------------------------------------------

/// Errors produced while building or querying a [`Samples`](crate::Samples)
/// collection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplesError {
    /// Lookup of a class name that no sample carries.
    #[error("Class {0} was not found")]
    ClassNotFound(String),

    /// A collection needs at least two samples.
    #[error("expected at least 2 samples, got {count}")]
    TooFewSamples { count: usize },

    /// Sample `index` does not have the attribute count of the first sample.
    #[error("sample {index} has {found} attributes, expected {expected}")]
    AttributeCountMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Bunch `target` refers to a row that `data` does not contain.
    #[error("bunch target row {index} has no matching data row")]
    MissingRow { index: usize },

    /// Colour partition requested for zero classes.
    #[error("cannot generate colours for zero classes")]
    NoClasses,

    /// Angle requested against a vector of zero length.
    #[error("angle is undefined for a zero-length vector")]
    ZeroVector,

    /// Vectors of different dimension.
    #[error("vector dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}
