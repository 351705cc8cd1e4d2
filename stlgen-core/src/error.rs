//! Error types for primitive construction, STL output and scene files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for primitive construction.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Result type for STL emission.
pub type StlResult<T> = Result<T, StlError>;

/// Rejected primitive dimensions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A length that must be strictly positive was zero or negative.
    #[error("{parameter} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending dimension.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A length was NaN or infinite.
    #[error("{parameter} must be finite, got {value}")]
    NotFinite {
        /// Name of the offending dimension.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A cylinder needs at least three facets to enclose any volume.
    #[error("cylinder needs at least 3 facets, got {facets}")]
    TooFewFacets {
        /// The rejected facet count.
        facets: u32,
    },
}

/// Errors that can occur while writing STL output.
#[derive(Debug, Error)]
pub enum StlError {
    /// The destination could not be created; nothing was written.
    #[error("cannot open {path} for writing: {source}")]
    Open {
        /// Destination that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// I/O error while writing to an already open destination.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while loading a scene description.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A line does not match the scene grammar.
    #[error("line {line}: {message}")]
    Syntax {
        /// 1-based line number.
        line: usize,
        /// Description of what could not be parsed.
        message: String,
    },

    /// A line parsed but describes an invalid primitive.
    #[error("line {line}: {source}")]
    Geometry {
        /// 1-based line number.
        line: usize,
        /// Why the primitive was rejected.
        source: GeometryError,
    },

    /// The scene file could not be read.
    #[error("cannot read scene file {path}: {source}")]
    Io {
        /// Path of the scene file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
