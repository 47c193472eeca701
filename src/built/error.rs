//! Error types for constructing built collections.
//!
//! All of these errors are raised while validating a construction source.
//! A failed construction never produces a partially built instance.

use std::fmt;

use thiserror::Error;

/// Which half of an entry an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    /// The entry's key.
    Key,
    /// The entry's value.
    Value,
}

impl fmt::Display for ElementRole {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => formatter.write_str("key"),
            Self::Value => formatter.write_str("value"),
        }
    }
}

/// Represents errors that can occur when constructing a
/// [`BuiltMap`](super::BuiltMap) from an external source.
///
/// # Examples
///
/// ```rust
/// use built_collection::built::{BuiltMap, BuiltMapError, DynamicMap, ElementRole};
///
/// let source = DynamicMap::new().with_entry("one", 1_i64);
/// let error = BuiltMap::<i64, i64>::try_from_source(&source).unwrap_err();
///
/// assert_eq!(
///     error,
///     BuiltMapError::TypeMismatch {
///         position: 0,
///         role: ElementRole::Key,
///         expected: "i64",
///         actual: "&str",
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuiltMapError {
    /// A key or value of the source is not of the declared element type.
    #[error("invalid {role} at position {position}: expected `{expected}`, found `{actual}`")]
    TypeMismatch {
        /// Zero-based position of the offending entry in the source.
        position: usize,
        /// Whether the key or the value is wrong.
        role: ElementRole,
        /// Name of the declared element type.
        expected: &'static str,
        /// Name of the element type actually found.
        actual: &'static str,
    },

    /// The source is not a map-like collection the container accepts.
    #[error("cannot build a map from `{actual}`")]
    InvalidSourceType {
        /// Name of the type received.
        actual: &'static str,
    },

    /// The container was declared without a concrete key or value type.
    #[error("explicit {parameter} type required to construct `{container}`")]
    MissingTypeParameter {
        /// The type parameter left unspecified.
        parameter: ElementRole,
        /// Name of the container type being constructed.
        container: &'static str,
    },
}
