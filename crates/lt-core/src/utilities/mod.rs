//! Miscellaneous utilities.

/// Text parsers for dates and selection identifiers.
pub mod data_parsers;
