//! Provides input functionality for molecular file formats.
//!
//! This module contains the reader for the BGF structure format and the
//! trait-based interface shared by structure-file parsers.

pub mod bgf;
pub mod traits;
