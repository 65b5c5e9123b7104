//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent molecular
//! systems in granite.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom representation with coordinates, types, and charges
//! - [`residue`] - Residue structure with name-indexed atom lookup
//! - [`chain`] - Chain organization
//! - [`system`] - Complete molecular system with all components and relationships
//! - [`ids`] - Unique identifier types for atoms, residues, and chains

pub mod atom;
pub mod chain;
pub mod ids;
pub mod residue;
pub mod system;
