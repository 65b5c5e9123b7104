//! # Core Module
//!
//! This module provides the molecular foundation of granite: the data structures,
//! forcefield mathematics, and file I/O that the pair-energy diagnostic is built on.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different aspects
//! of molecular modeling:
//!
//! - **Molecular Representation** ([`models`]) - Data structures for atoms, residues, chains, and systems
//! - **Energy Calculations** ([`forcefield`]) - Force field parameters and the three-term pairwise energy
//! - **File I/O** ([`io`]) - Reading molecular structure files
//!
//! ## Scientific Foundation
//!
//! The forcefield submodule implements the attractive/repulsive split of the
//! Lennard-Jones 12-6 potential and the Lazaridis-Karplus Gaussian-exclusion
//! desolvation term, the three per-pair quantities the diagnostic accumulates.

pub mod forcefield;
pub mod io;
pub mod models;
