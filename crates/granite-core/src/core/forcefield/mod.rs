//! # Force Field Module
//!
//! This module provides the energy mathematics behind the residue-pair diagnostic.
//! Every atom pair is scored with three terms: the attractive and repulsive halves
//! of the Lennard-Jones 12-6 potential, and the Lazaridis-Karplus desolvation term.
//!
//! ## Key Components
//!
//! - [`params`] - Force field parameter structures and file loading
//! - [`potentials`] - Pure potential functions
//! - [`scoring`] - High-level energy scoring interface for molecular systems
//! - [`term`] - Energy term aggregation
//!
//! ## Usage
//!
//! The main entry point for energy calculations is the [`scoring::Scorer`] struct,
//! which evaluates single atom pairs and whole residue pairs against a loaded
//! [`params::Forcefield`].

pub(crate) mod energy;
pub mod params;
pub(crate) mod potentials;
pub mod scoring;
pub mod term;
