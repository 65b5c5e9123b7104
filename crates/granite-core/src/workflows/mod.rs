//! # Workflows Module
//!
//! This module provides the high-level, user-facing entry points of granite.
//!
//! - **Generation Workflow** ([`generate`]) - Discovers every project and test
//!   descriptor in a settings directory and writes the corresponding CMake
//!   fragments, overwriting unconditionally so re-runs are idempotent.
//!
//! - **Pair-Energy Diagnostic** ([`pair_energy`]) - Accumulates the three
//!   energy terms over the full atom cross-product of two residues and pairs
//!   the totals with the scorer's direct residue-pair evaluation, so a human
//!   can inspect how closely they agree.

pub mod generate;
pub mod pair_energy;
