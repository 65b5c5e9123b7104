//! # Granite Core Library
//!
//! Build-manifest generation and forcefield validation tooling for a large C++
//! molecular-modeling codebase.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`MolecularSystem`),
//!   pure mathematical representations of the forcefield (`potentials`, `scoring`),
//!   and structure-file I/O.
//!
//! - **[`build`]: The Manifest Core.** Contains the project and test descriptors that
//!   describe the C++ source tree, the settings loader that reads them from disk, and
//!   the CMake text emitters that turn them into build fragments.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `build` and `core` layers together to execute complete procedures:
//!   generating every CMake fragment for a settings tree, and the residue-pair energy
//!   diagnostic that cross-checks pairwise atom sums against a direct evaluation.

pub mod build;
pub mod core;
pub mod workflows;
