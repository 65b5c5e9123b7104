//! # Build Module
//!
//! This module contains the build-manifest foundation: descriptors for the
//! projects and test suites of a large C++ source tree, the TOML settings
//! loader that reads them from disk, and the CMake text emitters that turn
//! each descriptor into build fragments.
//!
//! ## Key Components
//!
//! - [`settings`] - Project/test descriptors and the settings-directory loader
//! - [`cmake`] - CMake text primitives shared by all emitters
//! - [`project`] - Library `SET` fragments and per-executable application fragments
//! - [`testsuite`] - The four `SET` lists a test suite needs
//!
//! Emitters are pure: they return in-memory [`artifact::Artifact`] values, and
//! the generate workflow owns every filesystem side effect.

pub mod artifact;
pub mod cmake;
pub mod project;
pub mod settings;
pub mod testsuite;
