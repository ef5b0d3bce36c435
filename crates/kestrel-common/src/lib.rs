//! Common utilities for the Kestrel CSS engine.
//!
//! This crate provides shared infrastructure used by the engine crates:
//! - **Warning System** - colored, deduplicated terminal output for rejected
//!   declarations and unsupported features

pub mod warning;
