//! Shared utilities and common types for the Talent Portal backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Query parameter validation (identifiers, day windows)
//! - Division-safe numeric helpers for aggregates
//! - Display formatting for counts and currency

pub mod format;
pub mod numeric;
pub mod validation;
