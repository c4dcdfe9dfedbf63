//! Domain layer for the Talent Portal backend.
//!
//! This crate contains:
//! - Domain models (artists, campaigns, social snapshots, CRM tiers)
//! - Filtering, aggregation and selection logic shared by the API and the dashboard
//! - Domain error types

pub mod models;
pub mod services;
