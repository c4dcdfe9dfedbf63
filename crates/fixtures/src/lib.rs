//! Fixture data layer for the Talent Portal backend.
//!
//! This crate contains:
//! - Static campaign, SMS and CRM tier datasets standing in for the real providers
//! - Repository implementations that filter the datasets per request
//! - Lookup metrics
//!
//! Datasets are rebuilt on every call; nothing is retained between requests.

pub mod datasets;
pub mod metrics;
pub mod repositories;
