//! Dashboard view layer for the Talent Portal.
//!
//! This crate contains:
//! - A [`client::MetricsSource`] abstraction over the metrics endpoints, with an HTTP
//!   implementation
//! - View-models for the social, engagement and sales sections of the dashboard
//! - Stale-response guarding shared by every view
//!
//! Views own their selection state, issue a fetch ticket whenever the selection
//! changes and accept only the completion matching their latest ticket.

pub mod client;
pub mod state;
pub mod views;
