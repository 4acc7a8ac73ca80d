//! Enviro Governance - Policy vote aggregation and remediation planning
//!
//! This crate scores environmental policies from weighted multi-vector votes
//! and ranks bioremediation strategies for polluted sites by budget tier.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
